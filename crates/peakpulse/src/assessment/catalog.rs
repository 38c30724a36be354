use super::domain::{AnswerValue, Section};
use serde::Serialize;
use std::collections::BTreeSet;

/// Number of questions in the standard assessment.
pub const TOTAL_QUESTIONS: usize = 95;

/// Input shape of a question, including the range and default a form widget
/// would enforce.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    Integer { min: i64, max: i64, default: i64 },
    Float { min: f64, max: f64, default: f64 },
    Choice { options: &'static [&'static str] },
    YesNo,
    Text,
    MultiChoice { options: &'static [&'static str] },
}

impl QuestionKind {
    /// Value a widget reports before the user touches it.
    pub fn default_value(&self) -> AnswerValue {
        match self {
            QuestionKind::Integer { default, .. } => AnswerValue::Integer(*default),
            QuestionKind::Float { default, .. } => AnswerValue::Float(*default),
            QuestionKind::Choice { options } => {
                AnswerValue::text(options.first().copied().unwrap_or_default())
            }
            QuestionKind::YesNo => AnswerValue::YesNo(true),
            QuestionKind::Text => AnswerValue::text(""),
            QuestionKind::MultiChoice { .. } => AnswerValue::Choices(BTreeSet::new()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub number: u8,
    pub key: &'static str,
    pub prompt: &'static str,
    pub section: Section,
    pub kind: QuestionKind,
}

impl Question {
    pub fn default_value(&self) -> AnswerValue {
        self.kind.default_value()
    }
}

/// Ordered question set, also the single source of default values for the
/// capture layer and the scorer.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, key: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.key == key)
    }

    pub fn questions_for_section(&self, section: Section) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.section == section)
            .collect()
    }

    pub fn default_for(&self, key: &str) -> Option<AnswerValue> {
        self.question(key).map(Question::default_value)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn int(
    number: u8,
    key: &'static str,
    prompt: &'static str,
    section: Section,
    (min, max, default): (i64, i64, i64),
) -> Question {
    Question {
        number,
        key,
        prompt,
        section,
        kind: QuestionKind::Integer { min, max, default },
    }
}

fn float(
    number: u8,
    key: &'static str,
    prompt: &'static str,
    section: Section,
    (min, max, default): (f64, f64, f64),
) -> Question {
    Question {
        number,
        key,
        prompt,
        section,
        kind: QuestionKind::Float { min, max, default },
    }
}

fn choice(
    number: u8,
    key: &'static str,
    prompt: &'static str,
    section: Section,
    options: &'static [&'static str],
) -> Question {
    Question {
        number,
        key,
        prompt,
        section,
        kind: QuestionKind::Choice { options },
    }
}

fn multi(
    number: u8,
    key: &'static str,
    prompt: &'static str,
    section: Section,
    options: &'static [&'static str],
) -> Question {
    Question {
        number,
        key,
        prompt,
        section,
        kind: QuestionKind::MultiChoice { options },
    }
}

fn yes_no(number: u8, key: &'static str, prompt: &'static str, section: Section) -> Question {
    Question {
        number,
        key,
        prompt,
        section,
        kind: QuestionKind::YesNo,
    }
}

fn text(number: u8, key: &'static str, prompt: &'static str, section: Section) -> Question {
    Question {
        number,
        key,
        prompt,
        section,
        kind: QuestionKind::Text,
    }
}

#[rustfmt::skip]
fn standard_questions() -> Vec<Question> {
    use Section::*;

    vec![
        int(1, "age", "Age", Demographics, (16, 80, 30)),
        choice(2, "sex", "Biological sex", Demographics, &["Male", "Female", "Other", "Prefer not to say"]),
        int(3, "height", "Height (cm)", Demographics, (140, 220, 175)),
        int(4, "weight", "Weight (kg)", Demographics, (40, 160, 75)),
        yes_no(5, "weight_stable", "Weight stable past 3 months?", Demographics),
        float(6, "bodyfat", "Estimated body fat % (optional)", Demographics, (0.0, 60.0, 20.0)),
        int(7, "waist", "Waist circumference (cm)", Demographics, (50, 150, 85)),
        choice(8, "bmi_goal", "Body composition goal", Demographics, &["Maintain", "Lose weight", "Gain weight"]),
        choice(9, "country", "Country of residence", Demographics, &["France", "Other EU", "USA", "Canada", "UK", "Australia", "Other"]),
        choice(10, "climate", "Climate zone", Demographics, &["Temperate", "Mediterranean", "Continental", "Tropical", "Cold"]),
        multi(11, "conditions", "Diagnosed conditions", Health, &["None", "Diabetes", "Hypertension", "Thyroid", "IBS", "Asthma", "Anemia"]),
        multi(12, "family_history", "Family medical history", Health, &["Heart disease", "Diabetes", "Cancer", "Autoimmune", "None known"]),
        text(13, "allergies", "Allergies or intolerances", Health),
        text(14, "medications", "Current medications", Health),
        text(15, "supplements", "Current supplements", Health),
        choice(16, "blood_type", "Blood type", Health, &["O", "A", "B", "AB", "Unknown"]),
        int(17, "ferritin", "Ferritin (µg/L)", Health, (0, 300, 50)),
        int(18, "vitd", "Vitamin D (ng/mL)", Health, (0, 100, 30)),
        int(19, "b12", "Vitamin B12 (pg/mL)", Health, (0, 1200, 400)),
        float(20, "hba1c", "HbA1c (%)", Health, (3.0, 10.0, 5.2)),
        float(21, "crp", "CRP (mg/L)", Health, (0.0, 20.0, 1.0)),
        float(22, "sleep_hours", "Average sleep hours", Health, (4.0, 10.0, 7.0)),
        int(23, "sleep_quality", "Sleep quality (1–10)", Health, (1, 10, 6)),
        multi(24, "symptoms", "Chronic symptoms", Health, &["Fatigue", "Brain fog", "Joint pain", "Digestive issues", "None"]),
        choice(25, "menstrual", "Menstrual cycle regularity (if applicable)", Health, &["Regular", "Irregular", "Not applicable"]),
        choice(26, "smoking", "Smoking status", Lifestyle, &["Never", "Former", "Current"]),
        choice(27, "alcohol", "Alcohol intake", Lifestyle, &["None", "Light", "Moderate", "High"]),
        int(28, "caffeine", "Caffeine (mg/day)", Lifestyle, (0, 800, 200)),
        int(29, "stress", "Daily stress (1–10)", Lifestyle, (1, 10, 5)),
        multi(30, "stressors", "Primary stressors", Lifestyle, &["Work", "Training", "Family", "Financial"]),
        float(31, "hydration", "Water intake (L/day)", Lifestyle, (0.5, 6.0, 2.0)),
        choice(32, "sun", "Sun exposure", Lifestyle, &["Low", "Moderate", "High"]),
        yes_no(33, "spf", "Regular SPF use?", Lifestyle),
        choice(34, "diet", "Diet pattern", Lifestyle, &["Omnivore", "Vegetarian", "Vegan", "Keto", "Low-carb"]),
        choice(35, "meals", "Meal timing consistency", Lifestyle, &["Consistent", "Irregular"]),
        yes_no(36, "fasting", "Intermittent fasting?", Lifestyle),
        choice(37, "processed", "Processed food intake", Lifestyle, &["Low", "Moderate", "High"]),
        choice(38, "plant_protein", "Plant-based protein %", Lifestyle, &["<25%", "25–50%", ">50%"]),
        choice(39, "digestion", "Digestive regularity", Lifestyle, &["Regular", "Irregular"]),
        text(40, "sensitivities", "Known food sensitivities", Lifestyle),
        choice(41, "sport", "Primary sport", Training, &["Running", "Cycling", "Strength", "Mixed", "Other"]),
        text(42, "sport2", "Secondary sport", Training),
        choice(43, "experience", "Experience level", Training, &["Beginner", "Intermediate", "Advanced"]),
        int(44, "sessions", "Sessions per week", Training, (0, 20, 4)),
        float(45, "volume", "Weekly volume (km or hours)", Training, (0.0, 200.0, 30.0)),
        int(46, "rpe", "Average session intensity (RPE)", Training, (1, 10, 6)),
        int(47, "strength_sessions", "Strength sessions/week", Training, (0, 10, 2)),
        int(48, "cardio_sessions", "Cardio sessions/week", Training, (0, 10, 3)),
        int(49, "mobility_sessions", "Mobility sessions/week", Training, (0, 7, 1)),
        int(50, "rhr", "Resting heart rate", Training, (30, 100, 60)),
        int(51, "max_hr", "Max heart rate", Training, (120, 220, 190)),
        int(52, "hrv", "HRV (ms)", Training, (20, 120, 60)),
        yes_no(53, "competition", "Competition planned?", Training),
        text(54, "event_date", "Next event date", Training),
        choice(55, "phase", "Training phase", Training, &["Base", "Build", "Peak", "Off-season"]),
        multi(56, "injuries", "Injury history", Training, &["None", "Knee", "Back", "Shoulder"]),
        yes_no(57, "pain", "Current pain?", Training),
        choice(58, "equipment", "Equipment access", Training, &["Full gym", "Home gym", "Minimal"]),
        choice(59, "group", "Training style", Training, &["Solo", "Group", "Team"]),
        choice(60, "travel", "Travel/jet lag frequency", Training, &["Rare", "Occasional", "Frequent"]),
        int(61, "calories", "Daily calories", Nutrition, (1200, 5000, 2500)),
        int(62, "protein", "Protein (g/day)", Nutrition, (40, 300, 120)),
        int(63, "carbs", "Carbs (g/day)", Nutrition, (0, 600, 250)),
        int(64, "fat", "Fat (g/day)", Nutrition, (20, 200, 80)),
        int(65, "fiber", "Fiber (g/day)", Nutrition, (5, 80, 25)),
        yes_no(66, "postworkout", "Post-workout nutrition within 30 min?", Nutrition),
        choice(67, "hydration_training", "Hydration during training", Nutrition, &["Water", "Electrolytes", "None"]),
        int(68, "mg_intake", "Magnesium intake (mg)", Nutrition, (0, 600, 300)),
        int(69, "iron_intake", "Iron intake (mg)", Nutrition, (0, 30, 12)),
        int(70, "zinc", "Zinc intake (mg)", Nutrition, (0, 40, 12)),
        float(71, "omega3", "Omega-3 (g/day)", Nutrition, (0.0, 5.0, 1.0)),
        int(72, "calcium", "Calcium (mg)", Nutrition, (0, 2000, 800)),
        int(73, "potassium", "Potassium (mg)", Nutrition, (0, 5000, 3000)),
        int(74, "meal_quality", "Meal quality (1–10)", Nutrition, (1, 10, 7)),
        choice(75, "gut_symptoms", "Gut symptoms frequency", Nutrition, &["None", "Occasional", "Frequent"]),
        choice(76, "soreness", "Muscle soreness duration", Recovery, &["None", "24h", "48h", "72h+"]),
        multi(77, "recovery_methods", "Recovery methods", Recovery, &["Sleep", "Stretching", "Sauna", "Cold", "Massage"]),
        choice(78, "sauna", "Sauna frequency", Recovery, &["None", "1–2x/wk", "3+x/wk"]),
        choice(79, "cold", "Cold exposure", Recovery, &["None", "Occasional", "Regular"]),
        yes_no(80, "massage", "Massage/compression?", Recovery),
        choice(81, "wearable", "Wearable device", Recovery, &["None", "Garmin", "Apple", "Other"]),
        int(82, "deep_sleep", "Deep sleep (min/night)", Recovery, (0, 200, 60)),
        multi(83, "mental", "Mental recovery", Recovery, &["Meditation", "Breathing", "Nature"]),
        choice(84, "injury_recovery", "Injury recovery speed", Recovery, &["Fast", "Average", "Slow"]),
        int(85, "recovery_score", "Overall recovery quality (1–10)", Recovery, (1, 10, 7)),
        choice(86, "altitude", "Altitude", Environment, &["Sea level", "500–1500m", ">1500m"]),
        choice(87, "air", "Air quality", Environment, &["Good", "Moderate", "Poor"]),
        yes_no(88, "winter_vitd", "Winter vitamin D drop?", Environment),
        yes_no(89, "customs", "Import/customs concerns?", Environment),
        choice(90, "currency", "Preferred currency", Environment, &["EUR", "USD", "CAD", "GBP"]),
        choice(91, "goal_primary", "Primary goal", Goals, &["Endurance", "Strength", "Fat loss", "Recovery", "Health"]),
        choice(92, "goal_secondary", "Secondary goal", Goals, &["None", "Performance", "Longevity", "Aesthetics"]),
        choice(93, "budget", "Budget per month", Goals, &["<20", "20–40", ">40"]),
        multi(94, "formats", "Preferred formats", Goals, &["Capsules", "Powder", "Gummies"]),
        choice(95, "delivery", "Delivery frequency", Goals, &["Monthly", "Bi-weekly", "Custom"]),
    ]
}
