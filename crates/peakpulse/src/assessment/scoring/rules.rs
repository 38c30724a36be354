use super::super::catalog::QuestionCatalog;
use super::super::domain::{AnswerValue, RecommendationPack};
use super::super::profile::ProfileStore;

/// Read-only lookups over a profile snapshot.
///
/// Numeric questions fall back to the catalog default when unanswered (or
/// holding a non-numeric value). Choice questions have no fallback: an
/// unanswered choice matches no option.
pub(crate) struct ProfileView<'a> {
    store: &'a ProfileStore,
    catalog: &'a QuestionCatalog,
}

impl<'a> ProfileView<'a> {
    pub(crate) fn new(store: &'a ProfileStore, catalog: &'a QuestionCatalog) -> Self {
        Self { store, catalog }
    }

    pub(crate) fn number(&self, key: &str) -> f64 {
        self.store
            .value(key)
            .and_then(AnswerValue::as_f64)
            .or_else(|| self.catalog.default_for(key).and_then(|value| value.as_f64()))
            .unwrap_or(0.0)
    }

    pub(crate) fn text(&self, key: &str) -> Option<&'a str> {
        self.store.value(key).and_then(AnswerValue::as_text)
    }

    pub(crate) fn has_choice(&self, key: &str, option: &str) -> bool {
        self.store
            .value(key)
            .map(|value| value.contains_choice(option))
            .unwrap_or(false)
    }
}

/// One scoring record: when `applies` holds, `pack` gains `points`.
pub(crate) struct ScoringRule {
    pub(crate) id: &'static str,
    pub(crate) pack: RecommendationPack,
    pub(crate) points: u16,
    pub(crate) rationale: &'static str,
    applies: fn(&ProfileView<'_>) -> bool,
}

impl ScoringRule {
    pub(crate) fn applies(&self, view: &ProfileView<'_>) -> bool {
        (self.applies)(view)
    }
}

/// Rules in evaluation order. Each is independent; every rule runs on every
/// pass.
pub(crate) const STANDARD_RULES: &[ScoringRule] = &[
    ScoringRule {
        id: "endurance_volume",
        pack: RecommendationPack::Endurance,
        points: 40,
        rationale: "running or cycling with weekly volume above 30",
        applies: endurance_volume,
    },
    ScoringRule {
        id: "strength_sport",
        pack: RecommendationPack::Strength,
        points: 40,
        rationale: "strength is the primary sport",
        applies: strength_sport,
    },
    ScoringRule {
        id: "recovery_markers",
        pack: RecommendationPack::Recovery,
        points: 35,
        rationale: "sleep under 6 hours or HRV under 40 ms",
        applies: recovery_markers,
    },
    ScoringRule {
        id: "metabolic_condition",
        pack: RecommendationPack::Metabolic,
        points: 40,
        rationale: "diagnosed diabetes",
        applies: metabolic_condition,
    },
    ScoringRule {
        id: "beginner_experience",
        pack: RecommendationPack::Beginner,
        points: 30,
        rationale: "beginner experience level",
        applies: beginner_experience,
    },
];

fn endurance_volume(view: &ProfileView<'_>) -> bool {
    matches!(view.text("sport"), Some("Running" | "Cycling")) && view.number("volume") > 30.0
}

fn strength_sport(view: &ProfileView<'_>) -> bool {
    view.text("sport") == Some("Strength")
}

fn recovery_markers(view: &ProfileView<'_>) -> bool {
    view.number("sleep_hours") < 6.0 || view.number("hrv") < 40.0
}

fn metabolic_condition(view: &ProfileView<'_>) -> bool {
    view.has_choice("conditions", "Diabetes")
}

fn beginner_experience(view: &ProfileView<'_>) -> bool {
    view.text("experience") == Some("Beginner")
}
