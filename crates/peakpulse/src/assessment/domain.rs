use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Identifier assigned to an assessment session when it starts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Questionnaire sections in the order they are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Demographics,
    Health,
    Lifestyle,
    Training,
    Nutrition,
    Recovery,
    Environment,
    Goals,
}

impl Section {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Demographics,
            Self::Health,
            Self::Lifestyle,
            Self::Training,
            Self::Nutrition,
            Self::Recovery,
            Self::Environment,
            Self::Goals,
        ]
    }

    pub const fn number(self) -> u8 {
        match self {
            Self::Demographics => 1,
            Self::Health => 2,
            Self::Lifestyle => 3,
            Self::Training => 4,
            Self::Nutrition => 5,
            Self::Recovery => 6,
            Self::Environment => 7,
            Self::Goals => 8,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Demographics => "Demographics & Body Composition",
            Self::Health => "Health & Medical Background",
            Self::Lifestyle => "Lifestyle & Habits",
            Self::Training => "Training & Performance",
            Self::Nutrition => "Nutrition Intake",
            Self::Recovery => "Recovery & Regeneration",
            Self::Environment => "Environment & Legal",
            Self::Goals => "Goals & Preferences",
        }
    }

    /// Accepts the snake_case name or the section number ("4", "training").
    pub fn parse(raw: &str) -> Option<Self> {
        let needle = raw.trim().to_ascii_lowercase();
        Self::ordered().into_iter().find(|section| {
            needle == section.number().to_string()
                || needle == format!("{section:?}").to_ascii_lowercase()
        })
    }
}

/// The closed set of packs the scorer can recommend, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPack {
    Endurance,
    Strength,
    Recovery,
    Metabolic,
    Beginner,
}

impl RecommendationPack {
    pub const COUNT: usize = 5;

    /// Declaration order; the first pack wins when scores tie.
    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Endurance,
            Self::Strength,
            Self::Recovery,
            Self::Metabolic,
            Self::Beginner,
        ]
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Endurance => 0,
            Self::Strength => 1,
            Self::Recovery => 2,
            Self::Metabolic => 3,
            Self::Beginner => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Endurance => "Endurance Pack",
            Self::Strength => "Strength Pack",
            Self::Recovery => "Recovery Pack",
            Self::Metabolic => "Metabolic Pack",
            Self::Beginner => "Beginner Pack",
        }
    }
}

/// A single stored answer.
///
/// Single-select and free-text questions both land in [`AnswerValue::Text`];
/// multi-select questions use [`AnswerValue::Choices`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Integer(i64),
    Float(f64),
    YesNo(bool),
    Text(String),
    Choices(BTreeSet<String>),
}

impl AnswerValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn choices<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Choices(values.into_iter().map(Into::into).collect())
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Membership test for multi-select answers; a plain text answer matches
    /// only when it equals the option.
    pub fn contains_choice(&self, option: &str) -> bool {
        match self {
            Self::Choices(values) => values.contains(option),
            Self::Text(value) => value == option,
            _ => false,
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:.1}"),
            Self::YesNo(true) => f.write_str("Yes"),
            Self::YesNo(false) => f.write_str("No"),
            Self::Text(value) => f.write_str(value),
            Self::Choices(values) => {
                if values.is_empty() {
                    f.write_str("(none)")
                } else {
                    let joined: Vec<&str> = values.iter().map(String::as_str).collect();
                    f.write_str(&joined.join(", "))
                }
            }
        }
    }
}
