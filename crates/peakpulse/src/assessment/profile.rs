use super::catalog::{QuestionCatalog, TOTAL_QUESTIONS};
use super::domain::AnswerValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Answers accumulated during a single assessment session.
///
/// Writes never fail and the last write for a key wins. Values are stored as
/// given; range and option checks belong to the capture layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileStore {
    answers: HashMap<String, AnswerValue>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: AnswerValue) {
        self.answers.insert(key.into(), value);
    }

    pub fn get<'a>(&'a self, key: &str, default: &'a AnswerValue) -> &'a AnswerValue {
        self.answers.get(key).unwrap_or(default)
    }

    pub fn value(&self, key: &str) -> Option<&AnswerValue> {
        self.answers.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.answers.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Share of the questionnaire with any value present, capped at 1.0.
    ///
    /// Defaults written when a field is first shown count as present, so this
    /// reaches 1.0 once every field has been displayed.
    pub fn completion_ratio(&self) -> f64 {
        (self.answers.len() as f64 / TOTAL_QUESTIONS as f64).min(1.0)
    }

    /// Share of catalog questions whose stored value differs from the
    /// widget default.
    pub fn answered_ratio(&self, catalog: &QuestionCatalog) -> f64 {
        if catalog.is_empty() {
            return 0.0;
        }
        (self.answered_count(catalog) as f64 / catalog.len() as f64).min(1.0)
    }

    pub fn answered_count(&self, catalog: &QuestionCatalog) -> usize {
        catalog
            .questions()
            .iter()
            .filter(|question| {
                self.answers
                    .get(question.key)
                    .map(|value| *value != question.default_value())
                    .unwrap_or(false)
            })
            .count()
    }
}
