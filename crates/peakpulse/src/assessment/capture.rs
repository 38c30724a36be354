use super::catalog::{Question, QuestionCatalog, QuestionKind};
use super::domain::AnswerValue;
use super::profile::ProfileStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Loosely-typed value as delivered by a form, a JSON body or a CSV cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerInput {
    Number(f64),
    Flag(bool),
    Text(String),
    List(Vec<String>),
}

/// Reasons an input cannot be turned into an answer for its question.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CaptureError {
    #[error("unknown question '{0}'")]
    UnknownQuestion(String),
    #[error("question '{key}' expects {expected}")]
    TypeMismatch { key: String, expected: &'static str },
    #[error("'{value}' is not an option for question '{key}'")]
    InvalidOption { key: String, value: String },
}

/// Write every question's default into the store, as a form does when it is
/// first displayed. Values already present are left untouched.
pub fn render_defaults(store: &mut ProfileStore, catalog: &QuestionCatalog) {
    for question in catalog.questions() {
        if !store.contains(question.key) {
            store.set(question.key, question.default_value());
        }
    }
}

/// Coerce `input` for the question `key` and upsert it into the store.
pub fn capture(
    store: &mut ProfileStore,
    catalog: &QuestionCatalog,
    key: &str,
    input: AnswerInput,
) -> Result<AnswerValue, CaptureError> {
    let question = catalog
        .question(key)
        .ok_or_else(|| CaptureError::UnknownQuestion(key.to_string()))?;
    let value = coerce(question, input)?;
    store.set(question.key, value.clone());
    Ok(value)
}

/// Convert an input into the value the question's widget would produce.
pub fn coerce(question: &Question, input: AnswerInput) -> Result<AnswerValue, CaptureError> {
    match &question.kind {
        QuestionKind::Integer { min, max, .. } => {
            let raw = numeric(question, input, "an integer")?;
            let clamped = raw.round().clamp(*min as f64, *max as f64);
            Ok(AnswerValue::Integer(clamped as i64))
        }
        QuestionKind::Float { min, max, .. } => {
            let raw = numeric(question, input, "a number")?;
            Ok(AnswerValue::Float(raw.clamp(*min, *max)))
        }
        QuestionKind::Choice { options } => match input {
            AnswerInput::Text(raw) => Ok(AnswerValue::text(match_option(question, *options, &raw)?)),
            _ => Err(mismatch(question, "one of the listed options")),
        },
        QuestionKind::YesNo => match input {
            AnswerInput::Flag(flag) => Ok(AnswerValue::YesNo(flag)),
            AnswerInput::Text(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "yes" | "y" | "true" => Ok(AnswerValue::YesNo(true)),
                "no" | "n" | "false" => Ok(AnswerValue::YesNo(false)),
                _ => Err(mismatch(question, "Yes or No")),
            },
            _ => Err(mismatch(question, "Yes or No")),
        },
        QuestionKind::Text => match input {
            AnswerInput::Text(raw) => Ok(AnswerValue::Text(raw.trim().to_string())),
            _ => Err(mismatch(question, "free text")),
        },
        QuestionKind::MultiChoice { options } => {
            let raw_items: Vec<String> = match input {
                AnswerInput::List(items) => items,
                AnswerInput::Text(raw) => raw.split(';').map(str::to_string).collect(),
                _ => return Err(mismatch(question, "a list of options")),
            };

            let mut selected = BTreeSet::new();
            for item in raw_items.iter().filter(|item| !item.trim().is_empty()) {
                selected.insert(match_option(question, *options, item)?.to_string());
            }
            Ok(AnswerValue::Choices(selected))
        }
    }
}

fn numeric(
    question: &Question,
    input: AnswerInput,
    expected: &'static str,
) -> Result<f64, CaptureError> {
    let value = match input {
        AnswerInput::Number(value) => value,
        AnswerInput::Text(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| mismatch(question, expected))?,
        _ => return Err(mismatch(question, expected)),
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(mismatch(question, expected))
    }
}

fn match_option(
    question: &Question,
    options: &'static [&'static str],
    raw: &str,
) -> Result<&'static str, CaptureError> {
    let needle = raw.trim();
    options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(needle))
        .copied()
        .ok_or_else(|| CaptureError::InvalidOption {
            key: question.key.to_string(),
            value: needle.to_string(),
        })
}

fn mismatch(question: &Question, expected: &'static str) -> CaptureError {
    CaptureError::TypeMismatch {
        key: question.key.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_clamped_into_widget_range() {
        let catalog = QuestionCatalog::standard();
        let mut store = ProfileStore::new();

        let value = capture(&mut store, &catalog, "age", AnswerInput::Number(101.0))
            .expect("age captured");
        assert_eq!(value, AnswerValue::Integer(80));

        let value = capture(&mut store, &catalog, "sleep_hours", AnswerInput::Number(2.5))
            .expect("sleep captured");
        assert_eq!(value, AnswerValue::Float(4.0));

        let value = capture(&mut store, &catalog, "hrv", AnswerInput::Text("38.6".into()))
            .expect("hrv captured");
        assert_eq!(value, AnswerValue::Integer(39));
    }

    #[test]
    fn choices_resolve_to_canonical_option() {
        let catalog = QuestionCatalog::standard();
        let mut store = ProfileStore::new();

        let value = capture(&mut store, &catalog, "sport", AnswerInput::Text("cycling".into()))
            .expect("sport captured");
        assert_eq!(value, AnswerValue::text("Cycling"));

        let err = capture(&mut store, &catalog, "sport", AnswerInput::Text("Rowing".into()))
            .expect_err("rowing is not offered");
        assert!(matches!(err, CaptureError::InvalidOption { .. }));
        assert_eq!(store.value("sport"), Some(&AnswerValue::text("Cycling")));
    }

    #[test]
    fn multi_select_accepts_lists_and_separated_text() {
        let catalog = QuestionCatalog::standard();
        let mut store = ProfileStore::new();

        let value = capture(
            &mut store,
            &catalog,
            "conditions",
            AnswerInput::Text("Diabetes; Asthma;".into()),
        )
        .expect("conditions captured");
        assert!(value.contains_choice("Diabetes"));
        assert!(value.contains_choice("Asthma"));

        let value = capture(
            &mut store,
            &catalog,
            "injuries",
            AnswerInput::List(vec!["Knee".into(), "knee".into()]),
        )
        .expect("injuries captured");
        assert_eq!(value, AnswerValue::choices(["Knee"]));
    }

    #[test]
    fn unknown_keys_and_wrong_types_are_rejected() {
        let catalog = QuestionCatalog::standard();
        let mut store = ProfileStore::new();

        assert_eq!(
            capture(&mut store, &catalog, "shoe_size", AnswerInput::Number(44.0)),
            Err(CaptureError::UnknownQuestion("shoe_size".into()))
        );
        assert!(matches!(
            capture(&mut store, &catalog, "pain", AnswerInput::Number(1.0)),
            Err(CaptureError::TypeMismatch { .. })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn render_defaults_keeps_existing_answers() {
        let catalog = QuestionCatalog::standard();
        let mut store = ProfileStore::new();
        store.set("sport", AnswerValue::text("Strength"));

        render_defaults(&mut store, &catalog);

        assert_eq!(store.len(), catalog.len());
        assert_eq!(store.value("sport"), Some(&AnswerValue::text("Strength")));
        assert_eq!(store.completion_ratio(), 1.0);
    }
}
