use super::capture::{self, AnswerInput, CaptureError};
use super::catalog::QuestionCatalog;
use super::profile::ProfileStore;
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum AnswerImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Capture { line: u64, source: CaptureError },
}

impl std::fmt::Display for AnswerImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerImportError::Io(err) => write!(f, "failed to read answers file: {}", err),
            AnswerImportError::Csv(err) => write!(f, "invalid answers CSV data: {}", err),
            AnswerImportError::Capture { line, source } => {
                write!(f, "answer on line {} rejected: {}", line, source)
            }
        }
    }
}

impl std::error::Error for AnswerImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnswerImportError::Io(err) => Some(err),
            AnswerImportError::Csv(err) => Some(err),
            AnswerImportError::Capture { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for AnswerImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for AnswerImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads a `key,value` answers export into a fresh profile.
///
/// Multi-select cells list options separated by `;`. Rows with an empty
/// value are treated as unanswered.
pub struct AnswerImporter;

impl AnswerImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        catalog: &QuestionCatalog,
    ) -> Result<ProfileStore, AnswerImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, catalog)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        catalog: &QuestionCatalog,
    ) -> Result<ProfileStore, AnswerImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut record = csv::StringRecord::new();
        let mut store = ProfileStore::new();

        while csv_reader.read_record(&mut record)? {
            // Line where the record starts; quoted cells may span several lines.
            let line = record.position().map(csv::Position::line).unwrap_or_default();
            let row: AnswerRow = record.deserialize(Some(&headers))?;
            let Some(value) = row.value else {
                continue;
            };

            capture::capture(&mut store, catalog, &row.key, AnswerInput::Text(value))
                .map_err(|source| AnswerImportError::Capture { line, source })?;
        }

        Ok(store)
    }
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    key: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    value: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
