//! Externally supplied source rows.
//!
//! Rows read from JSON may omit any field. Missing text becomes an empty
//! string; a row is never rejected for being incomplete.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::tables::SourceRow;

/// A source row as it arrives from a file, every field optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRow {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    pub provider_answer: Option<String>,
    pub general_answer: Option<String>,
}

impl RawRow {
    /// Names of the required fields this row is missing.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("question", self.question.is_none()),
            ("answer", self.answer.is_none()),
            ("category", self.category.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }

    /// Borrow this row as a [`SourceRow`], defaulting missing text to `""`.
    #[must_use]
    pub fn as_source_row(&self) -> SourceRow<'_> {
        SourceRow {
            category: self.category.as_deref().unwrap_or_default(),
            question: self.question.as_deref().unwrap_or_default(),
            answer: self.answer.as_deref().unwrap_or_default(),
            provider_answer: self.provider_answer.as_deref(),
            general_answer: self.general_answer.as_deref(),
        }
    }
}

/// Read a JSON array of [`RawRow`]s from `path`.
///
/// # Errors
///
/// Returns [`ContentError::Io`] if the file cannot be read and
/// [`ContentError::Json`] if it is not a JSON array of objects.
pub fn load_raw_rows(path: &Path) -> Result<Vec<RawRow>, ContentError> {
    let text = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows: Vec<RawRow> = serde_json::from_str(&text).map_err(|source| ContentError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    for (index, row) in rows.iter().enumerate() {
        let missing = row.missing_fields();
        if !missing.is_empty() {
            tracing::debug!(index, ?missing, "defaulting missing fields to empty strings");
        }
    }

    tracing::debug!(path = %path.display(), rows = rows.len(), "loaded raw FAQ rows");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_fields_default_to_empty() {
        let row: RawRow = serde_json::from_str(r#"{"question": "Q ?"}"#).unwrap();
        assert_eq!(row.missing_fields(), vec!["answer", "category"]);

        let source = row.as_source_row();
        assert_eq!(source.question, "Q ?");
        assert_eq!(source.answer, "");
        assert_eq!(source.category, "");
        assert_eq!(source.provider_answer, None);
    }

    #[test]
    fn null_fields_are_treated_as_missing() {
        let row: RawRow =
            serde_json::from_str(r#"{"question": null, "answer": "A", "category": "C"}"#).unwrap();
        assert_eq!(row.missing_fields(), vec!["question"]);
        assert_eq!(row.as_source_row().question, "");
    }

    #[test]
    fn reads_camel_case_variants() {
        let row: RawRow = serde_json::from_str(
            r#"{"question": "Q", "answer": "A", "category": "C", "providerAnswer": "P"}"#,
        )
        .unwrap();
        assert_eq!(row.provider_answer.as_deref(), Some("P"));
    }

    #[test]
    fn load_reports_path_on_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = load_raw_rows(&path).unwrap_err();
        assert!(matches!(err, ContentError::Json { .. }));
        assert!(err.to_string().contains("rows.json"));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_raw_rows(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }
}
