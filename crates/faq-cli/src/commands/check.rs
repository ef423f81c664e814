use std::path::Path;

use anyhow::Context;
use faq_content::{RawRow, generate_journey_entries_from, load_raw_rows};
use faq_core::{Audience, ImportCheckResponse};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckArgs;
use crate::output::output;

/// Handle `faq check`.
pub fn handle(args: &CheckArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = Path::new(&args.path);
    let rows = load_raw_rows(path)?;
    let response = check(args.audience, &rows)
        .with_context(|| format!("rows in {} do not form a valid journey", path.display()))?;
    if response.incomplete_rows > 0 {
        tracing::warn!(
            incomplete = response.incomplete_rows,
            rows = response.rows,
            "some rows are missing fields and were filled with empty text"
        );
    }
    output(&response, flags.format)
}

fn check(audience: Audience, rows: &[RawRow]) -> anyhow::Result<ImportCheckResponse> {
    let entries = generate_journey_entries_from(audience, rows)?;
    Ok(ImportCheckResponse {
        audience,
        rows: rows.len(),
        incomplete_rows: rows
            .iter()
            .filter(|row| !row.missing_fields().is_empty())
            .count(),
        entries,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn row(category: Option<&str>, question: &str) -> RawRow {
        RawRow {
            question: Some(question.to_string()),
            answer: Some("Réponse.".to_string()),
            category: category.map(str::to_string),
            ..RawRow::default()
        }
    }

    #[test]
    fn counts_rows_and_incomplete_rows() {
        let rows = vec![
            row(Some("Inscription"), "Comment s'inscrire ?"),
            row(None, "Sans catégorie ?"),
        ];
        let response = check(Audience::Client, &rows).expect("rows should generate");

        assert_eq!(response.rows, 2);
        assert_eq!(response.incomplete_rows, 1);
        let ids: Vec<&str> = response.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids[0], "particulier-inscription-1");
        assert_eq!(response.entries[1].order, 2);
    }

    #[test]
    fn loads_rows_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("rows.json");
        std::fs::write(
            &path,
            r#"[{"question": "Q ?", "answer": "R.", "category": "Paiements"}]"#,
        )
        .expect("write rows");

        let rows = load_raw_rows(&path).expect("rows should load");
        let response = check(Audience::Provider, &rows).expect("rows should generate");
        assert_eq!(response.entries[0].id, "presta-paiements-1");
        assert_eq!(response.incomplete_rows, 0);
    }
}
