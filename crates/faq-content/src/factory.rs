//! Turns source rows into FAQ entries.
//!
//! Generation is pure and deterministic: one entry per input row, in input
//! order. Journey entries get `order` 1..=N and an id built from the audience
//! prefix, the category key, and the order.

use std::collections::HashMap;

use faq_core::{Audience, FaqEntry, JourneyEntry};

use crate::error::ContentError;
use crate::raw::RawRow;
use crate::slug::{journey_category_key, standard_category};
use crate::tables::{self, SourceRow};

/// Journey id for the entry at `order` in `category`.
#[must_use]
pub fn journey_id(audience: Audience, category: &str, order: u32) -> String {
    format!(
        "{}-{}-{order}",
        audience.id_prefix(),
        journey_category_key(category)
    )
}

fn build_journey<'a>(
    audience: Audience,
    rows: impl IntoIterator<Item = SourceRow<'a>>,
) -> Vec<JourneyEntry> {
    rows.into_iter()
        .zip(1u32..)
        .map(|(row, order)| JourneyEntry {
            id: journey_id(audience, row.category, order),
            order,
            question: row.question.to_string(),
            answer: row.answer_for(audience).to_string(),
            category: row.category.to_string(),
        })
        .collect()
}

fn build_standard<'a>(
    audience: Audience,
    rows: impl IntoIterator<Item = SourceRow<'a>>,
) -> Vec<FaqEntry> {
    rows.into_iter()
        .map(|row| FaqEntry {
            question: row.question.to_string(),
            answer: row.answer_for(audience).to_string(),
            category: standard_category(row.category),
        })
        .collect()
}

/// Journey entries for `audience` from the authored tables.
///
/// Shared rows come first, then the audience's own journey rows. The general
/// audience has no exclusive journey rows and only receives the shared ones.
#[must_use]
pub fn generate_journey_entries(audience: Audience) -> Vec<JourneyEntry> {
    let rows = tables::SHARED
        .iter()
        .chain(tables::journey_rows(audience))
        .copied();
    let entries = build_journey(audience, rows);
    tracing::debug!(%audience, count = entries.len(), "generated journey entries");
    entries
}

/// Standard entries for `audience` from the authored tables.
#[must_use]
pub fn generate_standard_entries(audience: Audience) -> Vec<FaqEntry> {
    let rows = tables::SHARED
        .iter()
        .chain(tables::standard_rows(audience))
        .copied();
    let entries = build_standard(audience, rows);
    tracing::debug!(%audience, count = entries.len(), "generated standard entries");
    entries
}

/// Journey entries for `audience` from caller-supplied rows.
///
/// Missing fields default to empty strings. The resulting ids are checked
/// for uniqueness.
///
/// # Errors
///
/// Returns [`ContentError::DuplicateIdentifier`] if two entries end up with
/// the same id.
pub fn generate_journey_entries_from(
    audience: Audience,
    rows: &[RawRow],
) -> Result<Vec<JourneyEntry>, ContentError> {
    let entries = build_journey(audience, rows.iter().map(RawRow::as_source_row));
    ensure_unique_ids(&entries)?;
    Ok(entries)
}

/// Standard entries for `audience` from caller-supplied rows.
#[must_use]
pub fn generate_standard_entries_from(audience: Audience, rows: &[RawRow]) -> Vec<FaqEntry> {
    build_standard(audience, rows.iter().map(RawRow::as_source_row))
}

/// Check that no two journey entries share an id.
///
/// # Errors
///
/// Returns [`ContentError::DuplicateIdentifier`] naming the first collision.
pub fn ensure_unique_ids(entries: &[JourneyEntry]) -> Result<(), ContentError> {
    let mut seen: HashMap<&str, u32> = HashMap::with_capacity(entries.len());
    for entry in entries {
        if let Some(first_order) = seen.insert(&entry.id, entry.order) {
            return Err(ContentError::DuplicateIdentifier {
                id: entry.id.clone(),
                first_order,
                second_order: entry.order,
            });
        }
    }
    Ok(())
}
