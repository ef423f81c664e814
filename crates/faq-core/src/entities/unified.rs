use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::audience::Audience;
use crate::record::FaqRecord;

/// An entry tagged with the audience it came from.
///
/// Only produced by the unified facade; never stored.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedEntry {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub audience: Audience,
    pub source_label: String,
}

impl UnifiedEntry {
    /// Copy `record` and tag it with `audience` and its display label.
    #[must_use]
    pub fn tag<R: FaqRecord + ?Sized>(record: &R, audience: Audience) -> Self {
        Self {
            question: record.question().to_string(),
            answer: record.answer().to_string(),
            category: record.category().to_string(),
            audience,
            source_label: audience.label().to_string(),
        }
    }
}
