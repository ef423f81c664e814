//! Response types returned as JSON by `faq` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::audience::Audience;
use crate::entities::{JourneyEntry, UnifiedEntry};

/// Entry counts across the unified FAQ.
///
/// Per-audience counts keep the names the web front end displays.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FaqStats {
    pub total: usize,
    pub general: usize,
    #[serde(rename = "prestataire")]
    pub provider: usize,
    #[serde(rename = "particulier")]
    pub client: usize,
    /// Distinct categories across all audiences.
    pub categories: usize,
}

/// Response from `faq search` and `faq filter`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultsResponse {
    pub query: String,
    /// Matches before `--limit` was applied.
    pub total_results: usize,
    pub results: Vec<UnifiedEntry>,
}

/// Response from `faq check`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportCheckResponse {
    pub audience: Audience,
    pub rows: usize,
    /// Rows that were missing at least one of question, answer, or category.
    pub incomplete_rows: usize,
    pub entries: Vec<JourneyEntry>,
}
