use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An entry with a stable id and a position in a guided walkthrough.
///
/// `id` has the form `{audience prefix}-{category key}-{order}` and `order`
/// is 1-based and dense within one audience's journey list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JourneyEntry {
    pub id: String,
    pub order: u32,
    pub question: String,
    pub answer: String,
    pub category: String,
}
