use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::FaqEntry;

/// An entry wrapped with accordion state for display.
///
/// Built by the presentation layer around entries it received; the query
/// services never hand these out.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExpandableEntry {
    #[serde(flatten)]
    pub entry: FaqEntry,
    #[serde(default)]
    pub is_expanded: bool,
}

impl ExpandableEntry {
    /// Flip the expansion state and return the new value.
    pub const fn toggle(&mut self) -> bool {
        self.is_expanded = !self.is_expanded;
        self.is_expanded
    }
}

impl From<FaqEntry> for ExpandableEntry {
    fn from(entry: FaqEntry) -> Self {
        Self {
            entry,
            is_expanded: false,
        }
    }
}
