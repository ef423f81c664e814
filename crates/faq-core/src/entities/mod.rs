//! Entry structs for every FAQ shape.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`. Field names
//! serialize in camelCase so the JSON matches what the web front end reads.

mod entry;
mod expandable;
mod journey;
mod unified;

pub use entry::FaqEntry;
pub use expandable::ExpandableEntry;
pub use journey::JourneyEntry;
pub use unified::UnifiedEntry;
