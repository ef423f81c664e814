use anyhow::bail;
use faq_core::{ExpandableEntry, FaqEntry, FaqStats, JourneyEntry, UnifiedEntry};
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Type names accepted by `faq schema`.
const TYPE_NAMES: &[&str] = &[
    "entry",
    "expandable-entry",
    "journey-entry",
    "unified-entry",
    "stats",
];

/// Handle `faq schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema(&args.type_name)?, flags.format)
}

fn schema(type_name: &str) -> anyhow::Result<Schema> {
    let schema = match type_name {
        "entry" => schema_for!(FaqEntry),
        "expandable-entry" => schema_for!(ExpandableEntry),
        "journey-entry" => schema_for!(JourneyEntry),
        "unified-entry" => schema_for!(UnifiedEntry),
        "stats" => schema_for!(FaqStats),
        other => bail!(
            "unknown schema type '{other}' (expected one of: {})",
            TYPE_NAMES.join(", ")
        ),
    };
    Ok(schema)
}
