use anyhow::{Context, bail};
use faq_core::JourneyEntry;
use faq_query::JourneyFaq;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::JourneyArgs;
use crate::cli::subcommands::JourneyCommands;
use crate::commands::shared::limit::{effective_limit, take};
use crate::context::AppContext;
use crate::output::output;

/// Handle `faq journey`.
pub fn handle(args: &JourneyArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let journey = ctx
        .catalog
        .journey(args.audience)
        .with_context(|| format!("the {} audience has no journey", args.audience))?;

    if let JourneyCommands::Get { id } = &args.action {
        return output(get(journey, id)?, flags.format);
    }

    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    output(&take(steps(journey, &args.action), limit), flags.format)
}

fn get<'a>(journey: &'a JourneyFaq, id: &str) -> anyhow::Result<&'a JourneyEntry> {
    match journey.entries().by_id(id) {
        Some(entry) => Ok(entry),
        None => bail!("journey entry '{id}' not found"),
    }
}

fn steps<'a>(journey: &'a JourneyFaq, action: &JourneyCommands) -> Vec<&'a JourneyEntry> {
    let entries = journey.entries();
    match action {
        JourneyCommands::List | JourneyCommands::Get { .. } => entries.all_ordered(),
        JourneyCommands::Category { name } => entries.by_category_ordered(name),
        JourneyCommands::Search { query } => entries.search_journey(query),
    }
}
