use crate::cli::GlobalFlags;
use crate::cli::root_commands::PriorityArgs;
use crate::commands::shared::limit::{effective_limit, take};
use crate::context::AppContext;
use crate::output::output;

/// Handle `faq priority`.
pub fn handle(args: &PriorityArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let unified = ctx.catalog.unified();
    if unified.service(args.audience).priority().is_none() {
        tracing::debug!(audience = %args.audience, "no priority list, using authored order");
    }
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    output(&take(unified.by_priority(args.audience), limit), flags.format)
}
