use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `faq stats`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.catalog.unified().stats(), flags.format)
}
