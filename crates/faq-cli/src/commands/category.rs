use crate::cli::GlobalFlags;
use crate::cli::root_commands::{CategoriesArgs, CategoryArgs};
use crate::commands::shared::limit::{effective_limit, take};
use crate::context::AppContext;
use crate::output::output;

/// Handle `faq category`.
pub fn handle(args: &CategoryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let entries = ctx.catalog.unified().by_category(&args.name);
    if entries.is_empty() {
        tracing::debug!(category = %args.name, "no entries in category");
    }
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    output(&take(entries, limit), flags.format)
}

/// Handle `faq categories`.
pub fn handle_list(
    args: &CategoriesArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(&categories(ctx, args), flags.format)
}

fn categories(ctx: &AppContext, args: &CategoriesArgs) -> Vec<String> {
    let unified = ctx.catalog.unified();
    match args.audience {
        Some(audience) => unified
            .service(audience)
            .entries()
            .categories()
            .into_iter()
            .map(str::to_string)
            .collect(),
        None => unified.all_categories(),
    }
}

#[cfg(test)]
mod tests {
    use faq_config::FaqConfig;
    use faq_core::Audience;

    use super::*;

    #[test]
    fn audience_categories_are_a_subset() {
        let ctx = AppContext::init(FaqConfig::default());
        let all = categories(&ctx, &CategoriesArgs { audience: None });
        let general = categories(
            &ctx,
            &CategoriesArgs {
                audience: Some(Audience::General),
            },
        );
        assert!(!general.is_empty());
        assert!(general.len() <= all.len());
        assert!(general.iter().all(|c| all.contains(c)));
    }

    #[test]
    fn categories_are_distinct() {
        let ctx = AppContext::init(FaqConfig::default());
        let mut all = categories(&ctx, &CategoriesArgs { audience: None });
        let count = all.len();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), count);
    }
}
