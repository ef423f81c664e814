use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => commands::list::handle(args, ctx, flags),
        Commands::Search(args) => commands::search::handle(args, ctx, flags),
        Commands::Category(args) => commands::category::handle(args, ctx, flags),
        Commands::Categories(args) => commands::category::handle_list(args, ctx, flags),
        Commands::Popular => commands::popular::handle(ctx, flags),
        Commands::Frequent => commands::popular::handle_frequent(ctx, flags),
        Commands::Priority(args) => commands::priority::handle(args, ctx, flags),
        Commands::Stats => commands::stats::handle(ctx, flags),
        Commands::Filter(args) => commands::search::handle_filter(args, ctx, flags),
        Commands::Journey(args) => commands::journey::handle(args, ctx, flags),
        Commands::Check(_) | Commands::Schema(_) => {
            unreachable!("check/schema are pre-dispatched in main")
        }
    }
}
