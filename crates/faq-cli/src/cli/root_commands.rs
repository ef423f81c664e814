use clap::{Args, Subcommand};
use faq_core::Audience;

use crate::cli::subcommands::JourneyCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List entries across audiences, or for one audience.
    List(ListArgs),
    /// Search questions, answers, and category names across audiences.
    Search(SearchArgs),
    /// Entries in one category across audiences.
    Category(CategoryArgs),
    /// Distinct categories.
    Categories(CategoriesArgs),
    /// Entries in the popular categories.
    Popular,
    /// Most frequently asked entries.
    Frequent,
    /// One audience's entries in priority order.
    Priority(PriorityArgs),
    /// Entry counts per audience.
    Stats,
    /// Combine audience, category, and text criteria.
    Filter(FilterArgs),
    /// Ordered walkthrough for providers or clients.
    Journey(JourneyArgs),
    /// Expand a JSON file of source rows into journey entries.
    Check(CheckArgs),
    /// Dump the JSON schema for an entry type.
    Schema(SchemaArgs),
}

/// Arguments for `faq list`.
#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Only this audience (general, provider, client).
    #[arg(long)]
    pub audience: Option<Audience>,
}

/// Arguments for `faq search`.
#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Text to look for (case-insensitive).
    pub query: String,
}

/// Arguments for `faq category`.
#[derive(Clone, Debug, Args)]
pub struct CategoryArgs {
    /// Category slug (e.g. paiement).
    pub name: String,
}

/// Arguments for `faq categories`.
#[derive(Clone, Debug, Args)]
pub struct CategoriesArgs {
    /// Only this audience's categories.
    #[arg(long)]
    pub audience: Option<Audience>,
}

/// Arguments for `faq priority`.
#[derive(Clone, Debug, Args)]
pub struct PriorityArgs {
    /// Audience whose priority order to use.
    pub audience: Audience,
}

/// Arguments for `faq filter`.
#[derive(Clone, Debug, Args)]
pub struct FilterArgs {
    #[arg(long)]
    pub audience: Option<Audience>,
    /// Exact category slug.
    #[arg(long)]
    pub category: Option<String>,
    /// Text to look for (case-insensitive).
    #[arg(long)]
    pub search: Option<String>,
}

/// Arguments for `faq journey`.
#[derive(Clone, Debug, Args)]
pub struct JourneyArgs {
    /// provider or client.
    pub audience: Audience,
    #[command(subcommand)]
    pub action: JourneyCommands,
}

/// Arguments for `faq check`.
#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// JSON file holding an array of source rows.
    pub path: String,
    /// Audience the rows are written for.
    #[arg(long)]
    pub audience: Audience,
}

/// Arguments for `faq schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// entry, expandable-entry, journey-entry, unified-entry, or stats.
    pub type_name: String,
}
