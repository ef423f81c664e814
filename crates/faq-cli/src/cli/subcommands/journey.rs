use clap::Subcommand;

/// Queries over one audience's ordered walkthrough.
#[derive(Clone, Debug, Subcommand)]
pub enum JourneyCommands {
    /// List every step in walkthrough order.
    List,
    /// Steps in one category, in walkthrough order.
    Category {
        /// Category display name (e.g. "Services et tarifs").
        name: String,
    },
    /// Free-text search over questions and answers.
    Search {
        /// Text to look for (case-insensitive).
        query: String,
    },
    /// Fetch one step by id (e.g. presta-inscription-1).
    Get {
        /// Journey entry id.
        id: String,
    },
}
