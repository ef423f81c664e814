//! Per-audience services over journey entries.

use faq_content::generate_journey_entries;
use faq_core::{Audience, JourneyEntry};

use crate::entries::Entries;

/// Ordered walkthrough FAQ for one audience.
///
/// Only providers and clients have a journey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyFaq {
    audience: Audience,
    entries: Entries<JourneyEntry>,
}

impl JourneyFaq {
    #[must_use]
    pub fn new(audience: Audience, entries: Vec<JourneyEntry>) -> Self {
        Self {
            audience,
            entries: Entries::new(entries),
        }
    }

    #[must_use]
    pub fn provider() -> Self {
        Self::new(
            Audience::Provider,
            generate_journey_entries(Audience::Provider),
        )
    }

    #[must_use]
    pub fn client() -> Self {
        Self::new(Audience::Client, generate_journey_entries(Audience::Client))
    }

    #[must_use]
    pub const fn audience(&self) -> Audience {
        self.audience
    }

    #[must_use]
    pub const fn entries(&self) -> &Entries<JourneyEntry> {
        &self.entries
    }
}
