//! Per-audience services over standard entries.

use faq_content::{generate_standard_entries, lists};
use faq_core::{Audience, FaqEntry};

use crate::entries::Entries;
use crate::priority::order_by_priority;

/// Standard FAQ for one audience.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardFaq {
    audience: Audience,
    entries: Entries<FaqEntry>,
    priority: Option<Vec<String>>,
    frequent: Vec<String>,
}

pub(crate) fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

impl StandardFaq {
    /// Service over `entries` with no priority order and no frequent list.
    #[must_use]
    pub fn new(audience: Audience, entries: Vec<FaqEntry>) -> Self {
        Self {
            audience,
            entries: Entries::new(entries),
            priority: None,
            frequent: Vec::new(),
        }
    }

    /// Service over the authored tables with the authored lists.
    #[must_use]
    pub fn authored(audience: Audience) -> Self {
        let service = Self::new(audience, generate_standard_entries(audience))
            .with_frequent(owned(lists::frequent_for(audience)));
        match lists::priority_for(audience) {
            Some(priority) => service.with_priority(owned(priority)),
            None => service,
        }
    }

    #[must_use]
    pub fn general() -> Self {
        Self::authored(Audience::General)
    }

    #[must_use]
    pub fn provider() -> Self {
        Self::authored(Audience::Provider)
    }

    #[must_use]
    pub fn client() -> Self {
        Self::authored(Audience::Client)
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Vec<String>) -> Self {
        self.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn with_frequent(mut self, frequent: Vec<String>) -> Self {
        self.frequent = frequent;
        self
    }

    #[must_use]
    pub const fn audience(&self) -> Audience {
        self.audience
    }

    #[must_use]
    pub const fn entries(&self) -> &Entries<FaqEntry> {
        &self.entries
    }

    #[must_use]
    pub fn priority(&self) -> Option<&[String]> {
        self.priority.as_deref()
    }

    #[must_use]
    pub fn frequent(&self) -> &[String] {
        &self.frequent
    }

    /// Entries grouped by this audience's priority order.
    ///
    /// `None` when the audience has no priority order.
    #[must_use]
    pub fn by_priority(&self) -> Option<Vec<&FaqEntry>> {
        self.priority
            .as_deref()
            .map(|priority| order_by_priority(self.entries.all(), priority))
    }

    /// Entries in the frequent categories, generation order.
    #[must_use]
    pub fn most_frequent(&self) -> Vec<&FaqEntry> {
        self.entries
            .all()
            .iter()
            .filter(|entry| self.frequent.contains(&entry.category))
            .collect()
    }
}
