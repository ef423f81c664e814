//! Cross-audience facade over the three standard services.
//!
//! Every result is a freshly tagged [`UnifiedEntry`]. Results always list the
//! general audience first, then providers, then clients.

use faq_content::lists;
use faq_core::{Audience, FaqEntry, FaqRecord, FaqStats, UnifiedEntry};
use serde::{Deserialize, Serialize};

use crate::entries::{contains_folded, distinct_categories, search_needle};
use crate::standard::{StandardFaq, owned};

/// Optional criteria AND-ed together by [`UnifiedFaq::filter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqFilter {
    pub audience: Option<Audience>,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl FaqFilter {
    #[must_use]
    pub fn audience(mut self, audience: Audience) -> Self {
        self.audience = Some(audience);
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }
}

fn tag<'a>(
    audience: Audience,
    entries: impl IntoIterator<Item = &'a FaqEntry>,
) -> Vec<UnifiedEntry> {
    entries
        .into_iter()
        .map(|entry| UnifiedEntry::tag(entry, audience))
        .collect()
}

/// Unified query surface across general, provider, and client FAQs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifiedFaq {
    general: StandardFaq,
    provider: StandardFaq,
    client: StandardFaq,
    popular: Vec<String>,
    general_frequent: Vec<String>,
}

impl UnifiedFaq {
    /// Facade over the given services with empty popular and frequent lists.
    #[must_use]
    pub const fn new(general: StandardFaq, provider: StandardFaq, client: StandardFaq) -> Self {
        Self {
            general,
            provider,
            client,
            popular: Vec::new(),
            general_frequent: Vec::new(),
        }
    }

    /// Facade over the authored tables and lists.
    #[must_use]
    pub fn authored() -> Self {
        Self::new(
            StandardFaq::general(),
            StandardFaq::provider(),
            StandardFaq::client(),
        )
        .with_popular(owned(lists::POPULAR_CATEGORIES))
        .with_general_frequent(owned(lists::GENERAL_FREQUENT_CATEGORIES))
    }

    #[must_use]
    pub fn with_popular(mut self, popular: Vec<String>) -> Self {
        self.popular = popular;
        self
    }

    #[must_use]
    pub fn with_general_frequent(mut self, categories: Vec<String>) -> Self {
        self.general_frequent = categories;
        self
    }

    /// The per-audience service for `audience`.
    #[must_use]
    pub const fn service(&self, audience: Audience) -> &StandardFaq {
        match audience {
            Audience::General => &self.general,
            Audience::Provider => &self.provider,
            Audience::Client => &self.client,
        }
    }

    #[must_use]
    pub fn popular_categories(&self) -> &[String] {
        &self.popular
    }

    #[must_use]
    pub fn general_frequent_categories(&self) -> &[String] {
        &self.general_frequent
    }

    /// Every entry of every audience.
    #[must_use]
    pub fn all(&self) -> Vec<UnifiedEntry> {
        Audience::ALL
            .into_iter()
            .flat_map(|audience| self.by_audience(audience))
            .collect()
    }

    #[must_use]
    pub fn by_audience(&self, audience: Audience) -> Vec<UnifiedEntry> {
        tag(audience, self.service(audience).entries().all())
    }

    /// Like [`UnifiedFaq::by_audience`] for an unparsed key; unknown keys
    /// yield nothing.
    #[must_use]
    pub fn by_audience_key(&self, key: &str) -> Vec<UnifiedEntry> {
        key.parse::<Audience>()
            .map_or_else(|_| Vec::new(), |audience| self.by_audience(audience))
    }

    /// Case-insensitive substring match on question, answer, or category.
    ///
    /// Unlike the per-audience search, the category name is matched too.
    /// A blank query returns every entry.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<UnifiedEntry> {
        let mut entries = self.all();
        retain_matching(&mut entries, query);
        entries
    }

    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<UnifiedEntry> {
        let mut entries = self.all();
        entries.retain(|entry| entry.category == category);
        entries
    }

    /// Distinct categories across all audiences, first-seen order.
    #[must_use]
    pub fn all_categories(&self) -> Vec<String> {
        let entries = self.all();
        distinct_categories(&entries)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Entries in the popular categories.
    #[must_use]
    pub fn popular(&self) -> Vec<UnifiedEntry> {
        let mut entries = self.all();
        entries.retain(|entry| self.popular.contains(&entry.category));
        entries
    }

    /// `audience`'s priority ordering, or its full list when it has none.
    #[must_use]
    pub fn by_priority(&self, audience: Audience) -> Vec<UnifiedEntry> {
        let service = self.service(audience);
        match service.by_priority() {
            Some(ordered) => tag(audience, ordered),
            None => tag(audience, service.entries().all()),
        }
    }

    /// Client frequent entries followed by general entries in the general
    /// frequent categories.
    #[must_use]
    pub fn most_frequent(&self) -> Vec<UnifiedEntry> {
        let mut entries = tag(Audience::Client, self.client.most_frequent());
        entries.extend(tag(
            Audience::General,
            self.general
                .entries()
                .all()
                .iter()
                .filter(|entry| self.general_frequent.contains(&entry.category)),
        ));
        entries
    }

    #[must_use]
    pub fn stats(&self) -> FaqStats {
        let entries = self.all();
        let count_for =
            |audience: Audience| entries.iter().filter(|e| e.audience == audience).count();
        FaqStats {
            total: entries.len(),
            general: count_for(Audience::General),
            provider: count_for(Audience::Provider),
            client: count_for(Audience::Client),
            categories: self.all_categories().len(),
        }
    }

    /// Apply the criteria of `filter` in order audience → category → search.
    ///
    /// Omitted criteria match everything.
    #[must_use]
    pub fn filter(&self, filter: &FaqFilter) -> Vec<UnifiedEntry> {
        let mut entries = self.all();
        if let Some(audience) = filter.audience {
            entries.retain(|entry| entry.audience == audience);
        }
        if let Some(category) = &filter.category {
            entries.retain(|entry| &entry.category == category);
        }
        if let Some(query) = &filter.search {
            retain_matching(&mut entries, query);
        }
        entries
    }
}

fn retain_matching(entries: &mut Vec<UnifiedEntry>, query: &str) {
    let Some(needle) = search_needle(query) else {
        return;
    };
    entries.retain(|entry| {
        contains_folded(entry.question(), &needle)
            || contains_folded(entry.answer(), &needle)
            || contains_folded(entry.category(), &needle)
    });
}
