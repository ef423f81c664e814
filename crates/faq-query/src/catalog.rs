//! Composition root for the FAQ services.
//!
//! A [`FaqCatalog`] is built once, at startup, and handed to consumers by
//! reference. It owns the unified facade and the two journey services.

use faq_content::{generate_standard_entries, lists};
use faq_core::Audience;

use crate::journey::JourneyFaq;
use crate::standard::{StandardFaq, owned};
use crate::unified::UnifiedFaq;

/// Category lists used when building a catalog.
///
/// Defaults to the authored lists in [`faq_content::lists`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    pub popular_categories: Vec<String>,
    pub client_frequent_categories: Vec<String>,
    pub general_frequent_categories: Vec<String>,
    pub general_priority: Option<Vec<String>>,
    pub provider_priority: Option<Vec<String>>,
    pub client_priority: Option<Vec<String>>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            popular_categories: owned(lists::POPULAR_CATEGORIES),
            client_frequent_categories: owned(lists::CLIENT_FREQUENT_CATEGORIES),
            general_frequent_categories: owned(lists::GENERAL_FREQUENT_CATEGORIES),
            general_priority: lists::priority_for(Audience::General).map(owned),
            provider_priority: lists::priority_for(Audience::Provider).map(owned),
            client_priority: lists::priority_for(Audience::Client).map(owned),
        }
    }
}

impl CatalogSettings {
    const fn priority(&self, audience: Audience) -> Option<&Vec<String>> {
        match audience {
            Audience::General => self.general_priority.as_ref(),
            Audience::Provider => self.provider_priority.as_ref(),
            Audience::Client => self.client_priority.as_ref(),
        }
    }
}

/// A configured category that matches no generated entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDrift {
    /// Name of the list the category came from.
    pub list: &'static str,
    pub category: String,
}

/// Every FAQ service the application needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqCatalog {
    unified: UnifiedFaq,
    provider_journey: JourneyFaq,
    client_journey: JourneyFaq,
    drift: Vec<CategoryDrift>,
}

impl FaqCatalog {
    /// Generate all entries and wire the services using `settings`.
    ///
    /// Categories in `settings` that match no entry are logged and kept; the
    /// affected views simply return fewer results.
    #[must_use]
    pub fn new(settings: &CatalogSettings) -> Self {
        let standard = |audience: Audience, frequent: Vec<String>| {
            let service = StandardFaq::new(audience, generate_standard_entries(audience))
                .with_frequent(frequent);
            match settings.priority(audience) {
                Some(priority) => service.with_priority(priority.clone()),
                None => service,
            }
        };

        let unified = UnifiedFaq::new(
            standard(Audience::General, Vec::new()),
            standard(Audience::Provider, Vec::new()),
            standard(Audience::Client, settings.client_frequent_categories.clone()),
        )
        .with_popular(settings.popular_categories.clone())
        .with_general_frequent(settings.general_frequent_categories.clone());

        let drift = find_drift(&unified);
        for item in &drift {
            tracing::warn!(
                list = item.list,
                category = %item.category,
                "configured category matches no FAQ entry"
            );
        }

        let catalog = Self {
            unified,
            provider_journey: JourneyFaq::provider(),
            client_journey: JourneyFaq::client(),
            drift,
        };
        tracing::debug!(
            entries = catalog.unified.stats().total,
            provider_journey = catalog.provider_journey.entries().count(),
            client_journey = catalog.client_journey.entries().count(),
            "built FAQ catalog"
        );
        catalog
    }

    /// Catalog over the authored tables and lists.
    #[must_use]
    pub fn authored() -> Self {
        Self::new(&CatalogSettings::default())
    }

    #[must_use]
    pub const fn unified(&self) -> &UnifiedFaq {
        &self.unified
    }

    /// Journey service for `audience`; the general audience has none.
    #[must_use]
    pub const fn journey(&self, audience: Audience) -> Option<&JourneyFaq> {
        match audience {
            Audience::General => None,
            Audience::Provider => Some(&self.provider_journey),
            Audience::Client => Some(&self.client_journey),
        }
    }

    /// Configured categories that matched no entry at construction.
    #[must_use]
    pub fn drift(&self) -> &[CategoryDrift] {
        &self.drift
    }
}

fn check_list(
    drift: &mut Vec<CategoryDrift>,
    list: &'static str,
    configured: &[String],
    known: &[&str],
) {
    for category in configured {
        if !known.contains(&category.as_str()) {
            drift.push(CategoryDrift {
                list,
                category: category.clone(),
            });
        }
    }
}

fn find_drift(unified: &UnifiedFaq) -> Vec<CategoryDrift> {
    let mut drift = Vec::new();

    let all_categories = unified.all_categories();
    let all_categories: Vec<&str> = all_categories.iter().map(String::as_str).collect();
    check_list(
        &mut drift,
        "popular",
        unified.popular_categories(),
        &all_categories,
    );

    let general = unified.service(Audience::General).entries().categories();
    check_list(
        &mut drift,
        "general_frequent",
        unified.general_frequent_categories(),
        &general,
    );

    for audience in Audience::ALL {
        let service = unified.service(audience);
        let known = service.entries().categories();
        check_list(&mut drift, "frequent", service.frequent(), &known);
        if let Some(priority) = service.priority() {
            check_list(&mut drift, "priority", priority, &known);
        }
    }

    drift
}
