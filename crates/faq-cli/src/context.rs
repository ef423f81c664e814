use faq_config::{CatalogConfig, FaqConfig};
use faq_query::{CatalogSettings, FaqCatalog};

/// Shared state for command handlers.
pub struct AppContext {
    pub config: FaqConfig,
    pub catalog: FaqCatalog,
}

impl AppContext {
    /// Build the catalog once, with any configured list overrides applied.
    #[must_use]
    pub fn init(config: FaqConfig) -> Self {
        if config.catalog.is_customized() {
            tracing::debug!("applying category list overrides from config");
        }
        let catalog = FaqCatalog::new(&catalog_settings(&config.catalog));
        Self { config, catalog }
    }
}

/// Overlay configured lists on top of the authored defaults.
fn catalog_settings(config: &CatalogConfig) -> CatalogSettings {
    let defaults = CatalogSettings::default();
    CatalogSettings {
        popular_categories: config
            .popular_categories
            .clone()
            .unwrap_or(defaults.popular_categories),
        client_frequent_categories: config
            .client_frequent_categories
            .clone()
            .unwrap_or(defaults.client_frequent_categories),
        general_frequent_categories: config
            .general_frequent_categories
            .clone()
            .unwrap_or(defaults.general_frequent_categories),
        general_priority: config.general_priority.clone().or(defaults.general_priority),
        provider_priority: config
            .provider_priority
            .clone()
            .or(defaults.provider_priority),
        client_priority: config.client_priority.clone().or(defaults.client_priority),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn unset_overrides_keep_authored_lists() {
        assert_eq!(
            catalog_settings(&CatalogConfig::default()),
            CatalogSettings::default()
        );
    }

    #[test]
    fn set_overrides_replace_only_their_list() {
        let config = CatalogConfig {
            popular_categories: Some(vec!["confiance".to_string()]),
            general_priority: Some(vec!["general".to_string()]),
            ..CatalogConfig::default()
        };
        let settings = catalog_settings(&config);
        let defaults = CatalogSettings::default();

        assert_eq!(settings.popular_categories, vec!["confiance"]);
        assert_eq!(settings.general_priority, Some(vec!["general".to_string()]));
        assert_eq!(settings.provider_priority, defaults.provider_priority);
        assert_eq!(
            settings.client_frequent_categories,
            defaults.client_frequent_categories
        );
    }

    #[test]
    fn init_builds_catalog_without_drift() {
        let ctx = AppContext::init(FaqConfig::default());
        assert!(ctx.catalog.drift().is_empty());
        assert_eq!(ctx.config.general.default_limit, 20);
    }
}
