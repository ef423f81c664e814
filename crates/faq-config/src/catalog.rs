//! Category list overrides.
//!
//! Every field is optional; an unset field keeps the authored list. Values
//! are standard category slugs such as `paiement` or `reservation`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CatalogConfig {
    #[serde(default)]
    pub popular_categories: Option<Vec<String>>,

    #[serde(default)]
    pub client_frequent_categories: Option<Vec<String>>,

    #[serde(default)]
    pub general_frequent_categories: Option<Vec<String>>,

    #[serde(default)]
    pub general_priority: Option<Vec<String>>,

    #[serde(default)]
    pub provider_priority: Option<Vec<String>>,

    #[serde(default)]
    pub client_priority: Option<Vec<String>>,
}

impl CatalogConfig {
    /// Whether any list is overridden.
    #[must_use]
    pub const fn is_customized(&self) -> bool {
        self.popular_categories.is_some()
            || self.client_frequent_categories.is_some()
            || self.general_frequent_categories.is_some()
            || self.general_priority.is_some()
            || self.provider_priority.is_some()
            || self.client_priority.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_overrides_nothing() {
        assert!(!CatalogConfig::default().is_customized());
    }

    #[test]
    fn any_list_counts_as_customized() {
        let config = CatalogConfig {
            client_priority: Some(vec!["paiement".to_string()]),
            ..CatalogConfig::default()
        };
        assert!(config.is_customized());
    }
}
