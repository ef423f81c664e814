//! Integration tests for TOML and environment configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use faq_config::{ConfigError, FaqConfig};
use faq_core::Audience;
use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_general_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_limit = 5
default_audience = "client"
"#,
        )?;

        let config: FaqConfig = Figment::from(Serialized::defaults(FaqConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_limit, 5);
        assert_eq!(config.general.default_audience, Some(Audience::Client));
        Ok(())
    });
}

#[test]
fn loads_catalog_overrides_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[catalog]
popular_categories = ["paiement", "confiance"]
general_priority = ["general"]
"#,
        )?;

        let config: FaqConfig = Figment::from(Serialized::defaults(FaqConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(
            config.catalog.popular_categories,
            Some(vec!["paiement".to_string(), "confiance".to_string()])
        );
        assert_eq!(
            config.catalog.general_priority,
            Some(vec!["general".to_string()])
        );
        assert!(config.catalog.client_priority.is_none());
        assert!(config.catalog.is_customized());
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_default_chain() {
    Jail::expect_with(|jail| {
        jail.create_dir(".faq")?;
        jail.create_file(".faq/config.toml", "[general]\ndefault_limit = 7\n")?;

        let config = FaqConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 7);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[general]\ndefault_limit = 5\n")?;
        jail.set_env("FAQ_GENERAL__DEFAULT_LIMIT", "50");
        jail.set_env("FAQ_GENERAL__DEFAULT_AUDIENCE", "provider");

        let config: FaqConfig = Figment::from(Serialized::defaults(FaqConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("FAQ_").split("__"))
            .extract()?;

        assert_eq!(config.general.default_limit, 50);
        assert_eq!(config.general.default_audience, Some(Audience::Provider));
        Ok(())
    });
}

#[test]
fn env_list_override_through_default_chain() {
    Jail::expect_with(|jail| {
        jail.set_env("FAQ_CATALOG__CLIENT_PRIORITY", "[paiement, reservation]");

        let config = FaqConfig::load().expect("config loads");
        assert_eq!(
            config.catalog.client_priority,
            Some(vec!["paiement".to_string(), "reservation".to_string()])
        );
        Ok(())
    });
}

#[test]
fn project_file_accepts_cli_audience_spellings() {
    for (key, expected) in [
        ("presta", Audience::Provider),
        ("Provider", Audience::Provider),
        ("particulier", Audience::Client),
        ("Général", Audience::General),
    ] {
        Jail::expect_with(|jail| {
            jail.create_dir(".faq")?;
            jail.create_file(
                ".faq/config.toml",
                &format!("[general]\ndefault_audience = \"{key}\"\n"),
            )?;

            let config = FaqConfig::load().expect("config loads");
            assert_eq!(config.general.default_audience, Some(expected));
            assert_eq!(
                config.general.default_audience,
                key.parse::<Audience>().ok()
            );
            Ok(())
        });
    }
}

#[test]
fn unknown_audience_fails_extraction() {
    Jail::expect_with(|jail| {
        jail.set_env("FAQ_GENERAL__DEFAULT_AUDIENCE", "admin");

        match FaqConfig::load() {
            Err(ConfigError::Figment(error)) => {
                assert!(error.to_string().contains("Unknown audience: admin"));
            }
            other => panic!("expected a figment error, got {other:?}"),
        }
        Ok(())
    });
}

#[test]
fn zero_limit_from_env_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("FAQ_GENERAL__DEFAULT_LIMIT", "0");

        let result = FaqConfig::load();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}
