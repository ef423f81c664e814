//! The three FAQ audiences.
//!
//! Serialized as `snake_case` keys (`general`, `provider`, `client`).
//! Deserialization goes through [`FromStr`], so CLI arguments, config files,
//! and JSON all accept the same spellings, including the marketplace's French
//! names (`prestataire`, `particulier`).

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Audience an FAQ entry is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    /// Visitors who are neither signed-up providers nor clients.
    General,
    /// Service providers (prestataires).
    Provider,
    /// Clients looking for a service (particuliers).
    Client,
}

impl Audience {
    /// All audiences in facade order.
    pub const ALL: [Self; 3] = [Self::General, Self::Provider, Self::Client];

    /// Return the canonical key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Provider => "provider",
            Self::Client => "client",
        }
    }

    /// Prefix used when building journey entry ids (`presta-inscription-1`).
    #[must_use]
    pub const fn id_prefix(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Provider => "presta",
            Self::Client => "particulier",
        }
    }

    /// Human-readable name shown next to unified results.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "Général",
            Self::Provider => "Prestataire",
            Self::Client => "Particulier",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Audience {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" | "général" => Ok(Self::General),
            "provider" | "prestataire" | "presta" => Ok(Self::Provider),
            "client" | "particulier" => Ok(Self::Client),
            _ => Err(CoreError::InvalidAudience(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Audience {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(de::Error::custom)
    }
}
