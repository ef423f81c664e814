//! Category name → slug lookup.
//!
//! Journey ids use a fine-grained key per category. Standard entries are
//! filed under a coarser taxonomy. Names missing from either table fall back
//! to [`slugify`].

use crate::tables::category::{
    ABOUT, ACCOUNT, BOOKINGS, PAYMENTS, REVIEWS, SERVICES, SIGN_UP, SUPPORT, TRUST,
};

/// Category keys used inside journey ids.
///
/// "Première mission" has no entry and goes through [`slugify`].
pub const JOURNEY_CATEGORY_KEYS: &[(&str, &str)] = &[
    (SIGN_UP, "inscription"),
    (ACCOUNT, "profil"),
    (SERVICES, "services"),
    (BOOKINGS, "reservations"),
    (PAYMENTS, "paiements"),
    (REVIEWS, "avis"),
    (TRUST, "securite"),
    (SUPPORT, "assistance"),
];

/// Coarse categories for standard entries.
pub const STANDARD_CATEGORY_SLUGS: &[(&str, &str)] = &[
    (SIGN_UP, "inscription"),
    (ACCOUNT, "compte"),
    (SERVICES, "services"),
    (BOOKINGS, "reservation"),
    (PAYMENTS, "paiement"),
    (REVIEWS, "confiance"),
    (TRUST, "confiance"),
    (SUPPORT, "general"),
    (ABOUT, "general"),
];

/// Generic slug: trimmed, lowercased, whitespace runs joined by `-`.
///
/// Non-ASCII letters are kept as-is (`"Première mission"` → `"première-mission"`).
#[must_use]
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn lookup(table: &[(&str, &'static str)], name: &str) -> Option<&'static str> {
    table
        .iter()
        .find_map(|(candidate, slug)| (*candidate == name).then_some(*slug))
}

/// Key for `name` inside journey ids.
#[must_use]
pub fn journey_category_key(name: &str) -> String {
    lookup(JOURNEY_CATEGORY_KEYS, name).map_or_else(|| slugify(name), str::to_string)
}

/// Standard (coarse) category slug for `name`.
#[must_use]
pub fn standard_category(name: &str) -> String {
    lookup(STANDARD_CATEGORY_SLUGS, name).map_or_else(|| slugify(name), str::to_string)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Inscription", "inscription")]
    #[case("Sécurité et confiance", "securite")]
    #[case("Première mission", "première-mission")]
    #[case("  Nouvelle   Catégorie ", "nouvelle-catégorie")]
    fn journey_keys_use_table_then_fallback(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(journey_category_key(name), expected);
    }

    #[rstest]
    #[case("Profil et compte", "compte")]
    #[case("Avis et évaluations", "confiance")]
    #[case("À propos", "general")]
    #[case("Première mission", "première-mission")]
    fn standard_slugs_use_table_then_fallback(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(standard_category(name), expected);
    }

    #[test]
    fn slugify_handles_empty_and_blank_names() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
    }

    #[test]
    fn standard_taxonomy_is_coarser() {
        let mut journey: Vec<_> = JOURNEY_CATEGORY_KEYS.iter().map(|(_, k)| *k).collect();
        let mut standard: Vec<_> = STANDARD_CATEGORY_SLUGS.iter().map(|(_, s)| *s).collect();
        journey.sort_unstable();
        journey.dedup();
        standard.sort_unstable();
        standard.dedup();
        assert!(standard.len() < journey.len());
    }
}
