//! Authored category allow-lists and priority orders.
//!
//! All values are standard category slugs (see [`crate::slug`]). Nothing ties
//! these lists to the tables at compile time; `faq-query` reports any slug
//! that matches no generated entry when a catalog is built.

use faq_core::Audience;

/// Categories surfaced by the unified "popular" view.
pub const POPULAR_CATEGORIES: &[&str] = &["inscription", "paiement", "reservation"];

/// Categories clients ask about most.
pub const CLIENT_FREQUENT_CATEGORIES: &[&str] = &["reservation", "paiement", "confiance"];

/// General-audience categories merged into the unified "most frequent" view.
pub const GENERAL_FREQUENT_CATEGORIES: &[&str] = &["general", "confiance"];

pub const PROVIDER_PRIORITY: &[&str] = &[
    "inscription",
    "compte",
    "services",
    "reservation",
    "paiement",
];

pub const CLIENT_PRIORITY: &[&str] = &["reservation", "paiement", "confiance", "inscription"];

/// Priority order for `audience`, if one was authored.
#[must_use]
pub const fn priority_for(audience: Audience) -> Option<&'static [&'static str]> {
    match audience {
        Audience::General => None,
        Audience::Provider => Some(PROVIDER_PRIORITY),
        Audience::Client => Some(CLIENT_PRIORITY),
    }
}

/// Frequent-categories allow-list for `audience`; only clients have one.
#[must_use]
pub const fn frequent_for(audience: Audience) -> &'static [&'static str] {
    match audience {
        Audience::Client => CLIENT_FREQUENT_CATEGORIES,
        Audience::General | Audience::Provider => &[],
    }
}
