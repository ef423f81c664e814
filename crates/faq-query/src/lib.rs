//! # faq-query
//!
//! Read-only query services over generated FAQ entries.
//!
//! - [`Entries`]: generic list queries, plus ordered and id queries for
//!   journey entries
//! - [`StandardFaq`] / [`JourneyFaq`]: one service per audience
//! - [`UnifiedFaq`]: cross-audience facade with tagging, filters, and stats
//! - [`FaqCatalog`]: builds and owns every service
//!
//! All queries are synchronous and total: "not found" is an empty `Vec` or
//! `None`.

pub mod catalog;
pub mod entries;
pub mod journey;
pub mod priority;
pub mod standard;
pub mod unified;

pub use catalog::{CatalogSettings, CategoryDrift, FaqCatalog};
pub use entries::Entries;
pub use journey::JourneyFaq;
pub use priority::order_by_priority;
pub use standard::StandardFaq;
pub use unified::{FaqFilter, UnifiedFaq};
