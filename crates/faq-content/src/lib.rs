//! # faq-content
//!
//! Authored FAQ source tables and the factory that expands them into entries.
//!
//! - [`tables`]: shared and per-audience source rows
//! - [`slug`]: category name → slug lookup with fallback slugification
//! - [`factory`]: journey and standard entry generation
//! - [`raw`]: externally supplied rows with field defaulting
//! - [`lists`]: authored allow-lists and priority orders

pub mod error;
pub mod factory;
pub mod lists;
pub mod raw;
pub mod slug;
pub mod tables;

pub use error::ContentError;
pub use factory::{
    ensure_unique_ids, generate_journey_entries, generate_journey_entries_from,
    generate_standard_entries, generate_standard_entries_from,
};
pub use raw::{RawRow, load_raw_rows};
