//! # faq-core
//!
//! Core types shared across the FAQ crates.
//!
//! This crate provides:
//! - Entry structs for every FAQ shape (standard, expandable, journey, unified)
//! - The [`Audience`](audience::Audience) enum with its keys, id prefixes, and labels
//! - Record traits that let query code stay generic over the entry shape
//! - Cross-cutting error types
//! - Aggregate response types such as [`FaqStats`](responses::FaqStats)

pub mod audience;
pub mod entities;
pub mod errors;
pub mod record;
pub mod responses;

pub use audience::Audience;
pub use entities::{ExpandableEntry, FaqEntry, JourneyEntry, UnifiedEntry};
pub use errors::CoreError;
pub use record::{FaqRecord, JourneyRecord};
pub use responses::{FaqStats, ImportCheckResponse, SearchResultsResponse};
