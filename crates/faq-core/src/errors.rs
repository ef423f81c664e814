//! Cross-cutting error types.
//!
//! Query operations never fail: "not found" is an empty collection or `None`.
//! The only failure at this layer is parsing a user-supplied audience key.
//! Content import errors live in `faq-content`.

use thiserror::Error;

/// Errors that can be raised by any FAQ crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An audience key did not match any known audience.
    #[error("Unknown audience: {0}")]
    InvalidAudience(String),
}
