//! Cross-cutting error types for boardmap.
//!
//! HTTP and configuration failures live in their own crates; this module
//! only covers problems detected while interpreting already-fetched data.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Lookup over fetched records returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A value failed validation (unknown label, malformed field).
    #[error("Validation error: {0}")]
    Validation(String),
}
