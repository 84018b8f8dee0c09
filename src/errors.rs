//! Error types for vector parsing and component access.
//!
//! This module provides [`VectorError`], the unified error type for the failure
//! modes this crate can report: malformed numeric fields inside a delimited
//! vector string, a delimited string with too few fields, and out-of-range
//! component indices.
//!
//! Note what is *not* an error: a string that lacks the configured delimiters
//! entirely is treated as the absence of a vector, not a failure. The strict
//! parser returns `Ok(None)` for that case and the lenient constructor falls
//! back to the zero vector. Only the failures below surface as `Err`.
//!
//! # Usage
//!
//! Fallible functions return [`VectorResult<T>`], which is
//! `Result<T, VectorError>`. Use the constructor methods for consistent error
//! creation:
//!
//! ```
//! use spatial_core::VectorError;
//!
//! let err = VectorError::invalid_component("x2");
//! assert!(err.to_string().contains("'x2'"));
//! ```

use thiserror::Error;

/// Unified error type for vector operations.
///
/// Covers numeric-field parse failures, field-count mismatches, and checked
/// component access. Use the constructor methods
/// ([`invalid_component`](Self::invalid_component),
/// [`component_count`](Self::component_count),
/// [`index_out_of_bounds`](Self::index_out_of_bounds)) for consistent
/// error creation.
#[derive(Error, Debug)]
pub enum VectorError {
    /// A field inside a delimited vector string is not a valid integer
    /// literal. Carries the offending substring.
    #[error("invalid vector component '{component}': not an integer literal")]
    InvalidComponent { component: String },

    /// A delimited vector string held fewer than three fields.
    #[error("expected 3 vector components, found {found}")]
    ComponentCount { found: usize },

    /// Checked component access outside the valid 0-2 range.
    #[error("component index {index} out of bounds (valid range: 0-2)")]
    IndexOutOfBounds { index: usize },
}

/// Convenience alias for `Result<T, VectorError>`.
pub type VectorResult<T> = Result<T, VectorError>;

impl VectorError {
    /// Creates an [`InvalidComponent`](Self::InvalidComponent) error for the
    /// given field text.
    pub fn invalid_component(component: &str) -> Self {
        Self::InvalidComponent {
            component: component.to_string(),
        }
    }

    /// Creates a [`ComponentCount`](Self::ComponentCount) error.
    pub fn component_count(found: usize) -> Self {
        Self::ComponentCount { found }
    }

    /// Creates an [`IndexOutOfBounds`](Self::IndexOutOfBounds) error.
    pub fn index_out_of_bounds(index: usize) -> Self {
        Self::IndexOutOfBounds { index }
    }

    /// Returns `true` if correcting the input and retrying might succeed.
    ///
    /// Parse failures are recoverable (the caller can fix the text and parse
    /// again). An out-of-bounds index is a caller bug, not recoverable input.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidComponent { .. } => true,
            Self::ComponentCount { .. } => true,
            Self::IndexOutOfBounds { .. } => false,
        }
    }
}
