//! Crate error type
//!
//! A single evaluation either succeeds deterministically or fails validation;
//! there is no retry logic. Errors fall in two categories:
//!
//! - [`EvaluationError::InvalidParameter`]: an instrument parameter outside
//!   its documented domain, a non-finite input, or a derived quantity that
//!   would poison downstream records (NaN, infinity, non-positive width).
//! - [`EvaluationError::InvalidReferenceTable`]: a component table that
//!   cannot be evaluated (empty, duplicate names, non-positive base times).
//!
//! The model never propagates NaN or infinity into output records: any such
//! value is caught at the boundary and surfaced here instead.

use thiserror::Error;

/// Errors reported by the separation model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    /// An input or derived parameter is outside its valid domain.
    #[error("invalid parameter `{name}`: {value} (expected {expected})")]
    InvalidParameter {
        /// Parameter name (e.g. `"flow"`, `"width"`).
        name: &'static str,
        /// The offending value.
        value: f64,
        /// Human-readable description of the valid domain.
        expected: &'static str,
    },

    /// The component reference table cannot be evaluated.
    #[error("invalid reference table: {reason}")]
    InvalidReferenceTable {
        /// What is wrong with the table.
        reason: String,
    },
}

impl EvaluationError {
    /// Shorthand used throughout the crate for domain violations.
    pub(crate) fn parameter(name: &'static str, value: f64, expected: &'static str) -> Self {
        Self::InvalidParameter { name, value, expected }
    }

    /// Shorthand for table violations.
    pub(crate) fn table(reason: impl Into<String>) -> Self {
        Self::InvalidReferenceTable { reason: reason.into() }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
