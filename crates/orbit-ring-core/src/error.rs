//! Validation errors raised by configuration setters.
//!
//! A rejected setter leaves the previous value in place; these errors are
//! informational and never fatal.

use thiserror::Error;

/// Reasons a configuration change was refused.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The ring template cannot be unset.
    #[error("template cannot be null")]
    NullTemplate,

    /// The center object cannot be unset once assigned.
    #[error("center object cannot be null")]
    NullCenterObject,

    /// Item count below zero.
    #[error("count can't be negative: {0}")]
    NegativeCount(i64),

    /// Item count above `MAX_COUNT`.
    #[error("count {count} exceeds maximum {max}")]
    CountTooLarge {
        /// Rejected value.
        count: i64,
        /// Largest accepted count.
        max: usize,
    },

    /// Radius below zero.
    #[error("radius can't be negative: {0}")]
    NegativeRadius(f64),

    /// NaN or infinite value for a float setting.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Setting name.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
}
