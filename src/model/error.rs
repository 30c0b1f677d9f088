//! Error types for order construction.

use thiserror::Error;

/// Errors raised while turning catalog data into an [`Order`](crate::model::Order).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// Shelf life must be a positive number of seconds.
    #[error("Invalid shelf life: {0}")]
    InvalidShelfLife(u32),

    /// Decay rate must be finite and non-negative.
    #[error("Invalid decay rate: {0}")]
    InvalidDecayRate(f64),

    /// The temperature tag is not one of hot, cold or frozen.
    #[error("Unknown temperature: {0}")]
    UnknownTemperature(String),
}
