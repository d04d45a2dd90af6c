//! Domain error types
//!
//! Contract violations detected while constructing or decoding domain values.

use thiserror::Error;

/// Errors raised when a domain value breaks its shape contract
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Event ids must be non-empty
    #[error("Event id must not be empty")]
    EmptyEventId,

    /// Two events in one list share an id
    #[error("Duplicate event id: {0}")]
    DuplicateEventId(String),

    /// A measurement is NaN or infinite
    #[error("Field {field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// Humidity outside 0-100
    #[error("Humidity must be within 0-100, got {0}")]
    HumidityOutOfRange(f64),

    /// An epoch timestamp that chrono cannot represent
    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(i64),
}

/// Result type alias for domain construction
pub type DomainResult<T> = Result<T, DomainError>;
