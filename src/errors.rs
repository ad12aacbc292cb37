// Copyright 2025 Cowboy AI, LLC.

//! Error types for composition operations
//!
//! The engine itself degrades to empty results instead of failing; errors
//! here cover raw-name resolution, out-of-range values and catalog source
//! failures propagated through the cache.

use thiserror::Error;

/// Errors that can occur while preparing composition inputs
#[derive(Debug, Clone, Error)]
pub enum CompositionError {
    /// A raw factor name could not be resolved to an enumeration member
    #[error("Unknown {kind} name: '{name}'")]
    UnknownFactorName {
        /// Enumeration the name was resolved against
        kind: &'static str,
        /// The unresolvable raw name
        name: String,
    },

    /// An integer value is outside the valid range for an enumeration
    #[error("Invalid {kind} value: {value}")]
    InvalidValue {
        /// Enumeration the value was resolved against
        kind: &'static str,
        /// The out-of-range value
        value: String,
    },

    /// The catalog source failed to produce a snapshot
    #[error("Catalog source error: {0}")]
    Source(String),
}

/// Result type for composition operations
pub type CompositionResult<T> = Result<T, CompositionError>;

impl CompositionError {
    /// Create a catalog source error
    pub fn source(msg: impl Into<String>) -> Self {
        CompositionError::Source(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CompositionError::UnknownFactorName {
            kind: "SoilType",
            name: "volcanic".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown SoilType name: 'volcanic'");

        let err = CompositionError::InvalidValue {
            kind: "UsdaZone",
            value: "12".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid UsdaZone value: 12");

        let err = CompositionError::source("connection reset");
        assert_eq!(err.to_string(), "Catalog source error: connection reset");
    }
}
