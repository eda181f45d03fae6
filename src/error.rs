//! Error types for the ruling extraction library.
//!
//! The painting and path callbacks never fail; these errors only surface at the
//! edges where a caller builds inputs (page geometry, configuration, raw operators).

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while preparing ruling extraction inputs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Page geometry that cannot be mapped into page space
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Operator name not part of the path, clipping or painting subset
    #[error("Unknown operator: '{0}'")]
    UnknownOperator(String),

    /// Wrong number of operands for a known operator
    #[error("Operator '{operator}' requires {expected} operands, got {found}")]
    InvalidOperands {
        /// Operator name as it appears in the content stream
        operator: String,
        /// Number of operands the operator takes
        expected: usize,
        /// Number of operands supplied
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_geometry_error() {
        let err = Error::InvalidGeometry("crop box x0 is NaN".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid page geometry"));
        assert!(msg.contains("NaN"));
    }

    #[test]
    fn test_invalid_operands_error() {
        let err = Error::InvalidOperands {
            operator: "re".to_string(),
            expected: 4,
            found: 3,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("'re'"));
        assert!(msg.contains("requires 4"));
        assert!(msg.contains("got 3"));
    }

    #[test]
    fn test_unknown_operator_error() {
        let err = Error::UnknownOperator("Tj".to_string());
        assert_eq!(format!("{}", err), "Unknown operator: 'Tj'");
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
