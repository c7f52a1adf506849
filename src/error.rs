//! Dashboard error types
//!
//! Nothing here is fatal to the page: callers degrade to the last-known
//! snapshot or an empty panel instead of surfacing these to the viewer.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while producing dashboard data
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The snapshot source could not produce a snapshot
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// A single time-series point failed validation
    #[error("Malformed point at index {index}: {reason}")]
    MalformedPoint { index: usize, reason: String },

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::DataUnavailable(format!("invalid snapshot document: {}", err))
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::DataUnavailable("source offline".to_string());
        assert_eq!(err.to_string(), "Data unavailable: source offline");

        let err = DashboardError::MalformedPoint {
            index: 4,
            reason: "missing label".to_string(),
        };
        assert_eq!(err.to_string(), "Malformed point at index 4: missing label");
    }

    #[test]
    fn test_config_error_conversion() {
        let config_err = crate::config::Config::from_toml_str("[theme]\nmode = 3").unwrap_err();
        let err: DashboardError = config_err.into();
        assert!(matches!(err, DashboardError::Config(_)));
        assert!(err.to_string().starts_with("Configuration error: Failed to parse config"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: DashboardError = json_err.into();
        assert!(matches!(err, DashboardError::DataUnavailable(_)));
    }
}
