//! Error types for the sales-forecast library.

use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while preparing, forecasting or serving sales data.
///
/// The linear forecaster itself never fails; these cover the layers around
/// it (record loading, aggregation, request validation, configuration).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Month ordering error.
    #[error("timestamp error: {0}")]
    TimestampError(String),

    /// A month key that is not of the form `YYYY-MM`.
    #[error("invalid month key: {0:?}")]
    InvalidMonth(String),

    /// Model has not been fitted yet.
    #[error("model must be fitted before prediction")]
    FitRequired,

    /// NaN or infinite value in a request series.
    #[error("non-finite value at index {index}")]
    NonFiniteValue { index: usize },

    /// Reading or writing a file failed.
    #[error("io error: {0}")]
    Io(String),

    /// Malformed JSON input.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<std::io::Error> for ForecastError {
    fn from(err: std::io::Error) -> Self {
        ForecastError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        let err = ForecastError::EmptyData;
        assert_eq!(err.to_string(), "empty input data");

        let err = ForecastError::DimensionMismatch {
            expected: 3,
            got: 2,
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected 3, got 2");

        let err = ForecastError::InvalidParameter("horizon must be positive".to_string());
        assert_eq!(err.to_string(), "invalid parameter: horizon must be positive");

        let err = ForecastError::InvalidMonth("2024-13".to_string());
        assert_eq!(err.to_string(), "invalid month key: \"2024-13\"");

        let err = ForecastError::NonFiniteValue { index: 4 };
        assert_eq!(err.to_string(), "non-finite value at index 4");

        let err = ForecastError::FitRequired;
        assert_eq!(err.to_string(), "model must be fitted before prediction");
    }

    #[test]
    fn errors_are_clonable_and_comparable() {
        let err1 = ForecastError::EmptyData;
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }

    #[test]
    fn foreign_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        assert!(matches!(
            ForecastError::from(io),
            ForecastError::Io(msg) if msg.contains("missing.json")
        ));

        let json = serde_json::from_str::<Vec<f64>>("[1,").unwrap_err();
        assert!(matches!(ForecastError::from(json), ForecastError::Parse(_)));
    }
}
