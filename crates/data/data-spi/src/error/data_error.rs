//! Data error types.

use thiserror::Error;

/// Series source and export errors.
#[derive(Debug, Clone, Error)]
pub enum DataError {
    /// File could not be opened or created
    #[error("Cannot open file '{path}': {reason}")]
    FileOpen { path: String, reason: String },

    /// Malformed delimited text
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Header row has no column with the requested name
    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    /// Source produced no samples
    #[error("No data returned")]
    NoData,

    /// Writing exported rows failed
    #[error("Write error: {0}")]
    WriteError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

impl From<csv::Error> for DataError {
    fn from(error: csv::Error) -> Self {
        DataError::ParseError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_open_error() {
        let error = DataError::FileOpen {
            path: "missing.csv".to_string(),
            reason: "No such file or directory".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot open file 'missing.csv': No such file or directory"
        );
    }

    #[test]
    fn test_column_not_found_error() {
        let error = DataError::ColumnNotFound("capacity_factor".to_string());
        assert_eq!(error.to_string(), "Column 'capacity_factor' not found");
    }

    #[test]
    fn test_no_data_error() {
        assert_eq!(DataError::NoData.to_string(), "No data returned");
    }

    #[test]
    fn test_write_and_config_errors() {
        assert_eq!(
            DataError::WriteError("disk full".to_string()).to_string(),
            "Write error: disk full"
        );
        assert_eq!(
            DataError::ConfigError("hours must be positive".to_string()).to_string(),
            "Configuration error: hours must be positive"
        );
    }

    #[test]
    fn test_error_clone() {
        let error = DataError::ParseError("bad quote".to_string());
        let cloned = error.clone();
        assert_eq!(error.to_string(), cloned.to_string());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DataError>();
    }
}
