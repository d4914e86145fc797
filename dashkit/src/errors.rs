// dashkit/src/errors.rs
//
// Error type shared by the dashboard crates
//

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Chart error: {0}")]
    ChartError(String),

    #[error("Export error: {0}")]
    ExportError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type DashResult<T> = Result<T, DashError>;

impl From<std::io::Error> for DashError {
    fn from(err: std::io::Error) -> Self {
        DashError::TerminalError(err.to_string())
    }
}

impl From<config::ConfigError> for DashError {
    fn from(err: config::ConfigError) -> Self {
        DashError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for DashError {
    fn from(err: serde_json::Error) -> Self {
        DashError::ExportError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_terminal_error() {
        let err: DashError = std::io::Error::new(std::io::ErrorKind::Other, "tty gone").into();
        assert!(matches!(err, DashError::TerminalError(_)));
        assert_eq!(err.to_string(), "Terminal error: tty gone");
    }

    #[test]
    fn test_library_errors_map_to_variants() {
        let err: DashError = config::ConfigError::NotFound("display".to_string()).into();
        assert!(matches!(err, DashError::ConfigError(_)));

        let err: DashError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, DashError::ExportError(_)));
    }

    #[test]
    fn test_chart_error_display() {
        let err = DashError::ChartError("series 'Assigned' has 4 values for 5 labels".to_string());
        assert!(err.to_string().starts_with("Chart error:"));
    }
}
