//! Dashboard error types

use thiserror::Error;

/// Errors that can occur while mounting or rendering the dashboard
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The host does not provide the requested mount anchor
    #[error("Mount anchor not found: {0}")]
    MountNotFound(String),

    /// The chart rendering library failed
    #[error("Render error: {0}")]
    Render(String),

    /// Reading configuration or writing an export failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for DashboardError {
    fn from(err: toml::de::Error) -> Self {
        DashboardError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Serialization(err.to_string())
    }
}

impl From<image::ImageError> for DashboardError {
    fn from(err: image::ImageError) -> Self {
        DashboardError::Render(err.to_string())
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
