use thiserror::Error;

/// Everything that can go wrong around the catalog
///
/// The filtering core itself never fails. These variants cover the edges:
/// loading data and config, writing exports, and talking to the outside
/// world when sharing.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Dataset error: {0}")]
    DatasetError(String),

    #[error("Activity not found: {0}")]
    NotFound(String),

    #[error("Export failed: {0}")]
    ExportError(String),

    #[error("Share sheet unavailable: {0}")]
    ShareError(String),

    #[error("Clipboard write failed: {0}")]
    ClipboardError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
