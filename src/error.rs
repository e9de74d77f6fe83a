use thiserror::Error;

/// Main error type for redsettings operations
///
/// Settings construction itself cannot fail; errors arise only when
/// rendering the record to disk.
#[derive(Debug, Error)]
pub enum RedsettingsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for redsettings operations
pub type Result<T> = std::result::Result<T, RedsettingsError>;
