//! Error types for Vitrine

use thiserror::Error;

/// Main error type for Vitrine operations
#[derive(Error, Debug)]
pub enum VitrineError {
    /// Content file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content file could not be parsed
    #[error("Content parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Content failed structural validation
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    /// Gallery image index outside the gallery
    #[error("No gallery image at index {0}")]
    ImageIndex(usize),

    /// Gallery image file missing or unreadable
    #[error("Image not readable: {0}")]
    ImageUnreadable(String),
}

/// Result type alias using VitrineError
pub type VitrineResult<T> = Result<T, VitrineError>;
