//! Error types for the cardstmt-core library.

use thiserror::Error;

/// Main error type for the cardstmt library.
#[derive(Error, Debug)]
pub enum CardstmtError {
    /// Statement extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to statement field extraction.
///
/// A rule that fails to match is never an error: the field is simply
/// absent from the record. The only fatal case for a single document is
/// text that could not be obtained at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The statement text could not be obtained from the source document.
    #[error("could not read statement text: {0}")]
    InputUnreadable(String),
}

/// Result type for the cardstmt library.
pub type Result<T> = std::result::Result<T, CardstmtError>;
