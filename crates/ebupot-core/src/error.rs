//! Error types for the ebupot-core library.
//!
//! Classification and extraction never fail; these errors only surface at
//! the edges (tag codes, configuration files, PDF loading).

use thiserror::Error;

/// Main error type for the ebupot library.
#[derive(Error, Debug)]
pub enum EbupotError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A format code outside the known tag set.
    #[error("unknown certificate format code: {0:?}")]
    UnknownFormat(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

impl From<serde_json::Error> for EbupotError {
    fn from(err: serde_json::Error) -> Self {
        EbupotError::Config(err.to_string())
    }
}

/// Result type for the ebupot library.
pub type Result<T> = std::result::Result<T, EbupotError>;
