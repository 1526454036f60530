//! Core library for Indonesian withholding certificate (EBupot) extraction.
//!
//! This crate provides:
//! - Layout classification of certificate text (formats A-F)
//! - Line-scanning field extraction with digit/date descrambling
//! - Certificate record and configuration models
//! - PDF text loading (behind the `pdf` feature)

pub mod certificate;
pub mod error;
pub mod models;
#[cfg(feature = "pdf")]
pub mod pdf;

pub use certificate::{
    EbupotParser, ExtractionResult, LineAutomaton, classify, extract, extract_with_code,
};
pub use error::{EbupotError, PdfError, Result};
pub use models::config::{EbupotConfig, ExtractionConfig, OutputConfig, PdfConfig};
pub use models::record::{DocumentReference, ExtractedRecord, FormatTag};
#[cfg(feature = "pdf")]
pub use pdf::{PdfContent, PdfExtractor, PdfProcessor, PdfType};
