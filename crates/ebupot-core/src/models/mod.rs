//! Data models for extracted certificates and pipeline configuration.

pub mod config;
pub mod record;

pub use config::{EbupotConfig, ExtractionConfig, OutputConfig, PdfConfig};
pub use record::{DocumentReference, ExtractedRecord, FormatTag};
