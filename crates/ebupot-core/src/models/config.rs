//! Configuration structures for the extraction pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::record::FormatTag;

/// Main configuration for the ebupot pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EbupotConfig {
    /// PDF text loading configuration.
    pub pdf: PdfConfig,

    /// Certificate extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output rendering configuration.
    pub output: OutputConfig,
}

/// PDF text loading configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Minimum non-whitespace characters to treat a PDF as text-based.
    pub min_text_length: usize,

    /// Retry encrypted documents with the empty user password.
    pub decrypt_empty_password: bool,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            min_text_length: 50,
            decrypt_empty_password: true,
        }
    }
}

/// Certificate extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Skip classification and always use this layout.
    pub forced_format: Option<FormatTag>,

    /// Report empty required fields as warnings.
    pub report_missing_fields: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            forced_format: None,
            report_missing_fields: true,
        }
    }
}

/// Output rendering configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Indent JSON output.
    pub pretty_json: bool,
}

impl EbupotConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
