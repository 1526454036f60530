//! Classify-then-extract pipeline with data-quality warnings.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::record::{ExtractedRecord, FormatTag};

use super::{classify, extract};

/// Result of certificate extraction.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    /// Layout the record was extracted with.
    pub format: FormatTag,
    /// Extracted fields.
    pub record: ExtractedRecord,
    /// Data-quality warnings; extraction itself never fails.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

impl ExtractionResult {
    /// Whether a known layout was used and no warnings were raised.
    pub fn is_complete(&self) -> bool {
        self.format.is_known() && self.warnings.is_empty()
    }
}

/// Certificate parser combining classification and extraction.
#[derive(Debug, Clone)]
pub struct EbupotParser {
    /// Layout to use instead of classifying.
    forced_format: Option<FormatTag>,
    /// Whether to warn about empty required fields.
    report_missing_fields: bool,
}

impl EbupotParser {
    /// Create a parser that classifies every text.
    pub fn new() -> Self {
        Self {
            forced_format: None,
            report_missing_fields: true,
        }
    }

    /// Create a parser from the extraction section of a configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            forced_format: config.forced_format,
            report_missing_fields: config.report_missing_fields,
        }
    }

    /// Skip classification and always extract with `format`.
    pub fn with_forced_format(mut self, format: Option<FormatTag>) -> Self {
        self.forced_format = format;
        self
    }

    /// Set missing-field reporting.
    pub fn with_missing_field_report(mut self, report: bool) -> Self {
        self.report_missing_fields = report;
        self
    }

    /// Classify `text` (unless a layout is forced) and extract its fields.
    pub fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!("Parsing certificate from {} characters of text", text.len());

        let format = match self.forced_format {
            Some(format) => {
                debug!("Using forced format {}", format);
                format
            }
            None => classify(text),
        };

        let record = extract(text, format);

        match format {
            FormatTag::Unknown => warnings.push("Unrecognized certificate layout".to_string()),
            FormatTag::Empty => warnings.push("Certificate text is empty".to_string()),
            _ => {
                if self.report_missing_fields {
                    warnings.extend(
                        record
                            .missing_fields()
                            .into_iter()
                            .map(|field| format!("Missing field {}", field)),
                    );
                }
                if !record.c1.is_empty() && !record.has_resolved_npwp() {
                    warnings.push(format!("NPWP {:?} is not 15 digits", record.c1));
                }
            }
        }

        debug!(
            "Extracted format {} with {} warnings",
            format,
            warnings.len()
        );

        ExtractionResult {
            format,
            record,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl Default for EbupotParser {
    fn default() -> Self {
        Self::new()
    }
}
