//! WASM bindings for Bukti Pemotongan (EBupot) extraction.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.
//! Text must already be extracted from the certificate on the JS side.

use wasm_bindgen::prelude::*;

use ebupot_core::{EbupotParser, ExtractionResult, FormatTag};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Detect the certificate layout; returns one of `A`-`F`, `U`, `Z`.
#[wasm_bindgen]
pub fn classify(text: &str) -> String {
    ebupot_core::classify(text).to_string()
}

/// Extract the record for a layout code, as returned by [`classify`].
///
/// Codes other than `A`-`F` give the empty record.
#[wasm_bindgen]
pub fn extract(text: &str, tag: &str) -> Result<JsValue, JsValue> {
    let record = ebupot_core::extract_with_code(text, tag);
    serde_wasm_bindgen::to_value(&record).map_err(to_js_error)
}

/// Classify and extract in one call, with warnings and timing.
#[wasm_bindgen]
pub fn parse(text: &str) -> Result<JsValue, JsValue> {
    let result = EbupotParser::new().parse(text);
    serde_wasm_bindgen::to_value(&result).map_err(to_js_error)
}

/// Certificate extractor class for browser use.
#[wasm_bindgen]
pub struct EbupotExtractor {
    parser: EbupotParser,
    log_warnings: bool,
}

#[wasm_bindgen]
impl EbupotExtractor {
    /// Create a new certificate extractor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: EbupotParser::new(),
            log_warnings: false,
        }
    }

    /// Force a layout code, or pass `undefined` to classify again.
    #[wasm_bindgen]
    pub fn set_forced_format(&mut self, code: Option<String>) -> Result<(), JsValue> {
        let format = code
            .map(|c| c.parse::<FormatTag>())
            .transpose()
            .map_err(to_js_error)?;
        self.parser = self.parser.clone().with_forced_format(format);
        Ok(())
    }

    /// Configure missing-field warnings.
    #[wasm_bindgen]
    pub fn set_report_missing_fields(&mut self, report: bool) {
        self.parser = self.parser.clone().with_missing_field_report(report);
    }

    /// Echo extraction warnings to the browser console.
    #[wasm_bindgen]
    pub fn set_log_warnings(&mut self, log: bool) {
        self.log_warnings = log;
    }

    fn run(&self, text: &str) -> ExtractionResult {
        let result = self.parser.parse(text);
        if self.log_warnings {
            for warning in &result.warnings {
                web_sys::console::warn_1(&JsValue::from_str(warning));
            }
        }
        result
    }

    /// Extract the certificate record from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self.run(text);
        serde_wasm_bindgen::to_value(&result.record).map_err(to_js_error)
    }

    /// Get extraction result with format, warnings and timing.
    #[wasm_bindgen]
    pub fn extract_with_metadata(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self.run(text);
        serde_wasm_bindgen::to_value(&result).map_err(to_js_error)
    }

    /// Extraction result serialized as a JSON string.
    #[wasm_bindgen]
    pub fn extract_json(&self, text: &str) -> Result<String, JsValue> {
        let result = self.run(text);
        serde_json::to_string(&result).map_err(to_js_error)
    }
}

impl Default for EbupotExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const FORMAT_F: &str = "UNIFIKASI BERFORMAT STANDAR\nPEMUNGUTAN PPh\nPEMUNGUTAN\nBPU24-A1B2C3D\nB.4B.5B.6B.7\nMasa 03-2024\nC.1NPWP / NIK:012345678901234";

    #[wasm_bindgen_test]
    fn test_classify() {
        assert_eq!(classify(FORMAT_F), "F");
        assert_eq!(classify(""), "Z");
        assert_eq!(classify("hello"), "U");
    }

    #[wasm_bindgen_test]
    fn test_extract_unknown_code_is_empty() {
        assert!(extract(FORMAT_F, "F").is_ok());
        assert!(extract(FORMAT_F, "X").is_ok());
        assert!(extract(FORMAT_F, "f").is_ok());

        let record = ebupot_core::extract_with_code(FORMAT_F, "f");
        assert_eq!(record, ebupot_core::ExtractedRecord::empty());
    }

    #[wasm_bindgen_test]
    fn test_extractor_json() {
        let mut extractor = EbupotExtractor::new();
        extractor.set_report_missing_fields(false);

        let json = extractor.extract_json(FORMAT_F).unwrap();
        assert!(json.contains("\"format\":\"F\""));
        assert!(json.contains("\"b2\":\"03-2024\""));
        assert!(json.contains("\"warnings\":[]"));
    }

    #[wasm_bindgen_test]
    fn test_forced_format() {
        let mut extractor = EbupotExtractor::new();
        extractor.set_forced_format(Some("z".to_string())).unwrap();

        let json = extractor.extract_json(FORMAT_F).unwrap();
        assert!(json.contains("\"format\":\"Z\""));
        assert!(extractor.set_forced_format(Some("nope".to_string())).is_err());
    }
}
