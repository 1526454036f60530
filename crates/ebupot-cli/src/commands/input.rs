//! Loading certificate text from PDF or plain-text files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use ebupot_core::models::config::EbupotConfig;
use ebupot_core::pdf::{PdfExtractor, PdfProcessor, PdfType};

/// File extensions accepted as certificate input.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "txt"];

/// Lower-cased extension of `path`, or an empty string.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Whether `path` has an extension this tool can read.
pub fn is_supported(path: &Path) -> bool {
    SUPPORTED_EXTENSIONS.contains(&extension_of(path).as_str())
}

/// Read the certificate text of `path`.
pub fn load_text(path: &Path, config: &EbupotConfig) -> anyhow::Result<String> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    let extension = extension_of(path);
    info!("Loading certificate text from {}", path.display());

    match extension.as_str() {
        "pdf" => load_pdf_text(path, config),
        "txt" => Ok(fs::read_to_string(path)?),
        _ => anyhow::bail!("Unsupported file format: {}", extension),
    }
}

fn load_pdf_text(path: &Path, config: &EbupotConfig) -> anyhow::Result<String> {
    let data = fs::read(path)?;
    let mut extractor = PdfExtractor::from_config(&config.pdf);
    extractor.load(&data)?;

    let content = extractor.extract_all()?;
    debug!(
        "PDF has {} pages, type {:?}",
        content.page_count, content.pdf_type
    );

    match content.pdf_type {
        PdfType::Text => Ok(content.text),
        PdfType::Scanned => {
            anyhow::bail!("PDF is scanned/image-only; extract its text with OCR first")
        }
        PdfType::Empty => anyhow::bail!("No text could be extracted from the PDF"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported(&PathBuf::from("a/cert.PDF")));
        assert!(is_supported(&PathBuf::from("cert.txt")));
        assert!(!is_supported(&PathBuf::from("cert.png")));
        assert!(!is_supported(&PathBuf::from("cert")));
    }

    #[test]
    fn test_load_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cert.txt");
        fs::write(&path, "FORMULIR BPBS\nH.1").unwrap();

        let text = load_text(&path, &EbupotConfig::default()).unwrap();
        assert_eq!(text, "FORMULIR BPBS\nH.1");
    }

    #[test]
    fn test_load_missing_and_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let config = EbupotConfig::default();

        assert!(load_text(&dir.path().join("missing.txt"), &config).is_err());

        let image = dir.path().join("scan.png");
        fs::write(&image, [0u8; 4]).unwrap();
        let err = load_text(&image, &config).unwrap_err();
        assert!(err.to_string().contains("Unsupported file format"));
    }
}
