//! PDF text extraction using lopdf and pdf-extract.

use lopdf::{Dictionary, Document, Object, ObjectId};
use tracing::{debug, info, warn};

use super::{PdfProcessor, PdfType, Result};
use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// Share of image-only pages above which a document counts as scanned.
const SCANNED_PAGE_RATIO: f64 = 0.8;

/// PDF text extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
    min_text_length: usize,
    decrypt_empty_password: bool,
}

/// Extracted content from a PDF.
#[derive(Debug, Clone)]
pub struct PdfContent {
    /// Type of PDF content.
    pub pdf_type: PdfType,
    /// Extracted text (empty for scanned documents).
    pub text: String,
    /// Number of pages.
    pub page_count: u32,
}

impl PdfExtractor {
    /// Create a new PDF extractor with default settings.
    pub fn new() -> Self {
        Self::from_config(&PdfConfig::default())
    }

    /// Create a PDF extractor from configuration.
    pub fn from_config(config: &PdfConfig) -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
            min_text_length: config.min_text_length,
            decrypt_empty_password: config.decrypt_empty_password,
        }
    }

    /// Classify the loaded document and extract its text.
    pub fn extract_all(&self) -> Result<PdfContent> {
        let doc = self
            .document
            .as_ref()
            .ok_or(PdfError::Parse("No document loaded".to_string()))?;

        let page_count = doc.get_pages().len() as u32;
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        if self.looks_scanned(doc) {
            info!("PDF structural check: likely scanned / image-only");
            return Ok(PdfContent {
                pdf_type: PdfType::Scanned,
                text: String::new(),
                page_count,
            });
        }

        let text = self.extract_text()?;
        let pdf_type = self.classify_text(&text);

        debug!(
            "PDF analysis: {} pages, {} chars text -> {:?}",
            page_count,
            text.len(),
            pdf_type
        );

        Ok(PdfContent {
            pdf_type,
            text,
            page_count,
        })
    }

    fn classify_text(&self, text: &str) -> PdfType {
        let meaningful = text.chars().filter(|c| !c.is_whitespace()).count();
        if meaningful >= self.min_text_length {
            PdfType::Text
        } else {
            debug!(chars = meaningful, "Extracted text too short");
            PdfType::Empty
        }
    }

    /// A page with image XObjects but no fonts is a scanned page.
    fn looks_scanned(&self, doc: &Document) -> bool {
        let pages = doc.get_pages();
        if pages.is_empty() {
            return false;
        }

        let image_only = pages
            .values()
            .filter(|page_id| {
                let Some(resources) = self.get_page_resources(doc, **page_id) else {
                    return false;
                };
                let has_fonts = non_empty_entry(doc, &resources, b"Font");
                let has_images = non_empty_entry(doc, &resources, b"XObject");
                has_images && !has_fonts
            })
            .count();

        let ratio = image_only as f64 / pages.len() as f64;
        debug!(
            total_pages = pages.len(),
            image_only,
            ratio = format!("{ratio:.2}"),
            "Scanned-page analysis"
        );

        ratio >= SCANNED_PAGE_RATIO
    }

    /// Get resources dictionary for a page, handling inheritance
    fn get_page_resources(&self, doc: &Document, page_id: ObjectId) -> Option<Dictionary> {
        let page = doc.get_object(page_id).ok()?;
        if let Object::Dictionary(dict) = page {
            // First check if Resources is directly on the page
            if let Ok(resources) = dict.get(b"Resources") {
                if let Ok((_, Object::Dictionary(res_dict))) = doc.dereference(resources) {
                    return Some(res_dict.clone());
                }
            }

            // Check parent for inherited Resources
            if let Ok(Object::Reference(parent_id)) = dict.get(b"Parent") {
                return self.get_inherited_resources(doc, *parent_id);
            }
        }
        None
    }

    fn get_inherited_resources(&self, doc: &Document, node_id: ObjectId) -> Option<Dictionary> {
        let node = doc.get_object(node_id).ok()?;
        if let Object::Dictionary(dict) = node {
            if let Ok(resources) = dict.get(b"Resources") {
                if let Ok((_, Object::Dictionary(res_dict))) = doc.dereference(resources) {
                    return Some(res_dict.clone());
                }
            }

            // Continue up the tree
            if let Ok(Object::Reference(parent_id)) = dict.get(b"Parent") {
                return self.get_inherited_resources(doc, *parent_id);
            }
        }
        None
    }
}

fn non_empty_entry(doc: &Document, resources: &Dictionary, key: &[u8]) -> bool {
    resources
        .get(key)
        .ok()
        .and_then(|entry| doc.dereference(entry).ok())
        .and_then(|(_, resolved)| resolved.as_dict().ok())
        .is_some_and(|dict| !dict.is_empty())
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        if doc.is_encrypted() {
            if !self.decrypt_empty_password {
                return Err(PdfError::Encrypted);
            }
            if doc.decrypt("").is_err() {
                warn!("Encrypted PDF could not be opened with the empty password");
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract reads the raw bytes, so hand it the decrypted copy
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn analyze(&self) -> PdfType {
        match self.extract_all() {
            Ok(content) => content.pdf_type,
            Err(e) => {
                debug!("PDF analysis failed: {}", e);
                PdfType::Empty
            }
        }
    }

    fn extract_text(&self) -> Result<String> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }
        pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{Stream, dictionary};

    /// Single-page PDF whose only resource is an image XObject.
    fn scanned_pdf() -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let image_id = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => 1,
                "Height" => 1,
                "ColorSpace" => "DeviceGray",
                "BitsPerComponent" => 8,
            },
            vec![0u8],
        ));
        let resources_id = doc.add_object(dictionary! {
            "XObject" => dictionary! { "Im0" => image_id },
        });
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            b"q 595 0 0 842 0 0 cm /Im0 Do Q".to_vec(),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut data = Vec::new();
        doc.save_to(&mut data).unwrap();
        data
    }

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
        assert_eq!(extractor.min_text_length, 50);
    }

    #[test]
    fn test_extract_without_document() {
        let extractor = PdfExtractor::new();
        assert!(matches!(extractor.extract_text(), Err(PdfError::Parse(_))));
        assert!(matches!(extractor.extract_all(), Err(PdfError::Parse(_))));
        assert_eq!(extractor.analyze(), PdfType::Empty);
    }

    #[test]
    fn test_load_rejects_garbage() {
        let mut extractor = PdfExtractor::new();
        let result = extractor.load(b"definitely not a pdf");
        assert!(matches!(result, Err(PdfError::Parse(_))));
    }

    #[test]
    fn test_inherited_image_resources_mark_scanned() {
        let mut extractor = PdfExtractor::new();
        extractor.load(&scanned_pdf()).unwrap();

        assert_eq!(extractor.page_count(), 1);

        let content = extractor.extract_all().unwrap();
        assert_eq!(content.pdf_type, PdfType::Scanned);
        assert!(content.text.is_empty());
        assert_eq!(content.page_count, 1);
    }

    #[test]
    fn test_text_threshold() {
        let extractor = PdfExtractor::from_config(&PdfConfig {
            min_text_length: 5,
            decrypt_empty_password: false,
        });

        assert_eq!(extractor.classify_text("FORMULIR BPBS"), PdfType::Text);
        assert_eq!(extractor.classify_text(" a \n b "), PdfType::Empty);
    }
}
