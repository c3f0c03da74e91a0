//! Page-by-page PDF text extraction backed by lopdf.

use lopdf::Document;

use super::ExtractError;

pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extracts every page and joins them in page order with no separator.
    ///
    /// Fails as a whole if the document cannot be loaded or any single page fails;
    /// partial text is never returned.
    pub fn extract_text(&self, content: &[u8]) -> Result<String, ExtractError> {
        Ok(self.extract_pages(content)?.concat())
    }

    /// Text of each page, ordered by page number.
    pub fn extract_pages(&self, content: &[u8]) -> Result<Vec<String>, ExtractError> {
        let document = Document::load_mem(content).map_err(|e| {
            log::error!("Error while reading input PDF file: {}", e);
            ExtractError::Extraction(e.to_string())
        })?;

        // BTreeMap keyed by page number, so iteration follows document order.
        let pages = document.get_pages();
        let mut texts = Vec::with_capacity(pages.len());

        for page_number in pages.keys() {
            let text = document.extract_text(&[*page_number]).map_err(|e| {
                log::error!("Error while reading page {} of input PDF file: {}", page_number, e);
                ExtractError::Extraction(format!("page {}: {}", page_number, e))
            })?;
            texts.push(text);
        }

        log::debug!("Read {} pages from input PDF file", texts.len());
        Ok(texts)
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}
