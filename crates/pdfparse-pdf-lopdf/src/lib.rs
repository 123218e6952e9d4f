use std::path::Path;

use lopdf::Document;

use pdfparse_core::{BackendError, PageText, PdfBackend};

/// lopdf-based implementation of [`PdfBackend`].
///
/// This crate is the only place that names the concrete PDF library, so
/// the rest of the pipeline can swap extraction engines without change.
///
/// Extraction is best effort: a page whose content stream lopdf cannot
/// decode surfaces as a per-page error rather than aborting the whole
/// document.
#[derive(Debug, Default)]
pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for LopdfBackend {
    fn extract_pages(&self, path: &Path) -> Result<Vec<PageText>, BackendError> {
        let bytes = std::fs::read(path).map_err(|e| BackendError::Open(e.to_string()))?;
        let document =
            Document::load_mem(&bytes).map_err(|e| BackendError::Parse(e.to_string()))?;

        // get_pages is keyed by 1-based page number, ordered.
        let mut pages = Vec::new();
        for (number, _object_id) in document.get_pages() {
            let text = document
                .extract_text(&[number])
                .map_err(|e| BackendError::Extraction(e.to_string()));
            pages.push(PageText { number, text });
        }

        Ok(pages)
    }
}
