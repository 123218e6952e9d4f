use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    Open(String),
    #[error("failed to parse PDF: {0}")]
    Parse(String),
    #[error("failed to extract text: {0}")]
    Extraction(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extraction outcome for a single page.
///
/// Pages are numbered from 1 in document order. A page whose content
/// stream could not be decoded carries its own error so that one bad
/// page does not lose the rest of the document.
#[derive(Debug)]
pub struct PageText {
    pub number: u32,
    pub text: Result<String, BackendError>,
}

/// Trait for PDF text extraction backends.
///
/// Implementors provide the low-level per-page text extraction step;
/// dispatch and output assembly live in `pdfparse_ingest`.
pub trait PdfBackend: Send + Sync {
    /// Parse the document at `path` and extract text from every page,
    /// in document order.
    ///
    /// The outer `Err` covers open and document-parse failures; per-page
    /// failures are reported inside the returned [`PageText`] entries.
    fn extract_pages(&self, path: &Path) -> Result<Vec<PageText>, BackendError>;
}
