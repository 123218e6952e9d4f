use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

// Re-export backend types for convenience
pub use pdfparse_core::{BackendError, PageText, PdfBackend};

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("file '{}' does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("'{}' is not a file", .0.display())]
    NotAFile(PathBuf),
    #[error("error processing PDF: {0}")]
    Pdf(#[from] BackendError),
    #[error("cannot read '{}' as text: not valid UTF-8 (likely a binary file)", .0.display())]
    Decode(PathBuf),
    #[error("error reading text file: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(not(feature = "pdf"))]
    #[error("PDF support not compiled in (enable the `pdf` feature of pdfparse-ingest)")]
    NoPdfSupport,
}

/// Extract the textual content of a file.
///
/// Dispatches on the (case-insensitive) file extension:
/// - `.pdf` → PDF backend (requires the `pdf` feature)
/// - anything else → read as UTF-8 text
///
/// The returned string may be empty; an empty result is still a success
/// (e.g. a PDF with no extractable text). No content sniffing: a `.txt`
/// file holding PDF bytes is read as text and fails with [`IngestError::Decode`].
pub fn process_file(path: &Path) -> Result<String, IngestError> {
    if !path.exists() {
        return Err(IngestError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(IngestError::NotAFile(path.to_path_buf()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "pdf" => extract_pdf(path),
        _ => read_text_file(path),
    }
}

#[cfg(feature = "pdf")]
fn extract_pdf(path: &Path) -> Result<String, IngestError> {
    let backend = pdfparse_pdf_lopdf::LopdfBackend::new();
    extract_pdf_with(path, &backend)
}

#[cfg(not(feature = "pdf"))]
fn extract_pdf(_path: &Path) -> Result<String, IngestError> {
    Err(IngestError::NoPdfSupport)
}

/// Extract PDF text through an explicit backend.
///
/// Each successfully extracted page contributes a `--- Page N ---` block,
/// in document order. A page that fails to extract is logged and skipped;
/// only open and document-parse failures abort the extraction.
pub fn extract_pdf_with(path: &Path, backend: &dyn PdfBackend) -> Result<String, IngestError> {
    let pages = backend.extract_pages(path)?;

    let mut full_text = String::new();
    for page in pages {
        match page.text {
            Ok(text) => {
                full_text.push_str(&format!("\n--- Page {} ---\n{}\n", page.number, text));
            }
            Err(err) => {
                tracing::warn!(page = page.number, error = %err, "could not extract page text");
            }
        }
    }

    Ok(full_text.trim().to_string())
}

fn read_text_file(path: &Path) -> Result<String, IngestError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == ErrorKind::InvalidData => {
            Err(IngestError::Decode(path.to_path_buf()))
        }
        Err(err) => Err(IngestError::Io(err)),
    }
}
