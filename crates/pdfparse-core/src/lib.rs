pub mod backend;

pub use backend::{BackendError, PageText, PdfBackend};
