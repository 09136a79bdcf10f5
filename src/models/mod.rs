//! Wire records exchanged with the backend.

mod document;
mod page;
mod translator;
mod upload;

pub use document::{Document, DocumentAllFields, DocumentFilter};
pub use page::{Page, PageMetadata};
pub use translator::{Translator, TranslatorFields, TranslatorFilter};
pub use upload::{UploadFile, UPLOAD_FIELD};

/// Trimmed value, or `None` when blank.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
