mod document;
mod translator;

pub use document::DocumentService;
pub use translator::TranslatorService;
