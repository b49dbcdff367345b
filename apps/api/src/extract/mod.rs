//! Resume text extraction: decodes an uploaded document into raw text.
//!
//! The format is resolved once from the filename into a closed `DocumentFormat`,
//! and each variant is handled by one `TextExtractor`.

use std::path::Path;

use thiserror::Error;

pub mod docx;
pub mod pdf;

pub use self::docx::DocxExtractor;
pub use self::pdf::PdfExtractor;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Unsupported file format. Please upload a .txt, .docx, or .pdf file.")]
    UnsupportedFormat,

    #[error("Error reading file: {0}")]
    Unreadable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    PlainText,
    Word,
    Pdf,
}

impl DocumentFormat {
    /// Resolves the format from the file extension, ignoring case.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = Path::new(filename).extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "txt" => Some(DocumentFormat::PlainText),
            "docx" => Some(DocumentFormat::Word),
            "pdf" => Some(DocumentFormat::Pdf),
            _ => None,
        }
    }

    fn extractor(self) -> &'static dyn TextExtractor {
        match self {
            DocumentFormat::PlainText => &PlainTextExtractor,
            DocumentFormat::Word => &DocxExtractor,
            DocumentFormat::Pdf => &PdfExtractor,
        }
    }
}

pub trait TextExtractor: Send + Sync {
    fn extract(&self, data: &[u8]) -> Result<String, DecodeError>;
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, data: &[u8]) -> Result<String, DecodeError> {
        std::str::from_utf8(data)
            .map(str::to_owned)
            .map_err(|e| DecodeError::Unreadable(e.to_string()))
    }
}

/// Extracts raw text from an uploaded document. CPU-bound for PDF and Word
/// inputs; callers on the async runtime should use `spawn_blocking`.
pub fn extract_text(filename: &str, data: &[u8]) -> Result<String, DecodeError> {
    let format = DocumentFormat::from_filename(filename).ok_or(DecodeError::UnsupportedFormat)?;
    format.extractor().extract(data)
}
