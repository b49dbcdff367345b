use crate::extract::{DecodeError, TextExtractor};

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, data: &[u8]) -> Result<String, DecodeError> {
        pdf_extract::extract_text_from_mem(data).map_err(|e| DecodeError::Unreadable(e.to_string()))
    }
}
