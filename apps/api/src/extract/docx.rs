//! Word (.docx) extraction using docx-rs.

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use crate::extract::{DecodeError, TextExtractor};

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    /// Body paragraphs joined with newlines. Tables and other blocks are skipped.
    fn extract(&self, data: &[u8]) -> Result<String, DecodeError> {
        let docx = read_docx(data).map_err(|e| DecodeError::Unreadable(e.to_string()))?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(para) => Some(
                    para.children
                        .iter()
                        .filter_map(|c| match c {
                            ParagraphChild::Run(run) => Some(run),
                            _ => None,
                        })
                        .flat_map(|run| run.children.iter())
                        .filter_map(|rc| match rc {
                            RunChild::Text(text) => Some(text.text.as_str()),
                            _ => None,
                        })
                        .collect::<String>(),
                ),
                _ => None,
            })
            .collect();

        Ok(paragraphs.join("\n"))
    }
}
