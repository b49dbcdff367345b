// Resume analysis engine
// Implements: JD keyword extraction, resume tokenization, scoring, suggestions,
// and the upload endpoint that runs them in sequence.
// All NLP calls go through the injected `Annotator`; no direct service calls here.

use serde::{Deserialize, Serialize};

pub mod handlers;
pub mod job_keywords;
pub mod scoring;
pub mod suggestions;
pub mod tokenizer;
pub mod upload;

/// Keywords grouped by category. Job keywords are sorted and duplicate-free;
/// matched/missing sets reuse the same shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordSet {
    pub skills: Vec<String>,
    pub responsibilities: Vec<String>,
}

impl KeywordSet {
    pub fn len(&self) -> usize {
        self.skills.len() + self.responsibilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
