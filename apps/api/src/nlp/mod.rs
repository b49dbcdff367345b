//! NLP annotation: the token/label model consumed by keyword extraction, and the
//! `Annotator` seam that produces it.
//!
//! Parsing itself is delegated to an external spaCy-backed service (see `client`).
//! `AppState` holds an `Arc<dyn Annotator>`, built once at startup.

use async_trait::async_trait;
use thiserror::Error;

pub mod client;

/// Coarse part-of-speech classes the extractor cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    Propn,
    Verb,
    Other,
}

impl PartOfSpeech {
    /// Maps a Universal POS tag (`token.pos_` in spaCy).
    pub fn from_label(label: &str) -> Self {
        match label {
            "NOUN" => PartOfSpeech::Noun,
            "PROPN" => PartOfSpeech::Propn,
            "VERB" => PartOfSpeech::Verb,
            _ => PartOfSpeech::Other,
        }
    }

    pub fn is_nominal(self) -> bool {
        matches!(self, PartOfSpeech::Noun | PartOfSpeech::Propn)
    }
}

/// Dependency relations the extractor cares about. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyRelation {
    DirectObject,
    PrepObject,
    Attribute,
    Prep,
    AdverbModifier,
    NounModifier,
    Other,
}

impl DependencyRelation {
    /// Maps a ClearNLP-style label (`token.dep_` in spaCy's English models).
    pub fn from_label(label: &str) -> Self {
        match label {
            "dobj" => DependencyRelation::DirectObject,
            "pobj" => DependencyRelation::PrepObject,
            "attr" => DependencyRelation::Attribute,
            "prep" => DependencyRelation::Prep,
            "advmod" => DependencyRelation::AdverbModifier,
            "nmod" => DependencyRelation::NounModifier,
            _ => DependencyRelation::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedToken {
    pub text: String,
    pub pos: PartOfSpeech,
    pub dep: DependencyRelation,
    /// Indices into the owning `AnnotatedDoc`, in document order.
    pub children: Vec<usize>,
}

/// One parsed text. Tokens are stored flat; syntactic children are indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotatedDoc {
    pub tokens: Vec<AnnotatedToken>,
}

impl AnnotatedDoc {
    pub fn new(tokens: Vec<AnnotatedToken>) -> Self {
        Self { tokens }
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnnotatedToken> {
        self.tokens.iter()
    }

    /// Children of `token`. Indices outside the doc are skipped.
    pub fn children<'a>(
        &'a self,
        token: &'a AnnotatedToken,
    ) -> impl Iterator<Item = &'a AnnotatedToken> + 'a {
        token.children.iter().filter_map(|&i| self.tokens.get(i))
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum AnnotatorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Annotator error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Malformed annotation: {0}")]
    Malformed(String),
}

/// Produces an annotated document for a piece of text.
#[async_trait]
pub trait Annotator: Send + Sync {
    async fn annotate(&self, text: &str) -> Result<AnnotatedDoc, AnnotatorError>;
}

#[cfg(test)]
pub mod testing {
    //! Stub annotators for unit and router tests.

    use super::*;

    /// Returns the same document for every input.
    pub struct FixedAnnotator(pub AnnotatedDoc);

    #[async_trait]
    impl Annotator for FixedAnnotator {
        async fn annotate(&self, _text: &str) -> Result<AnnotatedDoc, AnnotatorError> {
            Ok(self.0.clone())
        }
    }

    /// Always fails, as an unreachable annotation service would.
    pub struct FailingAnnotator;

    #[async_trait]
    impl Annotator for FailingAnnotator {
        async fn annotate(&self, _text: &str) -> Result<AnnotatedDoc, AnnotatorError> {
            Err(AnnotatorError::Api {
                status: 503,
                message: "model not loaded".to_string(),
            })
        }
    }

    /// Builds a doc from `(text, pos, dep, children)` tuples using spaCy labels.
    pub fn doc(tokens: &[(&str, &str, &str, &[usize])]) -> AnnotatedDoc {
        AnnotatedDoc::new(
            tokens
                .iter()
                .map(|(text, pos, dep, children)| AnnotatedToken {
                    text: text.to_string(),
                    pos: PartOfSpeech::from_label(pos),
                    dep: DependencyRelation::from_label(dep),
                    children: children.to_vec(),
                })
                .collect(),
        )
    }
}
