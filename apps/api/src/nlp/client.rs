//! Annotation client: the single point of entry for calls to the NLP service.
//!
//! The service wraps a loaded spaCy English pipeline and answers
//! `POST {url}` with `{"text": ...}` by returning `Doc.to_json()`.
//! No other module talks to the service directly.
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::nlp::{
    AnnotatedDoc, AnnotatedToken, Annotator, AnnotatorError, DependencyRelation, PartOfSpeech,
};

#[derive(Debug, Serialize)]
struct AnnotateRequest<'a> {
    text: &'a str,
}

/// Subset of spaCy's `Doc.to_json()` output.
#[derive(Debug, Deserialize)]
struct WireDoc {
    text: String,
    tokens: Vec<WireToken>,
}

#[derive(Debug, Deserialize)]
struct WireToken {
    /// Character offsets into `WireDoc::text`.
    start: usize,
    end: usize,
    pos: String,
    dep: String,
    /// Index of the governing token; the sentence root points at itself.
    head: usize,
}

#[derive(Clone)]
pub struct SpacyClient {
    client: Client,
    url: String,
}

impl SpacyClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build annotator HTTP client")?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Annotator for SpacyClient {
    async fn annotate(&self, text: &str) -> Result<AnnotatedDoc, AnnotatorError> {
        let response = self
            .client
            .post(&self.url)
            .json(&AnnotateRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AnnotatorError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        let wire: WireDoc = serde_json::from_slice(&body)?;
        let doc = doc_from_wire(wire)?;

        debug!("Annotation succeeded: {} tokens", doc.tokens.len());
        Ok(doc)
    }
}

/// Converts the service payload into an `AnnotatedDoc`, resolving character
/// offsets to token text and head pointers to child lists.
fn doc_from_wire(wire: WireDoc) -> Result<AnnotatedDoc, AnnotatorError> {
    let chars: Vec<char> = wire.text.chars().collect();
    let count = wire.tokens.len();

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); count];
    for (i, token) in wire.tokens.iter().enumerate() {
        if token.head >= count {
            return Err(AnnotatorError::Malformed(format!(
                "token {i} has head {} but the doc has {count} tokens",
                token.head
            )));
        }
        if token.head != i {
            children[token.head].push(i);
        }
    }

    let tokens = wire
        .tokens
        .into_iter()
        .zip(children)
        .enumerate()
        .map(|(i, (token, children))| {
            if token.start > token.end || token.end > chars.len() {
                return Err(AnnotatorError::Malformed(format!(
                    "token {i} spans {}..{} outside a text of {} chars",
                    token.start,
                    token.end,
                    chars.len()
                )));
            }
            Ok(AnnotatedToken {
                text: chars[token.start..token.end].iter().collect(),
                pos: PartOfSpeech::from_label(&token.pos),
                dep: DependencyRelation::from_label(&token.dep),
                children,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AnnotatedDoc::new(tokens))
}
