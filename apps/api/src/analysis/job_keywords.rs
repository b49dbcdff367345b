//! JD keyword extraction: turns an annotated job description into skills and
//! responsibilities using dependency-parse heuristics.

use std::collections::BTreeSet;

use crate::analysis::KeywordSet;
use crate::errors::AppError;
use crate::nlp::{AnnotatedDoc, AnnotatedToken, Annotator, DependencyRelation, PartOfSpeech};

/// Lowercases and annotates the job description, then categorizes its tokens.
pub async fn extract_job_keywords(
    job_description: &str,
    annotator: &dyn Annotator,
) -> Result<KeywordSet, AppError> {
    let normalized = job_description.to_lowercase();
    if normalized.trim().is_empty() {
        return Ok(KeywordSet::default());
    }

    let doc = annotator.annotate(&normalized).await?;
    Ok(categorize(&doc))
}

/// Skills: nouns in object/attribute position.
/// Responsibilities: every verb, with its object, adverb and noun-modifier
/// children appended in that order.
pub fn categorize(doc: &AnnotatedDoc) -> KeywordSet {
    let mut skills = BTreeSet::new();
    let mut responsibilities = BTreeSet::new();

    for token in doc.iter() {
        let text = token.text.trim();
        if text.is_empty() {
            continue;
        }

        if token.pos.is_nominal() && is_skill_relation(token.dep) {
            skills.insert(text.to_string());
        }

        if token.pos == PartOfSpeech::Verb {
            responsibilities.insert(responsibility_phrase(doc, token, text));
        }
    }

    KeywordSet {
        skills: skills.into_iter().collect(),
        responsibilities: responsibilities.into_iter().collect(),
    }
}

fn is_skill_relation(dep: DependencyRelation) -> bool {
    matches!(
        dep,
        DependencyRelation::DirectObject
            | DependencyRelation::PrepObject
            | DependencyRelation::Attribute
    )
}

fn responsibility_phrase(doc: &AnnotatedDoc, verb: &AnnotatedToken, verb_text: &str) -> String {
    let objects = child_texts(doc, verb, |d| {
        is_skill_relation(d) || d == DependencyRelation::Prep
    });
    let adverbs = child_texts(doc, verb, |d| d == DependencyRelation::AdverbModifier);
    let noun_mods = child_texts(doc, verb, |d| d == DependencyRelation::NounModifier);

    let context = objects
        .chain(adverbs)
        .chain(noun_mods)
        .collect::<Vec<_>>()
        .join(" ");
    let context = context.trim();

    if context.is_empty() {
        verb_text.to_string()
    } else {
        format!("{verb_text} {context}")
    }
}

fn child_texts<'a>(
    doc: &'a AnnotatedDoc,
    token: &'a AnnotatedToken,
    relation: fn(DependencyRelation) -> bool,
) -> impl Iterator<Item = &'a str> + 'a {
    doc.children(token)
        .filter(move |c| relation(c.dep))
        .map(|c| c.text.as_str())
}
