//! Templated improvement suggestions. Rules run in a fixed order and are not
//! deduplicated against each other.

use std::sync::OnceLock;

use regex::Regex;

use crate::analysis::KeywordSet;

const DATA_SUGGESTION: &str = "Consider emphasizing your data analysis or data engineering achievements in your Work Experience section.";
const COLLABORATE_SUGGESTION: &str = "Highlight examples where you collaborated with team members or stakeholders in your Work Experience section.";
const REPORTS_SUGGESTION: &str =
    "Include any experience creating reports or dashboards in your Work Experience or Skills section.";

/// Lines built around these verbs are flagged for rewriting.
fn vague_line_pattern() -> &'static Regex {
    static VAGUE: OnceLock<Regex> = OnceLock::new();
    VAGUE.get_or_init(|| {
        Regex::new(r"(?i)\b(develop|manage|improve)\b").expect("vague line pattern is valid")
    })
}

pub fn generate_suggestions(
    _matched: &KeywordSet,
    missing: &KeywordSet,
    resume_text: &str,
    job_keywords: &KeywordSet,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    for skill in &missing.skills {
        suggestions.push(format!("You can add '{skill}' to your Skills section."));
    }

    for responsibility in &missing.responsibilities {
        suggestions.push(format!(
            "Highlight your experience with '{responsibility}' in your Work Experience section."
        ));
    }

    // Every flagged line gets the full missing-responsibility list, not just
    // the ones related to that line.
    let expansion = missing.responsibilities.join(", ");
    for line in resume_text.split('\n') {
        if vague_line_pattern().is_match(line) {
            suggestions.push(format!(
                "Line from resume: '{}'. Suggestion: 'Expand it to include: {expansion}'.",
                line.trim()
            ));
        }
    }

    if contains(&job_keywords.skills, "data") {
        suggestions.push(DATA_SUGGESTION.to_string());
    }
    if contains(&job_keywords.responsibilities, "collaborate") {
        suggestions.push(COLLABORATE_SUGGESTION.to_string());
    }
    if contains(&job_keywords.responsibilities, "reports") {
        suggestions.push(REPORTS_SUGGESTION.to_string());
    }

    suggestions
}

/// Whole-entry membership, not substring search.
fn contains(entries: &[String], keyword: &str) -> bool {
    entries.iter().any(|e| e == keyword)
}
