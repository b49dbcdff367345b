//! ATS scoring: lexical overlap between the resume vocabulary and the JD keywords.
//!
//! Algorithm:
//! 1. Tokenize the resume (lowercase word runs).
//! 2. Per category: matched = keywords present as a resume token, missing = the rest.
//! 3. score = matched / total × 100, rounded to 2 decimals; 0 when there are no keywords.
//!
//! Multi-word responsibilities ("build apis") never equal a single token, so they
//! always land in `missing`.

use serde::Serialize;

use crate::analysis::tokenizer::{tokenize, TokenSet};
use crate::analysis::KeywordSet;

#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub score: f64, // 0..=100
    pub matched: KeywordSet,
    pub missing: KeywordSet,
}

pub fn calculate_score(resume_text: &str, job_keywords: &KeywordSet) -> MatchResult {
    let resume_tokens = tokenize(resume_text);

    let (matched_skills, missing_skills) = partition(&job_keywords.skills, &resume_tokens);
    let (matched_resp, missing_resp) = partition(&job_keywords.responsibilities, &resume_tokens);

    let matched = KeywordSet {
        skills: matched_skills,
        responsibilities: matched_resp,
    };
    let missing = KeywordSet {
        skills: missing_skills,
        responsibilities: missing_resp,
    };

    let score = if job_keywords.is_empty() {
        0.0
    } else {
        round2(matched.len() as f64 / job_keywords.len() as f64 * 100.0)
    };

    MatchResult {
        score,
        matched,
        missing,
    }
}

/// Splits keywords into (present, absent), keeping keyword order and dropping repeats.
fn partition(keywords: &[String], resume_tokens: &TokenSet) -> (Vec<String>, Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    keywords
        .iter()
        .filter(|k| seen.insert(k.as_str()))
        .cloned()
        .partition(|k| resume_tokens.contains(&k.to_lowercase()))
}

/// Exact halves go to the even neighbour.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn keywords(skills: &[&str], responsibilities: &[&str]) -> KeywordSet {
        KeywordSet {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            responsibilities: responsibilities.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn as_set(items: &[String]) -> HashSet<&str> {
        items.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_developed_apis_scenario_scores_40() {
        let jd = keywords(&["apis", "teams", "python"], &["develop", "manage"]);
        let result = calculate_score("I developed APIs and managed teams", &jd);

        assert_eq!(as_set(&result.matched.skills), HashSet::from(["apis", "teams"]));
        assert_eq!(as_set(&result.missing.skills), HashSet::from(["python"]));
        // Only inflected forms appear in the resume; no stemming.
        assert!(result.matched.responsibilities.is_empty());
        assert_eq!(
            as_set(&result.missing.responsibilities),
            HashSet::from(["develop", "manage"])
        );
        assert_eq!(result.score, 40.0);
    }

    #[test]
    fn test_empty_keywords_score_zero() {
        let result = calculate_score("Rust developer", &KeywordSet::default());
        assert_eq!(result.score, 0.0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_case_insensitive_resume_matching() {
        let jd = keywords(&["python"], &[]);
        let upper = calculate_score("Python", &jd);
        let lower = calculate_score("python", &jd);
        assert_eq!(upper.matched, lower.matched);
        assert_eq!(upper.matched.skills, vec!["python"]);
        assert_eq!(upper.score, 100.0);
    }

    #[test]
    fn test_multi_word_responsibility_never_matches() {
        let jd = keywords(&[], &["build apis"]);
        let result = calculate_score("build apis", &jd);
        assert_eq!(result.missing.responsibilities, vec!["build apis"]);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_score_rounds_to_two_decimals() {
        let jd = keywords(&["rust", "go", "java"], &[]);
        let result = calculate_score("rust", &jd);
        assert_eq!(result.score, 33.33);
    }

    #[test]
    fn test_score_halves_round_to_even() {
        // 1/32 = 3.125 exactly.
        let skills: Vec<String> = (0..32).map(|i| format!("kw{i}")).collect();
        let skills: Vec<&str> = skills.iter().map(String::as_str).collect();
        let jd = keywords(&skills, &[]);

        let result = calculate_score("kw0", &jd);
        assert_eq!(result.score, 3.12);

        // 3/32 = 9.375 rounds up to the even 9.38.
        let result = calculate_score("kw0 kw1 kw2", &jd);
        assert_eq!(result.score, 9.38);
    }

    #[test]
    fn test_matched_and_missing_partition_each_category() {
        let cases = [
            ("", keywords(&["rust"], &["lead"])),
            ("rust lead sql", keywords(&["rust", "sql", "kafka"], &["lead", "mentor juniors"])),
            ("Data, data engineering!", keywords(&["data", "database"], &["collaborate"])),
        ];

        for (resume, jd) in cases {
            let result = calculate_score(resume, &jd);
            for (job, matched, missing) in [
                (&jd.skills, &result.matched.skills, &result.missing.skills),
                (
                    &jd.responsibilities,
                    &result.matched.responsibilities,
                    &result.missing.responsibilities,
                ),
            ] {
                let matched = as_set(matched);
                let missing = as_set(missing);
                assert!(matched.is_disjoint(&missing));
                let union: HashSet<&str> = matched.union(&missing).copied().collect();
                assert_eq!(union, as_set(job));
            }
            assert!((0.0..=100.0).contains(&result.score));
        }
    }
}
