use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

pub type TokenSet = HashSet<String>;

fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"\w+").expect("word pattern is valid"))
}

/// Lowercased maximal runs of word characters (letters, digits, underscore).
pub fn tokenize(text: &str) -> TokenSet {
    let lower = text.to_lowercase();
    word_pattern()
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> TokenSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_punctuation_and_whitespace_separate() {
        let tokens = tokenize("Rust, Python;\tSQL\n(AWS)");
        assert_eq!(tokens, set(&["rust", "python", "sql", "aws"]));
    }

    #[test]
    fn test_case_folded_and_deduplicated() {
        let tokens = tokenize("Python python PYTHON");
        assert_eq!(tokens, set(&["python"]));
    }

    #[test]
    fn test_digits_and_underscores_are_word_chars() {
        let tokens = tokenize("snake_case k8s C++ node.js");
        assert_eq!(tokens, set(&["snake_case", "k8s", "c", "node", "js"]));
    }

    #[test]
    fn test_unicode_letters() {
        let tokens = tokenize("Zürich café");
        assert_eq!(tokens, set(&["zürich", "café"]));
    }

    #[test]
    fn test_empty_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" .,;\n").is_empty());
    }
}
