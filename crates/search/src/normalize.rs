//! Query normalization.

/// Tokens this short (in characters) carry no signal and are dropped.
pub const MIN_TOKEN_CHARS: usize = 2;

/// A query prepared for scoring.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    /// Lowercased, trimmed, untokenized text
    pub text: String,
    /// Words to score with; empty for template selection
    pub words: Vec<String>,
}

impl Query {
    /// Query for substring-only matching (template selection).
    pub fn phrase(raw: &str) -> Self {
        Self {
            text: normalize(raw),
            words: Vec::new(),
        }
    }

    /// Query with its tokens, before any synonym expansion.
    pub fn tokenized(raw: &str) -> Self {
        let text = normalize(raw);
        let words = tokenize_normalized(&text);
        Self { text, words }
    }

    /// Returns true if nothing is left after trimming.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Lowercase and trim.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Lowercase, trim, split on whitespace runs and drop one-character tokens.
///
/// Duplicates are kept and order follows the input.
pub fn tokenize(raw: &str) -> Vec<String> {
    tokenize_normalized(&normalize(raw))
}

fn tokenize_normalized(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Where Is My DRIVER?  "), "where is my driver?");
    }

    #[test]
    fn test_tokenize_drops_single_chars() {
        assert_eq!(tokenize("How do I get money"), vec!["how", "do", "get", "money"]);
    }

    #[test]
    fn test_tokenize_keeps_duplicates() {
        assert_eq!(tokenize("cash\t cash\nfare"), vec!["cash", "cash", "fare"]);
    }

    #[test]
    fn test_tokenize_counts_chars_not_bytes() {
        assert_eq!(tokenize("é ça"), vec!["ça"]);
    }

    #[test]
    fn test_empty_query() {
        assert!(tokenize("   ").is_empty());
        assert!(Query::tokenized(" \t ").is_empty());
        assert!(Query::phrase("").words.is_empty());
    }
}
