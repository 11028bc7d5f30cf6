//! Context-text tokenization
//!
//! Normalizes free text into a sequence of lowercase ASCII alphanumeric
//! tokens. Every character outside `[A-Za-z0-9]` acts as a separator, so
//! punctuation, emoji, and non-ASCII letters all split tokens. Length and
//! stop-word filtering happen downstream, not here.

/// Lowercasing ASCII-alphanumeric tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        Self
    }

    /// Tokenize text into lowercase alphanumeric tokens
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        for ch in text.chars() {
            if ch.is_ascii_alphanumeric() {
                current.push(ch.to_ascii_lowercase());
            } else if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            tokens.push(current);
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenization() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("That party was LIT, no cap!");
        assert_eq!(tokens, vec!["that", "party", "was", "lit", "no", "cap"]);
    }

    #[test]
    fn test_punctuation_splits() {
        let tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("don't@stop-now"),
            vec!["don", "t", "stop", "now"]
        );
    }

    #[test]
    fn test_digits_kept() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.tokenize("w00t 100%"), vec!["w00t", "100"]);
    }

    #[test]
    fn test_non_ascii_separates() {
        let tokenizer = Tokenizer::new();
        // Accented and CJK characters are separators, not token content.
        assert_eq!(tokenizer.tokenize("café 日本 ok"), vec!["caf", "ok"]);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("!!! ...").is_empty());
    }
}
