//! Tokenization and stop-word filtering for gloss comparison.
//!
//! The similarity core treats tokenization as an external collaborator behind
//! [`TokenizerPort`]; [`SimpleTokenizer`] is the bundled implementation. The
//! English stop-word set is loaded once per process and shared read-only, so
//! it is safe to use from parallel batch workers.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Tokenization collaborator: splits text into word tokens and classifies
/// stop words.
pub trait TokenizerPort: Send + Sync {
    /// Split `text` into word tokens. Implementations must only return
    /// alphabetic tokens (punctuation and digits dropped).
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Whether `token` is a stop word to be excluded from overlap scoring.
    fn is_stop_word(&self, token: &str) -> bool;
}

/// English stop words (the customary NLTK list, lowercased).
static ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she",
    "her", "hers", "herself", "it", "its", "itself", "they", "them", "their",
    "theirs", "themselves", "what", "which", "who", "whom", "this", "that",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of",
    "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why", "how",
    "all", "any", "both", "each", "few", "more", "most", "other", "some",
    "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too",
    "very", "s", "t", "can", "will", "just", "don", "should", "now",
];

fn stop_word_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| ENGLISH_STOP_WORDS.iter().copied().collect())
}

/// Whitespace/punctuation splitting tokenizer with the global stop-word set.
///
/// Tokens are lowercased runs of alphabetic characters; everything else is a
/// separator, which subsumes the "drop punctuation and digits" rule.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleTokenizer;

impl SimpleTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl TokenizerPort for SimpleTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphabetic())
            .filter(|t| !t.is_empty())
            .map(|t| t.to_lowercase())
            .collect()
    }

    fn is_stop_word(&self, token: &str) -> bool {
        stop_word_set().contains(token)
    }
}

/// Tokenize `text` and drop stop words: the content-word list used for gloss
/// overlap. Duplicates are preserved.
pub fn content_words(tokenizer: &dyn TokenizerPort, text: &str) -> Vec<String> {
    tokenizer
        .tokenize(text)
        .into_iter()
        .filter(|t| !tokenizer.is_stop_word(t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_drops_punctuation_and_digits() {
        let tok = SimpleTokenizer::new();
        let tokens = tok.tokenize("a 4-wheeled motor vehicle; usually propelled!");
        assert_eq!(
            tokens,
            vec!["a", "wheeled", "motor", "vehicle", "usually", "propelled"]
        );
    }

    #[test]
    fn stop_words_are_recognized() {
        let tok = SimpleTokenizer::new();
        assert!(tok.is_stop_word("the"));
        assert!(tok.is_stop_word("with"));
        assert!(!tok.is_stop_word("vehicle"));
    }

    #[test]
    fn content_words_filters_stop_words_but_keeps_duplicates() {
        let tok = SimpleTokenizer::new();
        let words = content_words(&tok, "the wheel and the wheel of the cart");
        assert_eq!(words, vec!["wheel", "wheel", "cart"]);
    }

    #[test]
    fn content_words_of_stop_word_only_text_is_empty() {
        let tok = SimpleTokenizer::new();
        assert!(content_words(&tok, "of the and a 123 ...").is_empty());
    }
}
