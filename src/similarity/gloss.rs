//! Gloss overlap: lexical dissimilarity of two dictionary definitions.

use tracing::trace;

use crate::text::{content_words, TokenizerPort};

/// Scores how dissimilar two definitions are by content-word overlap.
pub struct GlossOverlapScorer<'a> {
    tokenizer: &'a dyn TokenizerPort,
}

impl<'a> GlossOverlapScorer<'a> {
    pub fn new(tokenizer: &'a dyn TokenizerPort) -> Self {
        Self { tokenizer }
    }

    /// Dissimilarity ratio of two definitions.
    ///
    /// Each definition is reduced to its content words (stop words and
    /// non-alphabetic tokens dropped, duplicates preserved). An occurrence in
    /// either list counts as common when its token appears in both lists;
    /// the ratio is `1 - common / max(len_a, len_b)`. Symmetric in its
    /// arguments.
    ///
    /// When both filtered lists are empty there is no comparable content and
    /// the ratio is defined as 1.0 (maximally dissimilar); the division is
    /// never taken. With heavily repeated shared tokens the occurrence count
    /// can exceed the longer list and the ratio dips below zero, which the
    /// distance formula absorbs (its gloss factor `1 + ratio` stays >= 0).
    pub fn overlap(&self, def_a: &str, def_b: &str) -> f64 {
        let words_a = content_words(self.tokenizer, def_a);
        let words_b = content_words(self.tokenizer, def_b);

        let longest = words_a.len().max(words_b.len());
        if longest == 0 {
            return 1.0;
        }

        let common = words_a
            .iter()
            .chain(words_b.iter())
            .filter(|w| words_a.contains(w) && words_b.contains(w))
            .count();

        let ratio = 1.0 - common as f64 / longest as f64;
        trace!(common, longest, ratio, "gloss overlap");
        ratio
    }
}
