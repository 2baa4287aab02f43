//! Batch mode: similarity for a file of word pairs.
//!
//! Each input line holds one `word1 word2` pair; the result file gets one
//! line per pair with the similarity scaled by 10 and rounded to two
//! decimals. Pairs are fully independent, so they are scored on the rayon
//! pool; output order always matches input order. A word missing from the
//! ontology (or a failing single query) produces a 0.00 line and never
//! aborts the rest of the batch.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{info, warn};

use crate::error::{BatchError, LexiResult};
use crate::similarity::SimilarityEngine;

/// One scored line of a batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    pub word1: String,
    pub word2: String,
    /// Similarity in [0, 1].
    pub similarity: f64,
}

/// Result-file path for a batch input: the file name up to its first `.`
/// plus `_results.txt`, next to the input.
pub fn results_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.split('.').next().unwrap_or(&name).to_owned();
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            parent.join(format!("{stem}_results.txt"))
        }
        _ => PathBuf::from(format!("{stem}_results.txt")),
    }
}

/// Parse the word pairs out of batch input text. Blank and malformed lines
/// are skipped with a warning.
pub fn parse_pairs(text: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (number, line) in text.lines().enumerate() {
        let mut words = line.split_whitespace();
        match (words.next(), words.next()) {
            (Some(w1), Some(w2)) => pairs.push((w1.to_owned(), w2.to_owned())),
            (Some(_), None) => {
                warn!(line = number + 1, "skipping malformed batch line (need two words)");
            }
            _ => {}
        }
    }
    pairs
}

/// Score every pair in parallel, preserving input order.
pub fn score_pairs(engine: &SimilarityEngine, pairs: &[(String, String)]) -> Vec<BatchEntry> {
    pairs
        .par_iter()
        .map(|(word1, word2)| {
            let similarity = match engine.compare(word1, word2) {
                Ok(cmp) => cmp.similarity,
                Err(e) => {
                    warn!(%word1, %word2, error = %e, "pair failed; recording 0");
                    0.0
                }
            };
            BatchEntry {
                word1: word1.clone(),
                word2: word2.clone(),
                similarity,
            }
        })
        .collect()
}

/// Run a whole batch file and write the results file. Returns its path.
pub fn run_batch(engine: &SimilarityEngine, input: &Path) -> LexiResult<PathBuf> {
    let text = std::fs::read_to_string(input).map_err(|source| BatchError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let pairs = parse_pairs(&text);
    let entries = score_pairs(engine, &pairs);

    let mut out = String::new();
    for entry in &entries {
        out.push_str(&format!(
            "{} {} {:.2}\n",
            entry.word1,
            entry.word2,
            entry.similarity * 10.0
        ));
    }

    let output = results_path(input);
    std::fs::write(&output, out).map_err(|source| BatchError::Write {
        path: output.clone(),
        source,
    })?;
    info!(
        pairs = entries.len(),
        output = %output.display(),
        "batch complete"
    );
    Ok(output)
}
