//! Pairwise distance search over the weighted closure graph.
//!
//! For every candidate pair (word1 outer, word2 inner, provider order) that
//! is jointly present in the graph, combines the weighted shortest-path
//! length with the common-ancestor depth factor and the gloss dissimilarity
//! into one score, keeping the first minimum in iteration order.

use petgraph::algo::astar;
use petgraph::visit::EdgeRef;

use tracing::debug;

use crate::concept::ConceptId;
use crate::graph::{ConceptGraph, MAX_DEPTH};
use crate::ontology::OntologyPort;
use crate::text::TokenizerPort;

use super::gloss::GlossOverlapScorer;

/// Minimum-score pair result: the combined distance and its path.
#[derive(Debug, Clone)]
pub struct PairwiseOutcome {
    /// Best combined score; `f64::INFINITY` when no candidate pair connects.
    pub distance: f64,
    /// Node sequence of the winning pair's shortest path.
    pub path: Option<Vec<ConceptId>>,
}

/// Search all candidate pairs and keep the minimum-score pair.
///
/// Ties break to the first pair reaching the minimum, which is why the loop
/// stays sequential: iteration order is part of the contract.
pub fn solve(
    graph: &ConceptGraph,
    ontology: &dyn OntologyPort,
    tokenizer: &dyn TokenizerPort,
    word1_candidates: &[ConceptId],
    word2_candidates: &[ConceptId],
) -> PairwiseOutcome {
    let scorer = GlossOverlapScorer::new(tokenizer);
    let mut best = f64::INFINITY;
    let mut best_path: Option<Vec<ConceptId>> = None;

    for ci in word1_candidates {
        let Some(from) = graph.node_index(ci) else {
            continue;
        };
        for cj in word2_candidates {
            let Some(to) = graph.node_index(cj) else {
                continue;
            };

            let Some(lch) = ontology.lowest_common_hypernyms(ci, cj).into_iter().next()
            else {
                debug!(%ci, %cj, "no common hypernym; skipping pair");
                continue;
            };
            // The hypernym closure puts the common ancestor of two in-graph
            // candidates in the graph; a miss means a malformed snapshot.
            let Some(lch_depth) = graph.depth(&lch) else {
                debug!(%ci, %cj, %lch, "common hypernym missing from graph; skipping pair");
                continue;
            };

            let Some((path_length, path)) =
                astar(graph.petgraph(), from, |n| n == to, |e| *e.weight(), |_| 0.0)
            else {
                continue;
            };

            let gloss = scorer.overlap(
                &ontology.definition(ci).unwrap_or_default(),
                &ontology.definition(cj).unwrap_or_default(),
            );
            let score = path_length
                * (1.0 - lch_depth as f64 / MAX_DEPTH as f64)
                * (1.0 + gloss);
            debug!(%ci, %cj, path_length, lch_depth, gloss, score, "scored candidate pair");

            if score < best {
                best = score;
                best_path = Some(
                    path.into_iter()
                        .filter_map(|idx| graph.id_of(idx).cloned())
                        .collect(),
                );
            }
        }
    }

    PairwiseOutcome {
        distance: best,
        path: best_path,
    }
}
