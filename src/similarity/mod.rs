//! Similarity pipeline facade.
//!
//! [`SimilarityEngine`] owns the ontology and tokenizer collaborators and
//! runs the full pipeline for one word pair: closure construction →
//! depth/weight assignment → pairwise distance search → similarity transform.
//! Every query builds its own graph; nothing is shared or cached across
//! calls, so an engine can be used freely from parallel batch workers.

pub mod gloss;
pub mod score;
pub mod solve;

pub use gloss::GlossOverlapScorer;
pub use score::similarity_from_distance;
pub use solve::{solve, PairwiseOutcome};

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::concept::{ConceptId, PartOfSpeech};
use crate::error::LexiResult;
use crate::graph::{build, weight, ConceptGraph};
use crate::ontology::OntologyPort;
use crate::text::TokenizerPort;

/// Outcome of one similarity query.
pub struct Comparison {
    /// The compared words.
    pub word1: String,
    pub word2: String,
    /// Bounded similarity in [0, 1].
    pub similarity: f64,
    /// Combined minimum distance; `f64::INFINITY` when no pair connects.
    pub distance: f64,
    /// Winning shortest-path node sequence, if any pair connected.
    pub path: Option<Vec<ConceptId>>,
    /// Noun candidates of each word, provider order.
    pub word1_candidates: Vec<ConceptId>,
    pub word2_candidates: Vec<ConceptId>,
    /// The weighted closure graph; `None` when neither word had candidates.
    pub graph: Option<ConceptGraph>,
}

/// Serializable summary of a [`Comparison`] (graph omitted).
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub word1: String,
    pub word2: String,
    pub similarity: f64,
    pub path: Option<Vec<ConceptId>>,
}

impl Comparison {
    /// Reduce to the serializable report form.
    pub fn report(&self) -> ComparisonReport {
        ComparisonReport {
            word1: self.word1.clone(),
            word2: self.word2.clone(),
            similarity: self.similarity,
            path: self.path.clone(),
        }
    }
}

/// Pipeline facade owning the external collaborators.
pub struct SimilarityEngine {
    ontology: Arc<dyn OntologyPort>,
    tokenizer: Arc<dyn TokenizerPort>,
}

impl SimilarityEngine {
    pub fn new(ontology: Arc<dyn OntologyPort>, tokenizer: Arc<dyn TokenizerPort>) -> Self {
        Self {
            ontology,
            tokenizer,
        }
    }

    /// Compute the semantic similarity of two words.
    ///
    /// When neither word has a noun candidate the result is similarity 0 with
    /// no graph and no path; downstream rendering must not be invoked in that
    /// case. Note the result is direction-sensitive: the graph root is chosen
    /// from `word1`'s first candidate.
    pub fn compare(&self, word1: &str, word2: &str) -> LexiResult<Comparison> {
        let word1_candidates = self.ontology.candidates(word1, PartOfSpeech::Noun);
        let word2_candidates = self.ontology.candidates(word2, PartOfSpeech::Noun);

        let Some(mut graph) = build(self.ontology.as_ref(), word1, word2)? else {
            debug!(word1, word2, "no noun candidates for either word");
            return Ok(Comparison {
                word1: word1.to_owned(),
                word2: word2.to_owned(),
                similarity: 0.0,
                distance: f64::INFINITY,
                path: None,
                word1_candidates,
                word2_candidates,
                graph: None,
            });
        };

        weight(&mut graph);

        let outcome = solve(
            &graph,
            self.ontology.as_ref(),
            self.tokenizer.as_ref(),
            &word1_candidates,
            &word2_candidates,
        );
        let similarity = similarity_from_distance(outcome.distance);

        info!(
            word1,
            word2,
            similarity,
            distance = outcome.distance,
            nodes = graph.node_count(),
            "computed similarity"
        );

        Ok(Comparison {
            word1: word1.to_owned(),
            word2: word2.to_owned(),
            similarity,
            distance: outcome.distance,
            path: outcome.path,
            word1_candidates,
            word2_candidates,
            graph: Some(graph),
        })
    }
}
