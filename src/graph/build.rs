//! Closure construction: build the per-query taxonomy graph for two words.
//!
//! Starting from the noun candidates of both words, the builder closes the
//! hypernym/instance-hypernym chains up to (but not including) the root, then
//! fans out one hop over hyponyms, meronyms, and holonyms, and finally closes
//! the hypernym chains of the fanned-out concepts so every node reaches the
//! root. Chain walks are iterative with an explicit work stack and visited
//! set, so cyclic or malformed ontology data cannot cause unbounded recursion.

use std::collections::HashSet;

use tracing::debug;

use crate::concept::{ConceptId, PartOfSpeech};
use crate::error::{GraphError, LexiResult};
use crate::ontology::OntologyPort;

use super::ConceptGraph;

/// Build the closure graph for a word pair.
///
/// Returns `None` when neither word has a noun candidate (no graph can be
/// built). The root is the first root hypernym of the *first* candidate of
/// `word1`, never of both words jointly, which makes the result
/// direction-sensitive.
pub fn build(
    ontology: &dyn OntologyPort,
    word1: &str,
    word2: &str,
) -> LexiResult<Option<ConceptGraph>> {
    let mut candidates = ontology.candidates(word1, PartOfSpeech::Noun);
    candidates.extend(ontology.candidates(word2, PartOfSpeech::Noun));
    if candidates.is_empty() {
        return Ok(None);
    }

    let root = ontology
        .root_hypernyms(&candidates[0])
        .into_iter()
        .next()
        .ok_or_else(|| GraphError::NoRoot {
            concept: candidates[0].to_string(),
        })?;

    let mut graph = ConceptGraph::new(root.clone());
    for c in &candidates {
        graph.ensure_node(c.clone());
    }

    // Hypernym chains of the candidates themselves.
    let mut visited: HashSet<ConceptId> = HashSet::new();
    for c in &candidates {
        insert_hypernym_chain(ontology, &mut graph, c, &root, &mut visited);
    }

    // One-hop fan-out: hyponyms, meronyms, holonyms.
    let mut fanned: Vec<ConceptId> = Vec::new();
    for c in &candidates {
        for related in related_concepts(ontology, c) {
            graph.add_edge(c, &related);
            fanned.push(related);
        }
    }

    // Close the chains of the fanned-out concepts so they also reach root.
    for c in &fanned {
        insert_hypernym_chain(ontology, &mut graph, c, &root, &mut visited);
    }

    debug!(
        word1,
        word2,
        root = %graph.root(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built taxonomy closure"
    );
    Ok(Some(graph))
}

/// Hyponyms, part/substance meronyms, and part/substance holonyms of a
/// concept, in relation-family order.
fn related_concepts(ontology: &dyn OntologyPort, id: &ConceptId) -> Vec<ConceptId> {
    let mut out = ontology.hyponyms(id);
    out.extend(ontology.part_meronyms(id));
    out.extend(ontology.substance_meronyms(id));
    out.extend(ontology.part_holonyms(id));
    out.extend(ontology.substance_holonyms(id));
    out
}

/// Walk the hypernym/instance-hypernym chain from `start` up to (excluding)
/// `root`, inserting each hypernym → concept edge. The shared visited set
/// makes repeated calls idempotent and guarantees termination on cycles.
fn insert_hypernym_chain(
    ontology: &dyn OntologyPort,
    graph: &mut ConceptGraph,
    start: &ConceptId,
    root: &ConceptId,
    visited: &mut HashSet<ConceptId>,
) {
    let mut stack: Vec<ConceptId> = vec![start.clone()];
    while let Some(concept) = stack.pop() {
        if concept == *root || !visited.insert(concept.clone()) {
            continue;
        }
        let mut hypernyms = ontology.hypernyms(&concept);
        hypernyms.extend(ontology.instance_hypernyms(&concept));
        for hypernym in hypernyms {
            graph.add_edge(&hypernym, &concept);
            stack.push(hypernym);
        }
    }
}
