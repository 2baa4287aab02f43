//! Concept graph: the per-query taxonomy closure.
//!
//! Nodes are [`ConceptId`] strings, edges carry an `f64` weight. The graph is
//! backed by `petgraph` with a side index for O(1) id → node lookups: an
//! explicit adjacency structure built once per query and never mutated while
//! it is being traversed.

pub mod build;
pub mod weight;

pub use build::build;
pub use weight::{weight, MAX_DEPTH};

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::concept::ConceptId;

/// Directed closure graph over ontology relations, rooted at one ancestor.
///
/// Invariants: no self-loops, no duplicate edges, and (after closure
/// construction) every node reaches the root through the undirected edge set.
pub struct ConceptGraph {
    pub(crate) graph: DiGraph<ConceptId, f64>,
    pub(crate) index: HashMap<ConceptId, NodeIndex>,
    pub(crate) root: ConceptId,
    /// Hop count from root over the undirected closure; filled by the weighter.
    pub(crate) depths: HashMap<ConceptId, usize>,
}

impl ConceptGraph {
    /// Create a graph containing only the root node.
    pub fn new(root: ConceptId) -> Self {
        let mut g = Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
            root,
            depths: HashMap::new(),
        };
        g.ensure_node(g.root.clone());
        g
    }

    /// The designated root concept.
    pub fn root(&self) -> &ConceptId {
        &self.root
    }

    /// Insert a node if absent; returns its index either way.
    pub fn ensure_node(&mut self, id: ConceptId) -> NodeIndex {
        if let Some(&idx) = self.index.get(&id) {
            return idx;
        }
        let idx = self.graph.add_node(id.clone());
        self.index.insert(id, idx);
        idx
    }

    /// Insert a directed edge with placeholder weight. Idempotent; self-loops
    /// are rejected. Both endpoints are created if absent.
    pub fn add_edge(&mut self, from: &ConceptId, to: &ConceptId) {
        if from == to {
            return;
        }
        let a = self.ensure_node(from.clone());
        let b = self.ensure_node(to.clone());
        if self.graph.find_edge(a, b).is_none() {
            self.graph.add_edge(a, b, 0.0);
        }
    }

    /// Whether the concept is a node of this graph.
    pub fn has_node(&self, id: &ConceptId) -> bool {
        self.index.contains_key(id)
    }

    /// Node index for a concept, if present.
    pub fn node_index(&self, id: &ConceptId) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// Concept id stored at a node index.
    pub fn id_of(&self, idx: NodeIndex) -> Option<&ConceptId> {
        self.graph.node_weight(idx)
    }

    /// Depth (undirected hops from root) of a concept, once weighted.
    pub fn depth(&self, id: &ConceptId) -> Option<usize> {
        self.depths.get(id).copied()
    }

    /// All concept ids in the graph, in insertion order.
    pub fn concept_ids(&self) -> impl Iterator<Item = &ConceptId> {
        self.graph.node_weights()
    }

    /// Borrow the underlying petgraph for path searches.
    pub fn petgraph(&self) -> &DiGraph<ConceptId, f64> {
        &self.graph
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cid(s: &str) -> ConceptId {
        ConceptId::new(s)
    }

    #[test]
    fn new_graph_contains_the_root() {
        let g = ConceptGraph::new(cid("entity.n.01"));
        assert_eq!(g.node_count(), 1);
        assert!(g.has_node(&cid("entity.n.01")));
    }

    #[test]
    fn ensure_node_is_idempotent() {
        let mut g = ConceptGraph::new(cid("r"));
        let a = g.ensure_node(cid("a"));
        let b = g.ensure_node(cid("a"));
        assert_eq!(a, b);
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn add_edge_deduplicates_and_rejects_self_loops() {
        let mut g = ConceptGraph::new(cid("r"));
        g.add_edge(&cid("a"), &cid("b"));
        g.add_edge(&cid("a"), &cid("b"));
        g.add_edge(&cid("a"), &cid("a"));
        assert_eq!(g.edge_count(), 1);
    }
}
