//! Depth assignment and edge weighting for the closure graph.
//!
//! The directed closure is mirrored (every edge added in both directions) so
//! the distance search treats relations as undirected. Depths are unweighted
//! BFS hop counts from the root over that mirrored edge set; edge weights are
//! `1 - (depth(u) + depth(v)) / (2 * MAX)`, so edges near the taxonomy root
//! cost less, in the Wu-Palmer depth-scaling sense.

use std::collections::VecDeque;

use petgraph::graph::NodeIndex;
use petgraph::Direction;

use tracing::{debug, warn};

use super::ConceptGraph;

/// Fixed depth ceiling used by the weighting and scoring formulas.
///
/// The actual maximum depth of the graph is computed and returned, but the
/// formulas use this constant regardless; changing that would shift every
/// score. Depths beyond this value make edge weights negative, which breaks
/// the shortest-path non-negativity assumption and is reported as a boundary
/// condition.
pub const MAX_DEPTH: usize = 20;

/// Mirror edges, compute BFS depths from the root, and assign edge weights.
///
/// Returns the computed maximum depth. Callers scoring against the depth
/// ceiling must use [`MAX_DEPTH`], not this value.
pub fn weight(graph: &mut ConceptGraph) -> usize {
    mirror_edges(graph);
    let max_depth = assign_depths(graph);
    if max_depth > MAX_DEPTH {
        warn!(
            max_depth,
            ceiling = MAX_DEPTH,
            "graph deeper than the weighting ceiling; edge weights will go negative"
        );
    }
    assign_weights(graph);
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        max_depth,
        "weighted taxonomy graph"
    );
    max_depth
}

/// Add the reverse of every directed edge (weight placeholder), skipping
/// pairs that already have both directions.
fn mirror_edges(graph: &mut ConceptGraph) {
    let pairs: Vec<(NodeIndex, NodeIndex)> = graph
        .graph
        .edge_indices()
        .filter_map(|e| graph.graph.edge_endpoints(e))
        .collect();
    for (a, b) in pairs {
        if graph.graph.find_edge(b, a).is_none() {
            graph.graph.add_edge(b, a, 0.0);
        }
    }
}

/// BFS hop counts from the root over the (now mirrored) edge set. Returns the
/// maximum depth reached. Nodes the closure failed to connect keep no depth
/// and are reported once.
fn assign_depths(graph: &mut ConceptGraph) -> usize {
    graph.depths.clear();
    let root_idx = match graph.node_index(&graph.root.clone()) {
        Some(idx) => idx,
        None => return 0,
    };

    let mut max_depth = 0usize;
    let mut queue: VecDeque<(NodeIndex, usize)> = VecDeque::new();
    graph.depths.insert(graph.root.clone(), 0);
    queue.push_back((root_idx, 0));

    while let Some((idx, depth)) = queue.pop_front() {
        max_depth = max_depth.max(depth);
        let neighbors: Vec<NodeIndex> = graph
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .collect();
        for n in neighbors {
            let Some(id) = graph.graph.node_weight(n) else {
                continue;
            };
            if !graph.depths.contains_key(id) {
                graph.depths.insert(id.clone(), depth + 1);
                queue.push_back((n, depth + 1));
            }
        }
    }

    let unreached = graph.node_count() - graph.depths.len();
    if unreached > 0 {
        warn!(
            unreached,
            "closure left nodes disconnected from the root; treating their depth as 0"
        );
    }
    max_depth
}

/// Set every edge weight from the depths of its endpoints.
fn assign_weights(graph: &mut ConceptGraph) {
    let edges: Vec<_> = graph.graph.edge_indices().collect();
    for e in edges {
        let Some((a, b)) = graph.graph.edge_endpoints(e) else {
            continue;
        };
        let da = graph
            .graph
            .node_weight(a)
            .and_then(|id| graph.depths.get(id))
            .copied()
            .unwrap_or(0);
        let db = graph
            .graph
            .node_weight(b)
            .and_then(|id| graph.depths.get(id))
            .copied()
            .unwrap_or(0);
        let w = 1.0 - (da + db) as f64 / (2.0 * MAX_DEPTH as f64);
        if let Some(weight) = graph.graph.edge_weight_mut(e) {
            *weight = w;
        }
    }
}
