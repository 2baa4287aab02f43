//! Graph rendering hand-off.
//!
//! Rendering proper is a presentation concern outside the core; the core only
//! hands over the weighted graph, the candidate sets of both words, and the
//! winning path. [`DotRenderer`] is the bundled implementation: it emits
//! Graphviz DOT with word1 candidates in red, word2 candidates in black, and
//! the winning path's edges drawn bold over the light-blue rest.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::path::PathBuf;

use tracing::info;

use crate::concept::ConceptId;
use crate::error::{LexiResult, RenderError};
use crate::similarity::Comparison;

/// Presentation collaborator consuming a finished comparison.
pub trait RendererPort {
    /// Draw the comparison's graph. Must handle an absent path gracefully
    /// (no highlighted edges); must not be called when there is no graph.
    fn render(&self, comparison: &Comparison) -> LexiResult<()>;
}

/// Renders the closure graph as a Graphviz DOT file.
pub struct DotRenderer {
    output: PathBuf,
}

impl DotRenderer {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }

    /// Produce the DOT source for a comparison.
    pub fn dot(comparison: &Comparison) -> String {
        let Some(graph) = comparison.graph.as_ref() else {
            return String::new();
        };

        let word1_set: HashSet<&ConceptId> = comparison.word1_candidates.iter().collect();
        let word2_set: HashSet<&ConceptId> = comparison.word2_candidates.iter().collect();
        let path_edges: HashSet<(&ConceptId, &ConceptId)> = comparison
            .path
            .as_deref()
            .unwrap_or_default()
            .windows(2)
            .map(|w| (&w[0], &w[1]))
            .collect();

        let mut out = String::new();
        let _ = writeln!(out, "digraph taxonomy {{");
        let _ = writeln!(
            out,
            "  label=\"{} / {}\";",
            escape(&comparison.word1),
            escape(&comparison.word2)
        );
        let _ = writeln!(out, "  node [style=filled, fillcolor=white];");

        for id in graph.concept_ids() {
            let attrs = if word1_set.contains(id) {
                ", fillcolor=red"
            } else if word2_set.contains(id) {
                ", fillcolor=black, fontcolor=white"
            } else {
                ""
            };
            let depth = graph.depth(id).unwrap_or(0);
            let _ = writeln!(
                out,
                "  \"{}\" [tooltip=\"depth: {depth}\"{attrs}];",
                escape(id.as_str())
            );
        }

        let pg = graph.petgraph();
        for e in pg.edge_indices() {
            let Some((a, b)) = pg.edge_endpoints(e) else {
                continue;
            };
            let (Some(from), Some(to)) = (graph.id_of(a), graph.id_of(b)) else {
                continue;
            };
            let on_path = path_edges.contains(&(from, to)) || path_edges.contains(&(to, from));
            let attrs = if on_path {
                "color=black, penwidth=2.0"
            } else {
                "color=lightblue"
            };
            let _ = writeln!(
                out,
                "  \"{}\" -> \"{}\" [{attrs}, label=\"{:.3}\"];",
                escape(from.as_str()),
                escape(to.as_str()),
                pg[e]
            );
        }

        let _ = writeln!(out, "}}");
        out
    }
}

impl RendererPort for DotRenderer {
    fn render(&self, comparison: &Comparison) -> LexiResult<()> {
        let dot = Self::dot(comparison);
        std::fs::write(&self.output, dot).map_err(|source| RenderError::Io {
            path: self.output.clone(),
            source,
        })?;
        info!(path = %self.output.display(), "wrote graph rendering");
        Ok(())
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::concept::Concept;
    use crate::ontology::MemoryOntology;
    use crate::similarity::SimilarityEngine;
    use crate::text::SimpleTokenizer;

    fn comparison(w1: &str, w2: &str) -> Comparison {
        let mut ont = MemoryOntology::new();
        ont.insert_concept(Concept::noun("entity.n.01", "that which exists"));
        ont.insert_concept(
            Concept::noun("vehicle.n.01", "a conveyance").with_hypernyms(["entity.n.01"]),
        );
        ont.insert_concept(
            Concept::noun("car.n.01", "a motor vehicle").with_hypernyms(["vehicle.n.01"]),
        );
        ont.insert_concept(
            Concept::noun("truck.n.01", "a hauling vehicle").with_hypernyms(["vehicle.n.01"]),
        );
        ont.index_word("car", vec![ConceptId::new("car.n.01")]);
        ont.index_word("truck", vec![ConceptId::new("truck.n.01")]);
        let engine = SimilarityEngine::new(Arc::new(ont), Arc::new(SimpleTokenizer::new()));
        engine.compare(w1, w2).unwrap()
    }

    #[test]
    fn dot_colors_candidates_and_highlights_the_path() {
        let dot = DotRenderer::dot(&comparison("car", "truck"));
        assert!(dot.contains("\"car.n.01\" [tooltip=\"depth: 2\", fillcolor=red]"));
        assert!(dot.contains("fillcolor=black, fontcolor=white"));
        assert!(dot.contains("penwidth=2.0"));
        assert!(dot.contains("color=lightblue"));
    }

    #[test]
    fn dot_handles_an_absent_path() {
        let dot = DotRenderer::dot(&comparison("car", "xyzzy"));
        assert!(dot.contains("digraph taxonomy"));
        assert!(!dot.contains("penwidth=2.0"));
    }

    #[test]
    fn renderer_writes_the_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("graph.dot");
        let renderer = DotRenderer::new(&out);
        renderer.render(&comparison("car", "truck")).unwrap();
        let contents = std::fs::read_to_string(&out).unwrap();
        assert!(contents.starts_with("digraph taxonomy"));
    }
}
