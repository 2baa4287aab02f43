//! # lexisim
//!
//! Semantic similarity between words over a lexical ontology's taxonomy.
//!
//! For each word pair, a local closure graph is built from hypernym, hyponym,
//! meronym, and holonym relations, rooted at one global ancestor. Nodes get
//! BFS depths from the root, edges get depth-scaled weights, and every
//! candidate concept pair is scored by weighted shortest-path length combined
//! with the depth of the pair's lowest common hypernym and the lexical
//! overlap of their dictionary definitions. The minimum score maps to a
//! similarity in (0, 1] via a decaying exponential.
//!
//! ## Architecture
//!
//! - **Ontology port** (`ontology`): candidate/relation/definition lookups
//! - **Closure graph** (`graph`): petgraph-backed build + weighting
//! - **Similarity pipeline** (`similarity`): pairwise solver and scoring
//! - **Rendering hand-off** (`render`): Graphviz DOT export
//! - **Batch mode** (`batch`): parallel per-line similarity map
//!
//! ## Library usage
//!
//! ```
//! use std::sync::Arc;
//! use lexisim::concept::{Concept, ConceptId};
//! use lexisim::ontology::MemoryOntology;
//! use lexisim::similarity::SimilarityEngine;
//! use lexisim::text::SimpleTokenizer;
//!
//! let mut ontology = MemoryOntology::new();
//! ontology.insert_concept(Concept::noun("entity.n.01", "that which exists"));
//! ontology.insert_concept(
//!     Concept::noun("car.n.01", "a motor vehicle").with_hypernyms(["entity.n.01"]),
//! );
//! ontology.index_word("car", vec![ConceptId::new("car.n.01")]);
//!
//! let engine = SimilarityEngine::new(Arc::new(ontology), Arc::new(SimpleTokenizer::new()));
//! let comparison = engine.compare("car", "car").unwrap();
//! assert_eq!(comparison.similarity, 1.0);
//! ```

pub mod batch;
pub mod concept;
pub mod error;
pub mod graph;
pub mod ontology;
pub mod render;
pub mod similarity;
pub mod text;
