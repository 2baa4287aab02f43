//! Ontology provider interface.
//!
//! The lexical ontology is an external collaborator: it supplies candidate
//! concepts for a word, relation lookups per concept, definitions, root
//! hypernyms, and lowest common hypernyms. The core consumes it exclusively
//! through [`OntologyPort`], so any backing store (a bundled JSON snapshot,
//! a WordNet dump, a remote service) can be swapped in.
//!
//! All methods are total: unknown words or concepts yield empty results, not
//! errors. A real remote integration should map transport failures to
//! [`crate::error::OntologyError::Unavailable`] before reaching the core.

pub mod memory;

pub use memory::{MemoryOntology, Snapshot};

use crate::concept::{ConceptId, PartOfSpeech};

/// Read-only lookup interface to the lexical ontology.
pub trait OntologyPort: Send + Sync {
    /// Candidate concepts for a surface word, in provider order. The order is
    /// part of the contract: it drives candidate-pair iteration and thereby
    /// tie-breaking.
    fn candidates(&self, word: &str, pos: PartOfSpeech) -> Vec<ConceptId>;

    /// Direct hypernyms of a concept.
    fn hypernyms(&self, id: &ConceptId) -> Vec<ConceptId>;

    /// Instance hypernyms of a concept.
    fn instance_hypernyms(&self, id: &ConceptId) -> Vec<ConceptId>;

    /// Direct hyponyms of a concept.
    fn hyponyms(&self, id: &ConceptId) -> Vec<ConceptId>;

    /// Part meronyms of a concept.
    fn part_meronyms(&self, id: &ConceptId) -> Vec<ConceptId>;

    /// Substance meronyms of a concept.
    fn substance_meronyms(&self, id: &ConceptId) -> Vec<ConceptId>;

    /// Part holonyms of a concept.
    fn part_holonyms(&self, id: &ConceptId) -> Vec<ConceptId>;

    /// Substance holonyms of a concept.
    fn substance_holonyms(&self, id: &ConceptId) -> Vec<ConceptId>;

    /// Dictionary definition ("gloss") of a concept, if known.
    fn definition(&self, id: &ConceptId) -> Option<String>;

    /// Root hypernyms reachable from a concept (concepts whose hypernym
    /// chains end at themselves). The first element is used as graph root.
    fn root_hypernyms(&self, id: &ConceptId) -> Vec<ConceptId>;

    /// Lowest common hypernyms of two concepts: the deepest concepts in the
    /// shared hypernym closure. A concept counts as its own ancestor, so
    /// `lowest_common_hypernyms(c, c)` starts with `c` itself. The first
    /// element is used for depth scoring.
    fn lowest_common_hypernyms(&self, a: &ConceptId, b: &ConceptId) -> Vec<ConceptId>;
}
