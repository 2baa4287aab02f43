//! In-memory ontology backed by a JSON snapshot.
//!
//! A snapshot carries a flat list of concepts plus a word index mapping each
//! surface form to its ordered candidate concept ids. Root hypernyms and
//! lowest common hypernyms are derived from the hypernym relation on demand;
//! nothing is cached across queries.

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::concept::{Concept, ConceptId, PartOfSpeech};
use crate::error::OntologyError;

use super::OntologyPort;

/// On-disk snapshot format: all concepts plus the word → candidates index.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Every concept in the snapshot.
    pub concepts: Vec<Concept>,
    /// Surface word (lowercase) → ordered candidate concept ids.
    pub index: HashMap<String, Vec<ConceptId>>,
}

/// Ontology provider holding a full snapshot in memory.
pub struct MemoryOntology {
    concepts: HashMap<ConceptId, Concept>,
    index: HashMap<String, Vec<ConceptId>>,
}

impl MemoryOntology {
    /// Create an empty ontology (useful as a builder in tests).
    pub fn new() -> Self {
        Self {
            concepts: HashMap::new(),
            index: HashMap::new(),
        }
    }

    /// Build from a parsed snapshot.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut ont = Self::new();
        for concept in snapshot.concepts {
            ont.insert_concept(concept);
        }
        for (word, ids) in snapshot.index {
            ont.index_word(word, ids);
        }
        ont
    }

    /// Load a snapshot from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, OntologyError> {
        let data = std::fs::read_to_string(path).map_err(|source| OntologyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot: Snapshot =
            serde_json::from_str(&data).map_err(|e| OntologyError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        let ont = Self::from_snapshot(snapshot);
        debug!(
            concepts = ont.concepts.len(),
            words = ont.index.len(),
            "loaded ontology snapshot"
        );
        Ok(ont)
    }

    /// Insert a single concept, replacing any previous record with the same id.
    pub fn insert_concept(&mut self, concept: Concept) {
        self.concepts.insert(concept.id.clone(), concept);
    }

    /// Register the ordered candidate concepts for a surface word.
    pub fn index_word(&mut self, word: impl Into<String>, ids: Vec<ConceptId>) {
        self.index.insert(word.into().to_lowercase(), ids);
    }

    /// Number of concepts in the snapshot.
    pub fn concept_count(&self) -> usize {
        self.concepts.len()
    }

    fn relation<F>(&self, id: &ConceptId, select: F) -> Vec<ConceptId>
    where
        F: Fn(&Concept) -> &Vec<ConceptId>,
    {
        self.concepts
            .get(id)
            .map(|c| select(c).clone())
            .unwrap_or_default()
    }

    /// Direct hypernyms plus instance hypernyms: the upward taxonomy step.
    fn parents(&self, id: &ConceptId) -> Vec<ConceptId> {
        let mut out = self.relation(id, |c| &c.hypernyms);
        out.extend(self.relation(id, |c| &c.instance_hypernyms));
        out
    }

    /// Every concept in the hypernym closure of `id`, including `id` itself.
    /// BFS discovery order, cycle-safe.
    fn ancestor_closure(&self, id: &ConceptId) -> Vec<ConceptId> {
        let mut visited: HashSet<ConceptId> = HashSet::new();
        let mut order: Vec<ConceptId> = Vec::new();
        let mut queue: VecDeque<ConceptId> = VecDeque::new();
        visited.insert(id.clone());
        queue.push_back(id.clone());
        while let Some(c) = queue.pop_front() {
            order.push(c.clone());
            for p in self.parents(&c) {
                if visited.insert(p.clone()) {
                    queue.push_back(p);
                }
            }
        }
        order
    }

    /// Longest hypernym path length from `id` up to a root. Iterative
    /// post-order with a cycle guard; edges inside a cycle contribute nothing.
    fn taxonomy_depth(&self, id: &ConceptId) -> usize {
        let mut memo: HashMap<ConceptId, usize> = HashMap::new();
        let mut in_progress: HashSet<ConceptId> = HashSet::new();
        let mut stack: Vec<(ConceptId, bool)> = vec![(id.clone(), false)];
        while let Some((c, expanded)) = stack.pop() {
            if expanded {
                let depth = self
                    .parents(&c)
                    .iter()
                    .filter_map(|p| memo.get(p))
                    .max()
                    .map_or(0, |m| m + 1);
                memo.insert(c.clone(), depth);
                in_progress.remove(&c);
            } else {
                if memo.contains_key(&c) || !in_progress.insert(c.clone()) {
                    continue;
                }
                stack.push((c.clone(), true));
                for p in self.parents(&c) {
                    if !memo.contains_key(&p) && !in_progress.contains(&p) {
                        stack.push((p, false));
                    }
                }
            }
        }
        memo.get(id).copied().unwrap_or(0)
    }
}

impl Default for MemoryOntology {
    fn default() -> Self {
        Self::new()
    }
}

impl OntologyPort for MemoryOntology {
    fn candidates(&self, word: &str, pos: PartOfSpeech) -> Vec<ConceptId> {
        let Some(ids) = self.index.get(&word.to_lowercase()) else {
            return Vec::new();
        };
        ids.iter()
            .filter(|id| self.concepts.get(id).is_some_and(|c| c.pos == pos))
            .cloned()
            .collect()
    }

    fn hypernyms(&self, id: &ConceptId) -> Vec<ConceptId> {
        self.relation(id, |c| &c.hypernyms)
    }

    fn instance_hypernyms(&self, id: &ConceptId) -> Vec<ConceptId> {
        self.relation(id, |c| &c.instance_hypernyms)
    }

    fn hyponyms(&self, id: &ConceptId) -> Vec<ConceptId> {
        self.relation(id, |c| &c.hyponyms)
    }

    fn part_meronyms(&self, id: &ConceptId) -> Vec<ConceptId> {
        self.relation(id, |c| &c.part_meronyms)
    }

    fn substance_meronyms(&self, id: &ConceptId) -> Vec<ConceptId> {
        self.relation(id, |c| &c.substance_meronyms)
    }

    fn part_holonyms(&self, id: &ConceptId) -> Vec<ConceptId> {
        self.relation(id, |c| &c.part_holonyms)
    }

    fn substance_holonyms(&self, id: &ConceptId) -> Vec<ConceptId> {
        self.relation(id, |c| &c.substance_holonyms)
    }

    fn definition(&self, id: &ConceptId) -> Option<String> {
        self.concepts.get(id).map(|c| c.definition.clone())
    }

    fn root_hypernyms(&self, id: &ConceptId) -> Vec<ConceptId> {
        let mut roots: Vec<ConceptId> = self
            .ancestor_closure(id)
            .into_iter()
            .filter(|c| self.parents(c).is_empty())
            .collect();
        roots.sort();
        roots
    }

    fn lowest_common_hypernyms(&self, a: &ConceptId, b: &ConceptId) -> Vec<ConceptId> {
        let closure_a: HashSet<ConceptId> = self.ancestor_closure(a).into_iter().collect();
        let common: Vec<ConceptId> = self
            .ancestor_closure(b)
            .into_iter()
            .filter(|c| closure_a.contains(c))
            .collect();
        if common.is_empty() {
            return Vec::new();
        }
        let max_depth = common
            .iter()
            .map(|c| self.taxonomy_depth(c))
            .max()
            .unwrap_or(0);
        let mut deepest: Vec<ConceptId> = common
            .into_iter()
            .filter(|c| self.taxonomy_depth(c) == max_depth)
            .collect();
        deepest.sort();
        deepest
    }
}
