//! Concept identifiers and immutable concept records.
//!
//! The core never mutates a [`Concept`]; everything is sourced from the
//! ontology provider. Graphs are keyed by [`ConceptId`] strings rather than
//! provider object identity, so the graph layer has no dependency on how the
//! ontology represents its nodes internally.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable string identifier for an ontology concept (e.g. `"car.n.01"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConceptId(String);

impl ConceptId {
    /// Create a concept id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConceptId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Part of speech of a concept, WordNet-style single-letter tags on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    #[serde(rename = "n")]
    Noun,
    #[serde(rename = "v")]
    Verb,
    #[serde(rename = "a")]
    Adjective,
    #[serde(rename = "r")]
    Adverb,
}

/// An immutable ontology node: identifier, part of speech, dictionary
/// definition, and the relation families used for closure construction.
///
/// Relation lists hold ids, not nested records; the provider resolves them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    /// Stable identifier.
    pub id: ConceptId,
    /// Part of speech.
    pub pos: PartOfSpeech,
    /// Dictionary definition ("gloss").
    #[serde(default)]
    pub definition: String,
    /// Direct hypernyms (more general concepts).
    #[serde(default)]
    pub hypernyms: Vec<ConceptId>,
    /// Instance hypernyms (class membership for named entities).
    #[serde(default)]
    pub instance_hypernyms: Vec<ConceptId>,
    /// Direct hyponyms (more specific concepts).
    #[serde(default)]
    pub hyponyms: Vec<ConceptId>,
    /// Part meronyms (component parts).
    #[serde(default)]
    pub part_meronyms: Vec<ConceptId>,
    /// Substance meronyms (constituent substances).
    #[serde(default)]
    pub substance_meronyms: Vec<ConceptId>,
    /// Part holonyms (wholes this concept is a part of).
    #[serde(default)]
    pub part_holonyms: Vec<ConceptId>,
    /// Substance holonyms (wholes this concept is a substance of).
    #[serde(default)]
    pub substance_holonyms: Vec<ConceptId>,
}

impl Concept {
    /// Create a bare noun concept with a definition and no relations.
    pub fn noun(id: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            id: ConceptId::new(id),
            pos: PartOfSpeech::Noun,
            definition: definition.into(),
            hypernyms: Vec::new(),
            instance_hypernyms: Vec::new(),
            hyponyms: Vec::new(),
            part_meronyms: Vec::new(),
            substance_meronyms: Vec::new(),
            part_holonyms: Vec::new(),
            substance_holonyms: Vec::new(),
        }
    }

    /// Set the direct hypernyms.
    pub fn with_hypernyms<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hypernyms = ids.into_iter().map(ConceptId::new).collect();
        self
    }

    /// Set the instance hypernyms.
    pub fn with_instance_hypernyms<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instance_hypernyms = ids.into_iter().map(ConceptId::new).collect();
        self
    }

    /// Set the direct hyponyms.
    pub fn with_hyponyms<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hyponyms = ids.into_iter().map(ConceptId::new).collect();
        self
    }

    /// Set the part meronyms.
    pub fn with_part_meronyms<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.part_meronyms = ids.into_iter().map(ConceptId::new).collect();
        self
    }

    /// Set the part holonyms.
    pub fn with_part_holonyms<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.part_holonyms = ids.into_iter().map(ConceptId::new).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concept_id_display_and_order() {
        let a = ConceptId::new("apple.n.01");
        let b = ConceptId::new("banana.n.01");
        assert_eq!(a.to_string(), "apple.n.01");
        assert!(a < b);
    }

    #[test]
    fn pos_serde_uses_single_letter_tags() {
        let json = serde_json::to_string(&PartOfSpeech::Noun).unwrap();
        assert_eq!(json, "\"n\"");
        let pos: PartOfSpeech = serde_json::from_str("\"v\"").unwrap();
        assert_eq!(pos, PartOfSpeech::Verb);
    }

    #[test]
    fn concept_deserializes_with_missing_relation_lists() {
        let json = r#"{"id": "car.n.01", "pos": "n", "definition": "a motor vehicle"}"#;
        let c: Concept = serde_json::from_str(json).unwrap();
        assert_eq!(c.id.as_str(), "car.n.01");
        assert!(c.hypernyms.is_empty());
        assert!(c.substance_holonyms.is_empty());
    }

    #[test]
    fn builder_methods_fill_relations() {
        let c = Concept::noun("car.n.01", "a motor vehicle")
            .with_hypernyms(["motor_vehicle.n.01"])
            .with_part_meronyms(["wheel.n.01", "engine.n.01"]);
        assert_eq!(c.hypernyms.len(), 1);
        assert_eq!(c.part_meronyms.len(), 2);
    }
}
