//! Annotation bookkeeping
//!
//! Records which annotations were applied to which sentence. The registry
//! mirrors the structural mutations made on the document but is never the
//! source of truth for rendering; it exists for idempotent re-annotation
//! checks and introspection, and never touches the document itself.

use serde::Serialize;
use std::collections::BTreeMap;

/// The two annotation element kinds the annotator inserts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    Pause,
    Emphasis,
}

/// One applied annotation
///
/// `attributes` keeps insertion order, matching the order the attributes
/// were written onto the inserted element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub sentence_index: usize,
    pub kind: AnnotationKind,
    pub attributes: Vec<(String, String)>,
}

impl Annotation {
    pub fn new(sentence_index: usize, kind: AnnotationKind) -> Self {
        Self {
            sentence_index,
            kind,
            attributes: Vec::new(),
        }
    }

    /// Append an attribute, keeping order
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }
}

/// Append-only log of annotations per sentence index
///
/// `record` always stores into the sequence held by the map, never a
/// mutating call's return value, so earlier entries are never lost.
#[derive(Debug, Default, Serialize)]
pub struct AnnotationRegistry {
    entries: BTreeMap<usize, Vec<Annotation>>,
}

impl AnnotationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an annotation to the log for `index`, creating the log if
    /// this is the first annotation there
    pub fn record(&mut self, index: usize, annotation: Annotation) {
        self.entries.entry(index).or_default().push(annotation);
    }

    /// Annotations applied to a sentence, oldest first
    ///
    /// Unseen indexes yield an empty slice, never an error.
    pub fn get(&self, index: usize) -> &[Annotation] {
        self.entries.get(&index).map_or(&[], Vec::as_slice)
    }

    /// Total number of recorded annotations
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sentence indexes that have at least one annotation, ascending
    pub fn annotated_indexes(&self) -> Vec<usize> {
        self.entries.keys().copied().collect()
    }

    /// Export the registry as JSON for external inspection
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }
}
