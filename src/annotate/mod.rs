//! Sentence annotation
//!
//! Inserts prosody-affecting elements into an existing document: pause
//! markers (`<break time="Nms"/>`) and emphasis wrappers
//! (`<emphasis level="…">`). Targets are addressed by sentence index or
//! by exact literal text; unresolved targets are reported, never silently
//! dropped. Every successful structural mutation appends a matching
//! record to the annotation registry; a failed resolution records
//! nothing.

pub mod registry;

use crate::document::{sentence_id, SsmlDocument};
use crate::error::{Result, SsmlError};
use crate::markup::{Element, Node, PAUSE_ELEMENT};
use log::debug;
use registry::{Annotation, AnnotationKind, AnnotationRegistry};
use serde::Serialize;
use std::fmt;

/// Emphasis strength, serialized as the SSML `level` attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmphasisLevel {
    Strong,
    Moderate,
    Reduced,
    None,
}

impl EmphasisLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmphasisLevel::Strong => "strong",
            EmphasisLevel::Moderate => "moderate",
            EmphasisLevel::Reduced => "reduced",
            EmphasisLevel::None => "none",
        }
    }
}

impl fmt::Display for EmphasisLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a sentence is addressed
///
/// Index addressing is the primary form; literal-text addressing is a
/// convenience that resolves to the first sentence whose visible text
/// equals the given string.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    Index(usize),
    Text(&'a str),
}

impl fmt::Display for Target<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Index(i) => write!(f, "index {}", i),
            Target::Text(t) => write!(f, "text {:?}", t),
        }
    }
}

/// Resolve a target to a sentence index
///
/// A document with no sentences at all yields `EmptyInput`; a document
/// that has sentences but none matching the target yields
/// `TargetNotFound`. Both addressing modes report failures the same way.
fn resolve(doc: &SsmlDocument, target: Target) -> Result<usize> {
    if doc.is_empty() {
        return Err(SsmlError::EmptyInput);
    }
    match target {
        Target::Index(index) => {
            if index < doc.sentence_count() {
                Ok(index)
            } else {
                Err(SsmlError::TargetNotFound(sentence_id(index)))
            }
        }
        Target::Text(text) => doc
            .index_of_text(text)
            .ok_or_else(|| SsmlError::TargetNotFound(format!("no sentence with text {:?}", text))),
    }
}

/// Insert a pause marker as the first child of the target sentence
///
/// The duration attribute is the literal `"<n>ms"` form. Calling twice on
/// the same target inserts two markers; de-duplication is deliberately
/// not performed, and the registry logs every insertion.
pub fn insert_pause(
    doc: &mut SsmlDocument,
    registry: &mut AnnotationRegistry,
    target: Target,
    duration_ms: u32,
) -> Result<usize> {
    let index = resolve(doc, target)?;
    let time = format!("{}ms", duration_ms);

    let sentence = doc
        .sentence_mut(index)
        .ok_or_else(|| SsmlError::TargetNotFound(sentence_id(index)))?;
    let mut marker = Element::new(PAUSE_ELEMENT);
    marker.set_attr("time", &time);
    sentence.children.insert(0, Node::Element(marker));

    debug!("inserted {} pause at sentence {}", time, index);
    registry.record(
        index,
        Annotation::new(index, AnnotationKind::Pause).with_attr("time", &time),
    );
    Ok(index)
}

/// Wrap the target sentence's text in an emphasis element
///
/// The sentence's visible text ends up as the child of a single
/// `<emphasis level="…">` wrapper. Three cases, handled as explicit
/// branches rather than recovery from failed mutations:
/// - a plain text child is wrapped;
/// - an existing emphasis wrapper is replaced in place, keeping its
///   inner text (so re-applying with a different level is safe);
/// - a sentence with no text gets an empty wrapper.
/// Pause markers and other non-text children stay where they are.
pub fn apply_emphasis(
    doc: &mut SsmlDocument,
    registry: &mut AnnotationRegistry,
    target: Target,
    level: EmphasisLevel,
) -> Result<usize> {
    let index = resolve(doc, target)?;
    let sentence = doc
        .sentence_mut(index)
        .ok_or_else(|| SsmlError::TargetNotFound(sentence_id(index)))?;

    // Pull out the current text content, wherever it lives
    let mut text = String::new();
    let mut kept = Vec::with_capacity(sentence.children.len());
    for child in sentence.children.drain(..) {
        match child {
            Node::Text(t) => text.push_str(&t),
            Node::Element(el) if el.name == "emphasis" => {
                // Replace-in-place: the wrapper's inner text survives
                text.push_str(&el.visible_text());
            }
            other => kept.push(other),
        }
    }

    let mut wrapper = Element::new("emphasis");
    wrapper.set_attr("level", level.as_str());
    if !text.is_empty() {
        wrapper.push_text(&text);
    }
    kept.push(Node::Element(wrapper));
    sentence.children = kept;

    debug!("applied {} emphasis at sentence {}", level, index);
    registry.record(
        index,
        Annotation::new(index, AnnotationKind::Emphasis).with_attr("level", level.as_str()),
    );
    Ok(index)
}
