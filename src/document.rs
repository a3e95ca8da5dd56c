//! Canonical SSML document construction
//!
//! Builds the canonical skeleton from raw text:
//!
//! ```text
//! <?xml version="1.0"?>
//! <speak xml:lang="en-US"><p><s id="sentence-0">…</s><s id="sentence-1">…</s></p></speak>
//! ```
//!
//! One `<s>` element per segmented sentence, each carrying a unique
//! `sentence-<index>` id in segmentation order. Building is pure: the
//! same `(text, locale, options)` always produces a structurally
//! identical document.

use crate::error::{Result, SsmlError};
use crate::locale::Locale;
use crate::markup::{parse, serialize, Element, ROOT_ELEMENT};
use crate::segment::segment;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches canonical sentence ids and captures the index
static SENTENCE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^sentence-(\d+)$").expect("sentence id pattern"));

/// The canonical id for a sentence position
pub fn sentence_id(index: usize) -> String {
    format!("sentence-{}", index)
}

/// Parse a canonical sentence id back to its index
pub fn parse_sentence_id(id: &str) -> Option<usize> {
    SENTENCE_ID_RE
        .captures(id)
        .and_then(|caps| caps[1].parse().ok())
}

/// Options controlling document construction
///
/// Defaults produce the canonical shape with a `<p>` wrapper and no
/// prosody element.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Wrap sentences in a `<p>` container (on unless disabled)
    pub flat: bool,
    /// Emit a `<prosody rate="…">` wrapper when set
    pub rate: Option<String>,
    /// Emit a `<prosody pitch="…">` wrapper when set
    pub pitch: Option<String>,
}

impl BuildOptions {
    fn wants_prosody(&self) -> bool {
        self.rate.is_some() || self.pitch.is_some()
    }
}

/// An SSML document owning its whole node tree
///
/// Nodes never escape individually; callers receive the document or its
/// serialized form.
#[derive(Debug, Clone)]
pub struct SsmlDocument {
    root: Element,
}

impl SsmlDocument {
    /// Build the canonical document from raw text
    pub fn build(text: &str, locale: &Locale, options: &BuildOptions) -> Self {
        let spans = segment(text, locale);
        debug!(
            "building document: {} sentences, locale {}",
            spans.len(),
            locale.tag()
        );

        let mut sentences = Vec::with_capacity(spans.len());
        for span in &spans {
            let mut s = Element::new("s");
            s.set_attr("id", &sentence_id(span.index));
            s.push_text(&span.text);
            sentences.push(s);
        }

        let mut container = if options.flat {
            None
        } else {
            Some(Element::new("p"))
        };
        let mut root = Element::new(ROOT_ELEMENT);
        root.set_attr("xml:lang", locale.tag());

        let inner = container.as_mut().unwrap_or(&mut root);
        for s in sentences {
            inner.push_element(s);
        }

        if options.wants_prosody() {
            let mut prosody = Element::new("prosody");
            if let Some(rate) = &options.rate {
                prosody.set_attr("rate", rate);
            }
            if let Some(pitch) = &options.pitch {
                prosody.set_attr("pitch", pitch);
            }
            if let Some(p) = container.take() {
                prosody.push_element(p);
            } else {
                prosody.children = std::mem::take(&mut root.children);
            }
            root.push_element(prosody);
        } else if let Some(p) = container.take() {
            root.push_element(p);
        }

        Self { root }
    }

    /// Adopt an already-parsed tree as a document
    ///
    /// Used when classification decides an input is already well-formed
    /// and must be kept as-is.
    pub fn from_root(root: Element) -> Self {
        Self { root }
    }

    /// Strictly re-parse serialized output
    ///
    /// Unlike normalization this surfaces parse failures as hard errors;
    /// input claimed to be a document is never silently rebuilt.
    pub fn parse(input: &str) -> Result<Self> {
        let root = parse(input)?;
        if root.name != ROOT_ELEMENT {
            return Err(SsmlError::Parse(format!(
                "expected <{}> document, found <{}>",
                ROOT_ELEMENT, root.name
            )));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Sentence elements in document order
    pub fn sentence_elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_sentences(&self.root, &mut out);
        out
    }

    /// Number of sentence nodes
    pub fn sentence_count(&self) -> usize {
        self.sentence_elements().len()
    }

    /// Visible text of every sentence, in document order
    pub fn sentences(&self) -> Vec<String> {
        self.sentence_elements()
            .iter()
            .map(|s| s.visible_text())
            .collect()
    }

    /// True when the document has no sentence nodes
    pub fn is_empty(&self) -> bool {
        self.sentence_elements().is_empty()
    }

    /// Find the sentence node at an index
    pub fn sentence_mut(&mut self, index: usize) -> Option<&mut Element> {
        let id = sentence_id(index);
        self.root.find_by_id_mut(&id)
    }

    /// Resolve literal sentence text to the first matching index
    pub fn index_of_text(&self, text: &str) -> Option<usize> {
        self.sentence_elements()
            .iter()
            .find(|s| s.visible_text() == text)
            .and_then(|s| s.attr("id"))
            .and_then(parse_sentence_id)
    }

    /// Serialize to the canonical string form
    pub fn to_ssml(&self) -> String {
        serialize(&self.root)
    }
}

fn collect_sentences<'a>(el: &'a Element, out: &mut Vec<&'a Element>) {
    if el.name == "s" && el.attr("id").is_some_and(|id| parse_sentence_id(id).is_some()) {
        out.push(el);
        return;
    }
    for child in el.child_elements() {
        collect_sentences(child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{classify, Classification};

    fn en() -> Locale {
        Locale::new("en-US")
    }

    #[test]
    fn test_canonical_shape() {
        let doc = SsmlDocument::build("Hello world. Goodbye now.", &en(), &BuildOptions::default());
        assert_eq!(
            doc.to_ssml(),
            "<?xml version=\"1.0\"?><speak xml:lang=\"en-US\"><p>\
             <s id=\"sentence-0\">Hello world.</s>\
             <s id=\"sentence-1\">Goodbye now.</s></p></speak>"
        );
    }

    #[test]
    fn test_ids_unique_and_positional() {
        let doc = SsmlDocument::build("One. Two. Three.", &en(), &BuildOptions::default());
        let ids: Vec<&str> = doc
            .sentence_elements()
            .iter()
            .map(|s| s.attr("id").unwrap())
            .collect();
        assert_eq!(ids, vec!["sentence-0", "sentence-1", "sentence-2"]);
    }

    #[test]
    fn test_empty_input_is_valid_empty_document() {
        let doc = SsmlDocument::build("", &en(), &BuildOptions::default());
        assert!(doc.is_empty());
        assert_eq!(doc.sentence_count(), 0);
        // Serializes to a valid document, not an error
        let reparsed = SsmlDocument::parse(&doc.to_ssml()).expect("empty doc should re-parse");
        assert_eq!(reparsed.sentence_count(), 0);
    }

    #[test]
    fn test_flat_option_drops_paragraph() {
        let options = BuildOptions {
            flat: true,
            ..Default::default()
        };
        let doc = SsmlDocument::build("Hi.", &en(), &options);
        assert!(!doc.to_ssml().contains("<p>"));
        assert_eq!(doc.sentence_count(), 1);
    }

    #[test]
    fn test_prosody_wrapper() {
        let options = BuildOptions {
            flat: false,
            rate: Some("fast".to_string()),
            pitch: Some("low".to_string()),
        };
        let doc = SsmlDocument::build("Hi.", &en(), &options);
        let ssml = doc.to_ssml();
        assert!(ssml.contains("<prosody rate=\"fast\" pitch=\"low\"><p>"));
        assert_eq!(doc.sentence_count(), 1);
    }

    #[test]
    fn test_build_is_pure() {
        let a = SsmlDocument::build("Same in. Same out.", &en(), &BuildOptions::default());
        let b = SsmlDocument::build("Same in. Same out.", &en(), &BuildOptions::default());
        assert_eq!(a.to_ssml(), b.to_ssml());
    }

    #[test]
    fn test_own_output_classifies_well_formed() {
        let doc = SsmlDocument::build("Hello there. How are you?", &en(), &BuildOptions::default());
        assert_eq!(
            classify(&doc.to_ssml()),
            Classification::WellFormedDocument
        );
    }

    #[test]
    fn test_index_of_text() {
        let doc = SsmlDocument::build("Hello world. Goodbye now.", &en(), &BuildOptions::default());
        assert_eq!(doc.index_of_text("Goodbye now."), Some(1));
        assert_eq!(doc.index_of_text("Never said."), None);
    }

    #[test]
    fn test_strict_parse_rejects_non_document() {
        assert!(SsmlDocument::parse("<s>loose</s>").is_err());
        assert!(SsmlDocument::parse("garbage <").is_err());
    }
}
