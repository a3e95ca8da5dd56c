//! Normalization-and-annotation session
//!
//! One session owns one document and one annotation registry; it is the
//! unit of exclusive ownership (spin up independent sessions for
//! concurrent work, nothing is shared). Input text flows through
//! classification once, is rebuilt into the canonical form when needed,
//! then annotated in place and finally serialized for the external
//! speech-synthesis driver.

use crate::annotate::registry::{Annotation, AnnotationRegistry};
use crate::annotate::{apply_emphasis, insert_pause, EmphasisLevel, Target};
use crate::document::{BuildOptions, SsmlDocument};
use crate::error::Result;
use crate::locale::Locale;
use crate::markup::{classify::classify_tree, parse, Classification};
use log::{debug, info};

/// A single normalize-then-annotate session
pub struct MarkupSession {
    locale: Locale,
    options: BuildOptions,
    document: SsmlDocument,
    registry: AnnotationRegistry,
}

impl MarkupSession {
    /// Create a session with an empty document
    pub fn new(locale: Locale) -> Self {
        Self::with_options(locale, BuildOptions::default())
    }

    pub fn with_options(locale: Locale, options: BuildOptions) -> Self {
        let document = SsmlDocument::build("", &locale, &options);
        Self {
            locale,
            options,
            document,
            registry: AnnotationRegistry::new(),
        }
    }

    /// Normalize input into this session's document
    ///
    /// Classification runs exactly once. Already well-formed documents
    /// (with or without pause markers) are adopted as-is; fragments and
    /// unparseable input are recovered locally by rebuilding the
    /// canonical document from the raw text. Recovery never re-enters
    /// classification.
    pub fn normalize(&mut self, input: &str) -> &mut Self {
        self.document = match parse(input) {
            Ok(root) => match classify_tree(&root) {
                Classification::WellFormedWithPause | Classification::WellFormedDocument => {
                    info!("normalize: input is already a well-formed document, keeping as-is");
                    SsmlDocument::from_root(root)
                }
                Classification::Fragment | Classification::Invalid => {
                    debug!("normalize: markup fragment, rebuilding from raw text");
                    SsmlDocument::build(input, &self.locale, &self.options)
                }
            },
            Err(e) => {
                debug!("normalize: not markup ({}), building from plain text", e);
                SsmlDocument::build(input, &self.locale, &self.options)
            }
        };
        self
    }

    /// Strictly re-ingest previously serialized output
    ///
    /// Parse failures surface as hard errors; there is no fallback
    /// rebuild for input that is supposed to already be a document.
    pub fn load_document(&mut self, input: &str) -> Result<&mut Self> {
        self.document = SsmlDocument::parse(input)?;
        Ok(self)
    }

    /// Insert a pause marker at the target sentence
    pub fn insert_pause(&mut self, target: Target, duration_ms: u32) -> Result<usize> {
        insert_pause(&mut self.document, &mut self.registry, target, duration_ms)
    }

    /// Apply an emphasis wrapper at the target sentence
    pub fn apply_emphasis(&mut self, target: Target, level: EmphasisLevel) -> Result<usize> {
        apply_emphasis(&mut self.document, &mut self.registry, target, level)
    }

    /// Annotations applied to a sentence so far
    pub fn annotations(&self, index: usize) -> &[Annotation] {
        self.registry.get(index)
    }

    pub fn registry(&self) -> &AnnotationRegistry {
        &self.registry
    }

    pub fn document(&self) -> &SsmlDocument {
        &self.document
    }

    /// Visible text of each sentence in the current document
    pub fn sentences(&self) -> Vec<String> {
        self.document.sentences()
    }

    /// Serialize the current document for the synthesis driver
    pub fn to_ssml(&self) -> String {
        self.document.to_ssml()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> MarkupSession {
        MarkupSession::new(Locale::new("en-US"))
    }

    #[test]
    fn test_normalize_plain_text() {
        let mut s = session();
        s.normalize("Hello world. Goodbye now.");
        assert_eq!(s.sentences(), vec!["Hello world.", "Goodbye now."]);
    }

    #[test]
    fn test_normalize_keeps_well_formed_input() {
        let input = r#"<speak xml:lang="en-GB"><s id="sentence-0">Kept.</s></speak>"#;
        let mut s = session();
        s.normalize(input);
        // Adopted as-is: the original language attribute survives
        assert!(s.to_ssml().contains("xml:lang=\"en-GB\""));
        assert_eq!(s.sentences(), vec!["Kept."]);
    }

    #[test]
    fn test_normalize_rebuilds_fragment() {
        let mut s = session();
        s.normalize("<emphasis>just a fragment</emphasis>");
        // The raw text (markup and all) becomes one plain sentence
        assert_eq!(s.document().sentence_count(), 1);
        assert!(s.to_ssml().starts_with("<?xml version=\"1.0\"?><speak"));
    }

    #[test]
    fn test_full_session_flow() {
        let mut s = session();
        s.normalize("Hello world. Goodbye now.");
        s.insert_pause(Target::Index(1), 500).unwrap();
        s.apply_emphasis(Target::Index(0), EmphasisLevel::Strong).unwrap();

        let ssml = s.to_ssml();
        assert!(ssml.contains("<break time=\"500ms\"/>"));
        assert!(ssml.contains("<emphasis level=\"strong\">Hello world.</emphasis>"));
        assert_eq!(s.annotations(0).len(), 1);
        assert_eq!(s.annotations(1).len(), 1);
    }

    #[test]
    fn test_load_document_is_strict() {
        let mut s = session();
        assert!(s.load_document("definitely not < xml").is_err());

        let output = s.normalize("Round trip.").to_ssml();
        assert!(s.load_document(&output).is_ok());
        assert_eq!(s.sentences(), vec!["Round trip."]);
    }
}
