//! ssmlkit - Sentence-aware SSML normalization and annotation
//!
//! Turns arbitrary input text into canonical Speech Synthesis Markup
//! Language documents and annotates individual sentences with pauses and
//! emphasis, keeping a registry of what was applied where. The serialized
//! output is handed to an external speech-synthesis driver; this crate
//! does no audio I/O itself.

pub mod annotate;
pub mod document;
pub mod error;
pub mod locale;
pub mod markup;
pub mod segment;
pub mod session;

pub use annotate::registry::{Annotation, AnnotationKind, AnnotationRegistry};
pub use annotate::{EmphasisLevel, Target};
pub use document::{BuildOptions, SsmlDocument};
pub use error::{Result, SsmlError};
pub use locale::{Language, Locale};
pub use markup::{classify, Classification};
pub use segment::{segment, SentenceSpan};
pub use session::MarkupSession;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = "ssmlkit";
