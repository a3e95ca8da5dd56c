//! Locale tag handling
//!
//! Parses BCP-47-style tags like "en-US" or "ja" into a language used to
//! select segmentation rules, keeping the full tag for the `xml:lang`
//! attribute on serialized documents.

use std::fmt;

/// Languages with dedicated sentence-boundary rules
///
/// Anything unrecognized falls back to English rules, which are a
/// reasonable default for Latin-script text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Japanese,
}

impl Language {
    /// Map a language subtag to a rule set
    pub fn from_code(code: &str) -> Self {
        match code.to_lowercase().as_str() {
            "en" | "eng" | "english" => Language::English,
            "ja" | "jpn" | "japanese" => Language::Japanese,
            _ => Language::English,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Japanese => "ja",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A locale tag as supplied by the caller, e.g. "en-US"
///
/// The full tag is preserved verbatim for serialization; only the primary
/// language subtag participates in rule selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    tag: String,
    language: Language,
}

impl Locale {
    /// Parse a locale tag. Accepts "en", "en-US", "ja_JP" and similar;
    /// an empty tag becomes "en-US".
    pub fn new(tag: &str) -> Self {
        let tag = if tag.trim().is_empty() {
            "en-US".to_string()
        } else {
            tag.trim().to_string()
        };
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default();
        Self {
            language: Language::from_code(primary),
            tag,
        }
    }

    /// The verbatim tag, used for `xml:lang`
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The language whose boundary rules apply
    pub fn language(&self) -> Language {
        self.language
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Locale::new(tag)
    }
}
