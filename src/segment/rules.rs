//! Per-language sentence boundary rules
//!
//! Each language gets a small rule set: which characters terminate a
//! sentence, which abbreviations suppress a period boundary, and which
//! enclosure pairs (quotes, brackets) suppress boundaries while open.

use crate::locale::Language;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// English abbreviations that end in a period without ending a sentence
///
/// Lowercased, stored without the trailing period. Multi-dot forms like
/// "e.g" cover "e.g." after the token scan strips the final dot.
static ENGLISH_ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut s = HashSet::new();
    for abbr in [
        // Titles
        "mr", "mrs", "ms", "dr", "prof", "rev", "hon", "st", "sr", "jr",
        // Latin
        "e.g", "i.e", "etc", "vs", "cf", "al", "ca",
        // Measures and misc
        "no", "vol", "pp", "approx", "dept", "est", "fig", "min", "max",
        // Geography
        "u.s", "u.k", "u.s.a", "ave", "blvd", "rd", "mt",
        // Months
        "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept",
        "oct", "nov", "dec",
        // Business
        "inc", "ltd", "corp", "co",
    ] {
        s.insert(abbr);
    }
    s
});

static NO_ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(HashSet::new);

/// Boundary rules for one language
pub struct LanguageRules {
    terminators: &'static [char],
    abbreviations: &'static Lazy<HashSet<&'static str>>,
    /// Opening/closing enclosure pairs tracked during the scan
    enclosures: &'static [(char, char)],
    /// Closing marks that may trail a terminator and still belong to the
    /// finished sentence (e.g. `He said "Stop."`)
    trailing_closers: &'static [char],
}

const ENGLISH_ENCLOSURES: &[(char, char)] = &[
    ('(', ')'),
    ('[', ']'),
    ('{', '}'),
    ('\u{201C}', '\u{201D}'), // curly double quotes
    ('\u{2018}', '\u{2019}'), // curly single quotes
];

const JAPANESE_ENCLOSURES: &[(char, char)] = &[
    ('\u{300C}', '\u{300D}'), // 「」
    ('\u{300E}', '\u{300F}'), // 『』
    ('（', '）'),
    ('(', ')'),
];

const ENGLISH_TERMINATORS: &[char] = &['.', '!', '?', '\u{2026}'];
const JAPANESE_TERMINATORS: &[char] = &['。', '！', '？', '.', '!', '?'];

const ENGLISH_TRAILING: &[char] = &['"', '\'', ')', ']', '\u{201D}', '\u{2019}'];
const JAPANESE_TRAILING: &[char] = &['\u{300D}', '\u{300F}', '）', ')', '"'];

static ENGLISH_RULES: LanguageRules = LanguageRules {
    terminators: ENGLISH_TERMINATORS,
    abbreviations: &ENGLISH_ABBREVIATIONS,
    enclosures: ENGLISH_ENCLOSURES,
    trailing_closers: ENGLISH_TRAILING,
};

static JAPANESE_RULES: LanguageRules = LanguageRules {
    terminators: JAPANESE_TERMINATORS,
    abbreviations: &NO_ABBREVIATIONS,
    enclosures: JAPANESE_ENCLOSURES,
    trailing_closers: JAPANESE_TRAILING,
};

impl LanguageRules {
    /// Rules for a language
    pub fn for_language(language: Language) -> &'static LanguageRules {
        match language {
            Language::English => &ENGLISH_RULES,
            Language::Japanese => &JAPANESE_RULES,
        }
    }

    pub fn is_terminator(&self, ch: char) -> bool {
        self.terminators.contains(&ch)
    }

    pub fn is_trailing_closer(&self, ch: char) -> bool {
        self.trailing_closers.contains(&ch)
    }

    /// Opening enclosure character?
    pub fn opens_enclosure(&self, ch: char) -> Option<usize> {
        self.enclosures.iter().position(|&(open, _)| open == ch)
    }

    /// Closing enclosure character?
    pub fn closes_enclosure(&self, ch: char) -> Option<usize> {
        self.enclosures.iter().position(|&(_, close)| close == ch)
    }

    /// Does the token before a period mark a known abbreviation?
    ///
    /// `token` is the run of word characters (including internal dots)
    /// immediately preceding the period, e.g. "Dr" or "e.g".
    pub fn is_abbreviation(&self, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }
        // Single capital letters ("J. Smith") read as initials
        if token.chars().count() == 1 && token.chars().all(|c| c.is_uppercase()) {
            return true;
        }
        self.abbreviations.contains(token.to_lowercase().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_terminators() {
        let rules = LanguageRules::for_language(Language::English);
        assert!(rules.is_terminator('.'));
        assert!(rules.is_terminator('?'));
        assert!(rules.is_terminator('!'));
        assert!(!rules.is_terminator(','));
    }

    #[test]
    fn test_abbreviation_lookup() {
        let rules = LanguageRules::for_language(Language::English);
        assert!(rules.is_abbreviation("Dr"));
        assert!(rules.is_abbreviation("e.g"));
        assert!(rules.is_abbreviation("etc"));
        // Single initials
        assert!(rules.is_abbreviation("J"));
        assert!(!rules.is_abbreviation("world"));
        assert!(!rules.is_abbreviation(""));
    }

    #[test]
    fn test_japanese_terminators() {
        let rules = LanguageRules::for_language(Language::Japanese);
        assert!(rules.is_terminator('。'));
        assert!(rules.is_terminator('！'));
        // ASCII terminators accepted in mixed text
        assert!(rules.is_terminator('.'));
    }

    #[test]
    fn test_enclosure_pairs() {
        let rules = LanguageRules::for_language(Language::English);
        let idx = rules.opens_enclosure('(').unwrap();
        assert_eq!(rules.closes_enclosure(')'), Some(idx));
        assert!(rules.opens_enclosure('x').is_none());
    }
}
