//! Input classification
//!
//! Decides, in a single side-effect-free pass, what an input string is:
//! a complete SSML document (with or without pause markers), a markup
//! fragment rooted at something other than `<speak>`, or not parseable
//! markup at all. Classification never builds a document and never calls
//! back into itself; construction is a separate step the caller invokes
//! at most once.

use crate::markup::node::Element;
use crate::markup::parser::parse;
use log::debug;

/// Canonical root element name for SSML documents
pub const ROOT_ELEMENT: &str = "speak";
/// Pause marker element name
pub const PAUSE_ELEMENT: &str = "break";

/// Outcome of classifying an input string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Well-formed document that already contains at least one pause
    /// marker; used as-is, never rebuilt
    WellFormedWithPause,
    /// Well-formed document rooted at `<speak>`
    WellFormedDocument,
    /// Parseable markup rooted at something else
    Fragment,
    /// Not parseable as markup; treated as plain text
    Invalid,
}

/// Classify an input string
///
/// Total ordering of checks: parse failure, then pause-marker presence
/// anywhere in the tree, then root element name.
pub fn classify(input: &str) -> Classification {
    let root = match parse(input) {
        Ok(root) => root,
        Err(e) => {
            debug!("classify: parse failed ({}), input is plain text", e);
            return Classification::Invalid;
        }
    };
    let result = classify_tree(&root);
    debug!("classify: {:?} (root <{}>)", result, root.name);
    result
}

/// Classify an already-parsed tree
pub fn classify_tree(root: &Element) -> Classification {
    if root.has_descendant(PAUSE_ELEMENT) {
        Classification::WellFormedWithPause
    } else if root.name == ROOT_ELEMENT {
        Classification::WellFormedDocument
    } else {
        Classification::Fragment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input() {
        assert_eq!(classify("not <valid"), Classification::Invalid);
        assert_eq!(classify("plain sentence here."), Classification::Invalid);
        assert_eq!(classify(""), Classification::Invalid);
    }

    #[test]
    fn test_well_formed_document() {
        let input = r#"<speak xml:lang="en-US"><s id="sentence-0">Hi.</s></speak>"#;
        assert_eq!(classify(input), Classification::WellFormedDocument);
    }

    #[test]
    fn test_pause_takes_priority_over_root() {
        // The pause check runs before the root check, so a document with
        // a break anywhere classifies as WellFormedWithPause
        let input = r#"<speak><s id="sentence-0"><break time="200ms"/>Hi.</s></speak>"#;
        assert_eq!(classify(input), Classification::WellFormedWithPause);

        // Even a bare fragment containing a break
        let fragment = r#"<s><break time="100ms"/>Hi.</s>"#;
        assert_eq!(classify(fragment), Classification::WellFormedWithPause);
    }

    #[test]
    fn test_fragment() {
        assert_eq!(classify("<s>loose sentence</s>"), Classification::Fragment);
        assert_eq!(
            classify("<emphasis level=\"strong\">loud</emphasis>"),
            Classification::Fragment
        );
    }
}
