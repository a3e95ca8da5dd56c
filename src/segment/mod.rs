//! Locale-aware sentence segmentation
//!
//! Splits raw text into an ordered sequence of sentence spans. Boundaries
//! follow per-language rules rather than naive punctuation splitting:
//! abbreviations ("Dr.", "e.g."), decimal numbers ("3.14") and terminators
//! inside open quotes or brackets do not end a sentence, and a closing
//! quote directly after a terminator still belongs to the finished
//! sentence.
//!
//! Segmentation is deterministic: the same `(text, locale)` always yields
//! the same spans in the same order, which annotation-by-index relies on.

pub mod rules;

use crate::locale::Locale;
use log::debug;
use rules::LanguageRules;

/// One sentence identified in the input text
///
/// `start`/`end` are byte offsets of the trimmed sentence in the original
/// string; `text` is the substring at that range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceSpan {
    /// 0-based position in segmentation order
    pub index: usize,
    /// The sentence text, leading/trailing whitespace trimmed
    pub text: String,
    /// Byte offset of the first char of the sentence
    pub start: usize,
    /// Byte offset one past the last char of the sentence
    pub end: usize,
}

/// Split `text` into sentence spans using the locale's boundary rules
///
/// Empty or whitespace-only input yields an empty vector.
pub fn segment(text: &str, locale: &Locale) -> Vec<SentenceSpan> {
    let rules = LanguageRules::for_language(locale.language());
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut spans = Vec::new();

    let mut sentence_start: Option<usize> = None;
    // Depth per enclosure pair index, plus a toggle for straight double
    // quotes which are their own opener and closer.
    let mut depths = vec![0usize; 8];
    let mut in_quote = false;

    let mut i = 0;
    while i < chars.len() {
        let (pos, ch) = chars[i];

        if sentence_start.is_none() {
            if ch.is_whitespace() {
                i += 1;
                continue;
            }
            sentence_start = Some(pos);
        }

        if ch == '"' {
            in_quote = !in_quote;
            i += 1;
            continue;
        }
        if let Some(pair) = rules.opens_enclosure(ch) {
            if rules.closes_enclosure(ch) != Some(pair) {
                bump(&mut depths, pair, 1);
                i += 1;
                continue;
            }
        }
        if let Some(pair) = rules.closes_enclosure(ch) {
            bump(&mut depths, pair, -1);
            i += 1;
            continue;
        }

        if rules.is_terminator(ch) && !suppressed(rules, &chars, i) {
            // Consume the whole terminator run ("?!", "...")
            let mut j = i + 1;
            while j < chars.len() && rules.is_terminator(chars[j].1) {
                j += 1;
            }
            // Closing quotes/brackets straight after a terminator belong
            // to the sentence; consuming them may close an enclosure.
            while j < chars.len() && rules.is_trailing_closer(chars[j].1) {
                let closer = chars[j].1;
                if closer == '"' {
                    in_quote = false;
                } else if let Some(pair) = rules.closes_enclosure(closer) {
                    bump(&mut depths, pair, -1);
                }
                j += 1;
            }

            let enclosed = in_quote || depths.iter().any(|&d| d > 0);
            if !enclosed {
                let end = if j < chars.len() { chars[j].0 } else { text.len() };
                let start = sentence_start.unwrap_or(pos);
                push_span(&mut spans, text, start, end);
                sentence_start = None;
            }
            i = j;
            continue;
        }

        i += 1;
    }

    // Trailing text without a terminator is still a sentence
    if let Some(start) = sentence_start {
        push_span(&mut spans, text, start, text.len());
    }

    debug!(
        "segmented {} bytes ({}) into {} sentences",
        text.len(),
        locale.tag(),
        spans.len()
    );
    spans
}

fn bump(depths: &mut [usize], pair: usize, delta: isize) {
    if let Some(d) = depths.get_mut(pair) {
        if delta > 0 {
            *d += 1;
        } else {
            *d = d.saturating_sub(1);
        }
    }
}

/// Should this terminator be ignored as a sentence boundary?
fn suppressed(rules: &LanguageRules, chars: &[(usize, char)], i: usize) -> bool {
    let ch = chars[i].1;
    if ch != '.' {
        return false;
    }
    // A period glued to a following alphanumeric never ends a sentence:
    // decimals ("3.14"), interior dots of "e.g." and "U.S.", hostnames.
    if let Some(&(_, next)) = chars.get(i + 1) {
        if next.is_alphanumeric() {
            return true;
        }
        if next == '.' {
            // Part of an ellipsis run, handled by the caller
            return false;
        }
    }
    // Abbreviation check: the run of letters and dots ending right
    // before this period
    let mut token = String::new();
    let mut k = i;
    while k > 0 {
        let prev = chars[k - 1].1;
        if prev.is_alphabetic() || prev == '.' {
            token.insert(0, prev);
            k -= 1;
        } else {
            break;
        }
    }
    rules.is_abbreviation(token.trim_end_matches('.'))
}

fn push_span(spans: &mut Vec<SentenceSpan>, text: &str, start: usize, end: usize) {
    let raw = &text[start..end];
    let trimmed = raw.trim_end();
    if trimmed.is_empty() {
        return;
    }
    let end = start + trimmed.len();
    spans.push(SentenceSpan {
        index: spans.len(),
        text: trimmed.to_string(),
        start,
        end,
    });
}
