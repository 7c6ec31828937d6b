use once_cell::sync::Lazy;
use regex::Regex;

use crate::counting::classifier;

// @module: Dialogue span extraction

// Corner brackets 「」, double corner brackets 『』, and CJK double
// quotes “”. Non-nesting: the first closing marker of either family
// ends the span. Quotes inside quotes are rare enough in this domain
// that a flat scan is an accepted approximation.
static DIALOGUE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[「『“]([^」』”]*)[」』”]").unwrap());

/// Concatenated content of every dialogue span in already-stripped text.
///
/// An opening bracket with no closing marker contributes nothing.
pub fn extract_dialogue(text: &str) -> String {
    let mut dialogue = String::new();

    for caps in DIALOGUE_REGEX.captures_iter(text) {
        if let Some(span) = caps.get(1) {
            dialogue.push_str(span.as_str());
        }
    }

    dialogue
}

/// Count the characters spoken in dialogue.
///
/// Span contents go through the regular character classifier, so the
/// brackets themselves are excluded like all other punctuation.
pub fn count_dialogue(text: &str) -> usize {
    classifier::count_countable(&extract_dialogue(text))
}
