/*!
 * Manuscript character counting.
 *
 * Two sequential stages, both pure functions over a string: markup
 * stripping (`markup`) followed by character classification
 * (`classifier`) and dialogue extraction (`dialogue`). Counting rules:
 *
 * - Only character elements count: hiragana, katakana, CJK ideographs,
 *   hangul, and alphanumerics (full-width or half-width).
 * - Punctuation, symbols and whitespace are excluded everywhere.
 * - Dialogue is the text inside 「」/『』 or CJK double quotes; narration
 *   is everything else that counts.
 */

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

pub mod classifier;
pub mod dialogue;
pub mod markup;

pub use classifier::{Script, ScriptBreakdown};
pub use markup::strip_markup;

/// Total/dialogue/narration character counts for one manuscript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResult {
    /// Total counted characters
    pub total: usize,

    /// Characters inside dialogue brackets
    pub dialogue: usize,

    /// Counted characters outside dialogue brackets
    pub narration: usize,
}

impl AddAssign for CountResult {
    fn add_assign(&mut self, other: Self) {
        self.total += other.total;
        self.dialogue += other.dialogue;
        self.narration += other.narration;
    }
}

impl Add for CountResult {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl Sum for CountResult {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Count result extended with the per-script breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedCount {
    /// Total/dialogue/narration counts
    #[serde(flatten)]
    pub counts: CountResult,

    /// Per-script character breakdown
    pub scripts: ScriptBreakdown,
}

impl AddAssign for DetailedCount {
    fn add_assign(&mut self, other: Self) {
        self.counts += other.counts;
        self.scripts += other.scripts;
    }
}

/// Count the manuscript characters in a raw Markdown document.
///
/// Markup is stripped first, then only whitelisted character elements
/// are counted. Empty input yields zero.
pub fn count_chars(content: &str) -> usize {
    if content.is_empty() {
        return 0;
    }

    let text = markup::strip_markup(content);
    classifier::count_countable(&text)
}

/// Count manuscript characters with the dialogue/narration split.
///
/// Invariants: `narration == total - dialogue` and `dialogue <= total`,
/// also when bracket matching is malformed.
pub fn count_detailed(content: &str) -> CountResult {
    if content.is_empty() {
        return CountResult::default();
    }

    let text = markup::strip_markup(content);
    let total = classifier::count_countable(&text);
    let dialogue = dialogue::count_dialogue(&text);

    CountResult {
        total,
        dialogue,
        narration: total.saturating_sub(dialogue),
    }
}

/// Count manuscript characters with the dialogue split and the
/// per-script breakdown.
pub fn count_with_breakdown(content: &str) -> DetailedCount {
    if content.is_empty() {
        return DetailedCount::default();
    }

    let text = markup::strip_markup(content);
    let total = classifier::count_countable(&text);
    let dialogue = dialogue::count_dialogue(&text);
    let scripts = classifier::script_breakdown(&text);

    DetailedCount {
        counts: CountResult {
            total,
            dialogue,
            narration: total.saturating_sub(dialogue),
        },
        scripts,
    }
}
