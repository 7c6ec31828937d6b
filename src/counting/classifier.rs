use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

// @module: Character classification by script

// Context radius for the CJK ideograph language heuristic
const CONTEXT_WINDOW: usize = 5;

/// Script bucket assigned to a counted character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// Hiragana (U+3040..U+309F)
    Hiragana,
    /// Katakana (U+30A0..U+30FF)
    Katakana,
    /// Japanese kanji (CJK ideograph in a Japanese context)
    Kanji,
    /// Traditional Chinese hanzi
    TraditionalChinese,
    /// Simplified Chinese hanzi
    SimplifiedChinese,
    /// Hangul syllables and jamo
    Korean,
    /// Latin letters and digits, full-width or half-width
    Alphanumeric,
}

/// Per-script character counts.
///
/// The sum of all buckets can be lower than the total count: a CJK
/// ideograph surrounded by hangul is counted in the total but assigned
/// to no bucket (Korean prose rarely uses hanja, so the heuristic has
/// nothing reliable to say about it).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptBreakdown {
    /// Hiragana characters
    pub hiragana: usize,

    /// Katakana characters
    pub katakana: usize,

    /// Japanese kanji
    pub kanji: usize,

    /// Traditional Chinese hanzi
    pub traditional_chinese: usize,

    /// Simplified Chinese hanzi
    pub simplified_chinese: usize,

    /// Hangul characters
    pub korean: usize,

    /// Letters and digits, full-width or half-width
    pub alphanumeric: usize,
}

impl ScriptBreakdown {
    /// Number of characters assigned to any bucket.
    pub fn classified_total(&self) -> usize {
        self.hiragana
            + self.katakana
            + self.kanji
            + self.traditional_chinese
            + self.simplified_chinese
            + self.korean
            + self.alphanumeric
    }

    fn record(&mut self, script: Script) {
        match script {
            Script::Hiragana => self.hiragana += 1,
            Script::Katakana => self.katakana += 1,
            Script::Kanji => self.kanji += 1,
            Script::TraditionalChinese => self.traditional_chinese += 1,
            Script::SimplifiedChinese => self.simplified_chinese += 1,
            Script::Korean => self.korean += 1,
            Script::Alphanumeric => self.alphanumeric += 1,
        }
    }
}

impl AddAssign for ScriptBreakdown {
    fn add_assign(&mut self, other: Self) {
        self.hiragana += other.hiragana;
        self.katakana += other.katakana;
        self.kanji += other.kanji;
        self.traditional_chinese += other.traditional_chinese;
        self.simplified_chinese += other.simplified_chinese;
        self.korean += other.korean;
        self.alphanumeric += other.alphanumeric;
    }
}

/// Whether a character is a countable character element.
///
/// Whitelist of script ranges; everything else (punctuation, symbols,
/// whitespace, emoji) is excluded from every count. Characters outside
/// the Basic Multilingual Plane match no range and are excluded.
pub fn is_countable(c: char) -> bool {
    is_kana(c) || is_cjk_ideograph(c) || is_hangul(c) || is_alphanumeric_form(c)
}

/// Count the countable character elements in already-stripped text.
pub fn count_countable(text: &str) -> usize {
    text.chars().filter(|&c| is_countable(c)).count()
}

/// Classify every countable character of already-stripped text into a
/// script bucket.
///
/// CJK ideographs are disambiguated with a best-effort context window,
/// not authoritative language identification; see
/// [`ScriptBreakdown`] for the resulting slack between buckets and the
/// total count.
pub fn script_breakdown(text: &str) -> ScriptBreakdown {
    let chars: Vec<char> = text.chars().collect();
    let mut breakdown = ScriptBreakdown::default();

    for (idx, &c) in chars.iter().enumerate() {
        let script = if is_hiragana(c) {
            Some(Script::Hiragana)
        } else if is_katakana(c) {
            Some(Script::Katakana)
        } else if is_hangul(c) {
            Some(Script::Korean)
        } else if is_cjk_ideograph(c) {
            classify_ideograph(&chars, idx)
        } else if is_alphanumeric_form(c) {
            Some(Script::Alphanumeric)
        } else {
            None
        };

        if let Some(script) = script {
            breakdown.record(script);
        }
    }

    breakdown
}

/// Guess the language of a CJK unified ideograph from its surroundings.
///
/// Inspects a fixed window of characters around the ideograph:
/// any kana nearby means Japanese; hangul nearby means the character is
/// left unclassified; a CJK-style double quotation mark suggests
/// Chinese (treated as traditional, simplified is not distinguished);
/// the default is Japanese kanji.
fn classify_ideograph(chars: &[char], idx: usize) -> Option<Script> {
    let start = idx.saturating_sub(CONTEXT_WINDOW);
    let end = (idx + CONTEXT_WINDOW + 1).min(chars.len());
    let window = &chars[start..end];

    if window.iter().any(|&c| is_kana(c)) {
        return Some(Script::Kanji);
    }

    if window.iter().any(|&c| is_hangul(c)) {
        return None;
    }

    if window.iter().any(|&c| is_cjk_double_quote(c)) {
        return Some(Script::TraditionalChinese);
    }

    Some(Script::Kanji)
}

fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{309F}')
}

fn is_katakana(c: char) -> bool {
    matches!(c, '\u{30A0}'..='\u{30FF}')
}

fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

fn is_cjk_ideograph(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}')
}

fn is_hangul(c: char) -> bool {
    matches!(c, '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}')
}

fn is_alphanumeric_form(c: char) -> bool {
    matches!(c,
        '0'..='9'
        | 'A'..='Z'
        | 'a'..='z'
        | '\u{FF10}'..='\u{FF19}'
        | '\u{FF21}'..='\u{FF3A}'
        | '\u{FF41}'..='\u{FF5A}')
}

fn is_cjk_double_quote(c: char) -> bool {
    matches!(c, '\u{201C}' | '\u{201D}')
}
