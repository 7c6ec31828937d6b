use once_cell::sync::Lazy;
use regex::Regex;

// @module: Markdown/HTML markup stripping

// HTML comments, may span multiple lines
static HTML_COMMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

// HTML tags, paired or self-closing; tag content is discarded
static HTML_TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

// Fenced code blocks, including everything between the fences
static CODE_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```.*?```").unwrap());

// Inline code spans, single line only
static INLINE_CODE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"`[^`\n]+`").unwrap());

// Blockquote lines at any nesting depth, whole line dropped
static BLOCKQUOTE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[ \t]*>+.*$").unwrap());

// Heading lines, whole line dropped (headings are metadata, not prose)
static HEADING_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#+[ \t].*$").unwrap());

// List markers, marker stripped and item text kept
static UNORDERED_LIST_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[*+-][ \t]+").unwrap());
static ORDERED_LIST_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\d+\.[ \t]+").unwrap());

// Emphasis markers, delimiters removed and enclosed text kept
static BOLD_ASTERISK_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static ITALIC_ASTERISK_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static BOLD_UNDERSCORE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"__([^_]+)__").unwrap());
static ITALIC_UNDERSCORE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"_([^_]+)_").unwrap());

// Links, link text kept and URL discarded
static LINK_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());

/// Strip structural Markdown/HTML markup from a manuscript, keeping the
/// prose inside formatting markers.
///
/// The passes run in a fixed order; later patterns assume earlier noise
/// is already gone. Unterminated constructs (an unclosed fence or
/// comment) never match and are left in place as literal text, so a
/// malformed document still degrades to a best-effort count. The
/// transformation is idempotent.
pub fn strip_markup(content: &str) -> String {
    let text = HTML_COMMENT_REGEX.replace_all(content, "");
    let text = HTML_TAG_REGEX.replace_all(&text, "");
    let text = CODE_BLOCK_REGEX.replace_all(&text, "");
    let text = INLINE_CODE_REGEX.replace_all(&text, "");
    let text = BLOCKQUOTE_REGEX.replace_all(&text, "");
    let text = HEADING_REGEX.replace_all(&text, "");
    let text = UNORDERED_LIST_REGEX.replace_all(&text, "");
    let text = ORDERED_LIST_REGEX.replace_all(&text, "");
    let text = BOLD_ASTERISK_REGEX.replace_all(&text, "$1");
    let text = ITALIC_ASTERISK_REGEX.replace_all(&text, "$1");
    let text = BOLD_UNDERSCORE_REGEX.replace_all(&text, "$1");
    let text = ITALIC_UNDERSCORE_REGEX.replace_all(&text, "$1");
    let text = LINK_REGEX.replace_all(&text, "$1");

    text.into_owned()
}
