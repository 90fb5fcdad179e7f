//! PDB record helpers
//!
//! PDB text is a sequence of lines, each starting with a left-justified
//! upper-case record tag (`HEADER`, `TITLE`, `COMPND`, ...). Multi-line
//! records repeat the tag and carry a continuation number before the text:
//!
//! ```text
//! TITLE     CRYSTAL STRUCTURE OF THE LEGUME LECTIN
//! TITLE    2 FROM PHASEOLUS VULGARIS
//! ```
//!
//! Tags are matched case-sensitively at line start. Labels inside record
//! text (`MOLECULE:`, `ORGANISM:`) are matched case-insensitively.

use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static CONTINUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\s+|$)").expect("continuation pattern is valid"));

/// Free text of every line carrying `tag`, in file order
///
/// The tag, surrounding whitespace and (on continuation lines) the
/// continuation number are removed. Lines whose text is blank are skipped.
pub fn record_lines<'a>(text: &'a str, tag: &str) -> Vec<&'a str> {
    let mut lines = Vec::new();
    let mut seen = 0usize;

    for line in text.lines() {
        let Some(rest) = strip_tag(line, tag) else {
            continue;
        };

        let mut content = rest.trim();
        if seen > 0 {
            if let Some(m) = CONTINUATION.find(content) {
                content = content[m.end()..].trim_start();
            }
        }
        seen += 1;

        if !content.is_empty() {
            lines.push(content);
        }
    }

    lines
}

/// All `tag` lines joined by `separator`, or `None` when there are none
pub fn record_text(text: &str, tag: &str, separator: &str) -> Option<String> {
    let lines = record_lines(text, tag);
    if lines.is_empty() {
        None
    } else {
        Some(lines.join(separator))
    }
}

/// Text of the first `tag` line
pub fn first_record(text: &str, tag: &str) -> Option<String> {
    record_lines(text, tag).first().map(|s| s.to_string())
}

/// Value following `label` up to the first terminator or end of text
///
/// Every occurrence of the label is tried until one yields a non-blank
/// value.
pub fn labeled_segment<'a>(haystack: &'a str, label: &str, terminators: &[char]) -> Option<&'a str> {
    for start in find_word_ignore_case(haystack, label) {
        let after = &haystack[start + label.len()..];
        let end = after.find(terminators).unwrap_or(after.len());
        let value = after[..end].trim();
        if !value.is_empty() {
            return Some(value);
        }
    }
    None
}

/// Whether `word` occurs in `haystack` as a whole word, ignoring case
pub fn contains_word(haystack: &str, word: &str) -> bool {
    !find_word_ignore_case(haystack, word).is_empty()
}

/// Remainder of `line` after its record tag, if the line carries `tag`
fn strip_tag<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(tag)?;
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c.is_whitespace() => Some(rest),
        Some(_) => None,
    }
}

/// Byte offsets of `needle` in `haystack` where the match is not embedded
/// in a longer word
///
/// ASCII case folding keeps byte offsets valid for the original text.
fn find_word_ignore_case(haystack: &str, needle: &str) -> Vec<usize> {
    if needle.is_empty() {
        return Vec::new();
    }

    let upper = haystack.to_ascii_uppercase();
    let needle = needle.to_ascii_uppercase();
    let bytes = haystack.as_bytes();
    let last_is_word = needle.bytes().last().is_some_and(is_word_byte);

    upper
        .match_indices(&needle)
        .map(|(i, _)| i)
        .filter(|&i| {
            let end = i + needle.len();
            let before_ok = i == 0 || !is_word_byte(bytes[i - 1]);
            let after_ok = !last_is_word || end >= bytes.len() || !is_word_byte(bytes[end]);
            before_ok && after_ok
        })
        .collect()
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
