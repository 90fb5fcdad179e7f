//! mmCIF data item lookup
//!
//! A data item is either a single-line `tag value` pair
//!
//! ```text
//! _exptl.method   'X-RAY DIFFRACTION'
//! ```
//!
//! or a bare tag line followed by a semicolon-fenced text field
//!
//! ```text
//! _struct.title
//! ;
//! Crystal structure of example protein
//! ;
//! ```
//!
//! Columns of tabular `loop_` blocks are read by [`loop_column`]. A value
//! that itself looks like a tag means the lookup ran into the next item and
//! is discarded.

use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static SINGLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^'(.*?)'(?:\s|$)").expect("single quote pattern is valid"));

#[allow(clippy::expect_used)]
static DOUBLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"(.*?)"(?:\s|$)"#).expect("double quote pattern is valid"));

/// Value of data item `tag`, fenced form first, then single-line form
pub fn get_value(text: &str, tag: &str) -> Option<String> {
    fenced_value(text, tag).or_else(|| single_line_value(text, tag))
}

/// `tag` alone on a line, then a `;` fence, then text up to a line that is
/// exactly `;`
pub fn fenced_value(text: &str, tag: &str) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();

    for (i, line) in lines.iter().enumerate() {
        if line.trim_end() != tag || in_loop_header(&lines, i) {
            continue;
        }

        // text after the opening `;` belongs to the value
        let Some(opening) = lines.get(i + 1).and_then(|l| l.strip_prefix(';')) else {
            continue;
        };

        let body = &lines[i + 2..];
        let Some(close) = body.iter().position(|l| l.trim_end() == ";") else {
            continue;
        };

        let mut parts = Vec::with_capacity(close + 1);
        parts.push(opening);
        parts.extend_from_slice(&body[..close]);

        let value = parts.join("\n");
        if let Some(value) = accept(&value) {
            return Some(value);
        }
    }

    None
}

/// `tag`, whitespace and a value on the same line
pub fn single_line_value(text: &str, tag: &str) -> Option<String> {
    for line in text.lines() {
        let Some(rest) = line.strip_prefix(tag) else {
            continue;
        };
        // `_exptl.method_details` must not match `_exptl.method`
        if !rest.starts_with(char::is_whitespace) {
            continue;
        }

        let rest = rest.trim();
        if rest.is_empty() {
            continue;
        }

        if let Some(value) = accept(&inline_value(rest)) {
            return Some(value);
        }
    }

    None
}

/// Values of column `tag` in the `loop_` table that declares it, in row
/// order
///
/// Placeholders (`?`, `.`) are skipped. Returns an empty list when no loop
/// declares the column.
pub fn loop_column(text: &str, tag: &str) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();
    let mut i = 0;

    while i < lines.len() {
        if lines[i].trim() != "loop_" {
            i += 1;
            continue;
        }

        let headers: Vec<&str> = lines[i + 1..]
            .iter()
            .map(|l| l.trim())
            .take_while(|l| is_bare_tag(l))
            .collect();
        let body = i + 1 + headers.len();

        let Some(column) = headers.iter().position(|h| *h == tag) else {
            i = body;
            continue;
        };

        return loop_tokens(&lines[body..])
            .into_iter()
            .skip(column)
            .step_by(headers.len())
            .filter_map(|value| accept(&value))
            .collect();
    }

    Vec::new()
}

/// Whether line `i` is one of the column names following a `loop_`
fn in_loop_header(lines: &[&str], i: usize) -> bool {
    lines[..i]
        .iter()
        .rev()
        .map(|l| l.trim())
        .find(|l| !is_bare_tag(l))
        .is_some_and(|l| l == "loop_")
}

fn is_bare_tag(line: &str) -> bool {
    line.starts_with('_') && !line.contains(char::is_whitespace)
}

/// Data values of a loop body, up to the next item, loop, block or comment
fn loop_tokens(lines: &[&str]) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut iter = lines.iter();

    while let Some(line) = iter.next() {
        if let Some(opening) = line.strip_prefix(';') {
            let mut parts = vec![opening];
            for next in iter.by_ref() {
                if next.starts_with(';') {
                    break;
                }
                parts.push(next);
            }
            tokens.push(parts.join("\n"));
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty()
            || trimmed.starts_with('#')
            || trimmed.starts_with('_')
            || trimmed.starts_with("loop_")
            || trimmed.starts_with("data_")
        {
            break;
        }

        tokens.extend(line_tokens(trimmed));
    }

    tokens
}

/// Whitespace-separated values of one line, honoring quotes
fn line_tokens(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut rest = line.trim_start();

    while !rest.is_empty() {
        let quoted = match rest.chars().next() {
            Some('\'') => SINGLE_QUOTED.captures(rest),
            Some('"') => DOUBLE_QUOTED.captures(rest),
            _ => None,
        };

        let (token, consumed) = match quoted.as_ref().and_then(|c| Some((c.get(1)?, c.get(0)?))) {
            Some((value, whole)) => (value.as_str(), whole.end()),
            None => {
                let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
                (&rest[..end], end)
            },
        };

        tokens.push(token.to_string());
        rest = rest[consumed..].trim_start();
    }

    tokens
}

/// Parse the value part of a single-line item
fn inline_value(rest: &str) -> String {
    let quoted = match rest.chars().next() {
        Some('\'') => SINGLE_QUOTED.captures(rest),
        Some('"') => DOUBLE_QUOTED.captures(rest),
        _ => None,
    };

    if let Some(value) = quoted.and_then(|c| c.get(1)) {
        return value.as_str().to_string();
    }

    // Unquoted, or a quote that never closes: stop at a comment or the next
    // tag on the line
    let end = rest
        .char_indices()
        .find(|&(i, c)| {
            (c == '#' || c == '_') && rest[..i].ends_with(char::is_whitespace)
        })
        .map(|(i, _)| i)
        .unwrap_or(rest.len());

    rest[..end].trim().trim_matches(['\'', '"']).to_string()
}

/// Trimmed value unless it is blank, a CIF placeholder or a tag
fn accept(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value == "?" || value == "." || looks_like_tag(value) {
        None
    } else {
        Some(value.to_string())
    }
}

fn looks_like_tag(value: &str) -> bool {
    value.starts_with('_')
}
