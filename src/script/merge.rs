//! Joins parentheticals that were wrapped across several source lines.

use crate::constants::syntax::{CLOSE_BRACKETS, OPEN_BRACKETS};

/// Characters that end a source line, besides `\r\n`.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split text into lines on every line-break character.
///
/// `\r\n` counts as one break and a trailing break does not produce an
/// empty final line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(idx) = rest.find(LINE_BREAKS) {
        lines.push(&rest[..idx]);
        let after = &rest[idx..];
        let skip = if after.starts_with("\r\n") {
            2
        } else {
            after.chars().next().map_or(1, char::len_utf8)
        };
        rest = &after[skip..];
    }
    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}

fn opens(s: &str) -> bool {
    s.starts_with(OPEN_BRACKETS)
}

fn closes(s: &str) -> bool {
    s.ends_with(CLOSE_BRACKETS)
}

/// Merge lines so that an opened-but-unclosed parenthetical becomes one line.
///
/// Accumulated lines are trimmed before joining; every other line passes
/// through untouched. An unterminated parenthetical at end of input is
/// emitted as-is.
pub fn merge_parenthetical_lines<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut merged = Vec::new();
    let mut paren_buf: Option<String> = None;

    for raw in lines {
        let stripped = raw.trim();

        if let Some(buf) = paren_buf.as_mut() {
            buf.push_str(stripped);
            if closes(buf) {
                tracing::debug!("Merged wrapped parenthetical: {buf}");
                merged.extend(paren_buf.take());
            }
            continue;
        }

        if opens(stripped) && !closes(stripped) {
            paren_buf = Some(stripped.to_string());
            continue;
        }

        merged.push(raw.to_string());
    }

    if let Some(buf) = paren_buf {
        tracing::warn!("Unterminated parenthetical at end of input: {buf}");
        merged.push(buf);
    }

    merged
}
