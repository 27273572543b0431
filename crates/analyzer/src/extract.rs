//! Two-pass part extraction.
//!
//! ```text
//! [part:task]            <- tag open, part starts on the next line
//! Summarize the text.
//! [/part]                <- tag close (optional: missing close runs to EOF)
//! ## Constraints         <- heading, section runs to the next heading or EOF
//! Be concise.
//! ```
//!
//! Tag blocks are found first and win every conflict. Heading sections are
//! found afterwards and dropped whole when they overlap a tag block.

use std::sync::LazyLock;

use promptmap_core::{Part, PartName, PartSource};
use regex_lite::Regex;
use tracing::debug;

use crate::span::{Span, overlaps_any};

static TAG_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[part:([a-z_]+)\]").expect("valid tag open pattern"));

static TAG_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[/part\]").expect("valid tag close pattern"));

/// Recognized headings, in match order. A line matches at most one entry.
static HEADING_PATTERNS: LazyLock<Vec<(PartName, Regex)>> = LazyLock::new(|| {
    [
        (PartName::Task, r"(?i)^#{2,3}\s*Task\s*$"),
        (PartName::Constraints, r"(?i)^#{2,3}\s*Constraints\s*$"),
        (PartName::OutputFormat, r"(?i)^#{2,3}\s*Output\s*Format\s*$"),
        (PartName::FewShot, r"(?i)^#{2,3}\s*(Few[- ]?Shot|Examples)\s*$"),
    ]
    .into_iter()
    .map(|(name, pattern)| (name, Regex::new(pattern).expect("valid heading pattern")))
    .collect()
});

/// Extract every part of `text`: tag blocks first, then heading sections,
/// each group in discovery order.
pub fn extract_parts(text: &str) -> Vec<Part> {
    let lines = split_lines(text);

    let (tagged, consumed) = extract_tag_blocks(&lines);
    let headed = extract_heading_sections(&lines, &consumed);

    debug!(
        lines = lines.len(),
        tag_parts = tagged.len(),
        heading_parts = headed.len(),
        "Extracted parts"
    );

    let mut parts = tagged;
    parts.extend(headed);
    parts
}

/// Split on every line boundary: `\n`, `\r\n`, a lone `\r`, and the
/// Unicode separators (VT, FF, FS, GS, RS, NEL, LS, PS). A trailing
/// boundary does not start an extra empty line.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        let is_break = matches!(
            c,
            '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
        );
        if !is_break {
            continue;
        }
        lines.push(&text[start..idx]);
        start = idx + c.len_utf8();
        if c == '\r' && chars.peek().is_some_and(|&(_, next)| next == '\n') {
            chars.next();
            start += 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Forward scan for `[part:name] ... [/part]` blocks.
///
/// Returns the non-empty parts and the content span of every block found,
/// empty or not. Scanning resumes after the close line, so blocks never
/// nest or overlap.
pub(crate) fn extract_tag_blocks(lines: &[&str]) -> (Vec<Part>, Vec<Span>) {
    let mut parts = Vec::new();
    let mut consumed = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let Some(caps) = TAG_OPEN.captures(lines[i]) else {
            i += 1;
            continue;
        };
        let name = caps[1].to_lowercase();
        let start = i + 1;
        let end = (start..lines.len())
            .find(|&j| TAG_CLOSE.is_match(lines[j]))
            .unwrap_or(lines.len());

        consumed.push(Span::new(start, end));
        let content = join_trimmed(&lines[start..end]);
        if content.is_empty() {
            debug!(name = %name, start, "Skipping empty tag block");
        } else {
            parts.push(Part::new(name, content, PartSource::Tag, start, end));
        }

        i = end + 1;
    }

    (parts, consumed)
}

/// Sections opened by recognized headings, skipping any that overlap a
/// range in `consumed`.
pub(crate) fn extract_heading_sections(lines: &[&str], consumed: &[Span]) -> Vec<Part> {
    let headings: Vec<(usize, PartName)> = lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| heading_name(line).map(|name| (idx, name)))
        .collect();

    // Each section ends at the next heading; the last one at end of file.
    let ends = headings
        .iter()
        .skip(1)
        .map(|(idx, _)| *idx)
        .chain(std::iter::once(lines.len()));

    let mut parts = Vec::new();
    for (&(heading_idx, name), end) in headings.iter().zip(ends) {
        let span = Span::new(heading_idx + 1, end);
        let body = join_trimmed(&lines[span.start..span.end]);
        if body.is_empty() {
            continue;
        }
        if overlaps_any(&span, consumed) {
            debug!(name = %name, start = span.start, end = span.end, "Dropping heading section overlapping a tag block");
            continue;
        }
        parts.push(Part::new(name.as_str(), body, PartSource::Header, span.start, span.end));
    }

    parts
}

/// The part name of the first heading pattern matching `line`.
///
/// Any Unicode whitespace counts as a space, e.g. `##\u{a0}Task`.
fn heading_name(line: &str) -> Option<PartName> {
    let line: String = line
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();
    HEADING_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(&line))
        .map(|(name, _)| *name)
}

fn join_trimmed(lines: &[&str]) -> String {
    lines.join("\n").trim().to_string()
}
