//! The line-oriented cleaning stages, in the order the pipeline applies them.
//!
//! Every stage is a pure `&str -> String` (or predicate) transformation and is
//! a no-op when its pattern does not match.

use crate::patterns::{
    re_date, re_em_fragment, re_header_start, re_labels, re_multi_space, re_time,
    re_time_any_case, re_trail, re_trailing_author,
};

/// Characters trimmed from both ends of a line after fragment removal.
const EDGE_PUNCTUATION: &[char] = &['-', ',', ':', ';', '.'];

/// Turns CRLF and bare CR into LF.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Drops the first "TICKET CRIADO" / "CHAMADO CRIADO" marker and everything after it.
pub fn strip_trail(text: &str) -> &str {
    match re_trail().find(text) {
        Some(marker) => {
            tracing::trace!(offset = marker.start(), "audit trail stripped");
            &text[..marker.start()]
        }
        None => text,
    }
}

/// Whitespace-trimmed, non-empty lines.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(str::trim).filter(|line| !line.is_empty())
}

/// `<NAME IN CAPS> <date> <time>` agent header.
pub fn is_header_line(line: &str) -> bool {
    re_date().is_match(line) && re_time().is_match(line) && re_header_start().is_match(line)
}

/// Removes every CONCLUSÃO / RESPOSTA / ATUALIZAÇÃO label in the line.
pub fn strip_labels(line: &str) -> String {
    re_labels()
        .iter()
        .fold(line.to_string(), |line, label| label.replace_all(&line, "").into_owned())
}

/// Removes timestamp fragments and trailing attributions, then tidies the
/// line. Returns `None` when nothing is left.
pub fn remove_fragments(line: &str) -> Option<String> {
    let line = re_em_fragment().replace_all(line, "");
    let line = re_date().replace_all(&line, "");
    let line = re_time_any_case().replace_all(&line, "");
    let line = re_trailing_author().replace(&line, "");
    let line = re_multi_space().replace_all(&line, " ");

    let tidy = line.trim_matches(|c: char| c.is_whitespace() || EDGE_PUNCTUATION.contains(&c));
    if tidy.is_empty() {
        None
    } else {
        Some(tidy.to_string())
    }
}

/// Runs the trail, header, label and fragment stages and returns the lines
/// that survive.
pub fn kept_lines(raw_text: &str) -> Vec<String> {
    let text = normalize_newlines(raw_text);

    split_lines(strip_trail(&text))
        .filter(|line| {
            let header = is_header_line(line);
            if header {
                tracing::trace!(line, "header line dropped");
            }
            !header
        })
        .filter_map(|line| remove_fragments(&strip_labels(line)))
        .collect()
}
