//! Placeholder formatting
//!
//! Rewrites a digit run into a placeholder. Printf style gives the canonical
//! display name of a sequence (`d.%04d.png`); character-class style gives a
//! pattern (`d.[0-9][0-9][0-9][0-9].png`) that glob engines accept, used to
//! search a directory for the siblings of one explicit file.

use crate::error::{Error, Result};
use crate::tokenizer::{FilenameInfo, splice};

/// Placeholder style for substituted digit runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `%0Nd` when the run carries a leading zero, `%d` otherwise.
    Printf,
    /// `[0-9]` repeated once per digit of the run.
    CharClass,
}

/// Placeholder text for one digit run. Fixed width is only claimed when the
/// run actually shows it (a leading zero); `23` could be any width.
pub fn placeholder_for(run: &str, style: Placeholder) -> String {
    match style {
        Placeholder::Printf => {
            if run.starts_with('0') {
                format!("%0{}d", run.len())
            } else {
                "%d".to_string()
            }
        }
        Placeholder::CharClass => "[0-9]".repeat(run.len()),
    }
}

/// Substitute the digit run at `position` and leave everything else intact.
///
/// An out-of-range position is a caller bug, not a property of the input
/// data, and comes back as an error.
pub fn format_at(info: &FilenameInfo, position: usize, style: Placeholder) -> Result<String> {
    let (run, span) = info
        .number_tokens
        .get(position)
        .zip(info.number_spans.get(position).copied())
        .ok_or_else(|| Error::invalid_run_position(&info.base_name, position))?;

    splice(&info.base_name, span, &placeholder_for(run, style))
        .ok_or_else(|| Error::invalid_run_position(&info.base_name, position))
}

/// Substitute every digit run in the name at once.
///
/// This is the search-pattern builder: for a single explicit file nothing
/// says which run increments, so all of them widen.
pub fn format_all(info: &FilenameInfo, style: Placeholder) -> String {
    let mut out = String::new();
    let mut cursor = 0;
    for (run, span) in info.number_tokens.iter().zip(&info.number_spans) {
        out.push_str(&info.base_name[cursor..span.start]);
        out.push_str(&placeholder_for(run, style));
        cursor = span.end;
    }
    out.push_str(&info.base_name[cursor..]);
    out
}
