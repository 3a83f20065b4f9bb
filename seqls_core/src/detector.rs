//! Increment detection
//!
//! A sequence member is never labeled with which of its digit runs is the
//! frame counter, so the counter has to be inferred by comparing a filename
//! against its neighbors in the surrounding list. The list may be raw input
//! order (first grouping pass) or an already-sorted sub-group (range pass);
//! either way the detector only ever looks one position behind and one
//! ahead.
//!
//! Every degraded case (no digit runs, nothing varies, or several runs vary
//! at once with no unique resolution) is `None`, which routes the file to
//! singleton handling. Detection never fails hard.

use crate::tokenizer::{FilenameInfo, splice};

/// The digit run believed to increment across a sequence.
///
/// Only produced when exactly one unambiguous varying position could be
/// established; `position` indexes into the filename's `number_tokens`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncrementCandidate {
    pub position: usize,
}

/// Positions at which two equal-length token arrays differ elementwise.
///
/// `None` when the arrays have different lengths: an unequal-length
/// neighbor can never pin down a varying position.
pub(crate) fn diff_positions(a: &FilenameInfo, b: &FilenameInfo) -> Option<Vec<usize>> {
    if a.number_tokens.len() != b.number_tokens.len() {
        return None;
    }
    Some(
        a.number_tokens
            .iter()
            .zip(&b.number_tokens)
            .enumerate()
            .filter(|(_, (x, y))| x != y)
            .map(|(i, _)| i)
            .collect(),
    )
}

/// Infer the incrementing digit-run position for `infos[index]`.
///
/// Neighbors clamp to the element itself at either end of the slice, so the
/// first element has itself as predecessor and the last has itself as
/// successor. The last element therefore always resolves against its
/// predecessor.
pub fn detect(infos: &[FilenameInfo], index: usize) -> Option<IncrementCandidate> {
    let cur = infos.get(index)?;
    if !cur.has_numbers() {
        return None;
    }

    let prev = &infos[index.saturating_sub(1)];
    let next = if index + 1 < infos.len() {
        &infos[index + 1]
    } else {
        cur
    };
    let at_end = index + 1 == infos.len();

    // Successor comparison first; fall back to the predecessor when the
    // successor's token array has a different length. The wrap case at the
    // end of the list goes straight to the predecessor.
    let positions = if at_end {
        diff_positions(cur, prev)?
    } else if let Some(diff) = diff_positions(cur, next) {
        diff
    } else {
        diff_positions(cur, prev)?
    };

    if positions.is_empty() {
        return None;
    }

    let position = if positions.len() == 1 {
        positions[0]
    } else {
        resolve_ambiguous(cur, prev, next)?
    };

    validate(cur, prev, next, position).then_some(IncrementCandidate { position })
}

/// Several digit runs changed at once; ask both neighbors independently and
/// accept only a unique answer. Two single-position answers that disagree,
/// or none at all, leave the file non-sequenceable.
fn resolve_ambiguous(
    cur: &FilenameInfo,
    prev: &FilenameInfo,
    next: &FilenameInfo,
) -> Option<usize> {
    let from_prev = diff_positions(cur, prev).filter(|d| d.len() == 1);
    let from_next = diff_positions(cur, next).filter(|d| d.len() == 1);

    match (from_prev, from_next) {
        (Some(p), Some(n)) => (p[0] == n[0]).then_some(p[0]),
        (Some(p), None) => Some(p[0]),
        (None, Some(n)) => Some(n[0]),
        (None, None) => None,
    }
}

/// Reject spurious matches: stripping the candidate run out of the current
/// name must reproduce the stripped key of at least one neighbor whose token
/// array has the same length. The current name's span is applied to all
/// three names, so a neighbor of a different shape simply fails the
/// comparison.
fn validate(cur: &FilenameInfo, prev: &FilenameInfo, next: &FilenameInfo, position: usize) -> bool {
    let Some(span) = cur.number_spans.get(position).copied() else {
        return false;
    };
    let Some(cur_key) = splice(&cur.base_name, span, "") else {
        return false;
    };

    let next_key = splice(&next.base_name, span, "");
    if next_key.as_deref() == Some(cur_key.as_str())
        && cur.number_tokens.len() == next.number_tokens.len()
    {
        return true;
    }

    let prev_key = splice(&prev.base_name, span, "");
    prev_key.as_deref() == Some(cur_key.as_str())
        && cur.number_tokens.len() == prev.number_tokens.len()
}
