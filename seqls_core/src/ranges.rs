//! Range collapsing
//!
//! Walks a sorted group and folds consecutive +1 steps of the incrementing
//! number into inclusive ranges. A step of anything other than +1 closes the
//! running range and opens a new one, which is how gaps in a frame set
//! surface in the listing.

use std::fmt;

use serde::Serialize;

use crate::detector::detect;
use crate::tokenizer::FilenameInfo;

/// One contiguous +1 run of the incrementing number, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeBreak {
    pub start: u64,
    pub end: u64,
}

impl fmt::Display for RangeBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Collapse a sorted member list into its contiguous ranges.
///
/// The incrementing position is re-established per adjacent triple, since the
/// sorted order can differ subtly from the raw-input order the grouping pass
/// saw. Each member's value is compared against its successor (predecessor
/// for the last member): a +1 step keeps the running range open, anything
/// else closes it at the current value.
///
/// A list of fewer than two members has no ranges. A member that defeats
/// detection or whose run does not parse closes the running range and is
/// skipped; collapse never fails.
pub fn collapse(members: &[FilenameInfo]) -> Vec<RangeBreak> {
    if members.len() < 2 {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut start: Option<u64> = None;
    let mut tracked: Option<u64> = None;
    let last = members.len() - 1;

    for index in 0..members.len() {
        let current = &members[index];

        let position = detect(members, index).map(|c| c.position);
        let Some(value) = position
            .and_then(|p| current.number_tokens.get(p))
            .and_then(|run| run.parse::<u64>().ok())
        else {
            close_open_range(&mut ranges, &mut start, &mut tracked);
            continue;
        };

        if start.is_none() {
            start = Some(value);
        }
        tracked = Some(value);

        let neighbor = if index == last {
            &members[index - 1]
        } else {
            &members[index + 1]
        };
        let continues = position
            .and_then(|p| neighbor.number_tokens.get(p))
            .and_then(|run| run.parse::<u64>().ok())
            .is_some_and(|next_value| value.checked_add(1) == Some(next_value));

        if !continues {
            ranges.push(RangeBreak {
                start: start.take().unwrap_or(value),
                end: value,
            });
            tracked = None;
        }
    }

    ranges
}

fn close_open_range(
    ranges: &mut Vec<RangeBreak>,
    start: &mut Option<u64>,
    tracked: &mut Option<u64>,
) {
    if let (Some(s), Some(e)) = (start.take(), tracked.take()) {
        ranges.push(RangeBreak { start: s, end: e });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn members(names: &[&str]) -> Vec<FilenameInfo> {
        names.iter().map(|n| tokenize(n)).collect()
    }

    #[test]
    fn test_contiguous_run_is_one_range() {
        let files = members(&["d.0001.png", "d.0002.png", "d.0003.png"]);
        assert_eq!(collapse(&files), vec![RangeBreak { start: 1, end: 3 }]);
    }

    #[test]
    fn test_gap_splits_ranges() {
        let files = members(&["f.101.rgb", "f.102.rgb", "f.104.rgb", "f.105.rgb"]);
        assert_eq!(
            collapse(&files),
            vec![
                RangeBreak { start: 101, end: 102 },
                RangeBreak { start: 104, end: 105 },
            ]
        );
    }

    #[test]
    fn test_two_file_group_is_one_range() {
        let files = members(&["a01.png", "a02.png"]);
        assert_eq!(collapse(&files), vec![RangeBreak { start: 1, end: 2 }]);
    }

    #[test]
    fn test_single_member_has_no_ranges() {
        let files = members(&["a01.png"]);
        assert!(collapse(&files).is_empty());
    }

    #[test]
    fn test_leading_zeros_do_not_reach_values() {
        let files = members(&["d.0099.png", "d.0100.png"]);
        assert_eq!(collapse(&files), vec![RangeBreak { start: 99, end: 100 }]);
    }

    #[test]
    fn test_range_display() {
        let range = RangeBreak { start: 101, end: 121 };
        assert_eq!(range.to_string(), "101-121");
    }
}
