//! Report assembly
//!
//! The one entry point callers need: feed in basenames, get back one
//! descriptor per sequence family. Everything is computed fresh from the
//! input snapshot; nothing persists between calls.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::detector::diff_positions;
use crate::formatter::{Placeholder, format_at};
use crate::grouper::group_files;
use crate::ranges::{RangeBreak, collapse};
use crate::tokenizer::{FilenameInfo, tokenize};

/// Final per-group descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceMetadata {
    /// Total file count across all padding widths of the group.
    pub count: usize,
    /// Canonical display name with the incrementing run substituted;
    /// singletons keep their filename.
    pub format_name: String,
    /// Contiguous +1 runs present, in file order. Empty for singletons.
    pub ranges: Vec<RangeBreak>,
}

/// One sequence family in the report: its members plus the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceEntry {
    /// Member filenames, sub-groups concatenated in ascending length order,
    /// each sorted.
    pub files: Vec<String>,
    pub metadata: SequenceMetadata,
}

/// Everything one invocation found, keyed by skeleton.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub entries: BTreeMap<String, SequenceEntry>,
    /// Number of filenames that went in, duplicates included.
    pub total_files: usize,
}

impl ScanReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Run the full pipeline over a list of basenames.
///
/// The input order matters for first-pass detection (adjacent files resolve
/// each other), but the final report is order-independent: groups are keyed
/// and sorted deterministically before ranges and names are derived.
pub fn scan<I, S>(names: I) -> ScanReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let infos: Vec<FilenameInfo> = names.into_iter().map(|n| tokenize(n.as_ref())).collect();
    let total_files = infos.len();

    let mut entries = BTreeMap::new();
    for (skeleton, group) in group_files(infos) {
        let members = group.into_members();
        let metadata = SequenceMetadata {
            count: members.len(),
            format_name: derive_format_name(&members),
            ranges: collapse(&members),
        };
        let files = members.into_iter().map(|m| m.base_name).collect();
        entries.insert(skeleton, SequenceEntry { files, metadata });
    }

    ScanReport {
        entries,
        total_files,
    }
}

/// Canonical display name: the last member with the varying run substituted.
///
/// The varying position is read off the last two members; when nothing
/// varies between them (or their token arrays disagree in length) the name
/// passes through untouched.
fn derive_format_name(members: &[FilenameInfo]) -> String {
    let Some(last) = members.last() else {
        return String::new();
    };
    if members.len() < 2 {
        return last.base_name.clone();
    }

    let previous = &members[members.len() - 2];
    match diff_positions(last, previous) {
        Some(positions) if !positions.is_empty() => {
            format_at(last, positions[0], Placeholder::Printf)
                .unwrap_or_else(|_| last.base_name.clone())
        }
        _ => last.base_name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_builds_one_entry_per_family() {
        let report = scan(["d.0001.png", "d.0002.png", "d.0003.png", "elem.info"]);
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.total_files, 4);
    }

    #[test]
    fn test_sequence_entry_metadata() {
        let report = scan(["d.0001.png", "d.0002.png", "d.0003.png"]);
        let entry = &report.entries["d..png"];
        assert_eq!(entry.metadata.count, 3);
        assert_eq!(entry.metadata.format_name, "d.%04d.png");
        assert_eq!(entry.metadata.ranges, vec![RangeBreak { start: 1, end: 3 }]);
    }

    #[test]
    fn test_singleton_passthrough() {
        let report = scan(["elem.info"]);
        let entry = &report.entries["elem.info"];
        assert_eq!(entry.metadata.count, 1);
        assert_eq!(entry.metadata.format_name, "elem.info");
        assert!(entry.metadata.ranges.is_empty());
    }

    #[test]
    fn test_unpadded_sequence_formats_plain() {
        let report = scan(["f.101.rgb", "f.102.rgb", "f.103.rgb"]);
        let entry = &report.entries["f..rgb"];
        assert_eq!(entry.metadata.format_name, "f.%d.rgb");
    }

    #[test]
    fn test_empty_input_is_empty_report() {
        let report = scan(Vec::<String>::new());
        assert!(report.is_empty());
        assert_eq!(report.total_files, 0);
    }

    #[test]
    fn test_member_lists_are_sorted() {
        let report = scan(["d.0002.png", "d.0003.png", "d.0001.png"]);
        let entry = &report.entries["d..png"];
        assert_eq!(entry.files, vec!["d.0001.png", "d.0002.png", "d.0003.png"]);
    }
}
