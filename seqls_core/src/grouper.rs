//! Sequence grouping
//!
//! Files that belong to one sequence share a skeleton: the filename with its
//! incrementing digit run cut out. Grouping strips the run the detector
//! found for each file, collects files under their skeleton, and keeps
//! distinct filename lengths apart inside a group: `a01.png` and
//! `a0001.png` share a skeleton but represent different zero-padding widths
//! and must never land in the same sub-group.
//!
//! Files the detector could not place become standalone entries keyed by
//! their own name. A second pass reconciles them against the groups that
//! emerged, so an isolated frame (one with no adjacent sibling in the input
//! order) can still join its sequence once the group's shape is known.

use std::collections::{BTreeMap, BTreeSet};

use crate::detector::{IncrementCandidate, detect};
use crate::tokenizer::{FilenameInfo, splice};

/// One sequence family: a skeleton key and its members, partitioned by
/// filename length.
///
/// Invariant: within one sub-group every filename has the same length and
/// strips to the same skeleton.
#[derive(Debug, Clone)]
pub struct SequenceGroup {
    /// Filename with the incrementing run removed; standalone files use
    /// their unmodified name.
    pub skeleton: String,
    /// Members keyed by filename length, each list sorted lexicographically
    /// once grouping completes.
    pub sub_groups: BTreeMap<usize, Vec<FilenameInfo>>,
}

impl SequenceGroup {
    fn new(skeleton: String) -> Self {
        Self {
            skeleton,
            sub_groups: BTreeMap::new(),
        }
    }

    /// Total member count across all sub-groups.
    pub fn len(&self) -> usize {
        self.sub_groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sub_groups.values().all(Vec::is_empty)
    }

    /// Members of every sub-group concatenated in ascending length order.
    pub fn into_members(self) -> Vec<FilenameInfo> {
        self.sub_groups.into_values().flatten().collect()
    }
}

/// Group tokenized filenames by skeleton key.
///
/// Detection runs against the raw input order, so adjacency in the input
/// decides which files strip to a skeleton on the first pass; the
/// reconciliation pass then picks up stragglers. Each sub-group comes back
/// sorted.
pub fn group_files(infos: Vec<FilenameInfo>) -> BTreeMap<String, SequenceGroup> {
    let candidates: Vec<Option<IncrementCandidate>> =
        (0..infos.len()).map(|i| detect(&infos, i)).collect();

    let mut groups: BTreeMap<String, SequenceGroup> = BTreeMap::new();
    let mut standalone: Vec<String> = Vec::new();

    for (info, candidate) in infos.into_iter().zip(candidates) {
        let stripped = candidate
            .and_then(|c| info.number_spans.get(c.position).copied())
            .and_then(|span| splice(&info.base_name, span, ""));

        let skeleton = match stripped {
            Some(key) => key,
            None => {
                standalone.push(info.base_name.clone());
                info.base_name.clone()
            }
        };

        let group = groups
            .entry(skeleton.clone())
            .or_insert_with(|| SequenceGroup::new(skeleton));
        let bucket = group.sub_groups.entry(info.base_name.len()).or_default();
        if !bucket.iter().any(|f| f.base_name == info.base_name) {
            bucket.push(info);
        }
    }

    merge_standalone(&mut groups, &standalone);

    for group in groups.values_mut() {
        for bucket in group.sub_groups.values_mut() {
            bucket.sort_by(|a, b| a.base_name.cmp(&b.base_name));
        }
    }

    groups
}

/// Move standalone files into an established group when their shape matches:
/// identical letter-token set, identical digit-run spans, and a combined
/// numbers-and-letters symmetric difference of at most two tokens against a
/// representative member of the same filename length. Only sub-groups that
/// already hold two or more files are considered; a lone pair of strays
/// does not make a sequence.
fn merge_standalone(groups: &mut BTreeMap<String, SequenceGroup>, standalone: &[String]) {
    for name in standalone {
        let Some(info) = groups
            .get(name)
            .and_then(|g| g.sub_groups.get(&name.len()))
            .and_then(|bucket| bucket.iter().find(|f| f.base_name == *name))
            .cloned()
        else {
            continue;
        };

        let mut target: Option<String> = None;
        for (skeleton, group) in groups.iter() {
            if skeleton == name {
                continue;
            }
            let Some(bucket) = group.sub_groups.get(&name.len()) else {
                continue;
            };
            if bucket.len() < 2 {
                continue;
            }
            let representative = &bucket[0];
            if !letter_sets_match(&info, representative) {
                continue;
            }
            if info.number_spans != representative.number_spans {
                continue;
            }
            if token_difference(&info, representative) > 2 {
                continue;
            }
            target = Some(skeleton.clone());
            break;
        }

        let Some(skeleton) = target else { continue };
        log::debug!("standalone '{name}' joins sequence '{skeleton}'");

        if let Some(bucket) = groups
            .get_mut(&skeleton)
            .and_then(|g| g.sub_groups.get_mut(&name.len()))
        {
            bucket.push(info);
        }
        remove_standalone_entry(groups, name);
    }
}

/// Drop the standalone file from the entry keyed by its own name. The entry
/// is only removed outright when nothing else shares that key, since a filename
/// can coincide with another group's skeleton.
fn remove_standalone_entry(groups: &mut BTreeMap<String, SequenceGroup>, name: &str) {
    let mut drop_entry = false;
    if let Some(group) = groups.get_mut(name) {
        if let Some(bucket) = group.sub_groups.get_mut(&name.len()) {
            bucket.retain(|f| f.base_name != name);
            if bucket.is_empty() {
                group.sub_groups.remove(&name.len());
            }
        }
        drop_entry = group.is_empty();
    }
    if drop_entry {
        groups.remove(name);
    }
}

fn letter_sets_match(a: &FilenameInfo, b: &FilenameInfo) -> bool {
    let a: BTreeSet<&str> = a.letter_tokens.iter().map(String::as_str).collect();
    let b: BTreeSet<&str> = b.letter_tokens.iter().map(String::as_str).collect();
    a == b
}

/// Size of the symmetric difference of the two files' number tokens plus
/// that of their letter tokens, both as sets.
fn token_difference(a: &FilenameInfo, b: &FilenameInfo) -> usize {
    let numbers_a: BTreeSet<&str> = a.number_tokens.iter().map(String::as_str).collect();
    let numbers_b: BTreeSet<&str> = b.number_tokens.iter().map(String::as_str).collect();
    let letters_a: BTreeSet<&str> = a.letter_tokens.iter().map(String::as_str).collect();
    let letters_b: BTreeSet<&str> = b.letter_tokens.iter().map(String::as_str).collect();

    numbers_a.symmetric_difference(&numbers_b).count()
        + letters_a.symmetric_difference(&letters_b).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn group_names(names: &[&str]) -> BTreeMap<String, SequenceGroup> {
        group_files(names.iter().map(|n| tokenize(n)).collect())
    }

    #[test]
    fn test_groups_share_a_skeleton() {
        let groups = group_names(&["d.0001.png", "d.0002.png", "d.0003.png"]);
        assert_eq!(groups.len(), 1);
        let group = &groups["d..png"];
        assert_eq!(group.len(), 3);
        assert_eq!(group.sub_groups.len(), 1);
    }

    #[test]
    fn test_padding_widths_stay_apart() {
        let groups = group_names(&["a01.png", "a02.png", "a0001.png", "a0002.png"]);
        let group = &groups["a.png"];
        assert_eq!(group.sub_groups.len(), 2);
        assert_eq!(group.sub_groups[&"a01.png".len()].len(), 2);
        assert_eq!(group.sub_groups[&"a0001.png".len()].len(), 2);
    }

    #[test]
    fn test_file_without_digits_is_standalone() {
        let groups = group_names(&["elem.info", "d.0001.png", "d.0002.png"]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["elem.info"].len(), 1);
    }

    #[test]
    fn test_isolated_member_is_reconciled() {
        // "d.0001.png" has no adjacent sibling, so first-pass detection
        // fails; reconciliation pulls it into the group.
        let groups = group_names(&["d.0001.png", "x.info", "d.0003.png", "d.0004.png"]);
        let group = &groups["d..png"];
        assert_eq!(group.len(), 3);
        assert!(!groups.contains_key("d.0001.png"));
    }

    #[test]
    fn test_reconciliation_respects_length() {
        // Same letters and a detectable group, but the stray has a
        // different padding width and there is no sub-group of its length.
        let groups = group_names(&["d.001.png", "x.info", "d.0003.png", "d.0004.png"]);
        assert!(groups.contains_key("d.001.png"));
        assert_eq!(groups["d..png"].len(), 2);
    }

    #[test]
    fn test_reconciliation_respects_letters() {
        let groups = group_names(&["e.0001.jpg", "x.info", "d.0003.png", "d.0004.png"]);
        assert!(groups.contains_key("e.0001.jpg"));
    }

    #[test]
    fn test_sub_groups_are_sorted() {
        let groups = group_names(&["d.0003.png", "d.0001.png", "d.0002.png"]);
        let names: Vec<&str> = groups["d..png"].sub_groups[&10]
            .iter()
            .map(|f| f.base_name.as_str())
            .collect();
        assert_eq!(names, vec!["d.0001.png", "d.0002.png", "d.0003.png"]);
    }

    #[test]
    fn test_duplicate_input_collapses() {
        let groups = group_names(&["d.0001.png", "d.0002.png", "d.0001.png", "d.0002.png"]);
        assert_eq!(groups["d..png"].len(), 2);
    }
}
