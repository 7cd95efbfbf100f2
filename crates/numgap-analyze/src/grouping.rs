//! Grouping engine and threshold splitter.

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

use numgap_core::{ArtifactKind, DirectoryScope, TemplateKey};

use crate::template::Selection;

/// A cluster of entries believed to belong to one ordinal sequence.
#[derive(Debug, Clone)]
pub struct SequenceGroup {
    /// The key shared by every member.
    pub template_key: TemplateKey,
    /// Directory context of the members.
    pub scope: DirectoryScope,
    /// File or directory sequence.
    pub kind: ArtifactKind,
    /// Integers covered by members, including range-expanded values.
    pub present: BTreeSet<u64>,
    /// Canonical zero-padding width (majority, first-seen tiebreak).
    pub width: u32,
    /// Number of member selections.
    pub member_count: u64,
    /// Total on-disk size of members, for missing-byte estimates.
    pub total_size: u64,
}

#[derive(Debug, Default)]
struct GroupBuilder {
    dirs: Vec<PathBuf>,
    present: BTreeSet<u64>,
    // (width, count) in first-seen order, for the majority tiebreak.
    widths: Vec<(u32, u64)>,
    member_count: u64,
    total_size: u64,
}

impl GroupBuilder {
    fn push(&mut self, sel: &Selection) {
        if !self.dirs.contains(&sel.directory) {
            self.dirs.push(sel.directory.clone());
        }
        self.present.extend(sel.block.values());
        match self.widths.iter_mut().find(|(w, _)| *w == sel.block.width) {
            Some((_, count)) => *count += 1,
            None => self.widths.push((sel.block.width, 1)),
        }
        self.member_count += 1;
        self.total_size += sel.size;
    }

    fn canonical_width(&self) -> u32 {
        let mut best = (0u32, 0u64);
        for &(width, count) in &self.widths {
            // Strictly greater keeps the first-seen width on ties.
            if count > best.1 {
                best = (width, count);
            }
        }
        best.0
    }
}

/// Partition selections into sequence groups.
///
/// In single-directory mode the directory is part of the effective key;
/// in cross-directory mode entries sharing a template key merge across
/// directories and `present` is the union of their coverage. Files and
/// directories never share a group.
pub fn group_selections(selections: Vec<Selection>, cross_dir: bool) -> Vec<SequenceGroup> {
    type Key = (Option<PathBuf>, ArtifactKind, TemplateKey);
    let mut builders: HashMap<Key, GroupBuilder> = HashMap::new();

    for sel in &selections {
        let dir = (!cross_dir).then(|| sel.directory.clone());
        let key = (dir, sel.kind, sel.key.clone());
        builders.entry(key).or_default().push(sel);
    }

    builders
        .into_iter()
        .map(|((dir, kind, template_key), builder)| {
            let scope = match dir {
                Some(dir) => DirectoryScope::Single(dir),
                None => DirectoryScope::merged(builder.dirs.clone()),
            };
            SequenceGroup {
                template_key,
                scope,
                kind,
                width: builder.canonical_width(),
                present: builder.present,
                member_count: builder.member_count,
                total_size: builder.total_size,
            }
        })
        .collect()
}

/// Subdivide a group wherever the gap between consecutive present values
/// exceeds `threshold`.
///
/// Children inherit the parent's key, scope, and width but own disjoint
/// partitions of its present values. Purely a function of the sorted
/// values and the threshold; idempotent and order-independent.
pub fn split_on_threshold(group: SequenceGroup, threshold: u64) -> Vec<SequenceGroup> {
    let mut partitions: Vec<BTreeSet<u64>> = Vec::new();
    let mut current = BTreeSet::new();
    let mut last: Option<u64> = None;

    for &value in &group.present {
        if let Some(prev) = last {
            if value - prev > threshold {
                partitions.push(std::mem::take(&mut current));
            }
        }
        current.insert(value);
        last = Some(value);
    }
    if !current.is_empty() {
        partitions.push(current);
    }

    if partitions.len() <= 1 {
        return vec![group];
    }

    partitions
        .into_iter()
        .map(|present| SequenceGroup {
            template_key: group.template_key.clone(),
            scope: group.scope.clone(),
            kind: group.kind,
            width: group.width,
            present,
            // Size stats stay with the parent's averages; the split is a
            // partition of values, not of member files.
            member_count: group.member_count,
            total_size: group.total_size,
        })
        .collect()
}
