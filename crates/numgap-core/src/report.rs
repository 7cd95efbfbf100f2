//! The structured, format-agnostic gap report.
//!
//! `GapReport` is the sole contract between the analysis core and all
//! rendering and output collaborators. It carries no formatting.

use std::fmt;
use std::path::PathBuf;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::entry::{ArtifactKind, UnmatchedEntry};

/// Token substituted for the selected numeric block in a template skeleton.
pub const PLACEHOLDER: &str = "{}";

/// The non-numeric skeleton of a name, used to group entries into one
/// ordinal sequence.
///
/// The skeleton is the name with the selected block's text replaced by
/// [`PLACEHOLDER`]; all other characters, including non-selected digit
/// runs, stay literal. `width_class` is present under width-sensitive
/// matching so `005` and `5` never silently collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TemplateKey {
    /// Name skeleton with the selected block blanked.
    pub skeleton: String,
    /// Zero-padding width class, when width-sensitive matching is on.
    pub width_class: Option<u32>,
}

impl TemplateKey {
    /// Create a new template key.
    pub fn new(skeleton: impl Into<String>, width_class: Option<u32>) -> Self {
        Self {
            skeleton: skeleton.into(),
            width_class,
        }
    }

    /// Reconstruct a concrete name for a missing value, zero-padded to
    /// `width` digits.
    pub fn instantiate(&self, value: u64, width: u32) -> String {
        let padded = pad_value(value, width);
        self.skeleton.replacen(PLACEHOLDER, &padded, 1)
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.skeleton)
    }
}

/// Zero-pad a value to `width` digits (wider values print naturally).
pub fn pad_value(value: u64, width: u32) -> String {
    format!("{value:0w$}", w = width as usize)
}

/// The directory context a sequence group was observed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DirectoryScope {
    /// All members live in one directory.
    Single(PathBuf),
    /// Cross-directory mode merged members from these directories.
    Merged(Vec<PathBuf>),
}

impl DirectoryScope {
    /// Create a merged scope with sorted, deduplicated directories.
    pub fn merged(mut dirs: Vec<PathBuf>) -> Self {
        dirs.sort();
        dirs.dedup();
        Self::Merged(dirs)
    }

    /// The directories covered by this scope.
    pub fn directories(&self) -> &[PathBuf] {
        match self {
            Self::Single(dir) => std::slice::from_ref(dir),
            Self::Merged(dirs) => dirs,
        }
    }
}

impl fmt::Display for DirectoryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(dir) => write!(f, "{}", dir.display()),
            Self::Merged(dirs) => {
                write!(f, "{}", dirs.iter().map(|d| d.display()).join("; "))
            }
        }
    }
}

/// Where a missing range sits relative to the observed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapKind {
    /// Before the smallest observed value.
    Leading,
    /// Between two observed values.
    Internal,
    /// After the largest observed value.
    Trailing,
}

impl GapKind {
    /// Lowercase label used in rendered output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Leading => "leading",
            Self::Internal => "internal",
            Self::Trailing => "trailing",
        }
    }
}

/// One contiguous run of expected values with no corresponding entry.
/// Bounds are inclusive and lie on the increment grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingRange {
    /// First missing value.
    pub start: u64,
    /// Last missing value.
    pub end: u64,
    /// Position relative to the observed values.
    pub kind: GapKind,
}

impl MissingRange {
    /// Number of missing values in this range for the given increment.
    pub fn count(&self, increment: u64) -> u64 {
        (self.end - self.start) / increment + 1
    }
}

/// Counts for one analyzed group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStats {
    /// Values in the expected set.
    pub expected: u64,
    /// Expected values actually covered by entries.
    pub present: u64,
    /// Expected values with no entry.
    pub missing: u64,
    /// Estimated bytes the missing files would occupy, from the average
    /// member size (zero for directory groups).
    pub approx_missing_bytes: u64,
}

/// The outcome of gap analysis for one (possibly split) sequence group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapResult {
    /// First value of the checked sequence.
    pub expected_start: u64,
    /// Last value of the checked sequence.
    pub expected_end: u64,
    /// Step between consecutive expected values.
    pub increment: u64,
    /// Missing runs, ascending, disjoint, non-adjacent.
    pub missing: Vec<MissingRange>,
    /// Expected / present / missing counts.
    pub stats: GroupStats,
}

impl GapResult {
    /// Whether anything is missing from this group.
    pub fn has_missing(&self) -> bool {
        !self.missing.is_empty()
    }
}

/// One final group in the report, after any threshold splitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupReport {
    /// The grouping key shared by all members.
    pub template_key: TemplateKey,
    /// Directory context of the members.
    pub scope: DirectoryScope,
    /// Canonical zero-padding width for rendering missing numbers.
    pub width: u32,
    /// File or directory sequence.
    pub kind: ArtifactKind,
    /// The computed gaps and stats.
    pub result: GapResult,
}

impl GroupReport {
    /// Reconstruct the name a missing value would have had.
    pub fn missing_name(&self, value: u64) -> String {
        self.template_key.instantiate(value, self.width)
    }
}

/// The complete analysis result: all groups plus all unmatched entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapReport {
    /// Final groups, sorted by `(scope, template_key, expected_start)`.
    pub groups: Vec<GroupReport>,
    /// Entries that could not join any group.
    pub unmatched: Vec<UnmatchedEntry>,
}

impl GapReport {
    /// Whether the report contains no groups and no unmatched entries.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.unmatched.is_empty()
    }

    /// Total missing values across all groups.
    pub fn total_missing(&self) -> u64 {
        self.groups.iter().map(|g| g.result.stats.missing).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instantiate_pads_to_width() {
        let key = TemplateKey::new("IMG_{}.jpg", Some(4));
        assert_eq!(key.instantiate(7, 4), "IMG_0007.jpg");
        assert_eq!(key.instantiate(12345, 4), "IMG_12345.jpg");
    }

    #[test]
    fn test_instantiate_keeps_other_digits_literal() {
        let key = TemplateKey::new("frame-{}-120.png", Some(3));
        assert_eq!(key.instantiate(99, 3), "frame-099-120.png");
    }

    #[test]
    fn test_missing_range_count_with_increment() {
        let range = MissingRange {
            start: 10,
            end: 20,
            kind: GapKind::Internal,
        };
        assert_eq!(range.count(1), 11);
        assert_eq!(range.count(5), 3);
    }

    #[test]
    fn test_merged_scope_sorted_and_deduped() {
        let scope = DirectoryScope::merged(vec![
            PathBuf::from("/b"),
            PathBuf::from("/a"),
            PathBuf::from("/b"),
        ]);
        assert_eq!(
            scope.directories(),
            &[PathBuf::from("/a"), PathBuf::from("/b")]
        );
        assert_eq!(scope.to_string(), "/a; /b");
    }
}
