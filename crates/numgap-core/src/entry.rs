//! Scanned name entries and the numeric blocks found inside them.

use std::fmt;
use std::path::PathBuf;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// What kind of on-disk artifact a name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// A regular file name.
    File,
    /// A directory name.
    Directory,
}

impl ArtifactKind {
    /// Plural label used in rendered output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::File => "files",
            Self::Directory => "dirs",
        }
    }
}

/// One maximal run of ASCII digits within a name.
///
/// When the run was recognized as the start of an inline `A-B` range,
/// `range_end` holds the inclusive upper bound and the block's byte span
/// covers the whole `A-B` text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericBlock {
    /// Literal digit string (preserves leading zeros).
    pub raw: CompactString,
    /// Parsed non-negative value.
    pub value: u64,
    /// Zero-padding width; equals `raw.len()`.
    pub width: u32,
    /// Index of this block among all blocks in the name, left to right.
    pub position: usize,
    /// Inclusive upper bound of an inline `A-B` range, when recognized.
    pub range_end: Option<u64>,
    /// Byte offset of the block's text within the name.
    pub start: usize,
    /// Byte offset one past the block's text.
    pub end: usize,
}

impl NumericBlock {
    /// Whether this block denotes an inline range.
    pub fn is_range(&self) -> bool {
        self.range_end.is_some()
    }

    /// Every integer this block marks as present.
    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.value..=self.range_end.unwrap_or(self.value)
    }

    /// Number of integers covered by this block.
    pub fn count(&self) -> u64 {
        self.range_end.unwrap_or(self.value) - self.value + 1
    }
}

/// One `(directory, name)` pair produced by the scanning collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanItem {
    /// Containing directory.
    pub directory: PathBuf,
    /// The name being analyzed, per check-mode.
    pub name: CompactString,
    /// On-disk size in bytes (zero for directories).
    pub size: u64,
    /// File or directory.
    pub kind: ArtifactKind,
}

impl ScanItem {
    /// Create a new scan item.
    pub fn new(
        directory: impl Into<PathBuf>,
        name: impl Into<CompactString>,
        size: u64,
        kind: ArtifactKind,
    ) -> Self {
        Self {
            directory: directory.into(),
            name: name.into(),
            size,
            kind,
        }
    }

    /// Convenience constructor for a file name.
    pub fn file(directory: impl Into<PathBuf>, name: impl Into<CompactString>, size: u64) -> Self {
        Self::new(directory, name, size, ArtifactKind::File)
    }

    /// Convenience constructor for a directory name.
    pub fn dir(directory: impl Into<PathBuf>, name: impl Into<CompactString>) -> Self {
        Self::new(directory, name, 0, ArtifactKind::Directory)
    }
}

/// One analyzed name with its extracted numeric blocks.
///
/// Immutable after creation; consumed by the template normalizer and the
/// grouping engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Containing directory.
    pub directory: PathBuf,
    /// The analyzed name.
    pub name: CompactString,
    /// File or directory.
    pub kind: ArtifactKind,
    /// On-disk size in bytes.
    pub size: u64,
    /// Numeric blocks found in the name, left to right.
    pub blocks: Vec<NumericBlock>,
}

impl Entry {
    /// Build an entry from a scan item and its extracted blocks.
    pub fn from_item(item: &ScanItem, blocks: Vec<NumericBlock>) -> Self {
        Self {
            directory: item.directory.clone(),
            name: item.name.clone(),
            kind: item.kind,
            size: item.size,
            blocks,
        }
    }
}

/// Why an entry was excluded from every sequence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnmatchedReason {
    /// The name contains no digits at all.
    NoDigits,
    /// An explicit block index selected a position the name does not have.
    NoBlockAtIndex(usize),
}

impl fmt::Display for UnmatchedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDigits => write!(f, "no numeric blocks"),
            Self::NoBlockAtIndex(idx) => write!(f, "no numeric block at index {idx}"),
        }
    }
}

/// An entry whose policy-selected block set is empty.
///
/// Recorded separately in the report; never silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmatchedEntry {
    /// Containing directory.
    pub directory: PathBuf,
    /// The analyzed name.
    pub name: CompactString,
    /// File or directory.
    pub kind: ArtifactKind,
    /// Why the entry could not join a group.
    pub reason: UnmatchedReason,
}
