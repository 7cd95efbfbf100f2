//! Sequence extraction and gap detection for numgap.
//!
//! Turns a flat list of scanned names into normalized sequence groups and
//! computes which numbers each group is missing:
//!
//! 1. **Block extraction** - every maximal digit run in a name
//! 2. **Range expansion** - inline `A-B` ranges cover `[A, B]` (optional)
//! 3. **Template normalization** - block-policy selection and grouping keys
//! 4. **Grouping** - cluster entries per directory or across directories
//! 5. **Threshold splitting** - cut groups at large internal jumps
//! 6. **Gap calculation** - missing ranges and stats per group
//!
//! ```rust
//! use numgap_analyze::GapAnalyzer;
//! use numgap_core::{AnalyzeConfig, ScanItem};
//!
//! let items = vec![
//!     ScanItem::file("/photos", "IMG_0001.jpg", 1024),
//!     ScanItem::file("/photos", "IMG_0003.jpg", 1024),
//! ];
//!
//! let analyzer = GapAnalyzer::new();
//! let report = analyzer.analyze(&items).unwrap();
//!
//! assert_eq!(report.groups[0].missing_name(2), "IMG_0002.jpg");
//! ```
//!
//! Every stage is pure and deterministic; groups are processed on rayon
//! workers and the final report order is stable across runs.

mod analyzer;
mod blocks;
mod gaps;
mod grouping;
mod template;

pub use analyzer::GapAnalyzer;
pub use blocks::{expand_ranges, extract_blocks};
pub use gaps::compute_gaps;
pub use grouping::{group_selections, split_on_threshold, SequenceGroup};
pub use template::{select_blocks, Selection};

// Re-export core types
pub use numgap_core::{AnalyzeConfig, BlockPolicy, GapError, GapReport, ScanItem};
