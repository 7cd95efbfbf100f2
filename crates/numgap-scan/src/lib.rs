//! Directory traversal and name filtering for numgap.
//!
//! Collects `(directory, name)` pairs for the analysis core: file and/or
//! directory names per check-mode, with glob excludes (pruned during the
//! walk), a regex name pattern, and a substring filter.
//!
//! ```rust,ignore
//! use numgap_scan::NameScanner;
//! use numgap_core::ScanConfig;
//!
//! let config = ScanConfig::new("/path/to/scan");
//! let items = NameScanner::new().scan(&config)?;
//! ```

mod scanner;

pub use scanner::NameScanner;

// Re-export core types
pub use numgap_core::{CheckMode, ScanConfig, ScanError, ScanItem};
