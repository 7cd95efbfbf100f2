//! Core types and configuration for numgap.
//!
//! This crate provides the fundamental data structures shared across
//! the numgap ecosystem: scanned name entries and their numeric blocks,
//! analysis and scan configuration, and the format-agnostic gap report
//! handed to renderers.

mod config;
mod entry;
mod error;
mod report;

pub use config::{
    AnalyzeConfig, AnalyzeConfigBuilder, BlockPolicy, CheckMode, ScanConfig, ScanConfigBuilder,
};
pub use entry::{ArtifactKind, Entry, NumericBlock, ScanItem, UnmatchedEntry, UnmatchedReason};
pub use error::{ConfigError, DataError, GapError, ScanError};
pub use report::{
    pad_value, DirectoryScope, GapKind, GapReport, GapResult, GroupReport, GroupStats,
    MissingRange, TemplateKey, PLACEHOLDER,
};
