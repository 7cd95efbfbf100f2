//! Analysis and scan configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Rule selecting which numeric block(s) in a name determine sequence
/// membership.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockPolicy {
    /// The leftmost numeric block.
    #[default]
    First,
    /// The rightmost numeric block.
    Last,
    /// The block with the largest value (ties go left).
    Largest,
    /// Every block; the entry contributes to one group per block position.
    All,
    /// The block at this position only; entries without one are unmatched.
    Index(usize),
}

/// Configuration for the gap-analysis pipeline.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::check"))]
pub struct AnalyzeConfig {
    /// Which numeric block(s) define sequence membership.
    #[builder(default)]
    #[serde(default)]
    pub block_policy: BlockPolicy,

    /// Recognize inline `A-B` ranges and expand their coverage.
    #[builder(default = "false")]
    #[serde(default)]
    pub multi_range: bool,

    /// Merge coverage for the same template key across directories.
    #[builder(default = "false")]
    #[serde(default)]
    pub cross_dir_grouping: bool,

    /// Split a group wherever consecutive values differ by more than this.
    #[builder(default)]
    #[serde(default)]
    pub group_threshold: Option<u64>,

    /// Force the sequence start instead of using the observed minimum.
    #[builder(default)]
    #[serde(default)]
    pub forced_start: Option<u64>,

    /// Force the sequence end instead of using the observed maximum.
    #[builder(default)]
    #[serde(default)]
    pub forced_end: Option<u64>,

    /// Check up to the next multiple of this boundary (e.g. 100).
    #[builder(default)]
    #[serde(default)]
    pub mod_boundary: Option<u64>,

    /// Step between consecutive expected values.
    #[builder(default = "1")]
    #[serde(default = "default_increment")]
    pub increment: u64,

    /// Treat `005` and `5` as different sequences (default on).
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub width_sensitive: bool,
}

fn default_increment() -> u64 {
    1
}

fn default_true() -> bool {
    true
}

impl AnalyzeConfigBuilder {
    fn check(&self) -> Result<(), String> {
        let snapshot = AnalyzeConfig {
            block_policy: self.block_policy.unwrap_or_default(),
            multi_range: self.multi_range.unwrap_or(false),
            cross_dir_grouping: self.cross_dir_grouping.unwrap_or(false),
            group_threshold: self.group_threshold.flatten(),
            forced_start: self.forced_start.flatten(),
            forced_end: self.forced_end.flatten(),
            mod_boundary: self.mod_boundary.flatten(),
            increment: self.increment.unwrap_or(1),
            width_sensitive: self.width_sensitive.unwrap_or(true),
        };
        snapshot.validate().map_err(|e| e.to_string())
    }
}

impl AnalyzeConfig {
    /// Create a new config builder.
    pub fn builder() -> AnalyzeConfigBuilder {
        AnalyzeConfigBuilder::default()
    }

    /// Fail fast on rejected option combinations, before computation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let (Some(start), Some(end)) = (self.forced_start, self.forced_end) {
            if start > end {
                return Err(ConfigError::ForcedRangeInverted { start, end });
            }
        }
        if self.increment == 0 {
            return Err(ConfigError::ZeroIncrement);
        }
        if self.group_threshold == Some(0) {
            return Err(ConfigError::ZeroThreshold);
        }
        if self.mod_boundary == Some(0) {
            return Err(ConfigError::ZeroBoundary);
        }
        Ok(())
    }
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            block_policy: BlockPolicy::default(),
            multi_range: false,
            cross_dir_grouping: false,
            group_threshold: None,
            forced_start: None,
            forced_end: None,
            mod_boundary: None,
            increment: 1,
            width_sensitive: true,
        }
    }
}

/// Whether files, directories, or both are analyzed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckMode {
    /// Analyze file names only.
    #[default]
    Files,
    /// Analyze directory names only.
    Dirs,
    /// Analyze both.
    Both,
}

impl CheckMode {
    /// Whether file names are collected.
    pub fn includes_files(&self) -> bool {
        matches!(self, Self::Files | Self::Both)
    }

    /// Whether directory names are collected.
    pub fn includes_dirs(&self) -> bool {
        matches!(self, Self::Dirs | Self::Both)
    }
}

/// Configuration for name collection.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::check"))]
pub struct ScanConfig {
    /// Directories to scan.
    pub roots: Vec<PathBuf>,

    /// Recurse into subdirectories.
    #[builder(default = "false")]
    #[serde(default)]
    pub recursive: bool,

    /// Analyze files, directories, or both.
    #[builder(default)]
    #[serde(default)]
    pub check_mode: CheckMode,

    /// Glob patterns for names to exclude; excluded directories are pruned.
    #[builder(default)]
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Regex a name must match to be kept.
    #[builder(default)]
    #[serde(default)]
    pub name_pattern: Option<String>,

    /// Substring a name must contain to be kept.
    #[builder(default)]
    #[serde(default)]
    pub name_filter: Option<String>,

    /// Number of scan threads (0 = auto-detect).
    #[builder(default = "0")]
    #[serde(default)]
    pub threads: usize,
}

impl ScanConfigBuilder {
    fn check(&self) -> Result<(), String> {
        match &self.roots {
            Some(roots) if !roots.is_empty() => Ok(()),
            _ => Err("At least one root directory is required".to_string()),
        }
    }
}

impl ScanConfig {
    /// Create a new scan config builder.
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    /// Create a simple config scanning one directory non-recursively.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            roots: vec![root.into()],
            recursive: false,
            check_mode: CheckMode::Files,
            exclude: Vec::new(),
            name_pattern: None,
            name_filter: None,
            threads: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_config_defaults() {
        let config = AnalyzeConfig::default();
        assert_eq!(config.block_policy, BlockPolicy::First);
        assert_eq!(config.increment, 1);
        assert!(config.width_sensitive);
        assert!(!config.multi_range);
    }

    #[test]
    fn test_analyze_builder_rejects_inverted_force() {
        let err = AnalyzeConfig::builder()
            .forced_start(100u64)
            .forced_end(50u64)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("greater than forced end"));
    }

    #[test]
    fn test_analyze_builder_rejects_zero_increment() {
        assert!(AnalyzeConfig::builder().increment(0u64).build().is_err());
        assert!(AnalyzeConfig::builder().increment(2u64).build().is_ok());
    }

    #[test]
    fn test_validate_distinguishes_config_errors() {
        let config = AnalyzeConfig {
            group_threshold: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroThreshold)
        ));
    }

    #[test]
    fn test_scan_builder_requires_roots() {
        assert!(ScanConfig::builder().build().is_err());
        assert!(
            ScanConfig::builder()
                .roots(vec![PathBuf::from("/data")])
                .recursive(true)
                .build()
                .is_ok()
        );
    }

    #[test]
    fn test_check_mode() {
        assert!(CheckMode::Files.includes_files());
        assert!(!CheckMode::Files.includes_dirs());
        assert!(CheckMode::Both.includes_files());
        assert!(CheckMode::Both.includes_dirs());
    }
}
