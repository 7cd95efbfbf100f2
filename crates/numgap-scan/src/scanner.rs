//! Jwalk-based parallel name collection.

use std::path::Path;
use std::sync::Arc;

use globset::{Glob, GlobSet, GlobSetBuilder};
use jwalk::{Parallelism, WalkDir};
use regex::Regex;
use tracing::debug;

use numgap_core::{ScanConfig, ScanError, ScanItem};

/// Collects file and directory names per the scan configuration.
///
/// Roots that are missing or not directories are skipped silently, so a
/// multi-root scan degrades gracefully instead of failing whole.
pub struct NameScanner;

impl NameScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self
    }

    /// Walk every root and collect the names to analyze.
    pub fn scan(&self, config: &ScanConfig) -> Result<Vec<ScanItem>, ScanError> {
        let exclude = Arc::new(build_globset(&config.exclude)?);
        let pattern = config
            .name_pattern
            .as_deref()
            .map(|p| {
                Regex::new(p).map_err(|e| ScanError::InvalidPattern {
                    pattern: p.to_string(),
                    message: e.to_string(),
                })
            })
            .transpose()?;

        let mut items = Vec::new();
        for root in &config.roots {
            let root = match root.canonicalize() {
                Ok(path) if path.is_dir() => path,
                _ => {
                    debug!(root = %root.display(), "skipping non-directory root");
                    continue;
                }
            };
            self.walk_root(&root, config, &exclude, &mut items)?;
        }

        // Regex and substring filters apply to the collected base names.
        if pattern.is_some() || config.name_filter.is_some() {
            items.retain(|item| {
                let name = item.name.as_str();
                if let Some(re) = &pattern {
                    if !re.is_match(name) {
                        return false;
                    }
                }
                if let Some(filter) = &config.name_filter {
                    if !name.contains(filter.as_str()) {
                        return false;
                    }
                }
                true
            });
        }

        debug!(items = items.len(), "scan complete");
        Ok(items)
    }

    /// Walk one root, honoring recursion, check-mode, and excludes.
    fn walk_root(
        &self,
        root: &Path,
        config: &ScanConfig,
        exclude: &Arc<GlobSet>,
        items: &mut Vec<ScanItem>,
    ) -> Result<(), ScanError> {
        let parallelism = match config.threads {
            0 => Parallelism::RayonDefaultPool {
                busy_timeout: std::time::Duration::from_millis(100),
            },
            n => Parallelism::RayonNewPool(n),
        };

        let prune = Arc::clone(exclude);
        let walker = WalkDir::new(root)
            .parallelism(parallelism)
            .skip_hidden(false)
            .follow_links(false)
            .min_depth(1)
            .max_depth(if config.recursive { usize::MAX } else { 1 })
            .process_read_dir(move |_depth, _path, _state, children| {
                // Excluded names are pruned, not merely skipped, so an
                // excluded directory is never descended into.
                children.retain(|entry| match entry {
                    Ok(entry) => !prune.is_match(Path::new(&entry.file_name)),
                    Err(_) => true,
                });
            });

        for entry_result in walker {
            let entry = match entry_result {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().to_string();
            let Some(directory) = entry.path().parent().map(Path::to_path_buf) else {
                continue;
            };

            let file_type = entry.file_type();
            if file_type.is_dir() && config.check_mode.includes_dirs() {
                items.push(ScanItem::dir(directory, name));
            } else if file_type.is_file() && config.check_mode.includes_files() {
                let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
                items.push(ScanItem::file(directory, name, size));
            }
        }

        Ok(())
    }
}

impl Default for NameScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Compile exclude globs, surfacing the offending pattern on failure.
fn build_globset(patterns: &[String]) -> Result<GlobSet, ScanError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| ScanError::InvalidPattern {
            pattern: pattern.clone(),
            message: e.to_string(),
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| ScanError::InvalidPattern {
        pattern: patterns.join(", "),
        message: e.to_string(),
    })
}
