//! The gap-analysis pipeline.

use rayon::prelude::*;
use tracing::debug;

use numgap_core::{
    AnalyzeConfig, BlockPolicy, DataError, Entry, GapError, GapReport, GroupReport, ScanItem,
    UnmatchedEntry,
};

use crate::blocks::{expand_ranges, extract_blocks};
use crate::gaps::compute_gaps;
use crate::grouping::{group_selections, split_on_threshold};
use crate::template::{select_blocks, Selection};

/// Runs the full pipeline: extraction, range expansion, normalization,
/// grouping, threshold splitting, and gap calculation.
pub struct GapAnalyzer {
    config: AnalyzeConfig,
}

impl GapAnalyzer {
    /// Create an analyzer with the default configuration.
    pub fn new() -> Self {
        Self {
            config: AnalyzeConfig::default(),
        }
    }

    /// Create an analyzer with a custom configuration.
    pub fn with_config(config: AnalyzeConfig) -> Self {
        Self { config }
    }

    /// Analyze a batch of scanned names.
    ///
    /// Fails fast on a rejected configuration; an empty input yields an
    /// empty report. Groups are processed on rayon workers and the final
    /// ordering is deterministic: groups by `(scope, template key,
    /// expected start)`, missing ranges ascending by start.
    pub fn analyze(&self, items: &[ScanItem]) -> Result<GapReport, GapError> {
        self.config.validate()?;

        if items.is_empty() {
            return Ok(GapReport::default());
        }

        // Phase 1: extract blocks and expand ranges per item.
        let entries: Vec<Entry> = items
            .par_iter()
            .map(|item| {
                let mut blocks = extract_blocks(&item.name)?;
                if self.config.multi_range {
                    let all_pairs = self.config.block_policy == BlockPolicy::All;
                    blocks = expand_ranges(&item.name, blocks, all_pairs);
                }
                Ok(Entry::from_item(item, blocks))
            })
            .collect::<Result<_, DataError>>()?;

        // Phase 2: policy selection; entries without a usable block are
        // recorded, never dropped.
        let mut selections: Vec<Selection> = Vec::with_capacity(entries.len());
        let mut unmatched: Vec<UnmatchedEntry> = Vec::new();
        for entry in &entries {
            match select_blocks(entry, self.config.block_policy, self.config.width_sensitive) {
                Ok(sels) => selections.extend(sels),
                Err(reason) => unmatched.push(UnmatchedEntry {
                    directory: entry.directory.clone(),
                    name: entry.name.clone(),
                    kind: entry.kind,
                    reason,
                }),
            }
        }
        debug!(
            entries = entries.len(),
            selections = selections.len(),
            unmatched = unmatched.len(),
            "normalized entries"
        );

        // Phase 3: group, then split and compute gaps per group in
        // parallel. No shared state between groups.
        let groups = group_selections(selections, self.config.cross_dir_grouping);
        debug!(groups = groups.len(), "built sequence groups");

        let mut reports: Vec<GroupReport> = groups
            .into_par_iter()
            .flat_map(|group| {
                let parts = match self.config.group_threshold {
                    Some(threshold) => split_on_threshold(group, threshold),
                    None => vec![group],
                };
                parts
                    .into_iter()
                    .map(|part| GroupReport {
                        result: compute_gaps(&part, &self.config),
                        template_key: part.template_key,
                        scope: part.scope,
                        width: part.width,
                        kind: part.kind,
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        // Deterministic final order regardless of rayon scheduling.
        reports.sort_by(|a, b| {
            (&a.scope, &a.template_key, a.result.expected_start).cmp(&(
                &b.scope,
                &b.template_key,
                b.result.expected_start,
            ))
        });
        unmatched.sort_by(|a, b| (&a.directory, &a.name).cmp(&(&b.directory, &b.name)));

        Ok(GapReport {
            groups: reports,
            unmatched,
        })
    }
}

impl Default for GapAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
