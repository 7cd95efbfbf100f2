//! Missing-number computation for one sequence group.

use numgap_core::{AnalyzeConfig, ArtifactKind, GapKind, GapResult, GroupStats, MissingRange};

use crate::grouping::SequenceGroup;

/// Compute the missing ranges and stats for one (possibly split) group.
///
/// Expected bounds default to the observed min/max; forced start/end
/// override them (values outside a forced bound still count as present
/// but never extend the range), and a modulo boundary widens the range to
/// the enclosing boundary-aligned window. Runs cost O(present values)
/// regardless of how wide the expected range is.
pub fn compute_gaps(group: &SequenceGroup, config: &AnalyzeConfig) -> GapResult {
    let increment = config.increment;
    // Groups are never empty by construction.
    let observed_min = *group.present.iter().next().unwrap_or(&0);
    let observed_max = *group.present.iter().next_back().unwrap_or(&0);

    let start = match config.forced_start {
        Some(forced) => forced,
        None => match config.mod_boundary {
            Some(boundary) => (observed_min / boundary) * boundary,
            None => observed_min,
        },
    };
    let end = match config.forced_end {
        Some(forced) => forced,
        None => match config.mod_boundary {
            Some(boundary) => (observed_max / boundary + 1) * boundary - 1,
            None => observed_max,
        },
    };

    if end < start {
        // A forced bound can leave no expected range at all.
        return GapResult {
            expected_start: start,
            expected_end: end,
            increment,
            missing: Vec::new(),
            stats: GroupStats::default(),
        };
    }

    // Last value on the increment grid within [start, end].
    let grid_end = start + ((end - start) / increment) * increment;
    let expected = (grid_end - start) / increment + 1;

    // Present values that fall on the expected grid.
    let on_grid: Vec<u64> = group
        .present
        .range(start..=grid_end)
        .copied()
        .filter(|v| (v - start) % increment == 0)
        .collect();

    let classify = |run_start: u64, run_end: u64| {
        if run_end < observed_min {
            GapKind::Leading
        } else if run_start > observed_max {
            GapKind::Trailing
        } else {
            GapKind::Internal
        }
    };

    let mut missing = Vec::new();
    let mut push_run = |run_start: u64, run_end: u64| {
        if run_start <= run_end {
            missing.push(MissingRange {
                start: run_start,
                end: run_end,
                kind: classify(run_start, run_end),
            });
        }
    };

    match on_grid.first() {
        None => push_run(start, grid_end),
        Some(&first) => {
            if first > start {
                push_run(start, first - increment);
            }
            for pair in on_grid.windows(2) {
                let (prev, next) = (pair[0], pair[1]);
                if next - prev > increment {
                    push_run(prev + increment, next - increment);
                }
            }
            let last = *on_grid.last().unwrap_or(&first);
            if last < grid_end {
                push_run(last + increment, grid_end);
            }
        }
    }

    let present = on_grid.len() as u64;
    let missing_count = expected - present;

    let approx_missing_bytes =
        if group.kind == ArtifactKind::File && group.member_count > 0 && missing_count > 0 {
            let avg = group.total_size as f64 / group.member_count as f64;
            (avg * missing_count as f64) as u64
        } else {
            0
        };

    GapResult {
        expected_start: start,
        expected_end: end,
        increment,
        missing,
        stats: GroupStats {
            expected,
            present,
            missing: missing_count,
            approx_missing_bytes,
        },
    }
}
