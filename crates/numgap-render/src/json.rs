//! JSON projection of a gap report.

use serde::Serialize;

use numgap_core::{GapReport, GroupReport, GroupStats, MissingRange};

use crate::text::include_group;
use crate::{text, RangeStyle, RenderError, RenderOptions};

#[derive(Serialize)]
struct JsonReport<'a> {
    results: Vec<JsonGroup<'a>>,
    unmatched: Vec<JsonUnmatched>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<JsonSummary>,
}

#[derive(Serialize)]
struct JsonGroup<'a> {
    group_id: usize,
    directory: String,
    template: &'a str,
    artifact_type: &'static str,
    width: u32,
    expected_start: u64,
    expected_end: u64,
    increment: u64,
    segments: Vec<JsonSegment>,
    stats: GroupStats,
}

#[derive(Serialize)]
struct JsonSegment {
    start_val: u64,
    end_val: u64,
    count: u64,
    boundary_type: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing_items: Vec<JsonItem>,
}

#[derive(Serialize)]
struct JsonItem {
    val: u64,
    label: String,
}

#[derive(Serialize)]
struct JsonUnmatched {
    directory: String,
    name: String,
    reason: String,
}

#[derive(Serialize)]
struct JsonSummary {
    groups: u64,
    segments: u64,
    found: u64,
    missing: u64,
    approx_missing_bytes: u64,
}

fn segment(group: &GroupReport, range: &MissingRange, opts: &RenderOptions) -> JsonSegment {
    let increment = group.result.increment;
    let missing_items = match opts.range_style {
        RangeStyle::Compact => Vec::new(),
        RangeStyle::All => {
            let mut items = Vec::new();
            let mut value = range.start;
            while value <= range.end {
                items.push(JsonItem {
                    val: value,
                    label: text::item_label(group, value, opts.show),
                });
                value += increment;
            }
            items
        }
    };
    JsonSegment {
        start_val: range.start,
        end_val: range.end,
        count: range.count(increment),
        boundary_type: range.kind.label(),
        missing_items,
    }
}

pub(crate) fn render(report: &GapReport, opts: &RenderOptions) -> Result<String, RenderError> {
    let mut results = Vec::new();
    for (i, group) in report
        .groups
        .iter()
        .filter(|g| include_group(g, opts))
        .enumerate()
    {
        results.push(JsonGroup {
            group_id: i + 1,
            directory: group.scope.to_string(),
            template: &group.template_key.skeleton,
            artifact_type: group.kind.label(),
            width: group.width,
            expected_start: group.result.expected_start,
            expected_end: group.result.expected_end,
            increment: group.result.increment,
            segments: group
                .result
                .missing
                .iter()
                .map(|r| segment(group, r, opts))
                .collect(),
            stats: group.result.stats,
        });
    }

    let unmatched = report
        .unmatched
        .iter()
        .map(|u| JsonUnmatched {
            directory: u.directory.display().to_string(),
            name: u.name.to_string(),
            reason: u.reason.to_string(),
        })
        .collect();

    let summary = opts.stats.then(|| {
        let mut out = JsonSummary {
            groups: 0,
            segments: 0,
            found: 0,
            missing: 0,
            approx_missing_bytes: 0,
        };
        for group in report.groups.iter().filter(|g| include_group(g, opts)) {
            out.groups += 1;
            out.segments += group.result.missing.len() as u64;
            out.found += group.result.stats.present;
            out.missing += group.result.stats.missing;
            out.approx_missing_bytes += group.result.stats.approx_missing_bytes;
        }
        out
    });

    let doc = JsonReport {
        results,
        unmatched,
        summary,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}
