//! Summary and inline text projections, plus the segment helpers shared
//! by the tabular renderers.

use humansize::{format_size, BINARY};

use numgap_core::{GapReport, GroupReport, MissingRange};

use crate::{RangeStyle, RenderOptions, ShowMode};

/// Label one missing value according to the show mode.
pub(crate) fn item_label(group: &GroupReport, value: u64, show: ShowMode) -> String {
    let padded = numgap_core::pad_value(value, group.width);
    match show {
        ShowMode::Filename => group.missing_name(value),
        ShowMode::Padded => padded,
        ShowMode::Number => value.to_string(),
        ShowMode::Significant => {
            let start = padded.len().saturating_sub(3);
            padded[start..].to_string()
        }
    }
}

/// Describe one missing segment: every item under `RangeStyle::All`,
/// otherwise `first..last (count)`.
pub(crate) fn segment_text(group: &GroupReport, range: &MissingRange, opts: &RenderOptions) -> String {
    let increment = group.result.increment;
    let count = range.count(increment);
    let reason = if opts.explain {
        format!(" ({})", range.kind.label())
    } else {
        String::new()
    };

    match opts.range_style {
        RangeStyle::All => {
            let mut parts = Vec::with_capacity(count as usize);
            let mut value = range.start;
            while value <= range.end {
                parts.push(format!("{}{reason}", item_label(group, value, opts.show)));
                value += increment;
            }
            parts.join("; ")
        }
        RangeStyle::Compact => {
            if count == 1 {
                format!(
                    "{} ({count}){reason}",
                    item_label(group, range.start, opts.show)
                )
            } else {
                format!(
                    "{}..{} ({count}){reason}",
                    item_label(group, range.start, opts.show),
                    item_label(group, range.end, opts.show)
                )
            }
        }
    }
}

/// Whether a group is rendered at all.
pub(crate) fn include_group(group: &GroupReport, opts: &RenderOptions) -> bool {
    group.result.has_missing() || opts.show_empty
}

/// The global `STATS =>` trailer, over the rendered groups only.
pub(crate) fn global_stats_line(report: &GapReport, opts: &RenderOptions) -> String {
    let mut groups = 0u64;
    let mut segments = 0u64;
    let mut found = 0u64;
    let mut missing = 0u64;
    let mut bytes = 0u64;
    for group in report.groups.iter().filter(|g| include_group(g, opts)) {
        groups += 1;
        segments += group.result.missing.len() as u64;
        found += group.result.stats.present;
        missing += group.result.stats.missing;
        bytes += group.result.stats.approx_missing_bytes;
    }
    format!(
        "STATS => groups:{groups}, segments:{segments}, found:{found}, missing:{missing}, ~{} missing",
        format_size(bytes, BINARY)
    )
}

fn group_body(lines: &mut Vec<String>, group: &GroupReport, opts: &RenderOptions) {
    if !group.result.has_missing() {
        lines.push("  No missing segments.".to_string());
        return;
    }
    for (i, range) in group.result.missing.iter().enumerate() {
        if i > 0 && opts.range_spacing {
            lines.push(String::new());
        }
        for part in segment_text(group, range, opts).split("; ") {
            lines.push(format!("  {part}"));
        }
    }
}

fn debug_line(group: &GroupReport) -> String {
    let stats = group.result.stats;
    format!(
        "  [dbg] found={} missing={} ~{} missing",
        stats.present,
        stats.missing,
        format_size(stats.approx_missing_bytes, BINARY)
    )
}

fn render_groups(report: &GapReport, opts: &RenderOptions, braces: bool) -> String {
    let mut lines = Vec::new();
    let mut counter = 1;
    for group in report.groups.iter().filter(|g| include_group(g, opts)) {
        let open = if braces { " {" } else { "" };
        lines.push(format!(
            "Grp #{counter}: {} (dir:{}){open}",
            group.template_key, group.scope
        ));
        counter += 1;
        group_body(&mut lines, group, opts);
        if braces {
            lines.push("}".to_string());
        }
        if opts.verbose {
            lines.push(debug_line(group));
        }
    }

    if opts.verbose && !report.unmatched.is_empty() {
        lines.push(format!(
            "{} name(s) without a usable numeric block",
            report.unmatched.len()
        ));
    }

    if opts.stats {
        lines.push(String::new());
        lines.push(global_stats_line(report, opts));
    }

    lines.join("\n")
}

/// The default brace-delimited projection.
pub(crate) fn summary(report: &GapReport, opts: &RenderOptions) -> String {
    render_groups(report, opts, true)
}

/// The same content without braces.
pub(crate) fn inline(report: &GapReport, opts: &RenderOptions) -> String {
    render_groups(report, opts, false)
}
