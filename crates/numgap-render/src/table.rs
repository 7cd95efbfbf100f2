//! Tabular projections built on comfy-table.

use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{ContentArrangement, Table};

use numgap_core::GapReport;

use crate::text::{include_group, segment_text};
use crate::RenderOptions;

/// Plain ASCII table, one row per missing segment.
pub(crate) fn ascii(report: &GapReport, opts: &RenderOptions) -> String {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(["Grp #", "Directory", "Missing Items", "Count"]);

    let mut counter = 1;
    for group in report.groups.iter().filter(|g| include_group(g, opts)) {
        for range in &group.result.missing {
            table.add_row([
                counter.to_string(),
                group.scope.to_string(),
                segment_text(group, range, opts),
                range.count(group.result.increment).to_string(),
            ]);
        }
        if group.result.missing.is_empty() {
            table.add_row([
                counter.to_string(),
                group.scope.to_string(),
                "-".to_string(),
                "0".to_string(),
            ]);
        }
        counter += 1;
    }
    table.to_string()
}

/// UTF-8 box-drawing table, one row per group.
pub(crate) fn rich(report: &GapReport, opts: &RenderOptions) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(["Grp #", "Directory", "Pattern", "Missing Segments"]);

    let mut counter = 1;
    for group in report.groups.iter().filter(|g| include_group(g, opts)) {
        let segments = group
            .result
            .missing
            .iter()
            .map(|r| segment_text(group, r, opts))
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row([
            counter.to_string(),
            group.scope.to_string(),
            group.template_key.to_string(),
            if segments.is_empty() {
                "-".to_string()
            } else {
                segments
            },
        ]);
        counter += 1;
    }
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use numgap_core::{
        ArtifactKind, DirectoryScope, GapKind, GapResult, GroupReport, GroupStats, MissingRange,
        TemplateKey,
    };

    fn report() -> GapReport {
        GapReport {
            groups: vec![GroupReport {
                template_key: TemplateKey::new("t{}.bin", Some(2)),
                scope: DirectoryScope::Single("/x".into()),
                width: 2,
                kind: ArtifactKind::File,
                result: GapResult {
                    expected_start: 1,
                    expected_end: 9,
                    increment: 1,
                    missing: vec![MissingRange {
                        start: 4,
                        end: 6,
                        kind: GapKind::Internal,
                    }],
                    stats: GroupStats {
                        expected: 9,
                        present: 6,
                        missing: 3,
                        approx_missing_bytes: 0,
                    },
                },
            }],
            unmatched: Vec::new(),
        }
    }

    #[test]
    fn test_ascii_rows() {
        let out = ascii(&report(), &RenderOptions::default());
        assert!(out.contains("Missing Items"));
        assert!(out.contains("t04.bin..t06.bin (3)"));
        assert!(out.contains('+'));
    }

    #[test]
    fn test_rich_uses_box_drawing() {
        let out = rich(&report(), &RenderOptions::default());
        assert!(out.contains("t{}.bin"));
        assert!(out.contains('│') || out.contains('┌'));
    }
}
