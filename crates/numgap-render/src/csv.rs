//! CSV projection of a gap report.

use numgap_core::GapReport;

use crate::text::{include_group, item_label};
use crate::{RangeStyle, RenderError, RenderOptions};

const HEADER: [&str; 6] = [
    "group_id",
    "directory",
    "artifact_type",
    "missing_val",
    "missing_label",
    "reason",
];

/// One row per missing value, or one per segment under compact ranges.
pub(crate) fn render(report: &GapReport, opts: &RenderOptions) -> Result<String, RenderError> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;

    let mut counter = 1;
    for group in report.groups.iter().filter(|g| include_group(g, opts)) {
        let group_id = counter.to_string();
        let directory = group.scope.to_string();
        let artifact_type = group.kind.label();
        counter += 1;

        for range in &group.result.missing {
            let reason = range.kind.label();
            match opts.range_style {
                RangeStyle::All => {
                    let mut value = range.start;
                    while value <= range.end {
                        writer.write_record([
                            group_id.as_str(),
                            &directory,
                            artifact_type,
                            &value.to_string(),
                            &item_label(group, value, opts.show),
                            reason,
                        ])?;
                        value += group.result.increment;
                    }
                }
                RangeStyle::Compact => {
                    let (val, label) = if range.start == range.end {
                        (
                            range.start.to_string(),
                            item_label(group, range.start, opts.show),
                        )
                    } else {
                        (
                            format!("{}..{}", range.start, range.end),
                            format!(
                                "{}..{}",
                                item_label(group, range.start, opts.show),
                                item_label(group, range.end, opts.show)
                            ),
                        )
                    };
                    writer.write_record([
                        group_id.as_str(),
                        &directory,
                        artifact_type,
                        &val,
                        &label,
                        reason,
                    ])?;
                }
            }
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ::csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
