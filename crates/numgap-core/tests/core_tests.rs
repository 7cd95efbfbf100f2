use std::path::PathBuf;

use numgap_core::{
    AnalyzeConfig, ArtifactKind, BlockPolicy, CheckMode, ConfigError, DirectoryScope, GapKind,
    GapReport, GapResult, GroupReport, GroupStats, MissingRange, ScanConfig, TemplateKey,
};

#[test]
fn test_analyze_config_builder() {
    let config = AnalyzeConfig::builder()
        .block_policy(BlockPolicy::Last)
        .multi_range(true)
        .cross_dir_grouping(true)
        .group_threshold(Some(100u64))
        .increment(2u64)
        .build()
        .unwrap();

    assert_eq!(config.block_policy, BlockPolicy::Last);
    assert!(config.multi_range);
    assert!(config.cross_dir_grouping);
    assert_eq!(config.group_threshold, Some(100));
    assert_eq!(config.increment, 2);
}

#[test]
fn test_forced_range_validation_fails_fast() {
    let config = AnalyzeConfig {
        forced_start: Some(10),
        forced_end: Some(5),
        ..Default::default()
    };
    match config.validate() {
        Err(ConfigError::ForcedRangeInverted { start, end }) => {
            assert_eq!(start, 10);
            assert_eq!(end, 5);
        }
        other => panic!("expected ForcedRangeInverted, got {other:?}"),
    }

    // Equal bounds are fine.
    let config = AnalyzeConfig {
        forced_start: Some(5),
        forced_end: Some(5),
        ..Default::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_scan_config_builder() {
    let config = ScanConfig::builder()
        .roots(vec![PathBuf::from("/a"), PathBuf::from("/b")])
        .recursive(true)
        .check_mode(CheckMode::Both)
        .exclude(vec!["*.tmp".to_string()])
        .name_filter(Some("IMG".to_string()))
        .build()
        .unwrap();

    assert_eq!(config.roots.len(), 2);
    assert!(config.recursive);
    assert_eq!(config.check_mode, CheckMode::Both);
}

#[test]
fn test_template_key_round_trip() {
    let key = TemplateKey::new("IMG_{}.jpg", Some(4));
    assert_eq!(key.instantiate(42, 4), "IMG_0042.jpg");
    assert_eq!(key.to_string(), "IMG_{}.jpg");

    // Width-insensitive keys carry no width class and compare equal
    // across padded and unpadded members.
    let a = TemplateKey::new("IMG_{}.jpg", None);
    let b = TemplateKey::new("IMG_{}.jpg", None);
    assert_eq!(a, b);

    // Width-sensitive keys with different widths stay apart.
    let narrow = TemplateKey::new("IMG_{}.jpg", Some(1));
    let wide = TemplateKey::new("IMG_{}.jpg", Some(3));
    assert_ne!(narrow, wide);
}

#[test]
fn test_report_totals() {
    let group = GroupReport {
        template_key: TemplateKey::new("v{}.txt", Some(3)),
        scope: DirectoryScope::Single(PathBuf::from("/data")),
        width: 3,
        kind: ArtifactKind::File,
        result: GapResult {
            expected_start: 1,
            expected_end: 8,
            increment: 1,
            missing: vec![
                MissingRange {
                    start: 5,
                    end: 5,
                    kind: GapKind::Internal,
                },
                MissingRange {
                    start: 7,
                    end: 7,
                    kind: GapKind::Internal,
                },
            ],
            stats: GroupStats {
                expected: 8,
                present: 6,
                missing: 2,
                approx_missing_bytes: 0,
            },
        },
    };

    assert!(group.result.has_missing());
    assert_eq!(group.missing_name(5), "v005.txt");

    let report = GapReport {
        groups: vec![group],
        unmatched: Vec::new(),
    };
    assert!(!report.is_empty());
    assert_eq!(report.total_missing(), 2);

    assert!(GapReport::default().is_empty());
}

#[test]
fn test_report_serializes() {
    let report = GapReport::default();
    let json = serde_json::to_string(&report).unwrap();
    let back: GapReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}
