use numgap_analyze::GapAnalyzer;
use numgap_core::{
    AnalyzeConfig, BlockPolicy, DirectoryScope, GapReport, ScanItem, UnmatchedReason,
};

fn files(dir: &str, names: &[&str]) -> Vec<ScanItem> {
    names
        .iter()
        .map(|name| ScanItem::file(dir, *name, 100))
        .collect()
}

fn missing(report: &GapReport, group: usize) -> Vec<(u64, u64)> {
    report.groups[group]
        .result
        .missing
        .iter()
        .map(|m| (m.start, m.end))
        .collect()
}

#[test]
fn test_basic_gap_scenario() {
    let items = files(
        "/data",
        &[
            "001.txt", "002.txt", "003.txt", "004.txt", "006.txt", "008.txt",
        ],
    );
    let report = GapAnalyzer::new().analyze(&items).unwrap();

    assert_eq!(report.groups.len(), 1);
    assert_eq!(missing(&report, 0), vec![(5, 5), (7, 7)]);
    let stats = report.groups[0].result.stats;
    assert_eq!(stats.expected, 8);
    assert_eq!(stats.present, 6);
    assert_eq!(stats.missing, 2);
    assert!(report.unmatched.is_empty());
}

#[test]
fn test_multi_range_scenario() {
    let config = AnalyzeConfig::builder().multi_range(true).build().unwrap();
    let items = files("/data", &["001.txt", "002-004.txt", "006.txt", "008.txt"]);
    let report = GapAnalyzer::with_config(config).analyze(&items).unwrap();

    assert_eq!(report.groups.len(), 1);
    assert_eq!(missing(&report, 0), vec![(5, 5), (7, 7)]);
    assert_eq!(report.groups[0].result.stats.present, 6);
}

#[test]
fn test_range_expansion_matches_individual_files() {
    let config = AnalyzeConfig::builder().multi_range(true).build().unwrap();
    let analyzer = GapAnalyzer::with_config(config);

    let ranged = analyzer
        .analyze(&files("/d", &["100-120.txt"]))
        .unwrap();

    let individual_names: Vec<String> = (100..=120).map(|v| format!("{v}.txt")).collect();
    let name_refs: Vec<&str> = individual_names.iter().map(String::as_str).collect();
    let individual = GapAnalyzer::new().analyze(&files("/d", &name_refs)).unwrap();

    assert_eq!(
        ranged.groups[0].result.stats.present,
        individual.groups[0].result.stats.present
    );
    assert_eq!(ranged.groups[0].result.expected_start, 100);
    assert_eq!(ranged.groups[0].result.expected_end, 120);
    assert!(!ranged.groups[0].result.has_missing());
}

#[test]
fn test_cross_dir_grouping_scenario() {
    let mut items = files("/a", &["001.txt", "002.txt", "004.txt", "006.txt"]);
    items.extend(files("/b", &["003.txt", "005.txt"]));

    // Cross-directory on: coverage merges, only 5 from /a's view is
    // backfilled by /b, nothing missing in 1..=6.
    let config = AnalyzeConfig::builder()
        .cross_dir_grouping(true)
        .build()
        .unwrap();
    let report = GapAnalyzer::with_config(config).analyze(&items).unwrap();
    assert_eq!(report.groups.len(), 1);
    assert!(!report.groups[0].result.has_missing());
    assert_eq!(
        report.groups[0].scope,
        DirectoryScope::merged(vec!["/a".into(), "/b".into()])
    );

    // Cross-directory off: two independent groups, /a reports its gaps.
    let report = GapAnalyzer::new().analyze(&items).unwrap();
    assert_eq!(report.groups.len(), 2);
    let a = report
        .groups
        .iter()
        .find(|g| g.scope == DirectoryScope::Single("/a".into()))
        .unwrap();
    let gaps: Vec<(u64, u64)> = a.result.missing.iter().map(|m| (m.start, m.end)).collect();
    assert_eq!(gaps, vec![(3, 3), (5, 5)]);
}

#[test]
fn test_threshold_split_scenario() {
    let mut names: Vec<String> = (1..=50).map(|v| format!("f{v:04}.txt")).collect();
    names.extend((151..=200).map(|v| format!("f{v:04}.txt")));
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();

    let config = AnalyzeConfig::builder()
        .group_threshold(Some(100u64))
        .build()
        .unwrap();
    let report = GapAnalyzer::with_config(config)
        .analyze(&files("/d", &name_refs))
        .unwrap();

    // The jump from 50 to 151 exceeds the threshold: a structural split,
    // not one monstrous reported gap.
    assert_eq!(report.groups.len(), 2);
    for group in &report.groups {
        assert!(!group.result.has_missing());
    }
    assert_eq!(report.groups[0].result.expected_start, 1);
    assert_eq!(report.groups[0].result.expected_end, 50);
    assert_eq!(report.groups[1].result.expected_start, 151);
    assert_eq!(report.groups[1].result.expected_end, 200);
}

#[test]
fn test_unmatched_entries_are_kept() {
    let items = files("/d", &["001.txt", "notes.txt", "002.txt"]);
    let report = GapAnalyzer::new().analyze(&items).unwrap();

    assert_eq!(report.groups.len(), 1);
    assert_eq!(report.unmatched.len(), 1);
    assert_eq!(report.unmatched[0].name, "notes.txt");
    assert_eq!(report.unmatched[0].reason, UnmatchedReason::NoDigits);
}

#[test]
fn test_index_policy_unmatched() {
    let config = AnalyzeConfig::builder()
        .block_policy(BlockPolicy::Index(1))
        .build()
        .unwrap();
    let items = files("/d", &["s01e02.mkv", "s01e04.mkv", "IMG_7.jpg"]);
    let report = GapAnalyzer::with_config(config).analyze(&items).unwrap();

    assert_eq!(report.groups.len(), 1);
    assert_eq!(missing(&report, 0), vec![(3, 3)]);
    assert_eq!(report.unmatched.len(), 1);
    assert_eq!(
        report.unmatched[0].reason,
        UnmatchedReason::NoBlockAtIndex(1)
    );
}

#[test]
fn test_all_policy_contributes_to_multiple_groups() {
    let config = AnalyzeConfig::builder()
        .block_policy(BlockPolicy::All)
        .build()
        .unwrap();
    let items = files("/d", &["s01e01.mkv", "s01e02.mkv", "s01e04.mkv"]);
    let report = GapAnalyzer::with_config(config).analyze(&items).unwrap();

    // One group per blanked position: the episode sequence (1, 2, 4) and
    // three season groups pinned by their literal episode number.
    let episode = report
        .groups
        .iter()
        .find(|g| g.template_key.skeleton == "s01e{}.mkv")
        .unwrap();
    let gaps: Vec<(u64, u64)> = episode
        .result
        .missing
        .iter()
        .map(|m| (m.start, m.end))
        .collect();
    assert_eq!(gaps, vec![(3, 3)]);
    assert_eq!(report.groups.len(), 4);
}

#[test]
fn test_descending_pair_never_expands() {
    let config = AnalyzeConfig::builder().multi_range(true).build().unwrap();
    let items = files("/d", &["008-006.txt"]);
    let report = GapAnalyzer::with_config(config).analyze(&items).unwrap();

    // Two literal blocks; under the first policy the sequence is just {8}.
    assert_eq!(report.groups.len(), 1);
    assert_eq!(report.groups[0].result.stats.present, 1);
    assert_eq!(report.groups[0].result.expected_start, 8);
}

#[test]
fn test_empty_input_yields_empty_report() {
    let report = GapAnalyzer::new().analyze(&[]).unwrap();
    assert!(report.is_empty());
}

#[test]
fn test_config_error_fails_fast() {
    let config = AnalyzeConfig {
        forced_start: Some(9),
        forced_end: Some(3),
        ..AnalyzeConfig::default()
    };
    let err = GapAnalyzer::with_config(config)
        .analyze(&files("/d", &["001.txt"]))
        .unwrap_err();
    assert!(err.is_config());
}

#[test]
fn test_overflow_is_data_error() {
    let items = files("/d", &["v18446744073709551616.txt"]);
    let err = GapAnalyzer::new().analyze(&items).unwrap_err();
    assert!(err.is_data());
}

#[test]
fn test_width_sensitivity_separates_padded_sequences() {
    let items = files("/d", &["v5.txt", "v005.txt", "v007.txt"]);

    let report = GapAnalyzer::new().analyze(&items).unwrap();
    assert_eq!(report.groups.len(), 2);

    let config = AnalyzeConfig::builder()
        .width_sensitive(false)
        .build()
        .unwrap();
    let report = GapAnalyzer::with_config(config).analyze(&items).unwrap();
    assert_eq!(report.groups.len(), 1);
    assert_eq!(missing(&report, 0), vec![(6, 6)]);
}

#[test]
fn test_report_order_is_deterministic() {
    let mut items = files("/b", &["x003.txt", "x001.txt"]);
    items.extend(files("/a", &["y002.txt", "y005.txt", "z001.txt"]));

    let first = GapAnalyzer::new().analyze(&items).unwrap();
    items.reverse();
    let second = GapAnalyzer::new().analyze(&items).unwrap();
    assert_eq!(first, second);

    let scopes: Vec<String> = first.groups.iter().map(|g| g.scope.to_string()).collect();
    let mut sorted = scopes.clone();
    sorted.sort();
    assert_eq!(scopes, sorted);
}

#[test]
fn test_mixed_kinds_never_share_groups() {
    let items = vec![
        ScanItem::file("/d", "batch_01", 10),
        ScanItem::dir("/d", "batch_02"),
    ];
    let report = GapAnalyzer::new().analyze(&items).unwrap();
    assert_eq!(report.groups.len(), 2);
}
