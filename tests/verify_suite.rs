//! End-to-end verification: run the built-in harness the way the runner
//! does and check the aggregate outcome.

use std::time::Duration;

use chess_movegen::verify::{find_position, run_suite, ReferenceEntry, QUICK_POSITIONS};

#[test]
fn quick_suite_passes_at_depth_three() {
    let entries: Vec<&ReferenceEntry> = QUICK_POSITIONS
        .iter()
        .map(|name| find_position(name).expect("quick position missing"))
        .collect();

    let report = run_suite(&entries, 3, None);

    assert!(report.not_run.is_empty());
    assert!(
        report.passed(),
        "quick suite failed: {:?}",
        report
            .failed_cases()
            .map(|c| c.name.clone())
            .collect::<Vec<_>>()
    );

    let (passed, total) = report.depth_counts();
    assert_eq!(passed, total);
    // Four positions, three reference depths each.
    assert_eq!(total, 12);
}

#[test]
fn suite_honors_time_budget() {
    let entries: Vec<&ReferenceEntry> = QUICK_POSITIONS
        .iter()
        .map(|name| find_position(name).expect("quick position missing"))
        .collect();

    let report = run_suite(&entries, 3, Some(Duration::ZERO));
    assert_eq!(report.not_run.len(), entries.len());
    assert!(report.cases.is_empty());
}

#[test]
fn full_divide_verification_for_en_passant_position() {
    let entry = find_position("en_passant_position").unwrap();
    let report = chess_movegen::verify::verify_position(entry, 3, true);
    assert!(report.passed());

    let comparison = report.depths[0].divide_comparison.as_ref().unwrap();
    assert!(comparison.is_clean());
    assert_eq!(comparison.matched(), 31);
}
