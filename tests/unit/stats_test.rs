//! Tests for the statistics collector and report generation

use checkout_lanes::core::{Report, StatsCollector, StatsSnapshot};

#[test]
fn test_snapshot_feeds_report() {
    let stats = StatsCollector::new();
    for wait in [0, 3, 22, 9] {
        stats.record(wait);
        if wait > 20 {
            stats.mark_dissatisfied();
        }
    }

    let report = Report::from_snapshot(stats.snapshot(), 20);
    assert_eq!(report.served, 4);
    assert_eq!(report.dissatisfied, 1);
    assert_eq!(report.waits, vec![0, 3, 22, 9]);
    assert_eq!(report.mean_wait, Some(8.5));
}

#[test]
fn test_empty_collector() {
    let stats = StatsCollector::new();
    assert_eq!(stats.snapshot(), StatsSnapshot::default());

    let report = Report::from_snapshot(stats.snapshot(), 20);
    assert!(report.mean_wait.is_none());
    assert!(report
        .to_string()
        .ends_with("No customers were served; average wait time is undefined."));
}
