use crate::common;
use ghg_inventory::{Tolerance, validate};

#[test]
fn fixtures_with_consistent_aggregates_are_clean() {
    for inv in [common::midor(), common::e2e()] {
        let report = validate(&inv, Tolerance::default());
        assert!(report.is_clean(), "{report}");
        assert!(report.into_result().is_ok());
    }
}

#[test]
fn tight_percent_tolerance_surfaces_rounding() {
    // fixture percentages are stored to four decimals
    let strict = Tolerance {
        relative: 1e-6,
        percent_points: 0.0,
    };
    let report = validate(&common::midor(), strict);
    assert!(!report.is_clean());
}
