use crate::common;
use ghg_inventory::{ActivityId, PercentBase, ScopeId, Tolerance, Violation, validate};

fn violations() -> Vec<Violation> {
    validate(&common::skewed(), Tolerance::default())
        .violations()
        .to_vec()
}

#[test]
fn category_totals_are_checked_against_activities() {
    let v = violations();
    assert!(v.iter().any(|x| matches!(
        x,
        Violation::CategoryTotalMismatch { scope, category, stored, summed }
            if *scope == ScopeId(1) && category == "process" && *stored == 70.0 && *summed == 50.0
    )));
    assert!(v.iter().any(|x| matches!(
        x,
        Violation::CategoryTotalMismatch { category, stored, summed, .. }
            if category == "venting" && *stored == 30.0 && *summed == 50.0
    )));
}

#[test]
fn category_counts_are_checked() {
    let v = violations();
    assert!(v.iter().any(|x| matches!(
        x,
        Violation::CategoryCountMismatch { category, stored: 3, counted: 1, .. } if category == "process"
    )));
    assert!(!v.iter().any(|x| matches!(
        x,
        Violation::CategoryCountMismatch { category, .. } if category == "venting"
    )));
}

#[test]
fn stored_percentages_are_checked() {
    let v = violations();
    assert!(v.iter().any(|x| matches!(
        x,
        Violation::ScopePercentMismatch { scope, .. } if *scope == ScopeId(1)
    )));
    assert!(v.iter().any(|x| matches!(
        x,
        Violation::CategoryPercentMismatch { category, base: PercentBase::Scope, .. }
            if category == "venting"
    )));
    assert!(v.iter().any(|x| matches!(
        x,
        Violation::ActivityPercentMismatch { activity, base: PercentBase::Category, .. }
            if *activity == ActivityId(1)
    )));
    assert!(v.iter().any(|x| matches!(
        x,
        Violation::ScopePercentSum { sum } if (*sum - 90.0).abs() < 1e-9
    )));
}

#[test]
fn consistent_parts_of_the_snapshot_stay_quiet() {
    let v = violations();
    assert_eq!(v.len(), 7, "{v:?}");
    assert!(!v.iter().any(|x| matches!(
        x,
        Violation::ActivityTotalMismatch { .. }
            | Violation::ScopeTotalMismatch { .. }
            | Violation::InventoryTotalMismatch { .. }
    )));
}
