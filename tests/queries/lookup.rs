use crate::common;
use ghg_inventory::{ActivityId, ScopeId};

#[test]
fn finds_each_present_scope_uniquely() {
    let inv = common::midor();
    for id in 1..=3 {
        let scope = inv.find_scope(ScopeId(id)).unwrap();
        assert_eq!(scope.id, ScopeId(id));
        assert_eq!(scope.name, format!("Scope {id}"));
    }
}

#[test]
fn absent_scopes_are_not_found() {
    let inv = common::midor();
    assert!(inv.find_scope(ScopeId(0)).is_none());
    assert!(inv.find_scope(ScopeId(4)).is_none());
    assert!(inv.find_scope(ScopeId(u32::MAX)).is_none());
    assert!(inv.find_scope_param("-1").is_none());
    assert!(inv.find_scope_param("scope-1").is_none());
    assert!(inv.find_scope_param("").is_none());
}

#[test]
fn category_requires_both_scope_and_exact_name() {
    let inv = common::midor();
    let flaring = inv.find_category(ScopeId(1), "flaring").unwrap();
    assert_eq!(flaring.activity_count, 1);

    assert!(inv.find_category(ScopeId(1), "Flaring").is_none());
    assert!(inv.find_category(ScopeId(1), "flaring ").is_none());
    assert!(inv.find_category(ScopeId(2), "flaring").is_none());
    assert!(inv.find_category(ScopeId(9), "flaring").is_none());
    assert!(inv.find_category_param("x", "flaring").is_none());
}

#[test]
fn activities_resolve_by_id_and_param() {
    let inv = common::midor();
    let gasoline = inv.find_activity(ActivityId(8)).unwrap();
    assert_eq!(gasoline.activity.as_deref(), Some("Gasoline"));
    assert_eq!(inv.find_activity_param(" 8 ").map(|a| a.id), Some(ActivityId(8)));

    assert!(inv.find_activity(ActivityId(0)).is_none());
    assert!(inv.find_activity(ActivityId(13)).is_none());
    assert!(inv.find_activity_param("8.0").is_none());
    assert!(inv.find_activity_param("18446744073709551616").is_none());
}

#[test]
fn duplicate_activity_ids_resolve_to_first_occurrence() {
    let inv = common::broken();
    let a = inv.find_activity(ActivityId(2)).unwrap();
    assert_eq!(a.activity.as_deref(), Some("Heaters"));
}
