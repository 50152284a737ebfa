use crate::common::{self, ids};
use ghg_inventory::ScopeId;

#[test]
fn scope_filter_preserves_source_order() {
    let inv = common::midor();
    assert_eq!(ids(&inv.activities_in_scope(ScopeId(1))), vec![1, 2, 3, 4, 5]);
    assert_eq!(ids(&inv.activities_in_scope(ScopeId(2))), vec![6, 7]);
    assert_eq!(
        ids(&inv.activities_in_scope(ScopeId(3))),
        vec![8, 9, 10, 11, 12]
    );
}

#[test]
fn unknown_scope_yields_empty_list() {
    let inv = common::midor();
    assert!(inv.activities_in_scope(ScopeId(42)).is_empty());
    assert!(inv.activities_in_category(ScopeId(42), "flaring").is_empty());
}

#[test]
fn category_filter_is_subset_of_scope_filter() {
    let inv = common::midor();
    for scope in inv.scopes() {
        let in_scope = inv.activities_in_scope(scope.id);
        for c in &scope.categories {
            let in_cat = inv.activities_in_category(scope.id, &c.name);
            assert!(!in_cat.is_empty());
            for a in &in_cat {
                assert_eq!(a.category, c.name);
                assert!(in_scope.iter().any(|s| s.id == a.id));
            }
            assert_eq!(in_cat.len(), c.activity_count as usize);
        }
    }
}

#[test]
fn category_filter_is_case_sensitive() {
    let inv = common::midor();
    assert!(
        inv.activities_in_category(ScopeId(3), "Use of Sold Products")
            .is_empty()
    );
    assert_eq!(
        ids(&inv.activities_in_category(ScopeId(3), "use of sold products")),
        vec![8, 9]
    );
}

#[test]
fn views_bundle_entity_and_activities() {
    let inv = common::midor();
    let view = inv.scope_view(ScopeId(2)).unwrap();
    assert_eq!(view.scope.name, "Scope 2");
    assert_eq!(ids(&view.activities), vec![6, 7]);

    let cat = inv.category_view(ScopeId(3), "business travel").unwrap();
    assert_eq!(cat.scope.id, ScopeId(3));
    assert_eq!(cat.category.activity_count, 2);
    assert_eq!(ids(&cat.activities), vec![11, 12]);

    assert!(inv.scope_view(ScopeId(7)).is_none());
    assert!(inv.category_view(ScopeId(2), "business travel").is_none());
}
