use crate::common;
use ghg_inventory::{InventorySummary, ScopeId};

#[test]
fn dashboard_facts_for_midor() {
    let inv = common::midor();
    let summary = inv.summary();

    assert_eq!(summary.scope_count, 3);
    assert_eq!(summary.category_count, 8);
    assert_eq!(summary.activity_count, 12);
    assert_eq!(summary.total_emissions, inv.total_emissions());

    let largest = summary.largest_category.as_ref().unwrap();
    assert_eq!(largest.scope, ScopeId(3));
    assert_eq!(largest.category, "use of sold products");

    let dominant: Vec<(u32, &str)> = summary
        .dominant_categories
        .iter()
        .map(|c| (c.scope.get(), c.category.as_str()))
        .collect();
    assert_eq!(
        dominant,
        vec![
            (1, "stationary combustion"),
            (2, "purchased electricity"),
            (3, "use of sold products"),
        ]
    );
}

#[test]
fn gas_totals_cover_all_activities() {
    let inv = common::midor();
    let summary = InventorySummary::from_inventory(&inv);
    let rel = (summary.gas_totals.total() - inv.total_emissions()).abs() / inv.total_emissions();
    assert!(rel < 1e-9);
    assert!(summary.gas_totals.co2 > summary.gas_totals.ch4);
    assert_eq!(summary.gas_totals.fgas, 0.0);
}

#[test]
fn data_sources_are_distinct_in_first_seen_order() {
    let summary = common::midor().summary();
    assert_eq!(
        summary.data_sources,
        vec![
            "Meters",
            "Mass balance",
            "Invoices",
            "Sales records",
            "Travel agency",
        ]
    );
}

#[test]
fn scope_shares_follow_scope_order() {
    let summary = common::midor().summary();
    let names: Vec<&str> = summary.scopes.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Scope 1", "Scope 2", "Scope 3"]);
    let pct: f64 = summary.scopes.iter().map(|s| s.percent_of_total).sum();
    assert!((pct - 100.0).abs() < 0.01);
}
