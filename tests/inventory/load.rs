use crate::common;
use ghg_inventory::{ActivityId, DataValue, Inventory, InventoryError, Tolerance};

#[test]
fn loads_midor_snapshot_from_path() {
    let inv = Inventory::load(common::fixture_path("inventory_midor")).unwrap();
    assert_eq!(inv.scopes().len(), 3);
    assert_eq!(inv.activities().len(), 12);
    assert!(inv.total_emissions() > 7_000_000.0);
}

#[test]
fn builder_path_matches_json_source() {
    let from_path = Inventory::builder()
        .path(common::fixture_path("inventory_e2e"))
        .build()
        .unwrap();
    let from_json = Inventory::builder()
        .json(common::fixture("inventory_e2e"))
        .build()
        .unwrap();
    assert_eq!(from_path, from_json);
}

#[test]
fn not_applicable_text_is_absent() {
    let inv = common::midor();

    let coke = inv.find_activity(ActivityId(3)).unwrap();
    assert_eq!(coke.activity, None);
    assert_eq!(coke.label(), Some("FCC coke burning in regenerator"));
    assert_eq!(
        coke.activity_data_value,
        Some(DataValue::Text("mass balance on coke yield".into()))
    );

    let leaks = inv.find_activity(ActivityId(5)).unwrap();
    assert_eq!(leaks.ad_source, None);
    assert_eq!(leaks.ef_unit, None);
    assert_eq!(
        leaks.emission_factor,
        Some(DataValue::Text("API compendium".into()))
    );
    assert_eq!(leaks.co2_emissions, None);
    assert_eq!(leaks.gas_breakdown().co2, 0.0);
}

#[test]
fn numeric_activity_data_is_kept_numeric() {
    let inv = common::midor();
    let grid = inv.find_activity(ActivityId(6)).unwrap();
    assert_eq!(grid.activity_data_value, Some(DataValue::Numeric(52_000.0)));
    assert_eq!(
        grid.activity_data_value.as_ref().and_then(DataValue::as_f64),
        Some(52_000.0)
    );
}

#[test]
fn validate_on_load_accepts_consistent_data() {
    let inv = Inventory::builder()
        .json(common::fixture("inventory_midor"))
        .validate_on_load(true)
        .build();
    assert!(inv.is_ok(), "{:?}", inv.err());
}

#[test]
fn validate_on_load_rejects_broken_data() {
    let err = Inventory::builder()
        .json(common::fixture("inventory_broken"))
        .tolerance(Tolerance::default())
        .validate_on_load(true)
        .build()
        .unwrap_err();
    match err {
        InventoryError::Integrity(report) => assert!(!report.is_clean()),
        other => panic!("expected integrity error, got {other}"),
    }
}

#[test]
fn wrong_shape_is_a_json_error() {
    let err = Inventory::from_json_str(r#"{"scopes": 3}"#).unwrap_err();
    assert!(matches!(err, InventoryError::Json(_)));
}
