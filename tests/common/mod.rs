#![allow(dead_code)]

use ghg_inventory::Inventory;
use std::{fs, path::Path, path::PathBuf};

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{name}.json"))
}

pub fn fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn load(name: &str) -> Inventory {
    Inventory::from_json_str(&fixture(name))
        .unwrap_or_else(|e| panic!("fixture {name} did not load: {e}"))
}

/// Three-scope refinery inventory with consistent aggregates.
pub fn midor() -> Inventory {
    load("inventory_midor")
}

/// Single-scope snapshot: scope 1 totals 1000, activity 7 is 250 of it.
pub fn e2e() -> Inventory {
    load("inventory_e2e")
}

/// Snapshot with deliberate invariant violations.
pub fn broken() -> Inventory {
    load("inventory_broken")
}

/// Consistent ids and totals per activity, but skewed category and scope
/// aggregates: category totals 70/30 against activity sums 50/50.
pub fn skewed() -> Inventory {
    load("inventory_skewed")
}

pub fn ids(activities: &[&ghg_inventory::Activity]) -> Vec<u32> {
    activities.iter().map(|a| a.id.get()).collect()
}
