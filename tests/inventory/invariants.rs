use crate::common;
use ghg_inventory::Inventory;

fn close(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= 1e-6 * scale
}

fn check_sums(inv: &Inventory) {
    for s in inv.scopes() {
        let summed: f64 = inv
            .activities()
            .iter()
            .filter(|a| a.scope == s.id)
            .map(|a| a.total_emissions)
            .sum();
        assert!(close(s.total_emissions, summed), "scope {}", s.id);

        for c in &s.categories {
            let summed: f64 = inv
                .activities()
                .iter()
                .filter(|a| a.scope == s.id && a.category == c.name)
                .map(|a| a.total_emissions)
                .sum();
            assert!(close(c.total_emissions, summed), "category {}", c.name);
        }
    }

    for a in inv.activities() {
        let parts = a.co2_emissions.unwrap_or(0.0)
            + a.ch4_emissions.unwrap_or(0.0)
            + a.n2o_emissions.unwrap_or(0.0)
            + a.fgas_emissions.unwrap_or(0.0);
        assert!(close(a.total_emissions, parts), "activity {}", a.id);
        assert!(close(a.component_sum(), parts));
    }

    let pct: f64 = inv.scopes().iter().map(|s| s.percent_of_total).sum();
    assert!((pct - 100.0).abs() < 0.05 * 3.0, "scope percents sum to {pct}");
}

#[test]
fn midor_aggregates_are_consistent() {
    check_sums(&common::midor());
}

#[test]
fn e2e_aggregates_are_consistent() {
    check_sums(&common::e2e());
}

#[test]
fn scope_ids_are_unique() {
    let inv = common::midor();
    for s in inv.scopes() {
        let same = inv.scopes().iter().filter(|o| o.id == s.id).count();
        assert_eq!(same, 1);
    }
}
