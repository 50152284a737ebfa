//! Checks a loaded snapshot against the inventory invariants.
//!
//! Aggregates in the dataset are precomputed upstream; nothing here feeds
//! back into queries. Use it in tests, or opt in at load time through
//! [`InventoryBuilder::validate_on_load`](crate::core::InventoryBuilder::validate_on_load).

mod model;

pub use model::{IntegrityReport, PercentBase, Violation};

use std::collections::HashSet;

use crate::core::{Activity, Inventory, Scope, Tolerance};

fn ratio(part: f64, whole: f64) -> Option<f64> {
    (whole > 0.0).then(|| 100.0 * part / whole)
}

/// Collects every invariant violation in `inventory`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(inventory)))]
#[must_use]
pub fn validate(inventory: &Inventory, tolerance: Tolerance) -> IntegrityReport {
    let mut out = Vec::new();

    check_uniqueness(inventory, &mut out);
    check_references(inventory, &mut out);
    check_activity_totals(inventory, tolerance, &mut out);
    for scope in inventory.scopes() {
        check_scope(inventory, scope, tolerance, &mut out);
    }
    check_inventory_total(inventory, tolerance, &mut out);

    #[cfg(feature = "tracing")]
    if !out.is_empty() {
        tracing::warn!(violations = out.len(), "inventory failed integrity checks");
    }

    IntegrityReport { violations: out }
}

fn check_uniqueness(inventory: &Inventory, out: &mut Vec<Violation>) {
    let mut scope_ids = HashSet::new();
    for scope in inventory.scopes() {
        if !scope_ids.insert(scope.id) {
            out.push(Violation::DuplicateScopeId(scope.id));
        }
        let mut names = HashSet::new();
        for c in &scope.categories {
            if !names.insert(c.name.as_str()) {
                out.push(Violation::DuplicateCategory {
                    scope: scope.id,
                    name: c.name.clone(),
                });
            }
        }
    }

    let mut activity_ids = HashSet::new();
    for a in inventory.activities() {
        if !activity_ids.insert(a.id) {
            out.push(Violation::DuplicateActivityId(a.id));
        }
    }
}

fn check_references(inventory: &Inventory, out: &mut Vec<Violation>) {
    for a in inventory.activities() {
        match inventory.find_scope(a.scope) {
            None => out.push(Violation::UnknownScope {
                activity: a.id,
                scope: a.scope,
            }),
            Some(scope) if !scope.categories.iter().any(|c| c.name == a.category) => {
                out.push(Violation::UnknownCategory {
                    activity: a.id,
                    scope: a.scope,
                    category: a.category.clone(),
                });
            }
            Some(_) => {}
        }
    }
}

fn check_activity_totals(inventory: &Inventory, tolerance: Tolerance, out: &mut Vec<Violation>) {
    let grand_total = inventory.total_emissions();
    for a in inventory.activities() {
        let components = a.component_sum();
        if !tolerance.totals_match(a.total_emissions, components) {
            out.push(Violation::ActivityTotalMismatch {
                activity: a.id,
                stored: a.total_emissions,
                components,
            });
        }

        if let Some(category) = inventory.category_of(a) {
            push_activity_percent(
                a,
                PercentBase::Category,
                a.percent_of_category,
                category.total_emissions,
                tolerance,
                out,
            );
        }
        if let Some(scope) = inventory.scope_of(a) {
            push_activity_percent(
                a,
                PercentBase::Scope,
                a.percent_of_scope,
                scope.total_emissions,
                tolerance,
                out,
            );
        }
        push_activity_percent(
            a,
            PercentBase::Total,
            a.percent_of_total,
            grand_total,
            tolerance,
            out,
        );
    }
}

fn push_activity_percent(
    a: &Activity,
    base: PercentBase,
    stored: f64,
    whole: f64,
    tolerance: Tolerance,
    out: &mut Vec<Violation>,
) {
    if let Some(expected) = ratio(a.total_emissions, whole)
        && !tolerance.percents_match(expected, stored)
    {
        out.push(Violation::ActivityPercentMismatch {
            activity: a.id,
            base,
            stored,
            expected,
        });
    }
}

fn check_scope(inventory: &Inventory, scope: &Scope, tolerance: Tolerance, out: &mut Vec<Violation>) {
    let activities = inventory.activities_in_scope(scope.id);
    let summed: f64 = activities.iter().map(|a| a.total_emissions).sum();
    if !tolerance.totals_match(scope.total_emissions, summed) {
        out.push(Violation::ScopeTotalMismatch {
            scope: scope.id,
            stored: scope.total_emissions,
            summed,
        });
    }
    if let Some(expected) = ratio(scope.total_emissions, inventory.total_emissions())
        && !tolerance.percents_match(expected, scope.percent_of_total)
    {
        out.push(Violation::ScopePercentMismatch {
            scope: scope.id,
            stored: scope.percent_of_total,
            expected,
        });
    }

    for c in &scope.categories {
        let members: Vec<&Activity> = activities
            .iter()
            .copied()
            .filter(|a| a.category == c.name)
            .collect();
        let summed: f64 = members.iter().map(|a| a.total_emissions).sum();
        if !tolerance.totals_match(c.total_emissions, summed) {
            out.push(Violation::CategoryTotalMismatch {
                scope: scope.id,
                category: c.name.clone(),
                stored: c.total_emissions,
                summed,
            });
        }
        if c.activity_count as usize != members.len() {
            out.push(Violation::CategoryCountMismatch {
                scope: scope.id,
                category: c.name.clone(),
                stored: c.activity_count,
                counted: members.len(),
            });
        }

        let percents = [
            (PercentBase::Scope, c.percent_of_scope, scope.total_emissions),
            (
                PercentBase::Total,
                c.percent_of_total,
                inventory.total_emissions(),
            ),
        ];
        for (base, stored, whole) in percents {
            if let Some(expected) = ratio(c.total_emissions, whole)
                && !tolerance.percents_match(expected, stored)
            {
                out.push(Violation::CategoryPercentMismatch {
                    scope: scope.id,
                    category: c.name.clone(),
                    base,
                    stored,
                    expected,
                });
            }
        }
    }
}

fn check_inventory_total(inventory: &Inventory, tolerance: Tolerance, out: &mut Vec<Violation>) {
    let summed: f64 = inventory
        .activities()
        .iter()
        .map(|a| a.total_emissions)
        .sum();
    if !tolerance.totals_match(inventory.total_emissions(), summed) {
        out.push(Violation::InventoryTotalMismatch {
            stored: inventory.total_emissions(),
            summed,
        });
    }

    let scopes = inventory.scopes();
    if scopes.is_empty() || inventory.total_emissions() <= 0.0 {
        return;
    }
    let sum: f64 = scopes.iter().map(|s| s.percent_of_total).sum();
    #[allow(clippy::cast_precision_loss)]
    let slack = tolerance.percent_points * scopes.len() as f64;
    if (sum - 100.0).abs() > slack {
        out.push(Violation::ScopePercentSum { sum });
    }
}
