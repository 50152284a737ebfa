//! Dashboard-level facts derived from a snapshot: shares per scope, the
//! largest and dominant categories, per-gas totals and data sources.

use serde::Serialize;

use crate::core::{GasBreakdown, Inventory, ScopeId};

/// One slice of the scope breakdown chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScopeShare {
    pub scope: ScopeId,
    pub name: String,
    pub total_emissions: f64,
    pub percent_of_total: f64,
    pub category_count: usize,
}

/// A category together with the share used to rank it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub scope: ScopeId,
    pub scope_name: String,
    pub category: String,
    pub total_emissions: f64,
    /// Percent of the inventory total or of the parent scope, depending on
    /// where the share appears.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventorySummary {
    pub total_emissions: f64,
    pub scope_count: usize,
    pub category_count: usize,
    pub activity_count: usize,
    pub scopes: Vec<ScopeShare>,
    /// Largest category across the whole inventory, by percent of total.
    pub largest_category: Option<CategoryShare>,
    /// Largest category of each scope, by percent of scope, in scope order.
    pub dominant_categories: Vec<CategoryShare>,
    pub gas_totals: GasBreakdown,
    /// Distinct activity-data sources in first-seen order.
    pub data_sources: Vec<String>,
}

impl InventorySummary {
    #[must_use]
    pub fn from_inventory(inventory: &Inventory) -> Self {
        let scopes: Vec<ScopeShare> = inventory
            .scopes()
            .iter()
            .map(|s| ScopeShare {
                scope: s.id,
                name: s.name.clone(),
                total_emissions: s.total_emissions,
                percent_of_total: s.percent_of_total,
                category_count: s.categories.len(),
            })
            .collect();

        let mut largest_category: Option<CategoryShare> = None;
        let mut dominant_categories = Vec::new();
        for scope in inventory.scopes() {
            let mut dominant: Option<CategoryShare> = None;
            for c in &scope.categories {
                if largest_category
                    .as_ref()
                    .is_none_or(|best| c.percent_of_total > best.percent)
                {
                    largest_category = Some(CategoryShare {
                        scope: scope.id,
                        scope_name: scope.name.clone(),
                        category: c.name.clone(),
                        total_emissions: c.total_emissions,
                        percent: c.percent_of_total,
                    });
                }
                if dominant
                    .as_ref()
                    .is_none_or(|best| c.percent_of_scope > best.percent)
                {
                    dominant = Some(CategoryShare {
                        scope: scope.id,
                        scope_name: scope.name.clone(),
                        category: c.name.clone(),
                        total_emissions: c.total_emissions,
                        percent: c.percent_of_scope,
                    });
                }
            }
            dominant_categories.extend(dominant);
        }

        let mut gas_totals = GasBreakdown::default();
        let mut data_sources: Vec<String> = Vec::new();
        for a in inventory.activities() {
            gas_totals.accumulate(&a.gas_breakdown());
            if let Some(src) = &a.ad_source
                && !data_sources.contains(src)
            {
                data_sources.push(src.clone());
            }
        }

        Self {
            total_emissions: inventory.total_emissions(),
            scope_count: scopes.len(),
            category_count: scopes.iter().map(|s| s.category_count).sum(),
            activity_count: inventory.activities().len(),
            scopes,
            largest_category,
            dominant_categories,
            gas_totals,
            data_sources,
        }
    }
}

impl Inventory {
    /// Shorthand for [`InventorySummary::from_inventory`].
    #[must_use]
    pub fn summary(&self) -> InventorySummary {
        InventorySummary::from_inventory(self)
    }
}
