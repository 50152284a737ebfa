//! Conversion from the dataset wire format into the domain model.

use crate::core::InventoryError;
use crate::core::models::{
    Activity, ActivityId, Category, DataValue, Inventory, Scope, ScopeId,
};
use crate::core::wire::{ActivityNode, CategoryNode, InventoryNode, NumOrText, ScopeNode};

/// Returns `None` for empty text and for the not-applicable sentinel.
#[must_use]
pub fn non_sentinel(value: Option<String>, sentinel: &str) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == sentinel {
            None
        } else {
            Some(s)
        }
    })
}

fn data_value(v: Option<NumOrText>, sentinel: &str) -> Option<DataValue> {
    match v? {
        NumOrText::Num(n) => Some(DataValue::Numeric(n)),
        NumOrText::Text(t) => non_sentinel(Some(t), sentinel).map(DataValue::Text),
    }
}

fn category_from_wire(node: CategoryNode) -> Category {
    Category {
        name: node.name,
        total_emissions: node.total_emissions.unwrap_or(0.0),
        percent_of_scope: node.percent_of_scope.unwrap_or(0.0),
        percent_of_total: node.percent_of_total.unwrap_or(0.0),
        activity_count: node.activity_count.unwrap_or(0),
    }
}

fn scope_from_wire(node: ScopeNode) -> Scope {
    let id = ScopeId(node.id);
    Scope {
        id,
        name: node.name.unwrap_or_else(|| format!("Scope {id}")),
        total_emissions: node.total_emissions.unwrap_or(0.0),
        percent_of_total: node.percent_of_total.unwrap_or(0.0),
        categories: node.categories.into_iter().map(category_from_wire).collect(),
    }
}

fn activity_from_wire(node: ActivityNode, sentinel: &str) -> Activity {
    let mut activity = Activity {
        id: ActivityId(node.id),
        scope: ScopeId(node.scope),
        category: node.category,
        activity: non_sentinel(node.activity, sentinel),
        description: non_sentinel(node.description, sentinel),
        activity_data_value: data_value(node.activity_data_value, sentinel),
        activity_data_unit: non_sentinel(node.activity_data_unit, sentinel),
        emission_factor: data_value(node.emission_factor, sentinel),
        ef_unit: non_sentinel(node.ef_unit, sentinel),
        co2_ef: node.co2_ef,
        ch4_ef: node.ch4_ef,
        n2o_ef: node.n2o_ef,
        fgas_ef: node.fgas_ef,
        co2_emissions: node.co2_emissions,
        ch4_emissions: node.ch4_emissions,
        n2o_emissions: node.n2o_emissions,
        fgas_emissions: node.fgas_emissions,
        total_emissions: 0.0,
        percent_of_category: node.percent_of_category.unwrap_or(0.0),
        percent_of_scope: node.percent_of_scope.unwrap_or(0.0),
        percent_of_total: node.percent_of_total.unwrap_or(0.0),
        ad_source: non_sentinel(node.ad_source, sentinel),
        ef_source: non_sentinel(node.ef_source, sentinel),
        comments: non_sentinel(node.comments, sentinel),
    };
    // A record without a total is read as the sum of its components.
    let total = node
        .total_emissions
        .unwrap_or_else(|| activity.component_sum());
    activity.total_emissions = total;
    activity
}

pub(crate) fn inventory_from_wire(
    node: InventoryNode,
    sentinel: &str,
) -> Result<Inventory, InventoryError> {
    // ids are positive; zero only shows up in a broken export
    if node.scopes.iter().any(|s| s.id == 0) {
        return Err(InventoryError::Data("scope id 0 is not a valid id".into()));
    }
    if let Some(a) = node.activities.iter().find(|a| a.id == 0 || a.scope == 0) {
        return Err(InventoryError::Data(format!(
            "activity (id {}, scope {}) uses id 0",
            a.id, a.scope
        )));
    }

    let scopes: Vec<Scope> = node.scopes.into_iter().map(scope_from_wire).collect();
    let activities: Vec<Activity> = node
        .activities
        .into_iter()
        .map(|a| activity_from_wire(a, sentinel))
        .collect();
    let total = node
        .total_emissions
        .unwrap_or_else(|| scopes.iter().map(|s| s.total_emissions).sum());
    Ok(Inventory::new(total, scopes, activities))
}
