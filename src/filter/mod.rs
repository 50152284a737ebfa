//! Relational projections from scopes and categories to their activities.

use serde::Serialize;

use crate::core::{Activity, Category, Inventory, Scope, ScopeId};

/// A resolved scope together with its activities in source order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScopeView<'a> {
    pub scope: &'a Scope,
    pub activities: Vec<&'a Activity>,
}

/// A resolved category, its parent scope, and its activities in source order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryView<'a> {
    pub scope: &'a Scope,
    pub category: &'a Category,
    pub activities: Vec<&'a Activity>,
}

impl Inventory {
    /// Activities whose scope is `scope`, preserving dataset order.
    /// Unknown scopes yield an empty list.
    #[must_use]
    pub fn activities_in_scope(&self, scope: ScopeId) -> Vec<&Activity> {
        self.activities()
            .iter()
            .filter(|a| a.scope == scope)
            .collect()
    }

    /// Activities under (`scope`, `category`), matched exactly.
    #[must_use]
    pub fn activities_in_category(&self, scope: ScopeId, category: &str) -> Vec<&Activity> {
        self.activities()
            .iter()
            .filter(|a| a.scope == scope && a.category == category)
            .collect()
    }

    #[must_use]
    pub fn scope_view(&self, id: ScopeId) -> Option<ScopeView<'_>> {
        let scope = self.find_scope(id)?;
        Some(ScopeView {
            scope,
            activities: self.activities_in_scope(id),
        })
    }

    /// `None` if either the scope or the category under it is unknown.
    #[must_use]
    pub fn category_view(&self, id: ScopeId, name: &str) -> Option<CategoryView<'_>> {
        let scope = self.find_scope(id)?;
        let category = scope.categories.iter().find(|c| c.name == name)?;
        Some(CategoryView {
            scope,
            category,
            activities: self.activities_in_category(id, name),
        })
    }
}
