//! Entity resolution by id or by (scope, category name).
//!
//! Every resolver is total: unknown ids, unparseable text and out-of-range
//! numbers all come back as `None`.

use crate::core::{Activity, ActivityId, Category, Inventory, Scope, ScopeId};

impl Inventory {
    /// Finds a scope by id. Linear scan; scope counts are small.
    #[must_use]
    pub fn find_scope(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes().iter().find(|s| s.id == id)
    }

    /// Finds a category by exact, case-sensitive name under the given scope.
    #[must_use]
    pub fn find_category(&self, scope: ScopeId, name: &str) -> Option<&Category> {
        self.find_scope(scope)?
            .categories
            .iter()
            .find(|c| c.name == name)
    }

    /// Finds an activity by id through the load-time index.
    #[must_use]
    pub fn find_activity(&self, id: ActivityId) -> Option<&Activity> {
        self.activity_position(id)
            .and_then(|pos| self.activities().get(pos))
    }

    /// [`Self::find_scope`] for an untrusted id string.
    #[must_use]
    pub fn find_scope_param(&self, raw_id: &str) -> Option<&Scope> {
        ScopeId::parse(raw_id).and_then(|id| self.find_scope(id))
    }

    /// [`Self::find_category`] for an untrusted scope id string.
    #[must_use]
    pub fn find_category_param(&self, raw_scope_id: &str, name: &str) -> Option<&Category> {
        ScopeId::parse(raw_scope_id).and_then(|id| self.find_category(id, name))
    }

    /// [`Self::find_activity`] for an untrusted id string.
    #[must_use]
    pub fn find_activity_param(&self, raw_id: &str) -> Option<&Activity> {
        ActivityId::parse(raw_id).and_then(|id| self.find_activity(id))
    }

    /// The scope an activity belongs to.
    #[must_use]
    pub fn scope_of(&self, activity: &Activity) -> Option<&Scope> {
        self.find_scope(activity.scope)
    }

    /// The category an activity belongs to.
    #[must_use]
    pub fn category_of(&self, activity: &Activity) -> Option<&Category> {
        self.find_category(activity.scope, &activity.category)
    }
}
