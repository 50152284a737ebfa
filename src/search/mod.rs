use serde::Serialize;

use crate::core::{Activity, Inventory};

/// Text fields of an [`Activity`] that free-text search looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SearchField {
    Activity,
    Description,
    Category,
    AdSource,
    EfSource,
}

impl SearchField {
    /// Every searchable field; the default selection.
    pub const ALL: [Self; 5] = [
        Self::Activity,
        Self::Description,
        Self::Category,
        Self::AdSource,
        Self::EfSource,
    ];

    fn value(self, activity: &Activity) -> Option<&str> {
        match self {
            Self::Activity => activity.activity.as_deref(),
            Self::Description => activity.description.as_deref(),
            Self::Category => Some(activity.category.as_str()),
            Self::AdSource => activity.ad_source.as_deref(),
            Self::EfSource => activity.ef_source.as_deref(),
        }
    }
}

/// Activities matching a query, in dataset order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults<'a> {
    pub query: String,
    pub activities: Vec<&'a Activity>,
}

impl SearchResults<'_> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// `"1 result"` / `"N results"`.
    #[must_use]
    pub fn summary(&self) -> String {
        match self.len() {
            1 => "1 result".to_string(),
            n => format!("{n} results"),
        }
    }
}

/* ---------------- Public API ---------------- */

/// Case-insensitive substring search over activity name, description,
/// category and both source fields.
///
/// An empty or whitespace-only query matches nothing.
#[must_use]
pub fn search<'a>(inventory: &'a Inventory, query: &str) -> Vec<&'a Activity> {
    SearchBuilder::new(inventory, query).run().activities
}

/// A builder for free-text searches against an [`Inventory`].
#[derive(Debug, Clone)]
pub struct SearchBuilder<'a> {
    inventory: &'a Inventory,
    query: String,
    fields: Vec<SearchField>,
    limit: Option<usize>,
}

impl<'a> SearchBuilder<'a> {
    /// Creates a new `SearchBuilder` searching every field.
    pub fn new(inventory: &'a Inventory, query: impl Into<String>) -> Self {
        Self {
            inventory,
            query: query.into(),
            fields: SearchField::ALL.to_vec(),
            limit: None,
        }
    }

    /// Restricts matching to the given fields.
    #[must_use]
    pub fn fields(mut self, fields: &[SearchField]) -> Self {
        self.fields = fields.to_vec();
        self
    }

    /// Caps the number of returned activities.
    #[must_use]
    pub const fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    fn matches(&self, needle: &str, activity: &Activity) -> bool {
        self.fields.iter().any(|f| {
            f.value(activity)
                .is_some_and(|v| v.to_lowercase().contains(needle))
        })
    }

    /// Executes the search.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), fields(query = %self.query))
    )]
    #[must_use]
    pub fn run(self) -> SearchResults<'a> {
        if self.query.trim().is_empty() {
            return SearchResults {
                query: self.query,
                activities: Vec::new(),
            };
        }

        let needle = self.query.to_lowercase();
        let limit = self.limit.unwrap_or(usize::MAX);
        let activities: Vec<&'a Activity> = self
            .inventory
            .activities()
            .iter()
            .filter(|a| self.matches(&needle, a))
            .take(limit)
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(hits = activities.len(), "search complete");

        SearchResults {
            query: self.query,
            activities,
        }
    }
}
