//! Loading configuration + builder.
//! Defaults live in `constants`.

mod constants;

pub(crate) use constants::{DATASET_SPREADSHEET, REFERENCES_ROOT};

use std::env;
use std::path::{Path, PathBuf};

use constants::{
    DEFAULT_INVENTORY_PATH, DEFAULT_PERCENT_TOLERANCE, DEFAULT_RELATIVE_TOLERANCE,
    ENV_INVENTORY_PATH, NOT_APPLICABLE,
};

use crate::core::conversions::inventory_from_wire;
use crate::core::models::Inventory;
use crate::core::wire::InventoryNode;
use crate::core::InventoryError;
use crate::integrity;

/// Comparison slack used when checking precomputed aggregates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Relative slack for totals compared against sums of activities.
    pub relative: f64,
    /// Absolute slack, in percentage points, for stored percentages.
    pub percent_points: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            relative: DEFAULT_RELATIVE_TOLERANCE,
            percent_points: DEFAULT_PERCENT_TOLERANCE,
        }
    }
}

impl Tolerance {
    /// `true` when `actual` is within the relative tolerance of `expected`.
    /// Values that are both (near) zero compare equal.
    #[must_use]
    pub fn totals_match(&self, expected: f64, actual: f64) -> bool {
        let scale = expected.abs().max(actual.abs());
        if scale < f64::EPSILON {
            return true;
        }
        (expected - actual).abs() <= self.relative * scale
    }

    #[must_use]
    pub fn percents_match(&self, expected: f64, actual: f64) -> bool {
        (expected - actual).abs() <= self.percent_points
    }
}

#[derive(Debug, Clone)]
enum Source {
    Json(String),
    Path(PathBuf),
}

/// Builder that reads the static dataset once and produces an [`Inventory`].
///
/// Source resolution: explicit JSON text, then an explicit path, then the
/// `GHG_INVENTORY_PATH` environment variable, then `data/activities.json`.
#[derive(Debug, Clone, Default)]
pub struct InventoryBuilder {
    source: Option<Source>,
    sentinel: Option<String>,
    tolerance: Option<Tolerance>,
    validate_on_load: bool,
}

impl InventoryBuilder {
    /// Read the dataset from this file.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(Source::Path(path.into()));
        self
    }

    /// Use this JSON text as the dataset.
    #[must_use]
    pub fn json(mut self, body: impl Into<String>) -> Self {
        self.source = Some(Source::Json(body.into()));
        self
    }

    /// Override the not-applicable marker (default `"N/A"`).
    #[must_use]
    pub fn sentinel(mut self, marker: impl Into<String>) -> Self {
        self.sentinel = Some(marker.into());
        self
    }

    /// Override the tolerance used by load-time validation.
    #[must_use]
    pub const fn tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Reject snapshots that violate the inventory invariants. Default: off.
    #[must_use]
    pub const fn validate_on_load(mut self, yes: bool) -> Self {
        self.validate_on_load = yes;
        self
    }

    fn resolve_source(&self) -> Source {
        if let Some(src) = &self.source {
            return src.clone();
        }
        env::var(ENV_INVENTORY_PATH)
            .map(|p| Source::Path(PathBuf::from(p)))
            .unwrap_or_else(|_| Source::Path(PathBuf::from(DEFAULT_INVENTORY_PATH)))
    }

    /// Reads, converts and (optionally) validates the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Io`] if the file cannot be read,
    /// [`InventoryError::Json`] if it does not parse, [`InventoryError::Data`]
    /// if it carries a zero id, and
    /// [`InventoryError::Integrity`] when validation is enabled and fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub fn build(self) -> Result<Inventory, InventoryError> {
        let body = match self.resolve_source() {
            Source::Json(body) => body,
            Source::Path(path) => read_dataset(&path)?,
        };
        let node: InventoryNode = serde_json::from_str(&body)?;
        let sentinel = self.sentinel.as_deref().unwrap_or(NOT_APPLICABLE);
        let inventory = inventory_from_wire(node, sentinel)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            scopes = inventory.scopes().len(),
            activities = inventory.activities().len(),
            "inventory loaded"
        );

        if self.validate_on_load {
            let report = integrity::validate(&inventory, self.tolerance.unwrap_or_default());
            report.into_result()?;
        }
        Ok(inventory)
    }
}

fn read_dataset(path: &Path) -> Result<String, InventoryError> {
    std::fs::read_to_string(path).map_err(|source| InventoryError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl Inventory {
    /// Create a new loader.
    #[must_use]
    pub fn builder() -> InventoryBuilder {
        InventoryBuilder::default()
    }

    /// Parses a snapshot from JSON text with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Json`] if the text is not a valid dataset.
    pub fn from_json_str(body: &str) -> Result<Self, InventoryError> {
        Self::builder().json(body).build()
    }

    /// Reads a snapshot from a file with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Io`] or [`InventoryError::Json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InventoryError> {
        Self::builder().path(path.as_ref()).build()
    }
}
