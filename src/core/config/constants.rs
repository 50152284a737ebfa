//! Centralized constants for dataset location, sentinels and static assets.

/// Environment variable that overrides where the dataset is read from.
pub(crate) const ENV_INVENTORY_PATH: &str = "GHG_INVENTORY_PATH";

/// Dataset location used when nothing else is configured (relative to cwd).
pub(crate) const DEFAULT_INVENTORY_PATH: &str = "data/activities.json";

/// Marker the export writes into text cells that do not apply.
pub(crate) const NOT_APPLICABLE: &str = "N/A";

/// Relative tolerance for total-vs-sum comparisons.
pub(crate) const DEFAULT_RELATIVE_TOLERANCE: f64 = 1e-6;

/// Absolute tolerance, in percentage points, for stored percentages.
pub(crate) const DEFAULT_PERCENT_TOLERANCE: f64 = 0.05;

/// Spreadsheet export of the full inventory (relative to the site base).
pub(crate) const DATASET_SPREADSHEET: &str = "data/MIDOR_activities_final_complete.xlsx";

/// Folder holding the reference gallery images (relative to the site base).
pub(crate) const REFERENCES_ROOT: &str = "references";
