//! ghg-inventory: read-only query layer over a greenhouse-gas emissions inventory.
//!
//! A static dataset of emission-generating activities, grouped into scopes and
//! categories, is loaded once into an immutable [`Inventory`]. Every query is a
//! pure read against that snapshot:
//!
//! - entity lookup ([`Inventory::find_scope`], [`Inventory::find_category`],
//!   [`Inventory::find_activity`]),
//! - relational filtering ([`Inventory::activities_in_scope`],
//!   [`Inventory::activities_in_category`]),
//! - free-text [`search()`],
//! - display formatting ([`format_magnitude`] and friends).
//!
//! ```no_run
//! use ghg_inventory::{Inventory, ScopeId, format_emissions};
//!
//! let inventory = Inventory::load("data/activities.json")?;
//! if let Some(scope) = inventory.find_scope(ScopeId(1)) {
//!     println!("{}: {}", scope.name, format_emissions(scope.total_emissions));
//! }
//! # Ok::<(), ghg_inventory::InventoryError>(())
//! ```

pub mod core;
pub mod filter;
pub mod format;
pub mod integrity;
mod lookup;
pub mod references;
pub mod search;
pub mod summary;

pub use crate::core::{
    Activity, ActivityDataValue, ActivityId, Category, DataValue, Gas, GasBreakdown, Inventory,
    InventoryBuilder, InventoryError, Scope, ScopeId, Tolerance,
};
pub use filter::{CategoryView, ScopeView};
pub use format::{format_data_value, format_emissions, format_grouped, format_magnitude, format_percent};
pub use integrity::{IntegrityReport, PercentBase, Violation, validate};
pub use references::{ReferenceGroup, ReferenceImage, dataset_download_url, reference_url};
pub use search::{SearchBuilder, SearchField, SearchResults, search};
pub use summary::{CategoryShare, InventorySummary, ScopeShare};
