//! Core components of the `ghg-inventory` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The immutable [`Inventory`] snapshot and its entities.
//! - The primary [`InventoryError`] type.
//! - Loading configuration via [`InventoryBuilder`].
//! - The dataset wire format and its conversion into the domain model.

/// Loading configuration (`InventoryBuilder`) and comparison tolerances.
pub mod config;
/// Conversion helpers from the dataset wire format.
pub mod conversions;
/// The primary error type (`InventoryError`) for the crate.
pub mod error;
/// Domain model shared by every query module (`Inventory`, `Scope`, `Activity`, ...).
pub mod models;
pub(crate) mod wire;

// convenient re-exports so most code can just `use crate::core::Inventory`
pub use config::{InventoryBuilder, Tolerance};
pub use error::InventoryError;
pub use models::{
    Activity, ActivityDataValue, ActivityId, Category, DataValue, Gas, GasBreakdown, Inventory,
    Scope, ScopeId,
};
