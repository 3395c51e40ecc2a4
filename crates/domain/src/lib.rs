//! Warehouse domain module.
//!
//! This crate contains the business rules for the warehouse catalog,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). The one piece with real edge-case policy is the stock
//! reconciler in [`reconcile`].

pub mod product;
pub mod reconcile;
pub mod sort;
pub mod stats;
pub mod warehouseman;

pub use product::{EditHistory, Localisation, NewProduct, Product, Stock, StockStatus};
pub use reconcile::{NewSlot, Reconciled, StockAdjustment};
pub use sort::{SortKey, SortOrder};
pub use stats::Statistics;
pub use warehouseman::Warehouseman;
