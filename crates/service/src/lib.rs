//! Product service: orchestrates fetch → reconcile → full-object write.
//!
//! Every mutation is a sequential fetch-then-write round trip against the
//! remote store. There is no locking and no optimistic concurrency; two
//! concurrent writers on the same product race and the last write wins.
//! That is a documented limitation of the backing API, not a guarantee.

pub mod error;
pub mod product_service;

pub use error::ServiceError;
pub use product_service::{ProductService, StockUpdate};
