use thiserror::Error;

use stockroom_client::ApiError;
use stockroom_core::{DomainError, ProductId, WarehousemanId};

/// Error surfaced by the service layer.
///
/// Folds domain failures (validation, insufficient stock) and transport
/// failures into one enum, with not-found lookups given their own
/// variants so callers can tell them apart from generic API failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    #[error("warehouseman {0} not found")]
    WarehousemanNotFound(WarehousemanId),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ServiceError::Domain(DomainError::validation(msg))
    }
}
