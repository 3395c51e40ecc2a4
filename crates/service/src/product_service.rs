//! The product service.

use chrono::Utc;

use stockroom_client::{ApiClient, ApiError};
use stockroom_core::{ProductId, StockId, WarehousemanId};
use stockroom_domain::{reconcile, stats, NewProduct, Product, Statistics, StockAdjustment};

use crate::error::ServiceError;

/// One requested stock mutation, as it arrives from the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockUpdate {
    pub product_id: ProductId,
    pub stock_id: StockId,
    /// Signed delta: positive restocks, negative unloads.
    pub delta: i64,
    pub warehouseman_id: WarehousemanId,
}

/// Orchestrates product reads and stock mutations against the remote API.
#[derive(Debug, Clone)]
pub struct ProductService {
    client: ApiClient,
}

impl ProductService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn all_products(&self) -> Result<Vec<Product>, ServiceError> {
        Ok(self.client.list_products().await?)
    }

    pub async fn product(&self, id: ProductId) -> Result<Product, ServiceError> {
        self.client.get_product(id).await.map_err(|e| match e {
            ApiError::NotFound => ServiceError::ProductNotFound(id),
            other => other.into(),
        })
    }

    /// Free-text search over the live product list.
    pub async fn search_products(&self, query: &str) -> Result<Vec<Product>, ServiceError> {
        let products = self.client.list_products().await?;
        Ok(products
            .into_iter()
            .filter(|p| p.matches_query(query))
            .collect())
    }

    /// Products of one type over the live product list.
    pub async fn products_of_kind(&self, kind: &str) -> Result<Vec<Product>, ServiceError> {
        let products = self.client.list_products().await?;
        Ok(products
            .into_iter()
            .filter(|p| p.kind.eq_ignore_ascii_case(kind))
            .collect())
    }

    /// First product carrying the scanned barcode, if any.
    pub async fn find_by_barcode(&self, barcode: &str) -> Result<Option<Product>, ServiceError> {
        let products = self.client.list_products().await?;
        Ok(products.into_iter().find(|p| p.barcode == barcode))
    }

    /// Validate and create a product. The store assigns the id.
    pub async fn add_product(&self, draft: &NewProduct) -> Result<Product, ServiceError> {
        draft.validate()?;
        let created = self.client.post_product(draft).await?;
        tracing::info!(product_id = %created.id, name = %created.name, "product created");
        Ok(created)
    }

    /// Apply a signed stock delta: fetch fresh, reconcile, write back whole.
    ///
    /// The two network calls are not atomic; a concurrent mutation between
    /// them is overwritten (last write wins).
    pub async fn update_stock(&self, update: &StockUpdate) -> Result<Product, ServiceError> {
        if update.delta == 0 {
            return Err(ServiceError::validation("quantity delta cannot be zero"));
        }

        let mut product = self.product(update.product_id).await?;

        // Restocking a slot the product does not have yet needs location
        // metadata from the acting warehouseman's warehouse record.
        let new_slot = if update.delta > 0 && product.stock(update.stock_id).is_none() {
            let warehouseman = self
                .client
                .get_warehouseman(update.warehouseman_id)
                .await
                .map_err(|e| match e {
                    ApiError::NotFound => {
                        ServiceError::WarehousemanNotFound(update.warehouseman_id)
                    }
                    other => other.into(),
                })?;
            Some(warehouseman.new_slot())
        } else {
            None
        };

        let adjustment = StockAdjustment {
            stock_id: update.stock_id,
            delta: update.delta,
            warehouseman_id: update.warehouseman_id,
            at: Utc::now(),
            new_slot,
        };
        reconcile::apply(&mut product, &adjustment)?;

        let updated = self.client.put_product(&product).await?;
        tracing::info!(
            product_id = %updated.id,
            delta = update.delta,
            total = updated.total_quantity(),
            "stock updated"
        );
        Ok(updated)
    }

    /// Add `quantity` units to a stock slot.
    pub async fn restock(
        &self,
        product_id: ProductId,
        stock_id: StockId,
        quantity: u32,
        warehouseman_id: WarehousemanId,
    ) -> Result<Product, ServiceError> {
        self.update_stock(&StockUpdate {
            product_id,
            stock_id,
            delta: positive_delta(quantity)?,
            warehouseman_id,
        })
        .await
    }

    /// Remove `quantity` units, draining across slots if needed.
    pub async fn unload(
        &self,
        product_id: ProductId,
        stock_id: StockId,
        quantity: u32,
        warehouseman_id: WarehousemanId,
    ) -> Result<Product, ServiceError> {
        self.update_stock(&StockUpdate {
            product_id,
            stock_id,
            delta: -positive_delta(quantity)?,
            warehouseman_id,
        })
        .await
    }

    /// Statistics computed locally over the live product list.
    pub async fn statistics(&self) -> Result<Statistics, ServiceError> {
        let products = self.client.list_products().await?;
        Ok(stats::compute(&products))
    }
}

fn positive_delta(quantity: u32) -> Result<i64, ServiceError> {
    if quantity == 0 {
        return Err(ServiceError::validation("quantity must be positive"));
    }
    Ok(i64::from(quantity))
}
