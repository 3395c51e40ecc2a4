use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ProductId, StockId, WarehousemanId};

/// Geographic location of a stock slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Localisation {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A stock slot: a per-location quantity record for a product.
///
/// Quantities are `u32`, so a slot can never hold a negative count by
/// construction; the reconciler enforces the aggregate invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub id: StockId,
    pub name: String,
    pub quantity: u32,
    pub localisation: Localisation,
}

/// Audit trail entry: who touched the stock and when.
///
/// Entries are append-only; nothing in this crate mutates or removes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditHistory {
    pub warehouseman_id: WarehousemanId,
    pub at: DateTime<Utc>,
}

/// A catalog product as stored by the remote API (camelCase JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub barcode: String,
    pub price: f64,
    /// Discounted price. Absent on older records.
    #[serde(default)]
    pub solde: f64,
    pub supplier: String,
    pub image: String,
    pub stocks: Vec<Stock>,
    pub edited_by: Vec<EditHistory>,
}

/// Coarse availability bucket derived from the total quantity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    /// Below this total a product counts as low stock.
    pub const LOW_STOCK_THRESHOLD: u64 = 10;

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of stock",
            StockStatus::LowStock => "Low stock",
            StockStatus::InStock => "In stock",
        }
    }
}

impl Product {
    /// Total units held across every stock slot.
    pub fn total_quantity(&self) -> u64 {
        self.stocks.iter().map(|s| u64::from(s.quantity)).sum()
    }

    pub fn stock_status(&self) -> StockStatus {
        match self.total_quantity() {
            0 => StockStatus::OutOfStock,
            q if q < StockStatus::LOW_STOCK_THRESHOLD => StockStatus::LowStock,
            _ => StockStatus::InStock,
        }
    }

    pub fn stock(&self, id: StockId) -> Option<&Stock> {
        self.stocks.iter().find(|s| s.id == id)
    }

    /// Case-insensitive match against name, type, supplier and price, the
    /// way the list screen's search box filters.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.kind.to_lowercase().contains(&query)
            || self.supplier.to_lowercase().contains(&query)
            || self.price.to_string().contains(&query)
    }
}

/// Payload for creating a product. The remote store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub barcode: String,
    pub price: f64,
    #[serde(default)]
    pub solde: f64,
    pub supplier: String,
    pub image: String,
    pub stocks: Vec<Stock>,
    pub edited_by: Vec<EditHistory>,
}

impl NewProduct {
    /// Fallback image when none was provided.
    pub const PLACEHOLDER_IMAGE: &'static str = "https://via.placeholder.com/150";

    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        barcode: impl Into<String>,
        price: f64,
        supplier: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            barcode: barcode.into(),
            price,
            solde: 0.0,
            supplier: supplier.into(),
            image: Self::PLACEHOLDER_IMAGE.to_string(),
            stocks: Vec::new(),
            edited_by: Vec::new(),
        }
    }

    /// Required-field validation, rejected before any network call.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name is required"));
        }
        if self.kind.trim().is_empty() {
            return Err(DomainError::validation("type is required"));
        }
        if self.barcode.trim().is_empty() {
            return Err(DomainError::validation("barcode is required"));
        }
        if self.supplier.trim().is_empty() {
            return Err(DomainError::validation("supplier is required"));
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(DomainError::validation("price must be positive"));
        }
        Ok(())
    }
}
