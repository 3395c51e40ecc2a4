//! Product list ordering and filtering helpers.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Column the product list is ordered by.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    /// Orders by the discounted price (`solde`), as the list screen does.
    Price,
    /// Orders by total quantity across all slots.
    Quantity,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Tapping the active sort column flips the direction.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Sort products in place by `key`, `order`.
pub fn sort_products(products: &mut [Product], key: SortKey, order: SortOrder) {
    products.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Price => a.solde.total_cmp(&b.solde),
            SortKey::Quantity => a.total_quantity().cmp(&b.total_quantity()),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// Products matching a free-text query (name, type, supplier or price).
pub fn search<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| p.matches_query(query)).collect()
}

/// Products of the given type, case-insensitively.
pub fn filter_by_kind<'a>(products: &'a [Product], kind: &str) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| p.kind.eq_ignore_ascii_case(kind))
        .collect()
}
