//! Inventory statistics computed locally over a fetched product list.

use serde::Serialize;

use crate::product::Product;

/// How many products the most/least stocked lists carry.
const TOP_PRODUCTS: usize = 3;

/// Aggregate figures for the statistics dashboard and exported reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_products: usize,
    /// Products whose total quantity across all slots is zero.
    pub out_of_stock: usize,
    /// Sum of quantity x unit price over every product.
    pub total_stock_value: f64,
    pub most_added_products: Vec<Product>,
    pub most_removed_products: Vec<Product>,
}

impl Statistics {
    pub fn empty() -> Self {
        Self {
            total_products: 0,
            out_of_stock: 0,
            total_stock_value: 0.0,
            most_added_products: Vec::new(),
            most_removed_products: Vec::new(),
        }
    }
}

/// Compute statistics over the current product list.
pub fn compute(products: &[Product]) -> Statistics {
    if products.is_empty() {
        return Statistics::empty();
    }

    let out_of_stock = products.iter().filter(|p| p.total_quantity() == 0).count();
    let total_stock_value = products
        .iter()
        .map(|p| p.total_quantity() as f64 * p.price)
        .sum();

    let mut by_quantity: Vec<&Product> = products.iter().collect();
    by_quantity.sort_by_key(|p| std::cmp::Reverse(p.total_quantity()));

    let most_added_products = by_quantity
        .iter()
        .take(TOP_PRODUCTS)
        .map(|p| (*p).clone())
        .collect();
    let most_removed_products = by_quantity
        .iter()
        .rev()
        .take(TOP_PRODUCTS)
        .map(|p| (*p).clone())
        .collect();

    Statistics {
        total_products: products.len(),
        out_of_stock,
        total_stock_value,
        most_added_products,
        most_removed_products,
    }
}
