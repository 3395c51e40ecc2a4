//! Stock reconciliation: apply a signed quantity delta across a product's
//! stock slots.
//!
//! The reconciler is a pure function over an in-memory stocks list; the
//! service layer fetches the product fresh, runs it, and writes the whole
//! product back. Rules:
//!
//! - positive delta (restock): bump the target slot, or create it from a
//!   supplied location template when it does not exist yet;
//! - negative delta (unload): drain the target slot first, then the rest in
//!   list order; if the total available is short, fail with no change;
//! - every successful adjustment appends exactly one audit entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, StockId, WarehousemanId};

use crate::product::{EditHistory, Localisation, Product, Stock};

/// Location template for a slot created on first restock.
///
/// Resolved by the caller from the acting warehouseman's warehouse record;
/// the reconciler never does lookups itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSlot {
    pub id: StockId,
    pub name: String,
    pub localisation: Localisation,
}

impl NewSlot {
    fn into_stock(self, quantity: u32) -> Stock {
        Stock {
            id: self.id,
            name: self.name,
            quantity,
            localisation: self.localisation,
        }
    }
}

/// One requested stock adjustment.
#[derive(Debug, Clone, PartialEq)]
pub struct StockAdjustment {
    /// Slot the adjustment targets. For an unload this is drained first.
    pub stock_id: StockId,
    /// Signed quantity delta: positive restocks, negative unloads.
    pub delta: i64,
    /// Acting user, recorded in the audit trail.
    pub warehouseman_id: WarehousemanId,
    /// Timestamp recorded in the audit trail.
    pub at: DateTime<Utc>,
    /// Template for creating the target slot if a restock finds it missing.
    pub new_slot: Option<NewSlot>,
}

/// Result of a successful reconciliation: the new stocks list and the audit
/// entry to append.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    pub stocks: Vec<Stock>,
    pub entry: EditHistory,
}

/// Compute the stock distribution after `adjustment`.
///
/// All-or-nothing: on any error the input is untouched and no partial
/// drain is reported.
pub fn reconcile(stocks: &[Stock], adjustment: &StockAdjustment) -> DomainResult<Reconciled> {
    if adjustment.delta == 0 {
        return Err(DomainError::validation("quantity delta cannot be zero"));
    }

    let stocks = if adjustment.delta > 0 {
        restock(stocks, adjustment)?
    } else {
        unload(stocks, adjustment)?
    };

    Ok(Reconciled {
        stocks,
        entry: EditHistory {
            warehouseman_id: adjustment.warehouseman_id,
            at: adjustment.at,
        },
    })
}

/// Run [`reconcile`] against a product and apply the outcome in place.
pub fn apply(product: &mut Product, adjustment: &StockAdjustment) -> DomainResult<()> {
    let outcome = reconcile(&product.stocks, adjustment)?;
    product.stocks = outcome.stocks;
    product.edited_by.push(outcome.entry);
    Ok(())
}

fn restock(stocks: &[Stock], adjustment: &StockAdjustment) -> DomainResult<Vec<Stock>> {
    let delta = adjustment.delta.unsigned_abs();
    let mut stocks = stocks.to_vec();

    match stocks.iter_mut().find(|s| s.id == adjustment.stock_id) {
        Some(slot) => {
            slot.quantity = checked_quantity(u64::from(slot.quantity) + delta)?;
        }
        None => {
            let template = adjustment
                .new_slot
                .clone()
                .ok_or(DomainError::MissingSlotLocation(adjustment.stock_id))?;
            stocks.push(template.into_stock(checked_quantity(delta)?));
        }
    }

    Ok(stocks)
}

fn unload(stocks: &[Stock], adjustment: &StockAdjustment) -> DomainResult<Vec<Stock>> {
    let requested = adjustment.delta.unsigned_abs();
    let available: u64 = stocks.iter().map(|s| u64::from(s.quantity)).sum();
    if available < requested {
        return Err(DomainError::InsufficientStock {
            requested,
            available,
        });
    }

    let mut stocks = stocks.to_vec();
    let mut remaining = requested;

    // Target slot first, then the rest in list order.
    let order: Vec<usize> = {
        let target = stocks.iter().position(|s| s.id == adjustment.stock_id);
        target
            .into_iter()
            .chain((0..stocks.len()).filter(|i| Some(*i) != target))
            .collect()
    };

    for i in order {
        if remaining == 0 {
            break;
        }
        let slot = &mut stocks[i];
        let take = remaining.min(u64::from(slot.quantity));
        slot.quantity -= take as u32;
        remaining -= take;
    }

    debug_assert_eq!(remaining, 0);
    Ok(stocks)
}

fn checked_quantity(value: u64) -> DomainResult<u32> {
    u32::try_from(value).map_err(|_| DomainError::validation("quantity overflows slot capacity"))
}
