//! # Purchase Totals
//!
//! The pricing core of the register: given the scanned items and the tax
//! rate, compute the tax-excluded and tax-included totals and assemble the
//! transaction draft that the store will persist.
//!
//! ## Computation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  items: [{price: 150}, {price: 300}]       rate: 10% (1000 bps)     │
//! │                                                                     │
//! │  per line:   gross = price + round_half_up(price × rate)            │
//! │              150 → 165        300 → 330                             │
//! │                                                                     │
//! │  total_ex_tax = Σ price            = 450                            │
//! │  total        = Σ gross            = 495                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rounding happens per line, before summation. Receipts therefore always
//! agree with the sum of their printed lines, and identical inputs always
//! produce identical totals.

use chrono::{DateTime, Utc};

use crate::money::Money;
use crate::types::{LineDraft, PurchaseHeader, PurchaseItem, TaxRate, TransactionDraft};

// =============================================================================
// Totals
// =============================================================================

/// Aggregate totals of one purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PurchaseTotals {
    /// Tax-included total.
    pub total: Money,

    /// Tax-excluded total.
    pub total_ex_tax: Money,
}

/// Computes purchase totals over `items` at `rate`.
///
/// - `total_ex_tax` is the exact integer sum of unit prices.
/// - `total` is the sum of per-line tax-inclusive amounts, each rounded
///   half-up to the smallest currency unit by [`Money::with_tax`].
/// - An empty item list yields zero totals.
///
/// ## Example
/// ```rust
/// use kiosk_core::totals::compute;
/// use kiosk_core::types::{PurchaseItem, TaxRate};
///
/// let items = vec![
///     PurchaseItem { code: "A".into(), name: "Tea".into(), price_cents: 150 },
///     PurchaseItem { code: "B".into(), name: "Soap".into(), price_cents: 300 },
/// ];
/// let totals = compute(&items, TaxRate::from_bps(1000));
/// assert_eq!(totals.total_ex_tax.cents(), 450);
/// assert_eq!(totals.total.cents(), 495);
/// ```
pub fn compute(items: &[PurchaseItem], rate: TaxRate) -> PurchaseTotals {
    let mut totals = PurchaseTotals::default();

    for item in items {
        totals.total_ex_tax += item.price();
        totals.total += item.price().with_tax(rate);
    }

    totals
}

/// Assembles the persistable draft for a purchase.
///
/// Items become line snapshots in input order, every line carrying
/// `tax_code`, and the header carries the already-final totals. The caller
/// hands the draft to the transaction store as one unit.
pub fn assemble_draft(
    header: PurchaseHeader,
    items: &[PurchaseItem],
    rate: TaxRate,
    tax_code: &str,
    occurred_at: DateTime<Utc>,
) -> TransactionDraft {
    let totals = compute(items, rate);

    let lines = items
        .iter()
        .map(|item| LineDraft {
            product_code: item.code.clone(),
            product_name: item.name.clone(),
            unit_price_cents: item.price_cents,
            tax_code: tax_code.to_string(),
        })
        .collect();

    TransactionDraft {
        occurred_at,
        employee_code: header.employee_code,
        store_code: header.store_code,
        terminal_id: header.terminal_id,
        total_cents: totals.total.cents(),
        total_ex_tax_cents: totals.total_ex_tax.cents(),
        lines,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
