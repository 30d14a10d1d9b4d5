//! # Domain Types
//!
//! Core domain types used throughout Kiosk POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │    Product     │   │  TaxRateEntry  │   │  Transaction   │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  code (unique) │   │  code ("10")   │   │  id (i64)      │      │
//! │  │  name          │   │  name          │   │  totals (×2)   │      │
//! │  │  price_cents   │   │  rate_bps      │   │  header fields │      │
//! │  └────────────────┘   └────────────────┘   └───────┬────────┘      │
//! │                                                    │ 1─N            │
//! │  ┌────────────────┐   ┌────────────────┐   ┌───────▼────────┐      │
//! │  │    TaxRate     │   │  PurchaseItem  │   │TransactionLine │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  bps (u32)     │   │  code, name,   │   │  snapshots of  │      │
//! │  │  1000 = 10%    │   │  price_cents   │   │  code/name/... │      │
//! │  └────────────────┘   └────────────────┘   └────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This is the single canonical data model: the persistence layer and the
//! HTTP layer both map onto these types rather than declaring their own
//! divergent copies of the same tables.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000. The standard 10% consumption rate is
/// 1000 bps. Integer basis points keep the rate out of floating point and
/// make the rounding law in [`Money::tax_at`](crate::money::Money::tax_at)
/// exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product.
///
/// Identity is the business `code` (scanned barcode); it is immutable once
/// assigned. Prices are snapshotted onto transaction lines at sale time, so
/// later catalog edits never rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Business identifier (unique, fixed-format string).
    pub code: String,

    /// Display name shown to the cashier and on the receipt.
    pub name: String,

    /// Unit price in the smallest currency unit. Never negative.
    pub price_cents: i64,

    /// Start of the validity window, if the listing is time-bounded.
    pub valid_from: Option<DateTime<Utc>>,

    /// End of the validity window, if the listing is time-bounded.
    pub valid_to: Option<DateTime<Utc>>,

    /// When the catalog row was created.
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Returns the unit price as a Money value.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Tax Rate Entry
// =============================================================================

/// A row of the tax table: one active rate per code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct TaxRateEntry {
    /// Short tax code, e.g. `"10"` for the standard rate.
    pub code: String,

    /// Display name, e.g. "Standard rate".
    pub name: String,

    /// Rate in basis points (1000 = 10%).
    pub rate_bps: u32,
}

impl TaxRateEntry {
    /// Returns the rate as a TaxRate value.
    #[inline]
    pub fn rate(&self) -> TaxRate {
        TaxRate::from_bps(self.rate_bps)
    }
}

// =============================================================================
// Purchase Input
// =============================================================================

/// One item of an incoming purchase request.
///
/// The caller has already resolved code/name/price through the catalog
/// lookup; the builder trusts the snapshot it is handed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseItem {
    /// Product code at scan time.
    pub code: String,

    /// Product name at scan time.
    pub name: String,

    /// Unit price at scan time, smallest currency unit.
    pub price_cents: i64,
}

impl PurchaseItem {
    /// Returns the unit price as a Money value.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// Header fields of an incoming purchase request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseHeader {
    /// Badge number of the cashier. Already defaulted by validation when
    /// the register sends none.
    pub employee_code: String,

    /// Store the terminal belongs to.
    pub store_code: String,

    /// POS terminal number within the store.
    pub terminal_id: String,
}

// =============================================================================
// Transaction (persisted)
// =============================================================================

/// A recorded purchase transaction.
///
/// Created atomically together with its lines and never updated afterward;
/// the totals a caller reads back are the totals that were computed before
/// the insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Transaction {
    /// Store-assigned numeric identifier.
    pub id: i64,

    /// When the purchase was posted.
    pub occurred_at: DateTime<Utc>,

    /// Badge number of the cashier.
    pub employee_code: String,

    /// Store the terminal belongs to.
    pub store_code: String,

    /// POS terminal number within the store.
    pub terminal_id: String,

    /// Tax-included total, smallest currency unit.
    pub total_cents: i64,

    /// Tax-excluded total, smallest currency unit.
    pub total_ex_tax_cents: i64,
}

/// A line item belonging to exactly one transaction.
///
/// ## Snapshot Pattern
/// Product details (code, name, price) are copied onto the line at sale
/// time. The sale history stays correct even if the catalog row changes
/// or disappears later.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct TransactionLine {
    /// Store-assigned numeric identifier.
    pub id: i64,

    /// Owning transaction.
    pub transaction_id: i64,

    /// Product code snapshot.
    pub product_code: String,

    /// Product name snapshot.
    pub product_name: String,

    /// Unit price snapshot, smallest currency unit.
    pub unit_price_cents: i64,

    /// Tax code applied to this line.
    pub tax_code: String,
}

// =============================================================================
// Drafts (not yet persisted)
// =============================================================================

/// A fully computed transaction waiting to be persisted.
///
/// Totals are final before the draft ever reaches the store; the store
/// writes header and lines in one database transaction, so no reader can
/// observe a header with zero or stale totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    /// When the purchase was posted.
    pub occurred_at: DateTime<Utc>,

    /// Badge number of the cashier.
    pub employee_code: String,

    /// Store the terminal belongs to.
    pub store_code: String,

    /// POS terminal number within the store.
    pub terminal_id: String,

    /// Tax-included total, smallest currency unit.
    pub total_cents: i64,

    /// Tax-excluded total, smallest currency unit.
    pub total_ex_tax_cents: i64,

    /// Line snapshots, in input order.
    pub lines: Vec<LineDraft>,
}

/// A line snapshot waiting to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDraft {
    /// Product code snapshot.
    pub product_code: String,

    /// Product name snapshot.
    pub product_name: String,

    /// Unit price snapshot, smallest currency unit.
    pub unit_price_cents: i64,

    /// Tax code applied to this line.
    pub tax_code: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
