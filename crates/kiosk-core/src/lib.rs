//! # kiosk-core: Pure Business Logic for Kiosk POS
//!
//! This crate is the **heart** of Kiosk POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Kiosk POS Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                  HTTP API (apps/api)                          │ │
//! │  │    /product_search ──► /purchase ──► /products               │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │               ★ kiosk-core (THIS CRATE) ★                     │ │
//! │  │                                                               │ │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌────────────┐  │ │
//! │  │   │  types   │  │  money   │  │  totals  │  │ validation │  │ │
//! │  │   │ Product  │  │  Money   │  │ Purchase │  │   rules    │  │ │
//! │  │   │ TaxRate  │  │ tax math │  │  Totals  │  │   checks   │  │ │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └────────────┘  │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS         │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │                  kiosk-db (Database Layer)                    │ │
//! │  │            SQLite queries, migrations, repositories           │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, TaxRate, Transaction, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`totals`] - Purchase totals computation and transaction assembly
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in the smallest currency unit (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use kiosk_core::money::Money;
//! use kiosk_core::types::TaxRate;
//!
//! // Create money from cents (never from floats!)
//! let price = Money::from_cents(150);
//!
//! // Apply a 10% rate, rounding half-up per line
//! let rate = TaxRate::from_bps(1000);
//! assert_eq!(price.with_tax(rate).cents(), 165);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kiosk_core::Money` instead of
// `use kiosk_core::money::Money`

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use totals::PurchaseTotals;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Tax code applied to every purchase line.
///
/// The register currently prices all items at the standard rate. Lines still
/// carry a per-line `tax_code` column so reduced rates can be introduced
/// without a schema change.
pub const STANDARD_TAX_CODE: &str = "10";

/// Employee code recorded when the register does not send one.
///
/// Matches the walk-up / unattended terminal convention: an all-nines badge
/// number that no real employee can hold.
pub const DEFAULT_EMPLOYEE_CODE: &str = "9999999999";

/// Maximum items allowed in a single purchase.
///
/// Prevents runaway requests and keeps transaction sizes reasonable.
pub const MAX_PURCHASE_ITEMS: usize = 100;
