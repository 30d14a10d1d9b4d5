//! # Request / Response DTOs
//!
//! The JSON shapes exchanged with the register frontend.
//!
//! DTOs are camelCase on the wire and deliberately separate from the
//! domain types: the internal model can grow fields without breaking the
//! register, and presentation casing never leaks into the schema.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogEntry;
use crate::checkout::PurchaseOutcome;
use kiosk_core::PurchaseItem;

// =============================================================================
// Product Search
// =============================================================================

/// `POST /product_search` request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchRequest {
    /// Scanned or keyed product code.
    pub code: String,
}

/// `POST /product_search` and `GET /products` response item.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub code: String,
    pub name: String,
    /// Unit price, smallest currency unit.
    pub price: i64,
}

impl From<CatalogEntry> for ProductResponse {
    fn from(entry: CatalogEntry) -> Self {
        ProductResponse {
            code: entry.code,
            name: entry.name,
            price: entry.price_cents,
        }
    }
}

// =============================================================================
// Purchase
// =============================================================================

/// One purchased item in a `POST /purchase` request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseItemRequest {
    pub code: String,
    pub name: String,
    /// Unit price, smallest currency unit.
    pub price: i64,
}

impl From<PurchaseItemRequest> for PurchaseItem {
    fn from(item: PurchaseItemRequest) -> Self {
        PurchaseItem {
            code: item.code,
            name: item.name,
            price_cents: item.price,
        }
    }
}

/// `POST /purchase` request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    /// Cashier badge number; empty or absent falls back to the register
    /// default.
    #[serde(default)]
    pub employee_code: Option<String>,

    pub store_code: String,

    pub terminal_id: String,

    pub items: Vec<PurchaseItemRequest>,
}

/// `POST /purchase` response body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResponse {
    pub success: bool,

    /// Tax-included total, smallest currency unit.
    pub total_amount: i64,

    /// Tax-excluded total, smallest currency unit.
    pub total_amount_ex_tax: i64,
}

impl From<PurchaseOutcome> for PurchaseResponse {
    fn from(outcome: PurchaseOutcome) -> Self {
        PurchaseResponse {
            success: true,
            total_amount: outcome.totals.total.cents(),
            total_amount_ex_tax: outcome.totals.total_ex_tax.cents(),
        }
    }
}
