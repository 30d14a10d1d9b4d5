//! # Checkout
//!
//! Orchestrates purchase posting: validate, price, persist, report.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  post_purchase(header, items)                                       │
//! │                                                                     │
//! │  1. validate header + items        (no I/O yet)                     │
//! │  2. resolve tax rate "10"          (miss aborts, nothing written)   │
//! │  3. compute totals + line snapshots (kiosk-core, pure)              │
//! │  4. store header + lines atomically (kiosk-db, one SQL transaction) │
//! │  5. return totals to the register                                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Exactly one header and N lines are durably created per successful
//! call; a failure at any step leaves the ledger untouched. Retrying is
//! the caller's policy, never done here.

use chrono::Utc;
use tracing::info;

use crate::error::ApiError;
use kiosk_core::{
    error::CoreError,
    totals::{self, PurchaseTotals},
    validation::{validate_header, validate_items},
    PurchaseItem, STANDARD_TAX_CODE,
};
use kiosk_db::Database;

/// Result of a successfully posted purchase.
#[derive(Debug, Clone, Copy)]
pub struct PurchaseOutcome {
    /// Store-assigned transaction id.
    pub transaction_id: i64,

    /// Totals as returned to the register and as persisted.
    pub totals: PurchaseTotals,
}

/// Prices and persists one purchase.
///
/// An empty item list is allowed: the register posts a zero-total
/// transaction with no lines (e.g. a drawer-open audit entry).
pub async fn post_purchase(
    db: &Database,
    employee_code: Option<&str>,
    store_code: &str,
    terminal_id: &str,
    items: &[PurchaseItem],
) -> Result<PurchaseOutcome, ApiError> {
    let header = validate_header(employee_code, store_code, terminal_id)?;
    validate_items(items)?;

    // All lines carry the uniform standard rate today; the per-line
    // tax_code column is where reduced rates will plug in.
    let rate_entry = db
        .tax_rates()
        .get_by_code(STANDARD_TAX_CODE)
        .await?
        .ok_or_else(|| CoreError::TaxRateNotFound(STANDARD_TAX_CODE.to_string()))?;

    let draft = totals::assemble_draft(
        header,
        items,
        rate_entry.rate(),
        STANDARD_TAX_CODE,
        Utc::now(),
    );

    let totals = PurchaseTotals {
        total: kiosk_core::Money::from_cents(draft.total_cents),
        total_ex_tax: kiosk_core::Money::from_cents(draft.total_ex_tax_cents),
    };

    let transaction_id = db.transactions().post(&draft).await?;

    info!(
        transaction_id,
        total_cents = totals.total.cents(),
        total_ex_tax_cents = totals.total_ex_tax.cents(),
        items = items.len(),
        "Purchase posted"
    );

    Ok(PurchaseOutcome {
        transaction_id,
        totals,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use kiosk_db::DbConfig;

    fn item(code: &str, name: &str, price_cents: i64) -> PurchaseItem {
        PurchaseItem {
            code: code.to_string(),
            name: name.to_string(),
            price_cents,
        }
    }

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_post_purchase_two_items() {
        let db = db().await;

        let outcome = post_purchase(
            &db,
            Some("1234567890"),
            "30",
            "90",
            &[
                item("12345678901", "Green Tea 500ml", 150),
                item("98765432101", "Laundry Detergent", 300),
            ],
        )
        .await
        .unwrap();

        assert_eq!(outcome.totals.total_ex_tax.cents(), 450);
        assert_eq!(outcome.totals.total.cents(), 495);

        // Re-reading the transaction reproduces the returned totals.
        let stored = db
            .transactions()
            .get_by_id(outcome.transaction_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.total_cents, 495);
        assert_eq!(stored.total_ex_tax_cents, 450);
        assert_eq!(stored.employee_code, "1234567890");

        let lines = db
            .transactions()
            .lines_for(outcome.transaction_id)
            .await
            .unwrap();
        assert_eq!(lines.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_employee_code_defaults() {
        let db = db().await;

        let outcome = post_purchase(&db, None, "30", "90", &[item("A", "Tea", 100)])
            .await
            .unwrap();

        let stored = db
            .transactions()
            .get_by_id(outcome.transaction_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.employee_code, "9999999999");
    }

    #[tokio::test]
    async fn test_empty_items_posts_zero_total_transaction() {
        let db = db().await;

        let outcome = post_purchase(&db, None, "30", "90", &[]).await.unwrap();

        assert_eq!(outcome.totals.total.cents(), 0);
        assert_eq!(outcome.totals.total_ex_tax.cents(), 0);
        assert!(db
            .transactions()
            .lines_for(outcome.transaction_id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_validation_failure_persists_nothing() {
        let db = db().await;

        let err = post_purchase(&db, None, "", "90", &[item("A", "Tea", 100)])
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(db.transactions().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_negative_price_rejected_before_write() {
        let db = db().await;

        let err = post_purchase(&db, None, "30", "90", &[item("A", "Tea", -5)])
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(db.transactions().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_missing_tax_rate_aborts_and_persists_nothing() {
        let db = db().await;

        // Remove the seeded standard rate to simulate a bad tax table.
        sqlx::query("DELETE FROM tax_rates WHERE code = '10'")
            .execute(db.pool())
            .await
            .unwrap();

        let err = post_purchase(&db, None, "30", "90", &[item("A", "Tea", 100)])
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(db.transactions().count().await.unwrap(), 0);
    }
}
