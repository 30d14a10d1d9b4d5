//! # Transaction Repository
//!
//! Atomic persistence of purchase transactions.
//!
//! ## Posting Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     post(draft)                                     │
//! │                                                                     │
//! │  BEGIN                                                              │
//! │    INSERT header (totals already final)  ──► id = last_insert_rowid │
//! │    INSERT line 1 (transaction_id = id)                              │
//! │    INSERT line 2 ...                                                │
//! │  COMMIT            ──► Ok(id)                                       │
//! │                                                                     │
//! │  any failure       ──► ROLLBACK, Err(DbError)                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The header is inserted with its final totals; there is no later UPDATE.
//! Either the full transaction (header + all lines + correct totals) is
//! durably visible, or none of it is.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use kiosk_core::{Transaction, TransactionDraft, TransactionLine};

/// Repository for transaction database operations.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    pool: SqlitePool,
}

impl TransactionRepository {
    /// Creates a new TransactionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        TransactionRepository { pool }
    }

    /// Persists a header and all its lines as one unit.
    ///
    /// ## Returns
    /// The store-assigned transaction id. Ids come from an AUTOINCREMENT
    /// column, so they are unique and strictly increasing.
    ///
    /// ## Atomicity
    /// Runs inside a single SQL transaction on one pooled connection.
    /// Concurrent posts cannot interleave id assignment or row writes;
    /// a failure at any point rolls the whole unit back.
    pub async fn post(&self, draft: &TransactionDraft) -> DbResult<i64> {
        debug!(
            store_code = %draft.store_code,
            terminal_id = %draft.terminal_id,
            lines = draft.lines.len(),
            "Posting transaction"
        );

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let result = sqlx::query(
            r#"
            INSERT INTO transactions (
                occurred_at, employee_code, store_code, terminal_id,
                total_cents, total_ex_tax_cents
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(draft.occurred_at)
        .bind(&draft.employee_code)
        .bind(&draft.store_code)
        .bind(&draft.terminal_id)
        .bind(draft.total_cents)
        .bind(draft.total_ex_tax_cents)
        .execute(&mut *tx)
        .await?;

        let id = result.last_insert_rowid();

        for line in &draft.lines {
            sqlx::query(
                r#"
                INSERT INTO transaction_lines (
                    transaction_id, product_code, product_name,
                    unit_price_cents, tax_code
                ) VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )
            .bind(id)
            .bind(&line.product_code)
            .bind(&line.product_name)
            .bind(line.unit_price_cents)
            .bind(&line.tax_code)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!(
            transaction_id = id,
            total_cents = draft.total_cents,
            lines = draft.lines.len(),
            "Transaction posted"
        );

        Ok(id)
    }

    /// Gets a transaction header by id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Transaction>> {
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, occurred_at, employee_code, store_code, terminal_id,
                   total_cents, total_ex_tax_cents
            FROM transactions
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(transaction)
    }

    /// Gets all lines of a transaction, in insertion order.
    pub async fn lines_for(&self, transaction_id: i64) -> DbResult<Vec<TransactionLine>> {
        let lines = sqlx::query_as::<_, TransactionLine>(
            r#"
            SELECT id, transaction_id, product_code, product_name,
                   unit_price_cents, tax_code
            FROM transaction_lines
            WHERE transaction_id = ?1
            ORDER BY id
            "#,
        )
        .bind(transaction_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(lines)
    }

    /// Counts persisted transaction headers (for diagnostics and tests).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transactions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
