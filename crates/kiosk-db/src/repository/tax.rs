//! # Tax Rate Repository
//!
//! Database operations for the tax table.
//!
//! The table is seeded by migration with the standard code `"10"` at 10%.
//! A purchase that references a code missing from this table is aborted
//! before anything is written; no transaction can be priced without a
//! rate.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use kiosk_core::TaxRateEntry;

/// Repository for tax rate lookups.
#[derive(Debug, Clone)]
pub struct TaxRateRepository {
    pool: SqlitePool,
}

impl TaxRateRepository {
    /// Creates a new TaxRateRepository.
    pub fn new(pool: SqlitePool) -> Self {
        TaxRateRepository { pool }
    }

    /// Gets a tax rate by its exact code.
    ///
    /// ## Returns
    /// * `Ok(Some(TaxRateEntry))` - Rate found
    /// * `Ok(None)` - Code absent from the table
    pub async fn get_by_code(&self, code: &str) -> DbResult<Option<TaxRateEntry>> {
        debug!(code = %code, "Looking up tax rate");

        let entry = sqlx::query_as::<_, TaxRateEntry>(
            r#"
            SELECT code, name, rate_bps
            FROM tax_rates
            WHERE code = ?1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entry)
    }

    /// Inserts or replaces a tax rate.
    ///
    /// The tax table holds exactly one active rate per code, so a re-seed
    /// overwrites rather than duplicates.
    pub async fn upsert(&self, entry: &TaxRateEntry) -> DbResult<()> {
        debug!(code = %entry.code, rate_bps = entry.rate_bps, "Upserting tax rate");

        sqlx::query(
            r#"
            INSERT INTO tax_rates (code, name, rate_bps)
            VALUES (?1, ?2, ?3)
            ON CONFLICT (code) DO UPDATE SET name = excluded.name, rate_bps = excluded.rate_bps
            "#,
        )
        .bind(&entry.code)
        .bind(&entry.name)
        .bind(entry.rate_bps)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_standard_rate_is_seeded() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let entry = db.tax_rates().get_by_code("10").await.unwrap().unwrap();
        assert_eq!(entry.rate_bps, 1000);
        assert_eq!(entry.rate().bps(), 1000);
    }

    #[tokio::test]
    async fn test_unknown_code_is_none() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        assert!(db.tax_rates().get_by_code("99").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_upsert_replaces_rate() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.tax_rates();

        repo.upsert(&TaxRateEntry {
            code: "08".to_string(),
            name: "Reduced rate 8%".to_string(),
            rate_bps: 800,
        })
        .await
        .unwrap();
        assert_eq!(repo.get_by_code("08").await.unwrap().unwrap().rate_bps, 800);

        repo.upsert(&TaxRateEntry {
            code: "08".to_string(),
            name: "Reduced rate 8%".to_string(),
            rate_bps: 850,
        })
        .await
        .unwrap();
        assert_eq!(repo.get_by_code("08").await.unwrap().unwrap().rate_bps, 850);
    }
}
