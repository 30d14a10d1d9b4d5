//! # Product Repository
//!
//! Database operations for the product catalog.
//!
//! Lookups are exact-match on the business code (the scanned barcode).
//! The in-memory override table that demo deployments layer on top of the
//! catalog lives in the API crate; this repository only answers for
//! durable rows.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use kiosk_core::Product;

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let product = repo.get_by_code("12345678901").await?;
/// let all = repo.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Gets a product by its business code.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - No such code registered
    pub async fn get_by_code(&self, code: &str) -> DbResult<Option<Product>> {
        debug!(code = %code, "Looking up product");

        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT code, name, price_cents, valid_from, valid_to, created_at
            FROM products
            WHERE code = ?1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Lists all catalog products, ordered by code.
    ///
    /// Backs the debug listing endpoint; the catalog is small enough that
    /// pagination is not worth its weight here.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT code, name, price_cents, valid_from, valid_to, created_at
            FROM products
            ORDER BY code
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(())` - Inserted
    /// * `Err(DbError::UniqueViolation)` - Code already registered
    pub async fn insert(&self, product: &Product) -> DbResult<()> {
        debug!(code = %product.code, "Inserting product");

        sqlx::query(
            r#"
            INSERT INTO products (code, name, price_cents, valid_from, valid_to, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&product.code)
        .bind(&product.name)
        .bind(product.price_cents)
        .bind(product.valid_from)
        .bind(product.valid_to)
        .bind(product.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Deletes a product by code.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - Code was not registered
    pub async fn delete(&self, code: &str) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE code = ?1")
            .bind(code)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", code));
        }

        Ok(())
    }

    /// Counts catalog products (for diagnostics and the seed tool).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::Utc;

    fn sample(code: &str, name: &str, price_cents: i64) -> Product {
        Product {
            code: code.to_string(),
            name: name.to_string(),
            price_cents,
            valid_from: None,
            valid_to: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get_by_code() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        repo.insert(&sample("12345678901", "Green Tea 500ml", 150))
            .await
            .unwrap();

        let found = repo.get_by_code("12345678901").await.unwrap().unwrap();
        assert_eq!(found.name, "Green Tea 500ml");
        assert_eq!(found.price_cents, 150);

        assert!(repo.get_by_code("00000000000").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_code_rejected() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        repo.insert(&sample("12345678901", "Green Tea 500ml", 150))
            .await
            .unwrap();
        let err = repo
            .insert(&sample("12345678901", "Other Tea", 180))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_list_ordered_by_code() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        repo.insert(&sample("B2", "Second", 200)).await.unwrap();
        repo.insert(&sample("A1", "First", 100)).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].code, "A1");
        assert_eq!(all[1].code, "B2");
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let err = db.products().delete("nope").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
