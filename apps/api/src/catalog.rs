//! # Catalog Lookup
//!
//! Resolves a scanned product code to its name and price.
//!
//! ## Lookup Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  lookup("12345678901")                                              │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  in-memory override table ── hit? ──► CatalogEntry                  │
//! │       │ miss                                                        │
//! │       ▼                                                             │
//! │  products table (kiosk-db) ── hit? ──► CatalogEntry                 │
//! │       │ miss                                                        │
//! │       ▼                                                             │
//! │  404 "Product not registered"                                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The override table is an explicit, injected data source composed in
//! front of the durable catalog. It is owned by the `Catalog` value, not
//! hidden process-wide state, so tests and demo deployments can swap it
//! freely.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use kiosk_core::{error::CoreError, validation::validate_product_code, Product};
use kiosk_db::ProductRepository;

/// A resolved catalog answer: what the register needs to ring an item up.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Product code as looked up.
    pub code: String,

    /// Display name.
    pub name: String,

    /// Unit price, smallest currency unit.
    pub price_cents: i64,
}

impl From<Product> for CatalogEntry {
    fn from(p: Product) -> Self {
        CatalogEntry {
            code: p.code,
            name: p.name,
            price_cents: p.price_cents,
        }
    }
}

/// Catalog lookup over an override table and the durable product store.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Pre-seeded entries consulted before the database.
    overrides: Arc<HashMap<String, CatalogEntry>>,

    /// Durable catalog rows.
    products: ProductRepository,
}

impl Catalog {
    /// Creates a catalog from an explicit override table and the product
    /// repository.
    pub fn new(overrides: HashMap<String, CatalogEntry>, products: ProductRepository) -> Self {
        Catalog {
            overrides: Arc::new(overrides),
            products,
        }
    }

    /// Creates a catalog seeded with the demo override entries.
    ///
    /// These mirror the seed tool's first two rows so a fresh checkout of
    /// the repo answers lookups before any database seeding.
    pub fn with_demo_overrides(products: ProductRepository) -> Self {
        let mut overrides = HashMap::new();
        for (code, name, price_cents) in [
            ("12345678901", "Green Tea 500ml", 150_i64),
            ("98765432101", "Laundry Detergent", 300),
        ] {
            overrides.insert(
                code.to_string(),
                CatalogEntry {
                    code: code.to_string(),
                    name: name.to_string(),
                    price_cents,
                },
            );
        }
        Catalog::new(overrides, products)
    }

    /// Resolves a product code.
    ///
    /// Checks the override table first, then the durable store. Read-only;
    /// a miss in both sources is the user-facing "product not registered"
    /// condition.
    pub async fn lookup(&self, code: &str) -> Result<CatalogEntry, ApiError> {
        validate_product_code(code)?;

        if let Some(entry) = self.overrides.get(code) {
            debug!(code = %code, "Catalog hit in override table");
            return Ok(entry.clone());
        }

        match self.products.get_by_code(code).await? {
            Some(product) => {
                debug!(code = %code, "Catalog hit in product store");
                Ok(product.into())
            }
            None => Err(CoreError::ProductNotFound(code.to_string()).into()),
        }
    }

    /// Lists the durable catalog rows (debug listing endpoint).
    pub async fn list(&self) -> Result<Vec<CatalogEntry>, ApiError> {
        let products = self.products.list().await?;
        Ok(products.into_iter().map(CatalogEntry::from).collect())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::Utc;
    use kiosk_db::{Database, DbConfig};

    async fn catalog_with_db() -> (Catalog, Database) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let catalog = Catalog::with_demo_overrides(db.products());
        (catalog, db)
    }

    #[tokio::test]
    async fn test_override_entry_wins() {
        let (catalog, db) = catalog_with_db().await;

        // Same code in the durable store with a different price: the
        // override must still answer.
        db.products()
            .insert(&Product {
                code: "12345678901".to_string(),
                name: "Shelf Copy".to_string(),
                price_cents: 999,
                valid_from: None,
                valid_to: None,
                created_at: Utc::now(),
            })
            .await
            .unwrap();

        let entry = catalog.lookup("12345678901").await.unwrap();
        assert_eq!(entry.name, "Green Tea 500ml");
        assert_eq!(entry.price_cents, 150);
    }

    #[tokio::test]
    async fn test_falls_back_to_durable_store() {
        let (catalog, db) = catalog_with_db().await;

        db.products()
            .insert(&Product {
                code: "55555555555".to_string(),
                name: "Shelf Item".to_string(),
                price_cents: 420,
                valid_from: None,
                valid_to: None,
                created_at: Utc::now(),
            })
            .await
            .unwrap();

        let entry = catalog.lookup("55555555555").await.unwrap();
        assert_eq!(entry.name, "Shelf Item");
        assert_eq!(entry.price_cents, 420);
    }

    #[tokio::test]
    async fn test_miss_is_not_found() {
        let (catalog, _db) = catalog_with_db().await;

        let err = catalog.lookup("00000000000").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(err.message.contains("not registered"));
    }

    #[tokio::test]
    async fn test_empty_code_is_validation_error() {
        let (catalog, _db) = catalog_with_db().await;

        let err = catalog.lookup("").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_list_returns_durable_rows_only() {
        let (catalog, db) = catalog_with_db().await;

        assert!(catalog.list().await.unwrap().is_empty());

        db.products()
            .insert(&Product {
                code: "55555555555".to_string(),
                name: "Shelf Item".to_string(),
                price_cents: 420,
                valid_from: None,
                valid_to: None,
                created_at: Utc::now(),
            })
            .await
            .unwrap();

        let listed = catalog.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].code, "55555555555");
    }
}
