//! # kiosk-db: Database Layer for Kiosk POS
//!
//! This crate provides database access for the Kiosk POS system.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Kiosk POS Data Flow                           │
//! │                                                                     │
//! │  HTTP handler (POST /purchase)                                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                    kiosk-db (THIS CRATE)                      │ │
//! │  │                                                               │ │
//! │  │   ┌─────────────┐   ┌────────────────┐   ┌───────────────┐  │ │
//! │  │   │  Database   │   │  Repositories  │   │  Migrations   │  │ │
//! │  │   │  (pool.rs)  │   │ product / tax  │   │  (embedded)   │  │ │
//! │  │   │             │◄──│ / transaction  │   │ 001_init.sql  │  │ │
//! │  │   └─────────────┘   └────────────────┘   └───────────────┘  │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database file (WAL mode)                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (product, tax, transaction)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kiosk_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./kiosk.db")).await?;
//! let product = db.products().get_by_code("12345678901").await?;
//! let id = db.transactions().post(&draft).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::DbError;
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::product::ProductRepository;
pub use repository::tax::TaxRateRepository;
pub use repository::transaction::TransactionRepository;
