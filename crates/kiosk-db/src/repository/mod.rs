//! # Repository Module
//!
//! Database repository implementations for Kiosk POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  HTTP handler                                                       │
//! │       │  db.products().get_by_code("12345678901")                   │
//! │       ▼                                                             │
//! │  ProductRepository ── SQL ──► SQLite                                │
//! │                                                                     │
//! │  All SQL lives here; callers only see domain types and DbError.     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Catalog reads and inserts
//! - [`tax::TaxRateRepository`] - Tax table lookups
//! - [`transaction::TransactionRepository`] - Atomic header+lines posting

pub mod product;
pub mod tax;
pub mod transaction;
