//! # kiosk-api: HTTP JSON API for Kiosk POS
//!
//! The service layer wiring the register frontend to the core:
//!
//! - `POST /product_search` - catalog lookup by scanned code
//! - `POST /purchase`       - price and persist a purchase transaction
//! - `GET  /products`       - debug listing of the durable catalog
//! - `GET  /health`         - liveness probe against the database
//!
//! Handlers deserialize DTOs, delegate to [`catalog`] and [`checkout`],
//! and map failures through [`error::ApiError`]. Business rules stay in
//! kiosk-core; SQL stays in kiosk-db.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::ApiConfig;
pub use error::{ApiError, ErrorCode};
pub use routes::build_router;
pub use state::AppState;
