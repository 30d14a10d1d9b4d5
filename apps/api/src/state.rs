//! # Application State
//!
//! Shared state handed to every handler.
//!
//! The state is a pair of cheap clones: the pooled [`Database`] handle
//! and the [`Catalog`] composed over it. Handlers only get what they
//! need through these two doors; no handler talks SQL directly.

use crate::catalog::Catalog;
use kiosk_db::Database;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database handle (pool-backed, cheap to clone).
    pub db: Database,

    /// Catalog lookup: override table composed before the durable store.
    pub catalog: Catalog,
}

impl AppState {
    /// Creates application state with the demo override catalog.
    pub fn new(db: Database) -> Self {
        let catalog = Catalog::with_demo_overrides(db.products());
        AppState { db, catalog }
    }

    /// Creates application state with an explicit catalog (tests inject
    /// their own override tables through this).
    pub fn with_catalog(db: Database, catalog: Catalog) -> Self {
        AppState { db, catalog }
    }
}
