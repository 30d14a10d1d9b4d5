//! # Error Types
//!
//! Domain-specific error types for kiosk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  kiosk-core errors (this file)                                      │
//! │  ├── CoreError        - Domain failures (missing product/rate)      │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  kiosk-db errors (separate crate)                                   │
//! │  └── DbError          - Database operation failures                 │
//! │                                                                     │
//! │  API errors (apps/api)                                              │
//! │  └── ApiError         - What HTTP clients see (serialized)          │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → DbError → ApiError → Client    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product code, tax code)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent domain failures during lookup or purchase
/// posting. They are caught at the API boundary and translated to
/// user-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product code is not registered in the catalog.
    ///
    /// Recoverable: the cashier re-scans or keys the item manually.
    #[error("Product not registered: {0}")]
    ProductNotFound(String),

    /// Tax code has no rate in the tax table.
    ///
    /// Fatal to the enclosing purchase: no transaction can be priced
    /// without a rate, so nothing is persisted.
    #[error("Tax rate not found for code: {0}")]
    TaxRateNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a request doesn't meet requirements. Used for early
/// validation before any lookup or write runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Monetary value must not be negative.
    #[error("{field} must not be negative")]
    NegativeAmount { field: String },

    /// Too many items in one purchase.
    #[error("purchase cannot have more than {max} items")]
    TooManyItems { max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
