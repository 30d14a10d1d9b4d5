//! # Validation Module
//!
//! Input validation for Kiosk POS requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: HTTP deserialization (serde)                              │
//! │  └── Shape and type checks                                          │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE                                               │
//! │  └── Field rules, before any lookup or write                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Database (SQLite)                                         │
//! │  └── NOT NULL, UNIQUE, foreign key constraints                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A request that fails here is rejected whole: no catalog read, no tax
//! read, no row written.

use crate::error::ValidationError;
use crate::types::{PurchaseHeader, PurchaseItem};
use crate::{DEFAULT_EMPLOYEE_CODE, MAX_PURCHASE_ITEMS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of an employee badge number.
const MAX_EMPLOYEE_CODE_LEN: usize = 10;

/// Maximum length of a store code.
const MAX_STORE_CODE_LEN: usize = 5;

/// Maximum length of a terminal number.
const MAX_TERMINAL_ID_LEN: usize = 3;

// =============================================================================
// Lookup Validators
// =============================================================================

/// Validates a product code for catalog lookup.
///
/// Only presence is checked; the catalog accepts any non-empty code and
/// answers not-found for unknown ones.
///
/// ## Example
/// ```rust
/// use kiosk_core::validation::validate_product_code;
///
/// assert!(validate_product_code("12345678901").is_ok());
/// assert!(validate_product_code("").is_err());
/// ```
pub fn validate_product_code(code: &str) -> ValidationResult<()> {
    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Purchase Validators
// =============================================================================

/// Validates purchase header fields and returns the normalized header.
///
/// ## Rules
/// - `employee_code`: optional; empty or absent falls back to
///   [`DEFAULT_EMPLOYEE_CODE`], at most 10 characters otherwise
/// - `store_code`: required, at most 5 characters
/// - `terminal_id`: required, at most 3 characters
///
/// ## Example
/// ```rust
/// use kiosk_core::validation::validate_header;
///
/// let header = validate_header(None, "30", "90").unwrap();
/// assert_eq!(header.employee_code, "9999999999");
/// assert!(validate_header(None, "", "90").is_err());
/// ```
pub fn validate_header(
    employee_code: Option<&str>,
    store_code: &str,
    terminal_id: &str,
) -> ValidationResult<PurchaseHeader> {
    let employee_code = match employee_code {
        Some(code) if !code.is_empty() => {
            if code.len() > MAX_EMPLOYEE_CODE_LEN {
                return Err(ValidationError::TooLong {
                    field: "employee_code".to_string(),
                    max: MAX_EMPLOYEE_CODE_LEN,
                });
            }
            code.to_string()
        }
        _ => DEFAULT_EMPLOYEE_CODE.to_string(),
    };

    if store_code.is_empty() {
        return Err(ValidationError::Required {
            field: "store_code".to_string(),
        });
    }
    if store_code.len() > MAX_STORE_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "store_code".to_string(),
            max: MAX_STORE_CODE_LEN,
        });
    }

    if terminal_id.is_empty() {
        return Err(ValidationError::Required {
            field: "terminal_id".to_string(),
        });
    }
    if terminal_id.len() > MAX_TERMINAL_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "terminal_id".to_string(),
            max: MAX_TERMINAL_ID_LEN,
        });
    }

    Ok(PurchaseHeader {
        employee_code,
        store_code: store_code.to_string(),
        terminal_id: terminal_id.to_string(),
    })
}

/// Validates the item list of a purchase.
///
/// ## Rules
/// - at most [`MAX_PURCHASE_ITEMS`] items (an empty list is allowed and
///   posts a zero-total transaction)
/// - every item needs a code and a name
/// - unit prices must not be negative
pub fn validate_items(items: &[PurchaseItem]) -> ValidationResult<()> {
    if items.len() > MAX_PURCHASE_ITEMS {
        return Err(ValidationError::TooManyItems {
            max: MAX_PURCHASE_ITEMS,
        });
    }

    for item in items {
        if item.code.is_empty() {
            return Err(ValidationError::Required {
                field: "item.code".to_string(),
            });
        }
        if item.name.is_empty() {
            return Err(ValidationError::Required {
                field: "item.name".to_string(),
            });
        }
        if item.price_cents < 0 {
            return Err(ValidationError::NegativeAmount {
                field: "item.price".to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(code: &str, name: &str, price_cents: i64) -> PurchaseItem {
        PurchaseItem {
            code: code.to_string(),
            name: name.to_string(),
            price_cents,
        }
    }

    #[test]
    fn test_product_code_presence() {
        assert!(validate_product_code("12345678901").is_ok());
        assert!(matches!(
            validate_product_code(""),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_header_defaults_employee_code() {
        let header = validate_header(None, "30", "90").unwrap();
        assert_eq!(header.employee_code, DEFAULT_EMPLOYEE_CODE);

        let header = validate_header(Some(""), "30", "90").unwrap();
        assert_eq!(header.employee_code, DEFAULT_EMPLOYEE_CODE);

        let header = validate_header(Some("1234567890"), "30", "90").unwrap();
        assert_eq!(header.employee_code, "1234567890");
    }

    #[test]
    fn test_header_requires_store_and_terminal() {
        assert!(matches!(
            validate_header(None, "", "90"),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_header(None, "30", ""),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_header_length_limits() {
        assert!(matches!(
            validate_header(Some("12345678901"), "30", "90"),
            Err(ValidationError::TooLong { .. })
        ));
        assert!(matches!(
            validate_header(None, "123456", "90"),
            Err(ValidationError::TooLong { .. })
        ));
        assert!(matches!(
            validate_header(None, "30", "9090"),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_items_rules() {
        assert!(validate_items(&[]).is_ok());
        assert!(validate_items(&[item("A", "Tea", 150)]).is_ok());

        assert!(matches!(
            validate_items(&[item("", "Tea", 150)]),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_items(&[item("A", "", 150)]),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_items(&[item("A", "Tea", -1)]),
            Err(ValidationError::NegativeAmount { .. })
        ));
    }

    #[test]
    fn test_items_count_limit() {
        let many: Vec<PurchaseItem> = (0..=MAX_PURCHASE_ITEMS)
            .map(|i| item(&format!("C{i}"), "Bulk", 10))
            .collect();
        assert!(matches!(
            validate_items(&many),
            Err(ValidationError::TooManyItems { .. })
        ));
    }
}
