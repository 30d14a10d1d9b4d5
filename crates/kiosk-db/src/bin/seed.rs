//! # Seed Data Generator
//!
//! Populates the database with demo catalog rows for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p kiosk-db --bin seed
//!
//! # Specify a database path
//! cargo run -p kiosk-db --bin seed -- --db ./data/kiosk.db
//! ```
//!
//! The demo entries mirror the in-memory override table the API ships
//! with, plus a few extra shelf items, so a freshly seeded database
//! answers lookups on its own.

use chrono::Utc;
use std::env;

use kiosk_core::Product;
use kiosk_db::{Database, DbConfig};

/// Demo catalog: (code, name, price in smallest currency unit).
const DEMO_PRODUCTS: &[(&str, &str, i64)] = &[
    ("12345678901", "Green Tea 500ml", 150),
    ("98765432101", "Laundry Detergent", 300),
    ("45678912302", "Rice Ball Salmon", 120),
    ("45678912303", "Chocolate Bar", 90),
    ("45678912304", "Instant Noodles", 210),
    ("45678912305", "Mineral Water 2L", 110),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let db_path = parse_db_path().unwrap_or_else(|| "./kiosk.db".to_string());

    println!("Seeding database at {db_path}");

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let products = db.products();

    let mut inserted = 0usize;
    let mut skipped = 0usize;

    for &(code, name, price_cents) in DEMO_PRODUCTS {
        if products.get_by_code(code).await?.is_some() {
            skipped += 1;
            continue;
        }

        products
            .insert(&Product {
                code: code.to_string(),
                name: name.to_string(),
                price_cents,
                valid_from: None,
                valid_to: None,
                created_at: Utc::now(),
            })
            .await?;
        inserted += 1;
    }

    let total = products.count().await?;
    println!("Seed complete: {inserted} inserted, {skipped} already present, {total} total");

    db.close().await;
    Ok(())
}

/// Parses `--db <path>` from the command line.
fn parse_db_path() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    args.iter()
        .position(|a| a == "--db")
        .and_then(|i| args.get(i + 1))
        .cloned()
}
