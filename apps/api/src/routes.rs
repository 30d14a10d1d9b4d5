//! # Routes
//!
//! Router assembly and HTTP handlers.
//!
//! ## Endpoints
//! ```text
//! POST /product_search   catalog lookup by code
//! POST /purchase         price and persist a purchase
//! GET  /products         debug listing of the durable catalog
//! GET  /health           database liveness probe
//! ```
//!
//! Handlers stay thin: deserialize, delegate, convert. Pricing rules live
//! in kiosk-core, SQL in kiosk-db, and failure mapping in [`crate::error`].

use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::checkout;
use crate::dto::{ProductResponse, ProductSearchRequest, PurchaseRequest, PurchaseResponse};
use crate::error::ApiError;
use crate::state::AppState;
use kiosk_core::PurchaseItem;

/// Builds the application router.
///
/// `allowed_origins` configures CORS for the register frontend; an empty
/// list falls back to a permissive layer for local development.
pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/product_search", post(product_search))
        .route("/purchase", post(purchase))
        .route("/products", get(list_products))
        .route("/health", get(health))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for the register frontend.
///
/// The frontend is served from another origin (a dev server or a kiosk
/// shell), so the API must answer preflights for it.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// `POST /product_search` - resolve a product code to name and price.
async fn product_search(
    State(state): State<AppState>,
    Json(request): Json<ProductSearchRequest>,
) -> Result<Json<ProductResponse>, ApiError> {
    debug!(code = %request.code, "product_search");

    let entry = state.catalog.lookup(&request.code).await?;
    Ok(Json(entry.into()))
}

/// `POST /purchase` - price the items and persist the transaction.
async fn purchase(
    State(state): State<AppState>,
    Json(request): Json<PurchaseRequest>,
) -> Result<Json<PurchaseResponse>, ApiError> {
    debug!(
        store_code = %request.store_code,
        terminal_id = %request.terminal_id,
        items = request.items.len(),
        "purchase"
    );

    let items: Vec<PurchaseItem> = request.items.into_iter().map(Into::into).collect();

    let outcome = checkout::post_purchase(
        &state.db,
        request.employee_code.as_deref(),
        &request.store_code,
        &request.terminal_id,
        &items,
    )
    .await?;

    Ok(Json(outcome.into()))
}

/// `GET /products` - list durable catalog rows (debug aid).
async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let entries = state.catalog.list().await?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

/// `GET /health` - liveness probe against the database.
async fn health(State(state): State<AppState>) -> StatusCode {
    if state.db.health_check().await {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
