//! Application state and HTTP router assembly.

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::{handlers, services::credit_service::CreditService};

/// Shared state injected into every handler.
///
/// Handlers hold the service as a trait object so the HTTP layer never
/// depends on a concrete storage backend.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn CreditService>,
}

/// Build the HTTP router.
///
/// Static segments (`/credits/payment`, `/credits/customer/..`) are
/// matched before the `{id}` captures by axum's router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/credits", get(handlers::credits::list_credits))
        .route("/credits", post(handlers::credits::create_credit))
        .route("/credits/{id}", get(handlers::credits::get_credit))
        .route("/credits/{id}", put(handlers::credits::update_credit))
        .route("/credits/{id}", delete(handlers::credits::delete_credit))
        .route(
            "/credits/customer/{customer_id}",
            get(handlers::credits::list_credits_by_customer),
        )
        .route(
            "/credits/{id}/customer/{customer_id}",
            get(handlers::credits::credit_belongs_to_customer),
        )
        .route("/credits/payment", post(handlers::credits::make_payment))
        .route(
            "/credits/{id}/consumption",
            post(handlers::credits::charge_consumption),
        )
        .route(
            "/credits/{id}/transaction",
            post(handlers::credits::transaction),
        )
        .route(
            "/credits/customer/{customer_id}/debt",
            get(handlers::credits::list_customer_debt),
        )
        // Add tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
