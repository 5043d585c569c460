//! Olympus Detailing booking service.
//!
//! Quotes, slot availability, booking validation and storage for a
//! car-detailing studio, served over HTTP/JSON with a printable
//! confirmation page.

pub mod booking;
pub mod config;
pub mod error;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::booking::BookingEngine;
use crate::store::BookingStore;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub engine: BookingEngine,
    pub store: Arc<BookingStore>,
}

impl AppState {
    pub fn new(engine: BookingEngine, store: BookingStore) -> Self {
        Self {
            engine,
            store: Arc::new(store),
        }
    }
}

/// Build the application router
pub fn app(state: AppState, cors_allow_any: bool) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .route("/bookings/:id/confirmation", get(routes::confirmation::show))
        .merge(booking::router())
        .layer(TraceLayer::new_for_http());

    let router = if cors_allow_any {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
