//! HTTP/JSON handlers for quotes, availability, bookings and the admin
//! dashboard.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Local;
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

use super::admin::{filter_bookings, BookingFilter};
use super::availability::DayAvailability;
use super::catalog::Catalog;
use super::models::{Booking, BookingRequest};
use super::requests::{AdminBookingsQuery, AvailabilityQuery, QuoteRequest};
use super::responses::{AdminBookingsResponse, QuoteResponse, ValidationResponse};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/catalog", get(catalog))
        .route("/api/quote", post(quote))
        .route("/api/availability", get(availability))
        .route("/api/bookings", post(create_booking))
        .route("/api/bookings/validate", post(validate_booking))
        .route("/api/admin/bookings", get(admin_bookings))
        .route("/api/admin/bookings/:id", delete(delete_booking))
        .route("/api/admin/bookings/:id/paid", post(toggle_paid))
}

async fn catalog(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.engine.catalog().clone())
}

async fn quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let breakdown = state.engine.quote(
        &request.service_id,
        request.size,
        &request.addons,
        request.location_type,
        request.mobile_zone.as_deref(),
    )?;

    Ok(Json(QuoteResponse::from_breakdown(
        &breakdown,
        &state.engine.catalog().currency,
    )))
}

async fn availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Json<DayAvailability> {
    let bookings = state.store.snapshot().await;
    Json(state.engine.day_availability(&bookings, query.date))
}

async fn validate_booking(
    State(state): State<AppState>,
    Json(request): Json<BookingRequest>,
) -> Json<ValidationResponse> {
    let bookings = state.store.snapshot().await;
    let errors = state.engine.validate_booking_request(&request, &bookings);

    Json(ValidationResponse {
        valid: errors.is_empty(),
        errors,
    })
}

async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<BookingRequest>,
) -> Result<(StatusCode, Json<Booking>), ApiError> {
    let engine = &state.engine;
    let booking = state
        .store
        .insert_with(|existing| {
            engine
                .create_booking(request, existing, None)
                .map_err(ApiError::from)
        })
        .await?;

    tracing::info!(
        "Booking {} created: {} on {} at {}, total {}",
        booking.id,
        booking.request.service_id,
        booking.date(),
        booking.time().format("%H:%M"),
        booking.total
    );

    Ok((StatusCode::CREATED, Json(booking)))
}

async fn admin_bookings(
    State(state): State<AppState>,
    Query(query): Query<AdminBookingsQuery>,
) -> Json<AdminBookingsResponse> {
    let bookings = state.store.snapshot().await;
    let filter = BookingFilter {
        query: query.q,
        upcoming_only: query.upcoming,
    };
    let now = Local::now().naive_local();

    let matched = filter_bookings(&bookings, &filter, now)
        .into_iter()
        .cloned()
        .collect();

    Json(AdminBookingsResponse {
        total_bookings: bookings.len(),
        bookings: matched,
    })
}

async fn toggle_paid(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, ApiError> {
    Ok(Json(state.store.toggle_paid(id).await?))
}

async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.store.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
