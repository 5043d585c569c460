//! Printable booking confirmation page

use askama::Template;
use axum::{
    extract::{Path, State},
    response::Html,
};
use uuid::Uuid;

use crate::booking::{format_money, Booking, Catalog, LocationMode};
use crate::error::{AppError, Result};
use crate::AppState;

/// Booking confirmation template
#[derive(Template)]
#[template(path = "booking/confirmation.html")]
struct ConfirmationTemplate {
    booking_id: String,
    customer: String,
    email: String,
    phone: String,
    service_name: String,
    vehicle: String,
    size: String,
    location: String,
    address: String,
    is_mobile: bool,
    date: String,
    time: String,
    enhancements: String,
    notes: String,
    has_notes: bool,
    travel_fee: String,
    total: String,
    paid: bool,
}

impl ConfirmationTemplate {
    fn new(booking: &Booking, catalog: &Catalog) -> Self {
        let request = &booking.request;
        let is_mobile = request.location_type == LocationMode::Mobile;

        let service_name = catalog
            .service(&request.service_id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| request.service_id.clone());

        let location = if is_mobile {
            let zone_label = request
                .mobile_zone
                .as_deref()
                .and_then(|id| catalog.zone(id))
                .map(|z| z.label.as_str())
                .unwrap_or("");
            format!("Home service • {}", zone_label)
        } else {
            "Studio".to_string()
        };

        let enhancements = if request.addons.is_empty() {
            "None".to_string()
        } else {
            request
                .addons
                .iter()
                .filter_map(|id| catalog.addon(id))
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        Self {
            booking_id: booking.id.to_string(),
            customer: request.customer.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            service_name,
            vehicle: request.vehicle.clone(),
            size: request.size.as_str().to_uppercase(),
            location,
            address: format!("{}, {} {}", request.street, request.suburb, request.postcode),
            is_mobile,
            date: request.date.format("%Y-%m-%d").to_string(),
            time: request.time.format("%H:%M").to_string(),
            enhancements,
            has_notes: !request.notes.trim().is_empty(),
            notes: request.notes.clone(),
            travel_fee: format_money(booking.travel_fee),
            total: format_money(booking.total),
            paid: booking.paid,
        }
    }
}

/// Confirmation page for a stored booking
pub async fn show(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Html<String>> {
    let booking = state.store.get(id).await.ok_or(AppError::NotFound)?;
    let template = ConfirmationTemplate::new(&booking, state.engine.catalog());

    Ok(Html(template.render()?))
}
