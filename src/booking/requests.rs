//! Request DTOs for booking API endpoints.
//!
//! Booking creation and validation take a `BookingRequest` body directly.

use chrono::NaiveDate;
use serde::Deserialize;

use super::catalog::VehicleSize;
use super::models::LocationMode;

/// Request to price a service selection
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub service_id: String,
    pub size: VehicleSize,
    #[serde(default)]
    pub addons: Vec<String>,
    #[serde(default)]
    pub location_type: LocationMode,
    #[serde(default)]
    pub mobile_zone: Option<String>,
}

/// Query for a day's slots
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
}

/// Query parameters for the admin booking list
#[derive(Debug, Deserialize)]
pub struct AdminBookingsQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_upcoming")]
    pub upcoming: bool,
}

fn default_upcoming() -> bool {
    true
}
