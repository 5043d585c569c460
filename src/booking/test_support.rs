//! Fixtures shared by the unit tests.

use chrono::{NaiveDate, NaiveTime, Utc};
use rust_decimal_macros::dec;
use uuid::Uuid;

use super::catalog::VehicleSize;
use super::models::{Booking, BookingRequest, LocationMode};

/// Signature detail, medium car, pet + engine, home service in zone B
/// on 2026-11-02 at 09:30. Quotes at 434.
pub fn valid_request() -> BookingRequest {
    BookingRequest {
        customer: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        phone: "0400 000 111".to_string(),
        vehicle: "Mazda CX-5".to_string(),
        size: VehicleSize::Medium,
        service_id: "signature".to_string(),
        addons: vec!["pet".to_string(), "engine".to_string()],
        location_type: LocationMode::Mobile,
        mobile_zone: Some("B".to_string()),
        street: "12 River St".to_string(),
        suburb: "Brisbane".to_string(),
        postcode: "4000".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
        time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        notes: String::new(),
    }
}

/// A stored studio booking at `date` (`YYYY-MM-DD`) and `time` (`HH:MM`)
pub fn booking_at(date: &str, time: &str) -> Booking {
    let mut request = valid_request();
    request.location_type = LocationMode::Studio;
    request.mobile_zone = None;
    request.date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    request.time = NaiveTime::parse_from_str(time, "%H:%M").unwrap();

    Booking {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        request,
        total: dec!(389),
        travel_fee: dec!(0),
        paid: false,
    }
}
