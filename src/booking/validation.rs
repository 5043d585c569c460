//! Booking request validation.
//!
//! Every rule is evaluated and every failure is reported, in a fixed order,
//! so the booking form can show all problems at once.

use std::sync::LazyLock;

use regex::Regex;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::availability::{capacity_reached, slot_taken, slot_times};
use super::catalog::ScheduleConfig;
use super::models::{Booking, BookingRequest, LocationMode};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[- +()0-9]{8,}$").expect("valid phone pattern"));
static POSTCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("valid postcode pattern"));

/// One violated booking rule. The message is shown to the customer as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Your full name is required.")]
    MissingName,

    #[error("A valid email is required.")]
    InvalidEmail,

    #[error("A valid phone number is required.")]
    InvalidPhone,

    #[error("Vehicle make/model is required.")]
    MissingVehicle,

    #[error("Street address is required for home service.")]
    MissingStreet,

    #[error("Suburb is required for home service.")]
    MissingSuburb,

    #[error("A 4-digit postcode is required for home service.")]
    InvalidPostcode,

    #[error("No availability on this day. Please pick another date.")]
    NoAvailability,

    #[error("Selected time is already booked.")]
    SlotTaken,

    #[error("Please choose one of the available time slots.")]
    InvalidTimeSlot,
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingName => "missing_name",
            ValidationError::InvalidEmail => "invalid_email",
            ValidationError::InvalidPhone => "invalid_phone",
            ValidationError::MissingVehicle => "missing_vehicle",
            ValidationError::MissingStreet => "missing_street",
            ValidationError::MissingSuburb => "missing_suburb",
            ValidationError::InvalidPostcode => "invalid_postcode",
            ValidationError::NoAvailability => "no_availability",
            ValidationError::SlotTaken => "slot_taken",
            ValidationError::InvalidTimeSlot => "invalid_time_slot",
        }
    }
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationError", 2)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Check a request against the contact, address and schedule rules.
///
/// Returns an empty list when the request can be booked.
pub fn validate_booking_request(
    schedule: &ScheduleConfig,
    request: &BookingRequest,
    existing: &[Booking],
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if request.customer.trim().is_empty() {
        errors.push(ValidationError::MissingName);
    }
    if !EMAIL_RE.is_match(&request.email) {
        errors.push(ValidationError::InvalidEmail);
    }
    if !PHONE_RE.is_match(&request.phone) {
        errors.push(ValidationError::InvalidPhone);
    }
    if request.vehicle.trim().is_empty() {
        errors.push(ValidationError::MissingVehicle);
    }

    if request.location_type == LocationMode::Mobile {
        if request.street.trim().is_empty() {
            errors.push(ValidationError::MissingStreet);
        }
        if request.suburb.trim().is_empty() {
            errors.push(ValidationError::MissingSuburb);
        }
        if !POSTCODE_RE.is_match(&request.postcode) {
            errors.push(ValidationError::InvalidPostcode);
        }
    }

    // Capacity and slot checks are independent: a full day reports both
    // when the requested time is also taken.
    if capacity_reached(schedule, existing, request.date) {
        errors.push(ValidationError::NoAvailability);
    }
    if slot_taken(existing, request.date, request.time) {
        errors.push(ValidationError::SlotTaken);
    }
    // Times off the slot grid would count toward capacity but never show
    // as booked in the slot list.
    if !slot_times(schedule).contains(&request.time) {
        errors.push(ValidationError::InvalidTimeSlot);
    }

    errors
}
