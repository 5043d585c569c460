//! Booking engine: the catalog-bound entry point for quotes, availability,
//! validation and booking creation.
//!
//! The engine is stateless. Callers pass the current booking snapshot and
//! remain responsible for storing whatever `create_booking` returns.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::availability::{self, DayAvailability, SlotAvailability};
use super::calculators::{self, QuoteBreakdown};
use super::catalog::{Catalog, VehicleSize};
use super::models::{Booking, BookingRequest, LocationMode};
use super::validation::{self, ValidationError};

/// Booking engine error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingError {
    #[error("Unknown service '{0}'")]
    UnknownService(String),

    #[error("Booking request is invalid ({} problem(s))", .0.len())]
    InvalidRequest(Vec<ValidationError>),
}

/// Quote and availability engine over an injected catalog
#[derive(Debug, Clone)]
pub struct BookingEngine {
    catalog: Arc<Catalog>,
}

impl BookingEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn compute_total(
        &self,
        service_id: &str,
        size: VehicleSize,
        addon_ids: &[String],
        location: LocationMode,
        zone_id: Option<&str>,
    ) -> Result<Decimal, BookingError> {
        calculators::compute_total(&self.catalog, service_id, size, addon_ids, location, zone_id)
    }

    pub fn quote(
        &self,
        service_id: &str,
        size: VehicleSize,
        addon_ids: &[String],
        location: LocationMode,
        zone_id: Option<&str>,
    ) -> Result<QuoteBreakdown, BookingError> {
        calculators::quote(&self.catalog, service_id, size, addon_ids, location, zone_id)
    }

    /// Quote for a full booking request
    pub fn quote_request(&self, request: &BookingRequest) -> Result<QuoteBreakdown, BookingError> {
        self.quote(
            &request.service_id,
            request.size,
            &request.addons,
            request.location_type,
            request.mobile_zone.as_deref(),
        )
    }

    pub fn available_time_slots(&self, existing: &[Booking], date: NaiveDate) -> Vec<SlotAvailability> {
        availability::available_time_slots(&self.catalog.schedule, existing, date)
    }

    pub fn day_availability(&self, existing: &[Booking], date: NaiveDate) -> DayAvailability {
        availability::day_availability(&self.catalog.schedule, existing, date)
    }

    pub fn validate_booking_request(
        &self,
        request: &BookingRequest,
        existing: &[Booking],
    ) -> Vec<ValidationError> {
        validation::validate_booking_request(&self.catalog.schedule, request, existing)
    }

    /// Validate the request and build a new booking from it.
    ///
    /// The booking collection is not modified.
    ///
    /// # Arguments
    /// * `request` - Submitted booking form
    /// * `existing` - Current booking snapshot
    /// * `as_of` - Creation timestamp (default: now)
    pub fn create_booking(
        &self,
        request: BookingRequest,
        existing: &[Booking],
        as_of: Option<DateTime<Utc>>,
    ) -> Result<Booking, BookingError> {
        let errors = self.validate_booking_request(&request, existing);
        if !errors.is_empty() {
            tracing::debug!("Rejected booking for {}: {:?}", request.date, errors);
            return Err(BookingError::InvalidRequest(errors));
        }

        let mut request = request;
        request.addons = dedup_ids(request.addons);

        let quote = self.quote_request(&request)?;

        Ok(Booking {
            id: Uuid::new_v4(),
            created_at: as_of.unwrap_or_else(Utc::now),
            request,
            total: quote.total,
            travel_fee: quote.travel_fee,
            paid: false,
        })
    }
}

/// Drop repeated ids, keeping first-occurrence order
fn dedup_ids(ids: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::test_support::{booking_at, valid_request};
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn engine() -> BookingEngine {
        BookingEngine::new(Arc::new(Catalog::default()))
    }

    #[test]
    fn test_booking_error_display() {
        let err = BookingError::UnknownService("platinum".to_string());
        assert!(err.to_string().contains("platinum"));

        let err = BookingError::InvalidRequest(vec![ValidationError::MissingName, ValidationError::SlotTaken]);
        assert!(err.to_string().contains("2 problem(s)"));
    }

    #[test]
    fn test_create_booking_computes_total_and_fee() {
        let as_of = Utc.with_ymd_and_hms(2026, 10, 16, 8, 0, 0).unwrap();
        let booking = engine().create_booking(valid_request(), &[], Some(as_of)).unwrap();

        assert_eq!(booking.total, dec!(434));
        assert_eq!(booking.travel_fee, dec!(45));
        assert_eq!(booking.created_at, as_of);
        assert!(!booking.paid);
        assert_eq!(booking.request.customer, "John Doe");
    }

    #[test]
    fn test_create_booking_total_invariant() {
        let engine = engine();
        let catalog = engine.catalog().clone();

        for location in [LocationMode::Studio, LocationMode::Mobile] {
            for size in VehicleSize::ALL {
                let mut request = valid_request();
                request.location_type = location;
                request.size = size;
                request.addons = vec!["headlights".to_string(), "interior".to_string()];

                let booking = engine.create_booking(request, &[], None).unwrap();
                let base = catalog.service("signature").unwrap().base_price(size);
                let addons = dec!(80) + dec!(70);
                assert_eq!(booking.total, base + addons + booking.travel_fee);

                if location == LocationMode::Studio {
                    assert_eq!(booking.travel_fee, Decimal::ZERO);
                } else {
                    assert_eq!(booking.travel_fee, dec!(45));
                }
            }
        }
    }

    #[test]
    fn test_create_booking_rejects_invalid_request() {
        let mut request = valid_request();
        request.customer.clear();
        let existing = vec![booking_at("2026-11-02", "09:30")];

        let err = engine().create_booking(request, &existing, None).unwrap_err();
        assert_eq!(
            err,
            BookingError::InvalidRequest(vec![ValidationError::MissingName, ValidationError::SlotTaken])
        );
    }

    #[test]
    fn test_create_booking_unknown_service() {
        let mut request = valid_request();
        request.service_id = "platinum".to_string();

        let err = engine().create_booking(request, &[], None).unwrap_err();
        assert_eq!(err, BookingError::UnknownService("platinum".to_string()));
    }

    #[test]
    fn test_create_booking_dedups_addons() {
        let mut request = valid_request();
        request.addons = vec!["engine".to_string(), "pet".to_string(), "engine".to_string()];

        let booking = engine().create_booking(request, &[], None).unwrap();
        assert_eq!(booking.request.addons, vec!["engine".to_string(), "pet".to_string()]);
        assert_eq!(booking.total, dec!(434));
    }

    #[test]
    fn test_create_booking_assigns_unique_ids() {
        let engine = engine();
        let a = engine.create_booking(valid_request(), &[], None).unwrap();
        let b = engine.create_booking(valid_request(), &[], None).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_engine_uses_injected_schedule() {
        let mut catalog = Catalog::default();
        catalog.schedule.slots_per_day = 1;
        let engine = BookingEngine::new(Arc::new(catalog));

        let existing = vec![booking_at("2026-11-02", "15:00")];
        let errors = engine.validate_booking_request(&valid_request(), &existing);
        assert_eq!(errors, vec![ValidationError::NoAvailability]);
        assert_eq!(engine.available_time_slots(&existing, valid_request().date).len(), 16);
    }
}
