//! Quote and availability engine for detailing bookings.
//!
//! Prices a service selection, enumerates half-hour slots, validates
//! booking requests against the current collection and builds new
//! bookings. Exposed over HTTP/JSON by `routes`.

pub mod admin;
pub mod availability;
pub mod calculators;
pub mod catalog;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used items
pub use calculators::{format_money, round_money, QuoteBreakdown};
pub use catalog::{Catalog, CatalogError, VehicleSize};
pub use models::{Booking, BookingRequest, LocationMode};
pub use routes::router;
pub use services::{BookingEngine, BookingError};
pub use validation::ValidationError;
