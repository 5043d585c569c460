//! Response DTOs for booking API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::QuoteBreakdown;
use super::models::Booking;
use super::validation::ValidationError;

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal, currency: &str) -> Self {
        Self {
            amount,
            currency: currency.to_string(),
        }
    }
}

/// Response for a price quote
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub base_price: MoneyResponse,
    pub addons_total: MoneyResponse,
    pub travel_fee: MoneyResponse,
    pub total: MoneyResponse,
}

impl QuoteResponse {
    pub fn from_breakdown(quote: &QuoteBreakdown, currency: &str) -> Self {
        Self {
            base_price: MoneyResponse::new(quote.base_price, currency),
            addons_total: MoneyResponse::new(quote.addons_total, currency),
            travel_fee: MoneyResponse::new(quote.travel_fee, currency),
            total: MoneyResponse::new(quote.total, currency),
        }
    }
}

/// Response for a dry-run validation
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

/// Response for the admin booking list
#[derive(Debug, Serialize)]
pub struct AdminBookingsResponse {
    pub total_bookings: usize,
    pub bookings: Vec<Booking>,
}

/// Generic booking API error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
