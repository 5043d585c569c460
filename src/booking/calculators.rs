//! Core pricing calculation functions.
//!
//! Pure functions for quote math - no storage access.

use std::collections::HashSet;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::catalog::{Catalog, VehicleSize};
use super::models::LocationMode;
use super::services::BookingError;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use olympus_detailing::booking::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Format an amount for display, e.g. `$1,099.00`.
pub fn format_money(amount: Decimal) -> String {
    let rounded = round_money(amount, 2);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{}", sign, grouped, cents)
}

/// Price components of a quote
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteBreakdown {
    pub base_price: Decimal,
    pub addons_total: Decimal,
    pub travel_fee: Decimal,
    pub total: Decimal,
}

/// Sum add-on prices. Unknown ids contribute nothing and repeated ids count once.
pub fn addons_total(catalog: &Catalog, addon_ids: &[String]) -> Decimal {
    let mut seen = HashSet::new();
    addon_ids
        .iter()
        .filter(|id| seen.insert(id.as_str()))
        .filter_map(|id| catalog.addon(id))
        .map(|addon| addon.price)
        .sum()
}

/// Travel fee for the location. Studio visits are free; an unknown or
/// missing zone prices at zero.
pub fn travel_fee(catalog: &Catalog, location: LocationMode, zone_id: Option<&str>) -> Decimal {
    match location {
        LocationMode::Studio => Decimal::ZERO,
        LocationMode::Mobile => zone_id
            .and_then(|id| catalog.zone(id))
            .map(|zone| zone.fee)
            .unwrap_or(Decimal::ZERO),
    }
}

/// Break a quote into base price, add-ons and travel fee.
pub fn quote(
    catalog: &Catalog,
    service_id: &str,
    size: VehicleSize,
    addon_ids: &[String],
    location: LocationMode,
    zone_id: Option<&str>,
) -> Result<QuoteBreakdown, BookingError> {
    let service = catalog
        .service(service_id)
        .ok_or_else(|| BookingError::UnknownService(service_id.to_string()))?;

    let base_price = service.base_price(size);
    let addons_total = addons_total(catalog, addon_ids);
    let travel_fee = travel_fee(catalog, location, zone_id);

    Ok(QuoteBreakdown {
        base_price,
        addons_total,
        travel_fee,
        total: base_price + addons_total + travel_fee,
    })
}

/// Total price: base + add-ons + travel fee.
pub fn compute_total(
    catalog: &Catalog,
    service_id: &str,
    size: VehicleSize,
    addon_ids: &[String],
    location: LocationMode,
    zone_id: Option<&str>,
) -> Result<Decimal, BookingError> {
    quote(catalog, service_id, size, addon_ids, location, zone_id).map(|q| q.total)
}
