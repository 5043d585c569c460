//! Admin dashboard queries over a booking snapshot.

use chrono::NaiveDateTime;

use super::models::Booking;

/// Dashboard search options
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    /// Case-insensitive substring over contact, vehicle and address fields
    pub query: String,
    /// Hide bookings that started before `now`
    pub upcoming_only: bool,
}

/// Bookings matching `filter`, soonest first.
pub fn filter_bookings<'a>(
    bookings: &'a [Booking],
    filter: &BookingFilter,
    now: NaiveDateTime,
) -> Vec<&'a Booking> {
    let query = filter.query.to_lowercase();

    let mut matched: Vec<&Booking> = bookings
        .iter()
        .filter(|b| !filter.upcoming_only || b.starts_at() >= now)
        .filter(|b| b.search_text().contains(&query))
        .collect();

    matched.sort_by_key(|b| b.starts_at());
    matched
}
