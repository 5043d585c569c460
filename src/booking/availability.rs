//! Slot enumeration and daily capacity checks.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use super::catalog::ScheduleConfig;
use super::models::{slot_time, Booking};

/// A bookable slot and whether it is already taken
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotAvailability {
    #[serde(with = "slot_time")]
    pub time: NaiveTime,
    pub booked: bool,
}

/// Availability summary for one calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub capacity: usize,
    pub booked_count: usize,
    pub capacity_reached: bool,
    pub slots: Vec<SlotAvailability>,
}

/// Every slot start from opening (inclusive) to closing (exclusive), ascending.
pub fn slot_times(schedule: &ScheduleConfig) -> Vec<NaiveTime> {
    let step = schedule.slot_minutes.max(1);
    let start = schedule.opening_hour * 60;
    let end = schedule.closing_hour.min(24) * 60;

    (start..end)
        .step_by(step as usize)
        .filter_map(|minute| NaiveTime::from_hms_opt(minute / 60, minute % 60, 0))
        .collect()
}

/// Bookings falling on `date`
pub fn bookings_on<'a>(
    existing: &'a [Booking],
    date: NaiveDate,
) -> impl Iterator<Item = &'a Booking> + 'a {
    existing.iter().filter(move |b| b.date() == date)
}

/// True once `date` holds as many bookings as the daily capacity
pub fn capacity_reached(schedule: &ScheduleConfig, existing: &[Booking], date: NaiveDate) -> bool {
    bookings_on(existing, date).count() >= schedule.slots_per_day
}

/// True when an existing booking on `date` starts at exactly `time`
pub fn slot_taken(existing: &[Booking], date: NaiveDate, time: NaiveTime) -> bool {
    bookings_on(existing, date).any(|b| b.time() == time)
}

/// The full slot list for `date`. Booked slots are flagged, never removed,
/// so the length depends only on the schedule.
pub fn available_time_slots(
    schedule: &ScheduleConfig,
    existing: &[Booking],
    date: NaiveDate,
) -> Vec<SlotAvailability> {
    let taken: Vec<NaiveTime> = bookings_on(existing, date).map(|b| b.time()).collect();

    slot_times(schedule)
        .into_iter()
        .map(|time| SlotAvailability {
            time,
            booked: taken.contains(&time),
        })
        .collect()
}

pub fn day_availability(
    schedule: &ScheduleConfig,
    existing: &[Booking],
    date: NaiveDate,
) -> DayAvailability {
    let booked_count = bookings_on(existing, date).count();

    DayAvailability {
        date,
        capacity: schedule.slots_per_day,
        booked_count,
        capacity_reached: booked_count >= schedule.slots_per_day,
        slots: available_time_slots(schedule, existing, date),
    }
}
