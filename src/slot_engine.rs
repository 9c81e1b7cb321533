//! Pure slot derivation. All functions compute from the availability
//! template plus the current booking records and never mutate either.

use crate::types::{Booking, CapacityInfo, DayAvailability, Slot, WeeklyAvailability};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use tracing::warn;

const SLOT_MINUTES: u32 = 60;

/// The candidate booking times of a single day: one per whole hour stepping
/// from `start`, keeping only sessions that end at or before `end`.
/// A disabled day or an inverted window yields no times.
pub fn offered_times(day: &DayAvailability) -> Vec<NaiveTime> {
    if !day.enabled || day.start >= day.end {
        return Vec::new();
    }

    let end_minute = day.end.num_seconds_from_midnight() / 60;
    let mut cursor = day.start.num_seconds_from_midnight() / 60;
    let mut times = Vec::new();
    while cursor + SLOT_MINUTES <= end_minute {
        if let Some(time) = NaiveTime::from_hms_opt(cursor / 60, cursor % 60, 0) {
            times.push(time);
        }
        cursor += SLOT_MINUTES;
    }
    times
}

fn booked_count(date: NaiveDate, time: NaiveTime, bookings: &[Booking]) -> u32 {
    bookings
        .iter()
        .filter(|booking| booking.slot.date() == date && booking.slot.time() == time)
        .count() as u32
}

/// Bookable slots for `date`, in ascending time order. Hours at full
/// capacity are omitted entirely rather than reported as full.
pub fn available_slots(
    date: NaiveDate,
    availability: &WeeklyAvailability,
    bookings: &[Booking],
    max_slots_per_time: u32,
) -> Vec<Slot> {
    let day = availability.day(date.weekday());

    offered_times(day)
        .into_iter()
        .filter_map(|time| {
            let booked = booked_count(date, time, bookings);
            (booked < max_slots_per_time).then_some(Slot {
                time,
                available_spots: max_slots_per_time - booked,
                total_spots: max_slots_per_time,
            })
        })
        .collect()
}

/// The re-validation gate run immediately before a booking is admitted.
pub fn is_slot_available(
    date: NaiveDate,
    time: NaiveTime,
    bookings: &[Booking],
    max_slots_per_time: u32,
) -> bool {
    booked_count(date, time, bookings) < max_slots_per_time
}

/// Capacity snapshot for one slot. An overbooked count means an external
/// caller bypassed validation; it is logged and clamped, never a panic.
pub fn slot_capacity(
    date: NaiveDate,
    time: NaiveTime,
    bookings: &[Booking],
    max_slots_per_time: u32,
) -> CapacityInfo {
    let booked = booked_count(date, time, bookings);
    if booked > max_slots_per_time {
        warn!(
            %date,
            %time,
            booked,
            max_slots_per_time,
            "slot is overbooked; capacity invariant violated"
        );
    }
    let available = max_slots_per_time.saturating_sub(booked);

    CapacityInfo {
        booked,
        available,
        total: max_slots_per_time,
        is_full: available == 0,
    }
}
