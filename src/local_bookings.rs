use crate::backend::BookingBackend;
use crate::error::BookingError;
use crate::slot_engine;
use crate::types::{Booking, DayAvailability, WeeklyAvailability};
use chrono::Weekday;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Debug, Default)]
struct SchedulerState {
    availability: WeeklyAvailability,
    bookings: Vec<Booking>,
}

/// In-memory backend. State is gone when the process ends; use
/// `FileBookings` for a durable snapshot.
#[derive(Debug, Clone, Default)]
pub struct LocalBookings {
    state: Arc<Mutex<SchedulerState>>,
}

impl BookingBackend for LocalBookings {
    fn availability(&self) -> WeeklyAvailability {
        self.state.lock().unwrap().availability.clone()
    }

    fn update_day(&self, weekday: Weekday, day: DayAvailability) {
        self.state.lock().unwrap().availability.set_day(weekday, day);
    }

    fn bookings(&self) -> Vec<Booking> {
        let mut bookings = self.state.lock().unwrap().bookings.clone();
        bookings.sort_unstable_by_key(|booking| booking.slot);
        bookings
    }

    fn admit(&self, booking: Booking, max_slots_per_time: u32) -> Result<Booking, BookingError> {
        let mut state = self.state.lock().unwrap();
        if !slot_engine::is_slot_available(
            booking.slot.date(),
            booking.slot.time(),
            &state.bookings,
            max_slots_per_time,
        ) {
            return Err(BookingError::SlotFull);
        }
        state.bookings.push(booking.clone());
        Ok(booking)
    }

    fn cancel(&self, id: Uuid) -> Result<(), BookingError> {
        let mut state = self.state.lock().unwrap();
        let before = state.bookings.len();
        state.bookings.retain(|booking| booking.id != id);
        if state.bookings.len() == before {
            return Err(BookingError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testutils::{booking_at, monday};
    use std::sync::Barrier;
    use std::thread;

    #[test]
    fn admit_until_capacity_then_reject() {
        let backend = LocalBookings::default();

        for _ in 0..3 {
            backend.admit(booking_at(monday(), 9), 3).unwrap();
        }
        let err = backend.admit(booking_at(monday(), 9), 3).unwrap_err();

        assert_eq!(err, BookingError::SlotFull);
        assert_eq!(backend.bookings().len(), 3);
    }

    #[test]
    fn other_slots_unaffected_by_full_hour() {
        let backend = LocalBookings::default();

        for _ in 0..3 {
            backend.admit(booking_at(monday(), 9), 3).unwrap();
        }
        backend.admit(booking_at(monday(), 10), 3).unwrap();

        assert_eq!(backend.bookings().len(), 4);
    }

    #[test]
    fn cancel_twice_reports_not_found() {
        let backend = LocalBookings::default();
        let booking = backend.admit(booking_at(monday(), 9), 3).unwrap();

        backend.cancel(booking.id).unwrap();
        let err = backend.cancel(booking.id).unwrap_err();

        assert_eq!(err, BookingError::NotFound);
        assert!(backend.bookings().is_empty());
    }

    #[test]
    fn cancel_unknown_id_reports_not_found() {
        let backend = LocalBookings::default();
        assert_eq!(backend.cancel(Uuid::new_v4()).unwrap_err(), BookingError::NotFound);
    }

    #[test]
    fn bookings_are_ordered_by_slot_datetime() {
        let backend = LocalBookings::default();
        backend.admit(booking_at(monday(), 14), 3).unwrap();
        backend.admit(booking_at(monday(), 9), 3).unwrap();
        backend.admit(booking_at(monday(), 11), 3).unwrap();

        let hours: Vec<u32> = backend
            .bookings()
            .iter()
            .map(|booking| chrono::Timelike::hour(&booking.slot.time()))
            .collect();
        assert_eq!(hours, vec![9, 11, 14]);
    }

    #[test]
    fn concurrent_admissions_never_exceed_capacity() {
        const SUBMISSIONS: usize = 16;
        const CAPACITY: u32 = 3;

        let backend = LocalBookings::default();
        let barrier = Arc::new(Barrier::new(SUBMISSIONS));

        let handles: Vec<_> = (0..SUBMISSIONS)
            .map(|_| {
                let backend = backend.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    backend.admit(booking_at(monday(), 9), CAPACITY)
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|handle| handle.join().unwrap()).collect();

        let admitted = results.iter().filter(|result| result.is_ok()).count();
        let rejected = results
            .iter()
            .filter(|result| matches!(result, Err(BookingError::SlotFull)))
            .count();

        assert_eq!(admitted, CAPACITY as usize);
        assert_eq!(rejected, SUBMISSIONS - CAPACITY as usize);
        assert_eq!(backend.bookings().len(), CAPACITY as usize);
    }

    #[test]
    fn update_day_replaces_single_weekday() {
        let backend = LocalBookings::default();
        let new_window = DayAvailability {
            enabled: true,
            start: chrono::NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end: chrono::NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        };

        backend.update_day(Weekday::Mon, new_window);

        let availability = backend.availability();
        assert_eq!(availability.monday, new_window);
        assert_eq!(availability.tuesday, WeeklyAvailability::default().tuesday);
    }
}
