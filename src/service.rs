use crate::backend::BookingBackend;
use crate::configuration::Configuration;
use crate::error::BookingError;
use crate::notification::{NotificationGateway, ProviderInfo};
use crate::slot_engine;
use crate::types::{
    Booking, BookingConfirmation, CapacityInfo, ClientInfo, DayAvailability, ExperienceLevel,
    Slot, WeeklyAvailability,
};
use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime, Utc, Weekday};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, warn};
use uuid::Uuid;
use validator::ValidateEmail;

lazy_static! {
    static ref PHONE_RE: Regex = Regex::new(r"^[0-9+()\-. ]{7,20}$").unwrap();
}

/// Orchestrates the booking lifecycle: validate, admit, persist, notify.
/// The capacity re-check and the append run inside the backend's critical
/// section; notification is invoked only after that lock is released.
#[derive(Debug, Clone)]
pub struct BookingService<B: BookingBackend, N: NotificationGateway> {
    backend: B,
    notifier: N,
    provider: ProviderInfo,
    max_slots_per_time: u32,
    max_booking_days_ahead: i64,
}

impl<B: BookingBackend, N: NotificationGateway> BookingService<B, N> {
    pub fn new<C: Configuration>(backend: B, notifier: N, configuration: &C) -> Self {
        Self {
            backend,
            notifier,
            provider: configuration.provider(),
            max_slots_per_time: configuration.max_slots_per_time(),
            max_booking_days_ahead: configuration.max_booking_days_ahead(),
        }
    }

    pub fn available_slots(&self, date: NaiveDate) -> Vec<Slot> {
        slot_engine::available_slots(
            date,
            &self.backend.availability(),
            &self.backend.bookings(),
            self.max_slots_per_time,
        )
    }

    pub fn slot_capacity(&self, date: NaiveDate, time: NaiveTime) -> CapacityInfo {
        slot_engine::slot_capacity(date, time, &self.backend.bookings(), self.max_slots_per_time)
    }

    pub fn submit_booking(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        client: ClientInfo,
        experience_level: ExperienceLevel,
        special_requests: Option<String>,
    ) -> Result<BookingConfirmation, BookingError> {
        let today = Local::now().date_naive();
        if date < today || date > today + Duration::days(self.max_booking_days_ahead) {
            return Err(BookingError::OutOfWindow);
        }

        // The slot list the client saw may be stale; the offered-grid check
        // here and the capacity re-check inside `admit` both run against
        // current state.
        let availability = self.backend.availability();
        let day = availability.day(date.weekday());
        if !slot_engine::offered_times(day).contains(&time) {
            return Err(BookingError::SlotNotOffered);
        }

        validate_client(&client)?;

        let booking = Booking {
            id: Uuid::new_v4(),
            client_name: client.name,
            client_email: client.email,
            client_phone: client.phone,
            slot: date.and_time(time),
            experience_level,
            special_requests: special_requests.filter(|text| !text.trim().is_empty()),
            created_at: Utc::now(),
        };
        let booking = self.backend.admit(booking, self.max_slots_per_time)?;
        info!(booking_id = %booking.id, slot = %booking.slot, "booking admitted");

        let notification_sent = self.notifier.notify(&booking, &self.provider);
        if !notification_sent {
            warn!(booking_id = %booking.id, "confirmation notification failed; booking stands");
        }

        Ok(BookingConfirmation {
            booking,
            notification_sent,
        })
    }

    pub fn cancel_booking(&self, id: Uuid) -> Result<(), BookingError> {
        self.backend.cancel(id)?;
        info!(booking_id = %id, "booking cancelled");
        Ok(())
    }

    pub fn update_availability(
        &self,
        weekday: Weekday,
        enabled: bool,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<(), BookingError> {
        if enabled && start >= end {
            return Err(BookingError::InvalidWindow);
        }
        // Existing bookings outside the new window are honored; only future
        // slot queries change.
        self.backend.update_day(weekday, DayAvailability { enabled, start, end });
        Ok(())
    }

    pub fn availability(&self) -> WeeklyAvailability {
        self.backend.availability()
    }

    pub fn all_bookings(&self) -> Vec<Booking> {
        self.backend.bookings()
    }

    pub fn upcoming_bookings(&self, days_ahead: i64) -> Vec<Booking> {
        let now = Local::now().naive_local();
        let until = now + Duration::days(days_ahead);
        self.backend
            .bookings()
            .into_iter()
            .filter(|booking| booking.slot >= now && booking.slot <= until)
            .collect()
    }
}

fn validate_client(client: &ClientInfo) -> Result<(), BookingError> {
    if client.name.trim().is_empty() {
        return Err(BookingError::MissingField("name"));
    }
    if !client.email.validate_email() {
        return Err(BookingError::MissingField("email"));
    }
    if !PHONE_RE.is_match(client.phone.trim()) {
        return Err(BookingError::MissingField("phone"));
    }
    Ok(())
}
