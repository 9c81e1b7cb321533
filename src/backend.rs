use crate::error::BookingError;
use crate::types::{Booking, DayAvailability, WeeklyAvailability};
use chrono::Weekday;
use uuid::Uuid;

/// Storage seam for the availability template and the booking records.
pub trait BookingBackend: Clone + Send + Sync + 'static {
    fn availability(&self) -> WeeklyAvailability;
    fn update_day(&self, weekday: Weekday, day: DayAvailability);
    /// All bookings, ordered by slot datetime.
    fn bookings(&self) -> Vec<Booking>;
    /// Re-checks slot capacity and appends the booking as a single critical
    /// section. Two racing admissions for the same slot must never jointly
    /// exceed `max_slots_per_time`.
    fn admit(&self, booking: Booking, max_slots_per_time: u32) -> Result<Booking, BookingError>;
    fn cancel(&self, id: Uuid) -> Result<(), BookingError>;
}
