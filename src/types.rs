use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    #[serde(rename = "High School")]
    HighSchool,
    College,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub slot: NaiveDateTime,
    pub experience_level: ExperienceLevel,
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A bookable hour on a given date. Derived on every query, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub time: NaiveTime,
    pub available_spots: u32,
    pub total_spots: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityInfo {
    pub booked: u32,
    pub available: u32,
    pub total: u32,
    pub is_full: bool,
}

/// Outcome of a successful booking. `notification_sent` is best-effort:
/// a failed confirmation email does not undo the booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub booking: Booking,
    pub notification_sent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub enabled: bool,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAvailability {
    pub monday: DayAvailability,
    pub tuesday: DayAvailability,
    pub wednesday: DayAvailability,
    pub thursday: DayAvailability,
    pub friday: DayAvailability,
    pub saturday: DayAvailability,
    pub sunday: DayAvailability,
}

impl WeeklyAvailability {
    pub fn day(&self, weekday: Weekday) -> &DayAvailability {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    pub fn set_day(&mut self, weekday: Weekday, day: DayAvailability) {
        match weekday {
            Weekday::Mon => self.monday = day,
            Weekday::Tue => self.tuesday = day,
            Weekday::Wed => self.wednesday = day,
            Weekday::Thu => self.thursday = day,
            Weekday::Fri => self.friday = day,
            Weekday::Sat => self.saturday = day,
            Weekday::Sun => self.sunday = day,
        }
    }
}

fn window(enabled: bool, start: u32, end: u32) -> DayAvailability {
    DayAvailability {
        enabled,
        start: NaiveTime::from_hms_opt(start, 0, 0).expect("valid hour"),
        end: NaiveTime::from_hms_opt(end, 0, 0).expect("valid hour"),
    }
}

impl Default for WeeklyAvailability {
    fn default() -> Self {
        Self {
            monday: window(true, 9, 17),
            tuesday: window(true, 9, 17),
            wednesday: window(true, 9, 17),
            thursday: window(true, 9, 17),
            friday: window(true, 9, 17),
            saturday: window(true, 8, 16),
            sunday: window(false, 10, 14),
        }
    }
}
