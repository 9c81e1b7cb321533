use crate::configuration::Configuration;
use crate::notification::{NotificationGateway, ProviderInfo};
use crate::types::{Booking, ClientInfo, ExperienceLevel};
use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime, Utc, Weekday};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

pub const ADMIN_PASSWORD: &str = "123";

/// Notification double: counts invocations and fails on demand.
#[derive(Debug, Clone)]
pub struct CountingNotifier {
    pub success: Arc<AtomicBool>,
    pub calls: Arc<AtomicU64>,
}

impl CountingNotifier {
    pub fn new() -> Self {
        Self {
            success: Arc::new(AtomicBool::new(true)),
            calls: Arc::new(AtomicU64::default()),
        }
    }
}

impl NotificationGateway for CountingNotifier {
    fn notify(&self, _booking: &Booking, _provider: &ProviderInfo) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.success.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestConfiguration;

impl Configuration for TestConfiguration {
    fn port(&self) -> u16 {
        0
    }

    fn admin_password(&self) -> String {
        ADMIN_PASSWORD.into()
    }

    fn provider(&self) -> ProviderInfo {
        provider()
    }

    fn max_slots_per_time(&self) -> u32 {
        3
    }

    fn max_booking_days_ahead(&self) -> i64 {
        30
    }

    fn data_file(&self) -> Option<PathBuf> {
        None
    }
}

pub fn provider() -> ProviderInfo {
    ProviderInfo {
        name: "Coach Mike Johnson".into(),
        email: "coach@pitchinglessons.com".into(),
        phone: "(555) 123-4567".into(),
        rate: "$75 per hour session".into(),
        payment_note: "Cash or Venmo accepted".into(),
    }
}

pub fn client() -> ClientInfo {
    ClientInfo {
        name: "Sam Carter".into(),
        email: "sam.carter@example.com".into(),
        phone: "(555) 987-6543".into(),
    }
}

/// A fixed Monday, for tests that are independent of the current date.
pub fn monday() -> NaiveDate {
    NaiveDate::from_isoywd_opt(2030, 10, Weekday::Mon).unwrap()
}

/// The next occurrence of `weekday`, starting tomorrow. Always inside the
/// default booking horizon.
pub fn next_weekday(weekday: Weekday) -> NaiveDate {
    let mut date = Local::now().date_naive() + Duration::days(1);
    while date.weekday() != weekday {
        date += Duration::days(1);
    }
    date
}

pub fn booking_at(date: NaiveDate, hour: u32) -> Booking {
    Booking {
        id: Uuid::new_v4(),
        client_name: "Sam Carter".into(),
        client_email: "sam.carter@example.com".into(),
        client_phone: "(555) 987-6543".into(),
        slot: date.and_time(NaiveTime::from_hms_opt(hour, 0, 0).unwrap()),
        experience_level: ExperienceLevel::Beginner,
        special_requests: Some("fastball mechanics".into()),
        created_at: Utc::now(),
    }
}
