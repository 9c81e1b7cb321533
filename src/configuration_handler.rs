use crate::configuration::Configuration;
use crate::notification::ProviderInfo;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(about = "Single-provider lesson scheduling service")]
pub struct ConfigurationHandler {
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    #[arg(long, env = "ADMIN_PASSWORD", default_value = "123")]
    admin_password: String,

    #[arg(long, env = "PROVIDER_NAME", default_value = "Coach Mike Johnson")]
    provider_name: String,

    #[arg(long, env = "PROVIDER_EMAIL", default_value = "coach@pitchinglessons.com")]
    provider_email: String,

    #[arg(long, env = "PROVIDER_PHONE", default_value = "(555) 123-4567")]
    provider_phone: String,

    #[arg(long, env = "PROVIDER_RATE", default_value = "$75 per hour session")]
    provider_rate: String,

    #[arg(long, env = "PAYMENT_NOTE", default_value = "Cash or Venmo accepted")]
    payment_note: String,

    /// Group lesson size: bookings allowed per time slot.
    #[arg(long, env = "MAX_SLOTS_PER_TIME", default_value_t = 3)]
    max_slots_per_time: u32,

    /// Booking horizon in days.
    #[arg(long, env = "MAX_BOOKING_DAYS_AHEAD", default_value_t = 30)]
    max_booking_days_ahead: i64,

    /// JSON snapshot file; omit for impersistent in-memory bookings.
    #[arg(long, env = "DATA_FILE")]
    data_file: Option<PathBuf>,
}

impl ConfigurationHandler {
    pub fn parse_arguments() -> Self {
        Self::parse()
    }
}

impl Configuration for ConfigurationHandler {
    fn port(&self) -> u16 {
        self.port
    }

    fn admin_password(&self) -> String {
        self.admin_password.clone()
    }

    fn provider(&self) -> ProviderInfo {
        ProviderInfo {
            name: self.provider_name.clone(),
            email: self.provider_email.clone(),
            phone: self.provider_phone.clone(),
            rate: self.provider_rate.clone(),
            payment_note: self.payment_note.clone(),
        }
    }

    fn max_slots_per_time(&self) -> u32 {
        self.max_slots_per_time
    }

    fn max_booking_days_ahead(&self) -> i64 {
        self.max_booking_days_ahead
    }

    fn data_file(&self) -> Option<PathBuf> {
        self.data_file.clone()
    }
}
