use crate::notification::ProviderInfo;
use std::path::PathBuf;

pub trait Configuration: Clone + Send + Sync + 'static {
    fn port(&self) -> u16;
    fn admin_password(&self) -> String;
    fn provider(&self) -> ProviderInfo;
    fn max_slots_per_time(&self) -> u32;
    fn max_booking_days_ahead(&self) -> i64;
    fn data_file(&self) -> Option<PathBuf>;
}
