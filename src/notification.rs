use crate::types::Booking;
use tracing::{debug, info};

/// Contact and payment details rendered into the notification bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub rate: String,
    pub payment_note: String,
}

/// Best-effort confirmation delivery. `false` means the booking stands but
/// the client should be told to follow up with the provider directly.
pub trait NotificationGateway: Clone + Send + Sync + 'static {
    fn notify(&self, booking: &Booking, provider: &ProviderInfo) -> bool;
}

/// Renders the confirmation for the client and the heads-up for the
/// provider. Delivery transport is out of scope here; the rendered mails
/// are handed to the log.
#[derive(Debug, Clone, Default)]
pub struct EmailNotifier;

impl EmailNotifier {
    fn client_confirmation(booking: &Booking, provider: &ProviderInfo) -> (String, String) {
        let subject = format!(
            "Lesson Confirmation - {}",
            booking.slot.format("%B %d, %Y at %I:%M %p")
        );
        let body = format!(
            "Dear {name},\n\
             \n\
             Your lesson has been confirmed!\n\
             \n\
             Lesson Details:\n\
             Date: {date}\n\
             Time: {time}\n\
             Duration: 1 hour\n\
             Coach: {coach}\n\
             Rate: {rate}\n\
             \n\
             Coach Contact Information:\n\
             Email: {coach_email}\n\
             Phone: {coach_phone}\n\
             \n\
             Payment Information:\n\
             {payment}\n\
             \n\
             Best regards,\n\
             {coach}\n",
            name = booking.client_name,
            date = booking.slot.format("%A, %B %d, %Y"),
            time = booking.slot.format("%I:%M %p"),
            coach = provider.name,
            rate = provider.rate,
            coach_email = provider.email,
            coach_phone = provider.phone,
            payment = provider.payment_note,
        );
        (subject, body)
    }

    fn provider_notification(booking: &Booking) -> (String, String) {
        let subject = format!(
            "New Booking: {} - {}",
            booking.client_name,
            booking.slot.format("%B %d, %Y at %I:%M %p")
        );
        let body = format!(
            "New Lesson Booking!\n\
             \n\
             Student Details:\n\
             Name: {name}\n\
             Email: {email}\n\
             Phone: {phone}\n\
             Experience Level: {level:?}\n\
             \n\
             Lesson Details:\n\
             Date: {date}\n\
             Time: {time}\n\
             Duration: 1 hour\n\
             \n\
             Special Requests:\n\
             {requests}\n\
             \n\
             Booking ID: {id}\n",
            name = booking.client_name,
            email = booking.client_email,
            phone = booking.client_phone,
            level = booking.experience_level,
            date = booking.slot.format("%A, %B %d, %Y"),
            time = booking.slot.format("%I:%M %p"),
            requests = booking.special_requests.as_deref().unwrap_or("None"),
            id = booking.id,
        );
        (subject, body)
    }
}

impl NotificationGateway for EmailNotifier {
    fn notify(&self, booking: &Booking, provider: &ProviderInfo) -> bool {
        let (client_subject, client_body) = Self::client_confirmation(booking, provider);
        let (provider_subject, provider_body) = Self::provider_notification(booking);

        info!(to = %booking.client_email, subject = %client_subject, "confirmation mail queued");
        info!(to = %provider.email, subject = %provider_subject, "provider notification queued");
        debug!(%client_body, %provider_body, "rendered notification bodies");

        true
    }
}
