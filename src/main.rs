use crate::{
    configuration::Configuration, configuration_handler::ConfigurationHandler,
    file_bookings::FileBookings, http::create_app, local_bookings::LocalBookings,
    notification::EmailNotifier, service::BookingService,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod backend;
mod configuration;
mod configuration_handler;
mod error;
mod file_bookings;
mod http;
mod local_bookings;
mod notification;
mod service;
mod slot_engine;
#[cfg(test)]
mod testutils;
mod types;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let configuration = ConfigurationHandler::parse_arguments();

    let address = format!("0.0.0.0:{}", configuration.port());
    let listener = tokio::net::TcpListener::bind(&address).await.unwrap();
    info!(%address, "lesson scheduler listening");

    let app = if let Some(data_file) = configuration.data_file() {
        let backend = match FileBookings::open(&data_file) {
            Ok(backend) => {
                info!(path = %data_file.display(), "loaded booking snapshot");
                backend
            }
            Err(err) => {
                error!(?err, path = %data_file.display(), "failed to open booking snapshot. You may want to restart without --data-file (impersistent bookings).");
                std::process::exit(1);
            }
        };
        let service = BookingService::new(backend, EmailNotifier, &configuration);
        create_app(service, configuration)
    } else {
        let service = BookingService::new(LocalBookings::default(), EmailNotifier, &configuration);
        create_app(service, configuration)
    };

    axum::serve(listener, app).await.unwrap();
}
