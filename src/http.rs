use crate::backend::BookingBackend;
use crate::configuration::Configuration;
use crate::error::BookingError;
use crate::notification::NotificationGateway;
use crate::service::BookingService;
use crate::types::{
    Booking, BookingConfirmation, CapacityInfo, ClientInfo, ExperienceLevel, Slot,
    WeeklyAvailability,
};
use axum::extract::{Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState<B: BookingBackend, N: NotificationGateway, C: Configuration> {
    service: BookingService<B, N>,
    configuration: C,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SlotsQuery {
    date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CapacityQuery {
    date: NaiveDate,
    time: NaiveTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct UpcomingQuery {
    #[serde(default = "default_upcoming_days")]
    days: i64,
}

fn default_upcoming_days() -> i64 {
    7
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookingRequest {
    date: NaiveDate,
    time: NaiveTime,
    name: String,
    email: String,
    phone: String,
    experience_level: ExperienceLevel,
    #[serde(default)]
    special_requests: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CancelRequest {
    id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AvailabilityUpdateRequest {
    weekday: String,
    enabled: bool,
    start: NaiveTime,
    end: NaiveTime,
}

pub fn create_app<B: BookingBackend, N: NotificationGateway, C: Configuration>(
    service: BookingService<B, N>,
    configuration: C,
) -> Router {
    let state = AppState {
        service,
        configuration,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let public = Router::new()
        .route("/slots", get(get_slots))
        .route("/book", post(submit_booking));

    let admin = Router::new()
        .route("/bookings", get(get_bookings))
        .route("/bookings/upcoming", get(get_upcoming_bookings))
        .route("/capacity", get(get_capacity))
        .route("/cancel", post(cancel_booking))
        .route("/availability", get(get_availability).post(update_availability))
        .route_layer(middleware::from_fn_with_state(state.clone(), admin_auth::<B, N, C>));

    Router::new().merge(public).merge(admin).with_state(state).layer(cors)
}

async fn admin_auth<B: BookingBackend, N: NotificationGateway, C: Configuration>(
    State(state): State<AppState<B, N, C>>,
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, String)> {
    match request.headers().get("x-admin-password") {
        Some(header) if header.to_str().unwrap_or("") == state.configuration.admin_password() => {
            Ok(next.run(request).await)
        }
        Some(_) => Err((StatusCode::UNAUTHORIZED, "Unauthorized".to_string())),
        None => Err((StatusCode::UNAUTHORIZED, "Missing credentials".to_string())),
    }
}

async fn get_slots<B: BookingBackend, N: NotificationGateway, C: Configuration>(
    State(state): State<AppState<B, N, C>>,
    Query(query): Query<SlotsQuery>,
) -> Json<Vec<Slot>> {
    Json(state.service.available_slots(query.date))
}

async fn submit_booking<B: BookingBackend, N: NotificationGateway, C: Configuration>(
    State(state): State<AppState<B, N, C>>,
    Json(request): Json<BookingRequest>,
) -> Result<Json<BookingConfirmation>, BookingError> {
    let client = ClientInfo {
        name: request.name,
        email: request.email,
        phone: request.phone,
    };
    let confirmation = state.service.submit_booking(
        request.date,
        request.time,
        client,
        request.experience_level,
        request.special_requests,
    )?;
    Ok(Json(confirmation))
}

async fn cancel_booking<B: BookingBackend, N: NotificationGateway, C: Configuration>(
    State(state): State<AppState<B, N, C>>,
    Json(request): Json<CancelRequest>,
) -> Result<StatusCode, BookingError> {
    state.service.cancel_booking(request.id)?;
    Ok(StatusCode::OK)
}

async fn get_capacity<B: BookingBackend, N: NotificationGateway, C: Configuration>(
    State(state): State<AppState<B, N, C>>,
    Query(query): Query<CapacityQuery>,
) -> Json<CapacityInfo> {
    Json(state.service.slot_capacity(query.date, query.time))
}

async fn get_bookings<B: BookingBackend, N: NotificationGateway, C: Configuration>(
    State(state): State<AppState<B, N, C>>,
) -> Json<Vec<Booking>> {
    Json(state.service.all_bookings())
}

async fn get_upcoming_bookings<B: BookingBackend, N: NotificationGateway, C: Configuration>(
    State(state): State<AppState<B, N, C>>,
    Query(query): Query<UpcomingQuery>,
) -> Json<Vec<Booking>> {
    Json(state.service.upcoming_bookings(query.days))
}

async fn get_availability<B: BookingBackend, N: NotificationGateway, C: Configuration>(
    State(state): State<AppState<B, N, C>>,
) -> Json<WeeklyAvailability> {
    Json(state.service.availability())
}

async fn update_availability<B: BookingBackend, N: NotificationGateway, C: Configuration>(
    State(state): State<AppState<B, N, C>>,
    Json(request): Json<AvailabilityUpdateRequest>,
) -> Response {
    let Ok(weekday) = Weekday::from_str(&request.weekday) else {
        return (StatusCode::BAD_REQUEST, "unknown weekday").into_response();
    };

    match state
        .service
        .update_availability(weekday, request.enabled, request.start, request.end)
    {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => err.into_response(),
    }
}
