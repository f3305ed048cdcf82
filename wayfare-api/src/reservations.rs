use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use axum_extra::headers::{authorization::Bearer, Authorization};
use axum_extra::TypedHeader;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wayfare_domain::reservation::Reservation;
use wayfare_store::ReservationRepository;

use crate::auth;
use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/reservations", post(create_reservation).get(list_reservations))
        .route("/v1/reservations/{id}/cancel", post(cancel_reservation))
}

#[derive(Debug, Deserialize)]
struct CreateReservationRequest {
    travel_option_id: Uuid,
    seats: i32,
}

#[derive(Debug, Serialize)]
struct ReservationResponse {
    reservation_id: Uuid,
    travel_option_id: Uuid,
    seats: i32,
    total_price: Decimal,
    status: String,
    created_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(r: Reservation) -> Self {
        Self {
            reservation_id: r.id,
            travel_option_id: r.travel_option_id,
            seats: r.seats,
            total_price: r.total_price,
            status: r.status.as_str().to_string(),
            created_at: r.created_at,
        }
    }
}

async fn create_reservation(
    State(state): State<AppState>,
    TypedHeader(Authorization(bearer)): TypedHeader<Authorization<Bearer>>,
    Json(req): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ReservationResponse>), AppError> {
    let claims = auth::authenticate(&state.auth.secret, &bearer)?;

    let reservation = state
        .bookings
        .reserve(&claims.sub, req.travel_option_id, req.seats)
        .await
        .map_err(AppError::from_booking)?;

    Ok((StatusCode::CREATED, Json(reservation.into())))
}

async fn cancel_reservation(
    State(state): State<AppState>,
    TypedHeader(Authorization(bearer)): TypedHeader<Authorization<Bearer>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReservationResponse>, AppError> {
    let claims = auth::authenticate(&state.auth.secret, &bearer)?;

    let reservation = state
        .bookings
        .release(id, &claims.sub)
        .await
        .map_err(AppError::from_booking)?;

    Ok(Json(reservation.into()))
}

async fn list_reservations(
    State(state): State<AppState>,
    TypedHeader(Authorization(bearer)): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<Vec<ReservationResponse>>, AppError> {
    let claims = auth::authenticate(&state.auth.secret, &bearer)?;

    let reservations = ReservationRepository::list_for_traveler(&state.db.pool, &claims.sub)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    Ok(Json(reservations.into_iter().map(Into::into).collect()))
}
