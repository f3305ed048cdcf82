use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;
use wayfare_domain::travel::{TravelKind, TravelOption};
use wayfare_store::{TravelFilter, TravelOptionRepository};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/travel-options", get(list_travel_options))
        .route("/v1/travel-options/{id}", get(get_travel_option))
}

#[derive(Debug, Deserialize)]
struct TravelQuery {
    kind: Option<String>,
    origin: Option<String>,
    destination: Option<String>,
    date: Option<chrono::NaiveDate>,
}

async fn list_travel_options(
    State(state): State<AppState>,
    Query(query): Query<TravelQuery>,
) -> Result<Json<Vec<TravelOption>>, AppError> {
    let kind = match query.kind.as_deref() {
        Some(raw) => Some(
            raw.parse::<TravelKind>()
                .map_err(|e| AppError::ValidationError(e.to_string()))?,
        ),
        None => None,
    };

    let filter = TravelFilter {
        kind,
        origin: query.origin,
        destination: query.destination,
        date: query.date,
    };

    let options = TravelOptionRepository::search(&state.db.pool, &filter)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    Ok(Json(options))
}

async fn get_travel_option(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TravelOption>, AppError> {
    let option = TravelOptionRepository::get(&state.db.pool, id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .ok_or_else(|| AppError::NotFoundError(format!("Travel option not found: {}", id)))?;

    Ok(Json(option))
}
