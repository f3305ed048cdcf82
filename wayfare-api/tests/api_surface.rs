//! HTTP-surface tests that exercise routing, auth, and validation without
//! touching a database (the pool is lazy and these paths fail first).

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;
use wayfare_api::app;
use wayfare_api::auth::Claims;
use wayfare_api::state::{AppState, AuthConfig};
use wayfare_booking::BookingService;
use wayfare_store::DbClient;

const SECRET: &str = "test-secret";

fn test_state() -> AppState {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/wayfare_test")
        .expect("lazy pool");
    AppState {
        db: Arc::new(DbClient { pool: pool.clone() }),
        bookings: Arc::new(BookingService::new(pool)),
        auth: AuthConfig {
            secret: SECRET.to_string(),
        },
    }
}

fn token(sub: &str) -> String {
    let claims = Claims {
        sub: sub.to_string(),
        exp: 4102444800, // 2100-01-01
    };
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("encode token")
}

#[tokio::test]
async fn missing_bearer_token_is_rejected() {
    let app = app(test_state());

    let request = Request::post("/v1/reservations")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({ "travel_option_id": Uuid::new_v4(), "seats": 1 }).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn garbage_bearer_token_is_unauthorized() {
    let app = app(test_state());

    let request = Request::post("/v1/reservations")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, "Bearer not-a-jwt")
        .body(Body::from(
            serde_json::json!({ "travel_option_id": Uuid::new_v4(), "seats": 1 }).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn zero_seat_requests_are_bad_requests() {
    let app = app(test_state());

    let request = Request::post("/v1/reservations")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token("traveler-1")))
        .body(Body::from(
            serde_json::json!({ "travel_option_id": Uuid::new_v4(), "seats": 0 }).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_travel_kind_filter_is_a_bad_request() {
    let app = app(test_state());

    let request = Request::get("/v1/travel-options?kind=boat")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
