use std::sync::Arc;
use wayfare_booking::BookingService;
use wayfare_store::DbClient;

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
}

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DbClient>,
    pub bookings: Arc<BookingService>,
    pub auth: AuthConfig,
}
