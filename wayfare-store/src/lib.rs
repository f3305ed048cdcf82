pub mod app_config;
pub mod database;
pub mod reservation_repo;
pub mod travel_repo;

pub use database::DbClient;
pub use reservation_repo::ReservationRepository;
pub use travel_repo::{TravelFilter, TravelOptionRepository};
