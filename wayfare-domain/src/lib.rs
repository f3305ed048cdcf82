pub mod reservation;
pub mod travel;

pub use reservation::{Reservation, ReservationStatus};
pub use travel::{TravelKind, TravelOption};
