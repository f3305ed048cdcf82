use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Seats must be a positive number, got {0}")]
    InvalidSeatCount(i32),

    #[error("Travel option not found: {0}")]
    TravelOptionNotFound(Uuid),

    #[error("Reservation not found: {0}")]
    ReservationNotFound(Uuid),

    #[error("Cannot book {requested} seats, only {available} available")]
    InsufficientSeats { requested: i32, available: i32 },

    #[error("Reservation {0} is already cancelled")]
    AlreadyCancelled(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
