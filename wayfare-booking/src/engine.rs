use chrono::Utc;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;
use wayfare_domain::reservation::{Reservation, ReservationStatus};
use wayfare_store::{ReservationRepository, TravelOptionRepository};

use crate::error::BookingError;
use crate::pricing;

/// The reservation transaction manager: the only component that writes
/// `available_seats` or a reservation's status. Each operation runs inside
/// one database transaction; returning an error before commit drops the
/// transaction and rolls every write back.
#[derive(Clone)]
pub struct BookingService {
    pool: PgPool,
}

impl BookingService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn reserve(
        &self,
        traveler_id: &str,
        travel_option_id: Uuid,
        seats: i32,
    ) -> Result<Reservation, BookingError> {
        if seats <= 0 {
            return Err(BookingError::InvalidSeatCount(seats));
        }

        let mut tx = self.pool.begin().await?;

        // 1. Lock the travel option row. Concurrent bookings against the
        // same option queue here and re-read the counter after the holder
        // commits, which is what keeps the counter from going negative.
        let travel = TravelOptionRepository::get_for_update(&mut tx, travel_option_id)
            .await?
            .ok_or(BookingError::TravelOptionNotFound(travel_option_id))?;

        // 2. Check availability against the post-lock counter.
        if seats > travel.available_seats {
            return Err(BookingError::InsufficientSeats {
                requested: seats,
                available: travel.available_seats,
            });
        }

        // 3. Price the booking once; never recomputed later.
        let total_price = pricing::total_price(travel.price, seats);

        // 4. Take the seats and record the claim.
        TravelOptionRepository::decrement_seats(&mut tx, travel_option_id, seats).await?;

        let reservation = Reservation {
            id: Uuid::new_v4(),
            traveler_id: traveler_id.to_string(),
            travel_option_id,
            seats,
            total_price,
            status: ReservationStatus::Confirmed,
            created_at: Utc::now(),
        };
        ReservationRepository::create(&mut tx, &reservation).await?;

        tx.commit().await?;

        info!(reservation_id = %reservation.id, seats, "Reservation confirmed");
        Ok(reservation)
    }

    pub async fn release(
        &self,
        reservation_id: Uuid,
        traveler_id: &str,
    ) -> Result<Reservation, BookingError> {
        let mut tx = self.pool.begin().await?;

        // 1. Lock the reservation, scoped to its owner.
        let mut reservation =
            ReservationRepository::get_for_update(&mut tx, reservation_id, traveler_id)
                .await?
                .ok_or(BookingError::ReservationNotFound(reservation_id))?;

        // 2. One-way transition; a second cancel fails here, before any
        // seats are restored.
        reservation.status = reservation
            .status
            .cancel()
            .map_err(|_| BookingError::AlreadyCancelled(reservation_id))?;

        ReservationRepository::set_status(&mut tx, reservation_id, reservation.status).await?;

        // 3. Restore the held seats under the same option lock reserve takes.
        TravelOptionRepository::get_for_update(&mut tx, reservation.travel_option_id)
            .await?
            .ok_or(BookingError::TravelOptionNotFound(reservation.travel_option_id))?;
        TravelOptionRepository::restore_seats(&mut tx, reservation.travel_option_id, reservation.seats)
            .await?;

        tx.commit().await?;

        info!(reservation_id = %reservation.id, seats = reservation.seats, "Reservation cancelled");
        Ok(reservation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    fn lazy_service() -> BookingService {
        // connect_lazy never touches the network; good enough for paths
        // that fail before the first query.
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/wayfare_test")
            .unwrap();
        BookingService::new(pool)
    }

    #[tokio::test]
    async fn test_zero_seats_are_rejected_before_any_io() {
        let service = lazy_service();
        let err = service
            .reserve("traveler-1", Uuid::new_v4(), 0)
            .await
            .unwrap_err();
        assert!(matches!(err, BookingError::InvalidSeatCount(0)));
    }

    #[tokio::test]
    async fn test_negative_seats_are_rejected_before_any_io() {
        let service = lazy_service();
        let err = service
            .reserve("traveler-1", Uuid::new_v4(), -3)
            .await
            .unwrap_err();
        assert!(matches!(err, BookingError::InvalidSeatCount(-3)));
    }
}
