use sqlx::{PgPool, Postgres};
use uuid::Uuid;
use wayfare_domain::reservation::{Reservation, ReservationStatus};

#[derive(Debug, sqlx::FromRow)]
struct ReservationRow {
    id: Uuid,
    traveler_id: String,
    travel_option_id: Uuid,
    seats: i32,
    total_price: rust_decimal::Decimal,
    status: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl ReservationRow {
    fn into_domain(self) -> Result<Reservation, sqlx::Error> {
        let status = self
            .status
            .parse::<ReservationStatus>()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        Ok(Reservation {
            id: self.id,
            traveler_id: self.traveler_id,
            travel_option_id: self.travel_option_id,
            seats: self.seats,
            total_price: self.total_price,
            status,
            created_at: self.created_at,
        })
    }
}

pub struct ReservationRepository;

impl ReservationRepository {
    pub async fn create(
        tx: &mut sqlx::Transaction<'_, Postgres>,
        reservation: &Reservation,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO reservations (id, traveler_id, travel_option_id, seats, total_price, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(reservation.id)
        .bind(&reservation.traveler_id)
        .bind(reservation.travel_option_id)
        .bind(reservation.seats)
        .bind(reservation.total_price)
        .bind(reservation.status.as_str())
        .bind(reservation.created_at)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    /// Fetch-and-lock a reservation scoped to its owner. The traveler filter
    /// doubles as the ownership check: a reservation belonging to someone
    /// else looks exactly like a missing one.
    pub async fn get_for_update(
        tx: &mut sqlx::Transaction<'_, Postgres>,
        id: Uuid,
        traveler_id: &str,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        let row: Option<ReservationRow> = sqlx::query_as(
            r#"
            SELECT id, traveler_id, travel_option_id, seats, total_price, status, created_at
            FROM reservations
            WHERE id = $1 AND traveler_id = $2
            FOR UPDATE
            "#,
        )
        .bind(id)
        .bind(traveler_id)
        .fetch_optional(&mut **tx)
        .await?;

        row.map(ReservationRow::into_domain).transpose()
    }

    pub async fn set_status(
        tx: &mut sqlx::Transaction<'_, Postgres>,
        id: Uuid,
        status: ReservationStatus,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE reservations SET status = $1 WHERE id = $2")
            .bind(status.as_str())
            .bind(id)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }

    pub async fn list_for_traveler(
        pool: &PgPool,
        traveler_id: &str,
    ) -> Result<Vec<Reservation>, sqlx::Error> {
        let rows: Vec<ReservationRow> = sqlx::query_as(
            r#"
            SELECT id, traveler_id, travel_option_id, seats, total_price, status, created_at
            FROM reservations
            WHERE traveler_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(traveler_id)
        .fetch_all(pool)
        .await?;

        rows.into_iter().map(ReservationRow::into_domain).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_row_maps_to_domain() {
        let row = ReservationRow {
            id: Uuid::new_v4(),
            traveler_id: "traveler-1".to_string(),
            travel_option_id: Uuid::new_v4(),
            seats: 2,
            total_price: "200.00".parse().unwrap(),
            status: "CONFIRMED".to_string(),
            created_at: Utc::now(),
        };

        let reservation = row.into_domain().unwrap();
        assert_eq!(reservation.status, ReservationStatus::Confirmed);
        assert_eq!(reservation.seats, 2);
    }
}
