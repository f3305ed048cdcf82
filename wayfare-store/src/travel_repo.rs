use chrono::NaiveDate;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;
use wayfare_domain::travel::{TravelKind, TravelOption};

/// Optional narrowing for the browse listing, mapped straight from the
/// web layer's query string.
#[derive(Debug, Default, Clone)]
pub struct TravelFilter {
    pub kind: Option<TravelKind>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, sqlx::FromRow)]
struct TravelOptionRow {
    id: Uuid,
    kind: String,
    origin: String,
    destination: String,
    departs_at: chrono::DateTime<chrono::Utc>,
    price: rust_decimal::Decimal,
    available_seats: i32,
}

impl TravelOptionRow {
    fn into_domain(self) -> Result<TravelOption, sqlx::Error> {
        let kind = self
            .kind
            .parse::<TravelKind>()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        Ok(TravelOption {
            id: self.id,
            kind,
            origin: self.origin,
            destination: self.destination,
            departs_at: self.departs_at,
            price: self.price,
            available_seats: self.available_seats,
        })
    }
}

pub struct TravelOptionRepository;

impl TravelOptionRepository {
    /// Fetch a travel option under an exclusive row lock. All concurrent
    /// reserve/release traffic for the same option queues behind this lock
    /// until the caller's transaction commits or aborts.
    pub async fn get_for_update(
        tx: &mut sqlx::Transaction<'_, Postgres>,
        id: Uuid,
    ) -> Result<Option<TravelOption>, sqlx::Error> {
        let row: Option<TravelOptionRow> = sqlx::query_as(
            r#"
            SELECT id, kind, origin, destination, departs_at, price, available_seats
            FROM travel_options
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;

        row.map(TravelOptionRow::into_domain).transpose()
    }

    /// Subtract held seats. The caller must have verified availability under
    /// the row lock; the `available_seats >= 0` constraint backstops it.
    pub async fn decrement_seats(
        tx: &mut sqlx::Transaction<'_, Postgres>,
        id: Uuid,
        amount: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE travel_options SET available_seats = available_seats - $1 WHERE id = $2")
            .bind(amount)
            .bind(id)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }

    /// Add previously-held seats back. Unconditional: the seats being
    /// restored were subtracted by an earlier decrement.
    pub async fn restore_seats(
        tx: &mut sqlx::Transaction<'_, Postgres>,
        id: Uuid,
        amount: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE travel_options SET available_seats = available_seats + $1 WHERE id = $2")
            .bind(amount)
            .bind(id)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }

    pub async fn get(pool: &PgPool, id: Uuid) -> Result<Option<TravelOption>, sqlx::Error> {
        let row: Option<TravelOptionRow> = sqlx::query_as(
            r#"
            SELECT id, kind, origin, destination, departs_at, price, available_seats
            FROM travel_options
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        row.map(TravelOptionRow::into_domain).transpose()
    }

    pub async fn search(
        pool: &PgPool,
        filter: &TravelFilter,
    ) -> Result<Vec<TravelOption>, sqlx::Error> {
        let rows: Vec<TravelOptionRow> = sqlx::query_as(
            r#"
            SELECT id, kind, origin, destination, departs_at, price, available_seats
            FROM travel_options
            WHERE ($1::text IS NULL OR kind = $1)
              AND ($2::text IS NULL OR origin ILIKE '%' || $2 || '%')
              AND ($3::text IS NULL OR destination ILIKE '%' || $3 || '%')
              AND ($4::date IS NULL OR departs_at::date = $4)
            ORDER BY departs_at
            "#,
        )
        .bind(filter.kind.map(|k| k.as_str()))
        .bind(filter.origin.as_deref())
        .bind(filter.destination.as_deref())
        .bind(filter.date)
        .fetch_all(pool)
        .await?;

        rows.into_iter().map(TravelOptionRow::into_domain).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn row(kind: &str) -> TravelOptionRow {
        TravelOptionRow {
            id: Uuid::new_v4(),
            kind: kind.to_string(),
            origin: "Hamburg".to_string(),
            destination: "Munich".to_string(),
            departs_at: Utc::now(),
            price: "59.90".parse().unwrap(),
            available_seats: 40,
        }
    }

    #[test]
    fn test_row_maps_to_domain() {
        let option = row("TRAIN").into_domain().unwrap();
        assert_eq!(option.kind, TravelKind::Train);
        assert_eq!(option.available_seats, 40);
    }

    #[test]
    fn test_corrupt_kind_is_a_decode_error() {
        let err = row("ZEPPELIN").into_domain().unwrap_err();
        assert!(matches!(err, sqlx::Error::Decode(_)));
    }
}
