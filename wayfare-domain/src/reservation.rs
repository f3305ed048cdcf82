use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A traveler's claim on `seats` seats of one travel option.
///
/// `seats` and `total_price` are fixed at creation; `status` is the only
/// field that ever changes, and only from Confirmed to Cancelled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub traveler_id: String,
    pub travel_option_id: Uuid,
    pub seats: i32,
    pub total_price: Decimal,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "CONFIRMED",
            ReservationStatus::Cancelled => "CANCELLED",
        }
    }

    /// The single legal transition. Cancelled is terminal, so cancelling
    /// twice is an error rather than a no-op.
    pub fn cancel(self) -> Result<Self, InvalidTransition> {
        match self {
            ReservationStatus::Confirmed => Ok(ReservationStatus::Cancelled),
            ReservationStatus::Cancelled => Err(InvalidTransition { from: self }),
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = UnknownReservationStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CONFIRMED" => Ok(ReservationStatus::Confirmed),
            "CANCELLED" => Ok(ReservationStatus::Cancelled),
            _ => Err(UnknownReservationStatus(s.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid status transition from {from} to CANCELLED")]
pub struct InvalidTransition {
    pub from: ReservationStatus,
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown reservation status: {0}")]
pub struct UnknownReservationStatus(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmed_can_be_cancelled() {
        assert_eq!(
            ReservationStatus::Confirmed.cancel().unwrap(),
            ReservationStatus::Cancelled
        );
    }

    #[test]
    fn test_cancelled_is_terminal() {
        let err = ReservationStatus::Cancelled.cancel().unwrap_err();
        assert_eq!(err.from, ReservationStatus::Cancelled);
    }

    #[test]
    fn test_status_round_trip() {
        for status in [ReservationStatus::Confirmed, ReservationStatus::Cancelled] {
            assert_eq!(status.as_str().parse::<ReservationStatus>().unwrap(), status);
        }
    }
}
