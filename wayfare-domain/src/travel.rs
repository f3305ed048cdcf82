use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A bookable scheduled trip with a fixed price and seat capacity.
///
/// `available_seats` is the only mutable field; it never drops below zero
/// and only the booking engine writes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelOption {
    pub id: Uuid,
    pub kind: TravelKind,
    pub origin: String,
    pub destination: String,
    pub departs_at: DateTime<Utc>,
    pub price: Decimal,
    pub available_seats: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TravelKind {
    Flight,
    Train,
    Bus,
}

impl TravelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelKind::Flight => "FLIGHT",
            TravelKind::Train => "TRAIN",
            TravelKind::Bus => "BUS",
        }
    }
}

impl fmt::Display for TravelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelKind {
    type Err = UnknownTravelKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FLIGHT" => Ok(TravelKind::Flight),
            "TRAIN" => Ok(TravelKind::Train),
            "BUS" => Ok(TravelKind::Bus),
            _ => Err(UnknownTravelKind(s.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown travel kind: {0}")]
pub struct UnknownTravelKind(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in [TravelKind::Flight, TravelKind::Train, TravelKind::Bus] {
            assert_eq!(kind.as_str().parse::<TravelKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_kind_parse_is_case_insensitive() {
        assert_eq!("flight".parse::<TravelKind>().unwrap(), TravelKind::Flight);
        assert_eq!("Train".parse::<TravelKind>().unwrap(), TravelKind::Train);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!("boat".parse::<TravelKind>().is_err());
    }
}
