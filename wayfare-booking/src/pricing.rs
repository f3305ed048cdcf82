use rust_decimal::{Decimal, RoundingStrategy};

/// Total for a booking: unit price times seat count, rounded half-up to
/// 2 places. Computed once at reservation time and never recomputed.
pub fn total_price(unit_price: Decimal, seats: i32) -> Decimal {
    (unit_price * Decimal::from(seats)).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
