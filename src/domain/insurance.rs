use super::loan::LoanRequest;
use super::rules::UNINSURED_DOWN_PAYMENT_RATIO;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// CMHC premium rates, keyed by the upper bound (exclusive) of the down payment ratio.
///
/// The bands are contiguous over `[0, 0.2)`; anything at or above 0.2 is uninsured.
pub const PREMIUM_TIERS: [(Decimal, Decimal); 3] = [
    (dec!(0.10), dec!(0.04)),
    (dec!(0.15), dec!(0.031)),
    (UNINSURED_DOWN_PAYMENT_RATIO, dec!(0.028)),
];

/// Premium rate for a down payment ratio, or zero when no insurance is required.
pub fn premium_rate(down_payment_ratio: Decimal) -> Decimal {
    PREMIUM_TIERS
        .iter()
        .find(|(upper, _)| down_payment_ratio < *upper)
        .map(|(_, rate)| *rate)
        .unwrap_or(Decimal::ZERO)
}

/// CMHC insurance premium financed into the principal.
pub fn premium(request: &LoanRequest) -> Decimal {
    let rate = premium_rate(request.down_payment_ratio());
    if rate.is_zero() {
        return Decimal::ZERO;
    }
    request.mortgage_amount() * rate
}
