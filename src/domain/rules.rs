//! Down-payment and rate rules a loan must satisfy before it can be priced.
//!
//! Rules are checked in declaration order and the first violation is reported.

use super::loan::LoanRequest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Down payment share at or above which no mortgage insurance is needed.
pub const UNINSURED_DOWN_PAYMENT_RATIO: Decimal = dec!(0.2);
/// Longest amortization, in years, that can still be insured.
pub const MAX_INSURABLE_AMORTIZATION_YEARS: u32 = 25;
/// Highest property price that can still be insured.
pub const MAX_INSURABLE_PRICE: Decimal = dec!(1000000);
/// Price above which the 10% tier of the minimum down payment kicks in.
pub const TIERED_MINIMUM_THRESHOLD: Decimal = dec!(500000);
pub const FIRST_TIER_MINIMUM_RATIO: Decimal = dec!(0.05);
pub const SECOND_TIER_MINIMUM_RATIO: Decimal = dec!(0.1);
/// Down payments must stay strictly below this share of the price.
pub const MAX_DOWN_PAYMENT_RATIO: Decimal = dec!(0.8);
pub const MIN_DOWN_PAYMENT_RATIO: Decimal = dec!(0.05);

/// A lending rule: `Some(message)` when the request violates it.
pub type Rule = fn(&LoanRequest) -> Option<String>;

/// Every rule applied after the amortization period and payment schedule parsed.
pub const RULES: [Rule; 5] = [
    uninsurable_requires_twenty_percent,
    tiered_minimum_above_threshold,
    down_payment_below_cap,
    down_payment_at_least_minimum,
    interest_rate_positive,
];

/// Returns the message of the first rule the request violates.
pub fn first_violation(request: &LoanRequest) -> Option<String> {
    RULES.iter().find_map(|rule| rule(request))
}

/// Minimum down payment for a price above [`TIERED_MINIMUM_THRESHOLD`].
pub fn tiered_minimum_down_payment(property_price: Decimal) -> Decimal {
    TIERED_MINIMUM_THRESHOLD * FIRST_TIER_MINIMUM_RATIO
        + (property_price - TIERED_MINIMUM_THRESHOLD) * SECOND_TIER_MINIMUM_RATIO
}

fn uninsurable_requires_twenty_percent(request: &LoanRequest) -> Option<String> {
    let uninsurable = request.amortization_period.years() > MAX_INSURABLE_AMORTIZATION_YEARS
        || request.property_price > MAX_INSURABLE_PRICE;
    let minimum = request.property_price * UNINSURED_DOWN_PAYMENT_RATIO;

    (uninsurable && request.down_payment < minimum).then(|| {
        format!(
            "if amortization period exceeds 25 years or property price is more than $1,000,000 \
             CMHC insurance is not available. Therefore, the down payment must be at least 20%. \
             Minimum required down payment is ${}.",
            minimum.normalize()
        )
    })
}

fn tiered_minimum_above_threshold(request: &LoanRequest) -> Option<String> {
    if request.property_price <= TIERED_MINIMUM_THRESHOLD {
        return None;
    }
    let minimum = tiered_minimum_down_payment(request.property_price);

    (request.down_payment < minimum).then(|| {
        format!(
            "For properties over $500,000, the minimum down payment is 5% of the first $500,000 \
             and 10% of any amount over $500,000. Minimum required down payment is ${:.2}.",
            minimum
        )
    })
}

fn down_payment_below_cap(request: &LoanRequest) -> Option<String> {
    let cap = request.property_price * MAX_DOWN_PAYMENT_RATIO;

    (request.down_payment >= cap).then(|| {
        format!(
            "Down payment must be less than 80% of the property price. \
             Your down payment should be smaller than ${}.",
            cap.normalize()
        )
    })
}

fn down_payment_at_least_minimum(request: &LoanRequest) -> Option<String> {
    let minimum = request.property_price * MIN_DOWN_PAYMENT_RATIO;

    (request.down_payment < minimum).then(|| {
        format!(
            "Down payment must be at least 5% of the property price. \
             Minimum required down payment is ${}.",
            minimum.normalize()
        )
    })
}

fn interest_rate_positive(request: &LoanRequest) -> Option<String> {
    (request.annual_interest_rate <= Decimal::ZERO)
        .then(|| "Annual interest rate must be greater than 0".to_string())
}
