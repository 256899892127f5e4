use crate::error::MortgageError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Loan parameters as supplied by the caller, before any lending rule is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanApplication {
    pub property_price: Decimal,
    pub down_payment: Decimal,
    /// Percent, e.g. `3.5` for 3.5%.
    pub annual_interest_rate: Decimal,
    /// Years, as supplied. Only members of [`AmortizationPeriod`] are accepted.
    pub amortization_period: Decimal,
    pub payment_schedule: String,
}

/// The amortization periods offered, in years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AmortizationPeriod {
    Five,
    Ten,
    Fifteen,
    Twenty,
    TwentyFive,
    Thirty,
}

impl AmortizationPeriod {
    pub const ALL: [AmortizationPeriod; 6] = [
        AmortizationPeriod::Five,
        AmortizationPeriod::Ten,
        AmortizationPeriod::Fifteen,
        AmortizationPeriod::Twenty,
        AmortizationPeriod::TwentyFive,
        AmortizationPeriod::Thirty,
    ];

    pub fn years(self) -> u32 {
        match self {
            AmortizationPeriod::Five => 5,
            AmortizationPeriod::Ten => 10,
            AmortizationPeriod::Fifteen => 15,
            AmortizationPeriod::Twenty => 20,
            AmortizationPeriod::TwentyFive => 25,
            AmortizationPeriod::Thirty => 30,
        }
    }
}

impl TryFrom<u32> for AmortizationPeriod {
    type Error = MortgageError;

    fn try_from(years: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|period| period.years() == years)
            .ok_or_else(|| {
                MortgageError::Validation(
                    "Invalid amortization period. Must be one of 5, 10, 15, 20, 25, 30 years."
                        .to_string(),
                )
            })
    }
}

impl TryFrom<Decimal> for AmortizationPeriod {
    type Error = MortgageError;

    fn try_from(years: Decimal) -> Result<Self, Self::Error> {
        // 25.5 or -5 must fail the same way as 40.
        let whole = if years.fract().is_zero() {
            years.to_u32()
        } else {
            None
        };
        Self::try_from(whole.unwrap_or(0))
    }
}

impl fmt::Display for AmortizationPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} years", self.years())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentSchedule {
    Monthly,
    BiWeekly,
    AcceleratedBiWeekly,
}

impl PaymentSchedule {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentSchedule::Monthly => "monthly",
            PaymentSchedule::BiWeekly => "bi-weekly",
            PaymentSchedule::AcceleratedBiWeekly => "accelerated bi-weekly",
        }
    }

    /// Compounding periods per year used by the amortization formula.
    ///
    /// Accelerated bi-weekly is priced as a monthly loan and halved afterwards,
    /// so it shares the monthly period count.
    pub fn periods_per_year(self) -> u32 {
        match self {
            PaymentSchedule::Monthly => 12,
            PaymentSchedule::BiWeekly => 26,
            PaymentSchedule::AcceleratedBiWeekly => 12,
        }
    }
}

impl FromStr for PaymentSchedule {
    type Err = MortgageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(PaymentSchedule::Monthly),
            "bi-weekly" => Ok(PaymentSchedule::BiWeekly),
            "accelerated bi-weekly" => Ok(PaymentSchedule::AcceleratedBiWeekly),
            _ => Err(MortgageError::Validation(
                "Invalid payment schedule. Must be one of 'monthly', 'bi-weekly', 'accelerated bi-weekly'."
                    .to_string(),
            )),
        }
    }
}

impl fmt::Display for PaymentSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A loan application with a parsed amortization period and payment schedule.
///
/// [`crate::application::engine::MortgageEngine::validate`] only returns requests
/// that passed every lending rule; values built by hand carry no such guarantee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanRequest {
    pub property_price: Decimal,
    pub down_payment: Decimal,
    pub annual_interest_rate: Decimal,
    pub amortization_period: AmortizationPeriod,
    pub payment_schedule: PaymentSchedule,
}

impl LoanRequest {
    /// Share of the property price covered by the down payment.
    ///
    /// A non-positive price has no meaningful ratio and reads as fully paid,
    /// which keeps it out of every insurance tier.
    pub fn down_payment_ratio(&self) -> Decimal {
        if self.property_price <= Decimal::ZERO {
            return Decimal::ONE;
        }
        self.down_payment
            .checked_div(self.property_price)
            .unwrap_or(Decimal::ONE)
    }

    /// Property price minus down payment, before insurance.
    pub fn mortgage_amount(&self) -> Decimal {
        self.property_price - self.down_payment
    }
}

/// The periodic payment, rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaymentResult {
    #[serde(with = "rust_decimal::serde::float")]
    pub payment: Decimal,
}
