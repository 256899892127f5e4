use crate::domain::loan::LoanApplication;
use crate::error::{MortgageError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;

/// A pricing request as it arrives from a caller, before the required-field check.
///
/// Field names are snake_case; the camelCase names used by web clients are
/// accepted as aliases.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct QuoteInput {
    #[serde(alias = "propertyPrice")]
    pub property_price: Option<Decimal>,
    #[serde(alias = "downPayment")]
    pub down_payment: Option<Decimal>,
    #[serde(alias = "annualInterestRate")]
    pub annual_interest_rate: Option<Decimal>,
    #[serde(alias = "amortizationPeriod")]
    pub amortization_period: Option<Decimal>,
    #[serde(alias = "paymentSchedule")]
    pub payment_schedule: Option<String>,
}

impl QuoteInput {
    /// Converts into a [`LoanApplication`], rejecting absent or empty fields.
    ///
    /// Zero counts as empty for every numeric field, so a zero down payment is
    /// reported as a missing field rather than reaching the lending rules.
    pub fn into_application(self) -> Result<LoanApplication> {
        let property_price = required_number(self.property_price)?;
        let down_payment = required_number(self.down_payment)?;
        let annual_interest_rate = required_number(self.annual_interest_rate)?;
        let amortization_period = required_number(self.amortization_period)?;
        let payment_schedule = self
            .payment_schedule
            .filter(|schedule| !schedule.is_empty())
            .ok_or(MortgageError::MissingFields)?;

        Ok(LoanApplication {
            property_price,
            down_payment,
            annual_interest_rate,
            amortization_period,
            payment_schedule,
        })
    }
}

fn required_number(value: Option<Decimal>) -> Result<Decimal> {
    value
        .filter(|v| !v.is_zero())
        .ok_or(MortgageError::MissingFields)
}
