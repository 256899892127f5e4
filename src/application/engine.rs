use crate::domain::insurance;
use crate::domain::loan::{
    AmortizationPeriod, LoanApplication, LoanRequest, PaymentResult, PaymentSchedule,
};
use crate::domain::rules;
use crate::error::{MortgageError, Result};
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;
use tracing::debug;

/// Decimal places of the reported payment.
const PAYMENT_PRECISION: u32 = 2;

/// The main entry point for mortgage pricing.
///
/// `MortgageEngine` validates loan applications against the lending rules and
/// computes the periodic payment. It holds no state, so a single value can be
/// shared freely between callers and threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct MortgageEngine;

impl MortgageEngine {
    pub fn new() -> Self {
        Self
    }

    /// Checks an application against every lending rule, in order.
    ///
    /// The amortization period and payment schedule are checked first, then the
    /// down payment and rate rules. The first violation is returned as
    /// [`MortgageError::Validation`].
    pub fn validate(&self, application: &LoanApplication) -> Result<LoanRequest> {
        let amortization_period = AmortizationPeriod::try_from(application.amortization_period)?;
        let payment_schedule: PaymentSchedule = application.payment_schedule.parse()?;

        let request = LoanRequest {
            property_price: application.property_price,
            down_payment: application.down_payment,
            annual_interest_rate: application.annual_interest_rate,
            amortization_period,
            payment_schedule,
        };

        match rules::first_violation(&request) {
            Some(message) => Err(MortgageError::Validation(message)),
            None => Ok(request),
        }
    }

    /// CMHC insurance premium for a validated request. Zero at 20% down or more.
    pub fn insurance_premium(&self, request: &LoanRequest) -> Decimal {
        insurance::premium(request)
    }

    /// Validates the application and computes its periodic payment.
    pub fn calculate_payment(&self, application: &LoanApplication) -> Result<PaymentResult> {
        let request = match self.validate(application) {
            Ok(request) => request,
            Err(e) => {
                debug!(error = %e, "loan application rejected");
                return Err(e);
            }
        };

        let premium = self.insurance_premium(&request);
        let principal = request
            .mortgage_amount()
            .checked_add(premium)
            .ok_or_else(|| overflow("principal"))?;

        let periods_per_year = Decimal::from(request.payment_schedule.periods_per_year());
        let number_of_payments =
            request.amortization_period.years() * request.payment_schedule.periods_per_year();
        let schedule_rate = request
            .annual_interest_rate
            .checked_div(dec!(100))
            .and_then(|rate| rate.checked_div(periods_per_year))
            .ok_or_else(|| overflow("schedule rate"))?;

        let mut payment = amortized_payment(principal, schedule_rate, number_of_payments)?;
        if request.payment_schedule == PaymentSchedule::AcceleratedBiWeekly {
            payment /= dec!(2);
        }
        let payment =
            payment.round_dp_with_strategy(PAYMENT_PRECISION, RoundingStrategy::MidpointAwayFromZero);

        debug!(
            %principal,
            %premium,
            %payment,
            schedule = %request.payment_schedule,
            period = %request.amortization_period,
            "payment calculated"
        );

        Ok(PaymentResult { payment })
    }
}

/// Level payment that repays `principal` over `periods` at `rate` per period.
///
/// Evaluates `P·r·(1+r)^n / ((1+r)^n - 1)` as `P·r / (1 - (1+r)^-n)`. When
/// `(1+r)^n` exceeds the decimal range its inverse is taken as zero, which is
/// the limit of the formula.
fn amortized_payment(principal: Decimal, rate: Decimal, periods: u32) -> Result<Decimal> {
    let growth = (Decimal::ONE + rate).checked_powi(i64::from(periods));
    let discount = growth
        .and_then(|g| Decimal::ONE.checked_div(g))
        .unwrap_or(Decimal::ZERO);

    principal
        .checked_mul(rate)
        .and_then(|interest| interest.checked_div(Decimal::ONE - discount))
        .ok_or_else(|| overflow("payment"))
}

fn overflow(what: &str) -> MortgageError {
    MortgageError::Calculation(format!("{what} is outside the supported numeric range"))
}
