#![allow(dead_code)]

use mortgage_calc::domain::loan::LoanApplication;
use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 5] = [
    "property_price",
    "down_payment",
    "annual_interest_rate",
    "amortization_period",
    "payment_schedule",
];

pub const SCHEDULES: [&str; 3] = ["monthly", "bi-weekly", "accelerated bi-weekly"];
pub const YEARS: [u32; 6] = [5, 10, 15, 20, 25, 30];

/// Writes a CSV of loan applications with the standard header.
pub fn write_csv(path: &Path, rows: &[[&str; 5]]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(path)?;
    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Generates an application that satisfies every lending rule.
pub fn valid_application<R: Rng>(rng: &mut R) -> LoanApplication {
    let price = Decimal::from(rng.gen_range(100_000u32..=2_000_000));
    let years = *YEARS.choose(rng).unwrap();
    let schedule = *SCHEDULES.choose(rng).unwrap();

    let minimum = if years > 25 || price > dec!(1000000) {
        price * dec!(0.2)
    } else if price > dec!(500000) {
        dec!(25000) + (price - dec!(500000)) * dec!(0.1)
    } else {
        price * dec!(0.05)
    };
    let maximum = price * dec!(0.8);
    let fraction = Decimal::new(rng.gen_range(0..990), 3);

    LoanApplication {
        property_price: price,
        down_payment: minimum + (maximum - minimum) * fraction,
        annual_interest_rate: Decimal::new(rng.gen_range(1..=1500), 2),
        amortization_period: Decimal::from(years),
        payment_schedule: schedule.to_string(),
    }
}
