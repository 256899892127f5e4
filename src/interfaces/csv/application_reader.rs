use crate::error::{MortgageError, Result};
use crate::interfaces::input::QuoteInput;
use std::io::Read;

/// Reads pricing requests from a CSV source.
///
/// Expects the header
/// `property_price,down_payment,annual_interest_rate,amortization_period,payment_schedule`.
/// Whitespace around fields is trimmed and short records are accepted; missing
/// trailing columns read as absent fields.
pub struct LoanApplicationReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> LoanApplicationReader<R> {
    /// Wraps a CSV byte stream whose first record is the header row.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes one request per record.
    pub fn applications(self) -> impl Iterator<Item = Result<QuoteInput>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(MortgageError::from))
    }
}
