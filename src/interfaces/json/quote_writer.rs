use crate::domain::loan::PaymentResult;
use crate::error::{MortgageError, Result};
use serde::Serialize;
use std::io::Write;

/// The response returned to a caller: a payment or an error message, never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QuoteResponse {
    Payment(PaymentResult),
    Error { error: String },
}

impl QuoteResponse {
    pub fn is_error(&self) -> bool {
        matches!(self, QuoteResponse::Error { .. })
    }
}

impl From<Result<PaymentResult>> for QuoteResponse {
    fn from(result: Result<PaymentResult>) -> Self {
        match result {
            Ok(payment) => QuoteResponse::Payment(payment),
            Err(e) => QuoteResponse::from(e),
        }
    }
}

impl From<MortgageError> for QuoteResponse {
    fn from(e: MortgageError) -> Self {
        QuoteResponse::Error {
            error: e.to_string(),
        }
    }
}

/// Writes responses as JSON lines, one compact object per line.
pub struct QuoteWriter<W: Write> {
    writer: W,
}

impl<W: Write> QuoteWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_response(&mut self, response: &QuoteResponse) -> Result<()> {
        serde_json::to_writer(&mut self.writer, response)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
