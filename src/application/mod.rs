//! Application layer containing the mortgage pricing orchestration.
//!
//! This module defines the `MortgageEngine`, the single entry point that
//! validates a loan application and turns it into a periodic payment.

pub mod engine;
