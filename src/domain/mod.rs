//! Domain layer: loan value types and the lending rules applied to them.

pub mod insurance;
pub mod loan;
pub mod rules;
