//! Boundary adapters: request intake, CSV batch input and JSON responses.

pub mod csv;
pub mod input;
pub mod json;
