//! Fibonaccier library: application logic for the race binary.

pub mod app;
pub mod config;
pub mod errors;
