//! FitCalc-rs library: application logic for the workout calculator.

pub mod app;
pub mod config;
pub mod errors;
