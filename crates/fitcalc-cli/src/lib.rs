//! # fitcalc-cli
//!
//! Workout report formatting, the stdout presenter, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;

pub use output::{format_json, format_record};
pub use presenter::{CLIResultPresenter, OutputFormat};
