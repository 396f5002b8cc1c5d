//! # fitcalc-orchestration
//!
//! Workout packages, sequential batch execution, and result analysis.

pub mod interfaces;
pub mod orchestrator;
pub mod package;

pub use interfaces::{BatchPolicy, BatchSummary, ResultPresenter, WorkoutOutcome};
pub use orchestrator::{execute_batch, execute_batch_with_presenter, summarize_batch};
pub use package::{demo_packages, Package};
