//! CLI result presenter.

use fitcalc_core::calculator::WorkoutError;
use fitcalc_core::record::WorkoutRecord;
use fitcalc_orchestration::interfaces::{BatchSummary, ResultPresenter};

use crate::output::{format_json, format_record};

/// Output format for records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed one-line summary.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// CLI result presenter. Records go to stdout, errors to stderr.
pub struct CLIResultPresenter {
    format: OutputFormat,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// Render a record in the configured format.
    #[must_use]
    pub fn render(&self, record: &WorkoutRecord) -> String {
        match self.format {
            OutputFormat::Text => format_record(record),
            OutputFormat::Json => format_json(record).unwrap_or_else(|_| format_record(record)),
        }
    }

    /// Print the batch totals when something failed.
    pub fn present_summary(&self, summary: &BatchSummary) {
        if self.quiet || summary.is_success() {
            return;
        }
        eprintln!(
            "{} of {} packages failed",
            summary.failed, summary.processed
        );
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_record(&self, record: &WorkoutRecord) {
        println!("{}", self.render(record));
    }

    fn present_error(&self, code: &str, error: &WorkoutError) {
        if self.quiet {
            return;
        }
        eprintln!("Error: {code}: {error}");
    }
}
