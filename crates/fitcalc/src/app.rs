//! Application entry point and dispatch.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use fitcalc_cli::presenter::CLIResultPresenter;
use fitcalc_core::registry::{Dispatcher, WorkoutFactory};
use fitcalc_orchestration::orchestrator::{execute_batch_with_presenter, summarize_batch};

use crate::config::AppConfig;
use crate::errors::batch_exit_code;

/// Run the application and return the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fitcalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(0);
    }

    let dispatcher = Dispatcher::new();

    if config.list_kinds {
        for code in dispatcher.available() {
            println!("{code}");
        }
        return Ok(0);
    }

    run_batch(config, &dispatcher)
}

fn run_batch(config: &AppConfig, factory: &dyn WorkoutFactory) -> Result<i32> {
    let packages = config.packages();
    let presenter = CLIResultPresenter::new(config.output_format(), config.quiet);

    let results = execute_batch_with_presenter(&packages, factory, config.policy(), &presenter);
    std::io::stdout()
        .flush()
        .context("failed to flush report output")?;

    let summary = summarize_batch(&results);
    info!(
        processed = summary.processed,
        failed = summary.failed,
        "batch complete"
    );
    presenter.present_summary(&summary);

    Ok(batch_exit_code(&results))
}
