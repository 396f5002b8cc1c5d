//! FitCalc-rs: workout statistics calculator.

use anyhow::Result;
use fitcalc_lib::{app, config};
use tracing::Level;

fn main() -> Result<()> {
    // Parse CLI args first so --verbose can raise the log level
    let config = config::AppConfig::parse();
    let level = if config.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    // Initialize tracing; stdout is reserved for reports
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let code = app::run(&config)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
