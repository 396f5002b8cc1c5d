//! Application configuration from CLI flags and environment.

use clap::Parser;

use fitcalc_cli::presenter::OutputFormat;
use fitcalc_orchestration::interfaces::BatchPolicy;
use fitcalc_orchestration::package::{demo_packages, Package};

/// FitCalc-rs: distance, mean speed, and calories from workout sensor packages.
#[derive(Parser, Debug)]
#[command(name = "fitcalc", version, about)]
pub struct AppConfig {
    /// Workout package as CODE:v1,v2,... (RUN, WLK, or SWM). Repeatable.
    /// The built-in demo packages are used when none is given.
    #[arg(
        short,
        long = "workout",
        value_name = "PACKAGE",
        env = "FITCALC_WORKOUTS",
        value_delimiter = ';'
    )]
    pub workouts: Vec<Package>,

    /// Stop at the first malformed package.
    #[arg(long)]
    pub fail_fast: bool,

    /// Print records as JSON lines.
    #[arg(long)]
    pub json: bool,

    /// Do not print per-package errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// List recognized workout codes and exit.
    #[arg(long)]
    pub list_kinds: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Packages to process, in order.
    #[must_use]
    pub fn packages(&self) -> Vec<Package> {
        if self.workouts.is_empty() {
            demo_packages()
        } else {
            self.workouts.clone()
        }
    }

    /// What to do after a failed package.
    #[must_use]
    pub fn policy(&self) -> BatchPolicy {
        if self.fail_fast {
            BatchPolicy::FailFast
        } else {
            BatchPolicy::Continue
        }
    }

    /// Record output format.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_from(args: &[&str]) -> AppConfig {
        <AppConfig as Parser>::try_parse_from(args).unwrap()
    }

    #[test]
    fn defaults_to_demo_packages() {
        let config = parse_from(&["fitcalc"]);
        assert_eq!(config.packages(), demo_packages());
        assert_eq!(config.policy(), BatchPolicy::Continue);
        assert_eq!(config.output_format(), OutputFormat::Text);
    }

    #[test]
    fn repeated_workouts_keep_order() {
        let config = parse_from(&["fitcalc", "-w", "RUN:15000,1,75", "--workout", "SWM:720,1,80,25,40"]);
        let codes: Vec<_> = config.packages().into_iter().map(|p| p.code).collect();
        assert_eq!(codes, ["RUN", "SWM"]);
    }

    #[test]
    fn semicolon_delimited_workouts() {
        let config = parse_from(&["fitcalc", "-w", "RUN:15000,1,75;WLK:9000,1,75,180"]);
        assert_eq!(config.packages().len(), 2);
    }

    #[test]
    fn malformed_package_rejected() {
        assert!(<AppConfig as Parser>::try_parse_from(["fitcalc", "-w", "RUN"]).is_err());
    }

    #[test]
    fn flags() {
        let config = parse_from(&["fitcalc", "--fail-fast", "--json"]);
        assert_eq!(config.policy(), BatchPolicy::FailFast);
        assert_eq!(config.output_format(), OutputFormat::Json);
    }
}
