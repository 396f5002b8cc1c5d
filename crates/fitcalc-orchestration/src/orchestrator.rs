//! Core orchestration: sequential batch execution and result analysis.

use tracing::{debug, info, warn};

use fitcalc_core::calculator::{Calculator, WorkoutError};
use fitcalc_core::record::WorkoutRecord;
use fitcalc_core::registry::WorkoutFactory;

use crate::interfaces::{BatchPolicy, BatchSummary, NullPresenter, ResultPresenter, WorkoutOutcome};
use crate::package::Package;

/// Process every package in order.
pub fn execute_batch(
    packages: &[Package],
    factory: &dyn WorkoutFactory,
    policy: BatchPolicy,
) -> Vec<WorkoutOutcome> {
    execute_batch_with_presenter(packages, factory, policy, &NullPresenter)
}

/// Process every package in order, presenting each outcome as soon as it
/// is known.
pub fn execute_batch_with_presenter(
    packages: &[Package],
    factory: &dyn WorkoutFactory,
    policy: BatchPolicy,
    presenter: &dyn ResultPresenter,
) -> Vec<WorkoutOutcome> {
    let mut results = Vec::with_capacity(packages.len());

    for (index, package) in packages.iter().enumerate() {
        let outcome = process_package(package, factory);

        match &outcome {
            Ok(record) => {
                debug!(index, code = %package.code, "package processed");
                presenter.present_record(record);
            }
            Err(e) => {
                warn!(index, code = %package.code, error = %e, "package failed");
                presenter.present_error(&package.code, e);
            }
        }

        let failed = outcome.is_err();
        results.push(WorkoutOutcome {
            code: package.code.clone(),
            outcome,
        });

        if failed && policy == BatchPolicy::FailFast {
            info!(
                skipped = packages.len() - index - 1,
                "stopping batch at first failure"
            );
            break;
        }
    }

    results
}

fn process_package(
    package: &Package,
    factory: &dyn WorkoutFactory,
) -> Result<WorkoutRecord, WorkoutError> {
    factory.resolve(&package.code, &package.raw)?.report()
}

/// Count processed and failed packages.
pub fn summarize_batch(results: &[WorkoutOutcome]) -> BatchSummary {
    BatchSummary {
        processed: results.len(),
        failed: results.iter().filter(|r| r.outcome.is_err()).count(),
    }
}

/// The first error in a batch, if any.
pub fn first_error(results: &[WorkoutOutcome]) -> Option<&WorkoutError> {
    results.iter().find_map(|r| r.outcome.as_ref().err())
}
