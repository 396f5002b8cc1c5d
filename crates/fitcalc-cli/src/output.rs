//! CLI output formatting.
//!
//! Numbers are printed with `{:.3}`: the exact binary value is rounded to
//! three fractional digits, exact ties going to the even digit.

use fitcalc_core::record::WorkoutRecord;

/// Format a record as the fixed one-line summary.
#[must_use]
pub fn format_record(record: &WorkoutRecord) -> String {
    format!(
        "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; Mean speed: {:.3} km/h; Calories burned: {:.3}.",
        record.kind(),
        record.duration(),
        record.distance(),
        record.mean_speed(),
        record.calories(),
    )
}

/// Format a record as one line of JSON.
pub fn format_json(record: &WorkoutRecord) -> serde_json::Result<String> {
    serde_json::to_string(record)
}
