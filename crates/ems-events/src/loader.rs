//! CSV call-stream loader.
//!
//! # CSV format
//!
//! One row per call.  Times are simulated minutes since the start of the
//! stream.
//!
//! ```csv
//! time,treatment_minutes,latitude,longitude,hospital_required
//! 3.71,0.052,53.512,-113.488,1
//! 9.02,0.110,53.640,-113.371,0
//! ```
//!
//! **`hospital_required`** accepts `1`/`0` or `true`/`false`.
//!
//! Rows need not be sorted; the result is sorted by time (stable, so equal
//! times keep file order).  Non-finite or negative times and treatment
//! durations are rejected, as are coordinates that are not finite or fall
//! outside [-90, 90] latitude and [-180, 180] longitude.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ems_core::{GeoPoint, SimTime};

use crate::{CallEvent, EventError};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CallRecord {
    time:              f64,
    treatment_minutes: f64,
    latitude:          f64,
    longitude:         f64,
    hospital_required: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a call stream from a CSV file.
pub fn load_calls_csv(path: &Path) -> Result<Vec<CallEvent>, EventError> {
    let file = std::fs::File::open(path)
        .map_err(EventError::Io)?;
    load_calls_reader(file)
}

/// Like [`load_calls_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for streams that do not
/// live on disk.
pub fn load_calls_reader<R: Read>(reader: R) -> Result<Vec<CallEvent>, EventError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut calls = Vec::new();

    for (row_no, result) in csv_reader.deserialize::<CallRecord>().enumerate() {
        let r = result.map_err(|e| EventError::Parse(e.to_string()))?;
        // +2: header line, and rows are 1-based for humans
        let line = row_no + 2;

        if !(r.time.is_finite() && r.time >= 0.0) {
            return Err(EventError::Parse(format!("line {line}: invalid time {}", r.time)));
        }
        if !(r.treatment_minutes.is_finite() && r.treatment_minutes >= 0.0) {
            return Err(EventError::Parse(format!(
                "line {line}: invalid treatment_minutes {}",
                r.treatment_minutes
            )));
        }
        if !(r.latitude.is_finite() && (-90.0..=90.0).contains(&r.latitude)) {
            return Err(EventError::Parse(format!("line {line}: invalid latitude {}", r.latitude)));
        }
        if !(r.longitude.is_finite() && (-180.0..=180.0).contains(&r.longitude)) {
            return Err(EventError::Parse(format!("line {line}: invalid longitude {}", r.longitude)));
        }

        calls.push(CallEvent {
            time:              SimTime(r.time),
            treatment_minutes: r.treatment_minutes,
            location:          GeoPoint::new(r.latitude, r.longitude),
            hospital_required: parse_flag(&r.hospital_required)
                .map_err(|msg| EventError::Parse(format!("line {line}: {msg}")))?,
        });
    }

    calls.sort_by(|a, b| a.time.cmp(&b.time));
    Ok(calls)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_flag(s: &str) -> Result<bool, String> {
    match s.trim() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        other => Err(format!(
            "invalid hospital_required {other:?}: expected 0, 1, true, or false"
        )),
    }
}
