//! CSV shift loader.
//!
//! # CSV format
//!
//! One row per shift:
//!
//! ```csv
//! start,end
//! 1,2
//! 2,3
//! 1,3
//! ```
//!
//! Row order is preserved.  Degenerate shifts (`end <= start`) are loaded
//! unchanged.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{ScheduleError, ScheduleResult, Shift};

#[derive(Deserialize)]
struct ShiftRecord {
    start: i32,
    end:   i32,
}

/// Load shifts from a CSV file.
pub fn load_shifts_csv(path: &Path) -> ScheduleResult<Vec<Shift>> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_shifts_reader(file)
}

/// Like [`load_shifts_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_shifts_reader<R: Read>(reader: R) -> ScheduleResult<Vec<Shift>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    csv_reader
        .deserialize::<ShiftRecord>()
        .map(|row| {
            let row = row.map_err(|e| ScheduleError::Parse(e.to_string()))?;
            Ok(Shift::new(row.start, row.end))
        })
        .collect()
}
