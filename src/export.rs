//! CSV export and import for rent schedules
//!
//! One row per lease year with a header row, full precision (rounding for
//! display is left to whatever opens the file).

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use thiserror::Error;

use crate::projection::YearRecord;

/// Failure while writing or re-reading a schedule CSV
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write a schedule as CSV to any writer
///
/// Columns: year, mg_rent, revenue, revenue_share, final_rent.
pub fn write_schedule<W: Write>(writer: W, schedule: &[YearRecord]) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in schedule {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read a schedule back from CSV produced by [`write_schedule`]
pub fn read_schedule<R: Read>(reader: R) -> Result<Vec<YearRecord>, ExportError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut schedule = Vec::new();
    for record in rdr.deserialize() {
        schedule.push(record?);
    }
    Ok(schedule)
}

/// Write a schedule CSV to a file path
pub fn write_schedule_csv<P: AsRef<Path>>(path: P, schedule: &[YearRecord]) -> Result<(), ExportError> {
    write_schedule(File::create(path)?, schedule)
}

/// Read a schedule CSV from a file path
pub fn read_schedule_csv<P: AsRef<Path>>(path: P) -> Result<Vec<YearRecord>, ExportError> {
    read_schedule(File::open(path)?)
}
