//! Spreadsheet Extraction Glue
//!
//! Thin wrapper over `calamine` that pulls named environmental
//! measurements out of logger export workbooks: open a workbook, select a
//! worksheet by index, locate header cells by regex (including headers
//! split across two adjacent rows), and read numeric cells. Produces
//! plain numbers for a [`crate::Measurements`] bag; all heat load
//! arithmetic lives in [`crate::hli`].

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use regex::Regex;
use tracing::debug;

use crate::error::HliError;

/// An open `.xlsx` workbook.
pub type Workbook = Xlsx<BufReader<File>>;

/// Open a workbook for reading.
pub fn read(path: impl AsRef<Path>) -> Result<Workbook> {
    let path = path.as_ref();
    open_workbook(path).with_context(|| format!("failed to open workbook: {}", path.display()))
}

/// Select a worksheet by zero-based index.
pub fn worksheet(workbook: &mut Workbook, index: usize) -> Result<Range<Data>> {
    workbook
        .worksheet_range_at(index)
        .ok_or_else(|| anyhow!("no worksheet at index: {index}"))?
        .with_context(|| format!("failed to read worksheet at index: {index}"))
}

/// Locate the first cell whose text matches `pattern`.
///
/// Returns zero-based `(row, column)` in workbook coordinates.
pub fn find_header(range: &Range<Data>, pattern: &Regex) -> Option<(u32, u32)> {
    let (start_row, start_col) = range.start()?;

    for (row_offset, row) in range.rows().enumerate() {
        for (col_offset, cell) in row.iter().enumerate() {
            if let Data::String(text) = cell {
                if pattern.is_match(text) {
                    let pos = (start_row + row_offset as u32, start_col + col_offset as u32);
                    debug!(pattern = %pattern, row = pos.0, col = pos.1, "header matched");
                    return Some(pos);
                }
            }
        }
    }

    None
}

/// Locate a header split across two adjacent rows.
///
/// Scans for cells matching `first` and returns the position of the cell
/// directly beneath the earliest such match whose text matches `second`.
/// A `first` match with anything else beneath it is skipped.
pub fn find_split_header(
    range: &Range<Data>,
    first: &Regex,
    second: &Regex,
) -> Option<(u32, u32)> {
    let (start_row, start_col) = range.start()?;

    for (row_offset, row) in range.rows().enumerate() {
        for (col_offset, cell) in row.iter().enumerate() {
            let Data::String(text) = cell else { continue };
            if !first.is_match(text) {
                continue;
            }

            let below = (
                start_row + row_offset as u32 + 1,
                start_col + col_offset as u32,
            );
            if let Some(Data::String(below_text)) = range.get_value(below) {
                if second.is_match(below_text) {
                    debug!(row = below.0, col = below.1, "split header matched");
                    return Some(below);
                }
            }
        }
    }

    None
}

/// Read a cell as a number.
///
/// Non-numeric content fails as [`HliError::InvalidInputType`] with the
/// offending cell text embedded, so a mistyped logger export surfaces the
/// same way as any other bad measurement.
pub fn numeric_cell(
    range: &Range<Data>,
    row: u32,
    col: u32,
) -> std::result::Result<f64, HliError> {
    match range.get_value((row, col)) {
        Some(Data::Float(value)) => Ok(*value),
        Some(Data::Int(value)) => Ok(*value as f64),
        other => Err(HliError::InvalidInputType {
            field: "worksheet cell",
            value: other.map_or_else(|| "empty".to_string(), |cell| cell.to_string()),
        }),
    }
}
