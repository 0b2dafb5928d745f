//! The spreadsheet codec boundary.
//!
//! Vendor files are scanned read-only through `calamine`; the bid workbook is
//! opened, mutated, and persisted through `umya-spreadsheet`. Everything above
//! this module deals in 0-indexed (row, column) pairs — the 1-based (column,
//! row) addressing the codecs use never leaks out.

use std::path::{Path, PathBuf};

use calamine::{Data, Reader, open_workbook_auto};
use tracing::warn;

use crate::error::{IndexError, MergeError};

/// All sheets of a workbook, in the workbook's own enumeration order, as rows
/// of cell strings.
pub type SheetRows = Vec<(String, Vec<Vec<String>>)>;

/// Reads every sheet of the workbook at `path`.
///
/// A sheet that cannot be read is skipped with a warning; partial results are
/// fine for index aggregation. Rows are padded on the left when the sheet's
/// used range does not start at column A, so cell positions stay absolute.
pub fn read_sheets(path: &Path) -> Result<SheetRows, IndexError> {
    let mut workbook = open_workbook_auto(path).map_err(|error| IndexError::Open {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;

    let sheet_names = workbook.sheet_names().to_owned();
    let mut sheets = Vec::with_capacity(sheet_names.len());
    for name in sheet_names {
        let range = match workbook.worksheet_range(&name) {
            Ok(range) => range,
            Err(error) => {
                warn!(file = %path.display(), sheet = %name, %error, "skipping unreadable sheet");
                continue;
            }
        };
        let leading_cols = range.start().map_or(0, |(_, col)| col as usize);
        let rows = range
            .rows()
            .map(|row| {
                let mut cells = vec![String::new(); leading_cols];
                cells.extend(row.iter().map(cell_to_string));
                cells
            })
            .collect();
        sheets.push((name, rows));
    }
    Ok(sheets)
}

/// Converts a cell to its string form; empty, blank, and error cells all
/// become the empty string.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Float(f) => {
            // Whole floats print without the trailing ".0".
            if *f == f.floor() && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(_) | Data::Empty => String::new(),
    }
}

/// The bid workbook: opened once per merge run, mutated in memory, persisted
/// explicitly via [`save`](Self::save) or copied via [`save_as`](Self::save_as).
pub struct BidWorkbook {
    book: umya_spreadsheet::Spreadsheet,
    path: PathBuf,
}

impl BidWorkbook {
    /// Opens the bid workbook at `path`.
    pub fn open(path: &Path) -> Result<Self, MergeError> {
        let book = umya_spreadsheet::reader::xlsx::read(path).map_err(|error| MergeError::Open {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
        Ok(Self {
            book,
            path: path.to_path_buf(),
        })
    }

    /// Sheet names in the workbook's enumeration order.
    pub fn sheet_names(&self) -> Vec<String> {
        self.book
            .get_sheet_collection()
            .iter()
            .map(|sheet| sheet.get_name().to_string())
            .collect()
    }

    /// All rows of `sheet_name` as cell strings, 0-indexed, with trailing
    /// empty cells dropped so short rows read as short. An unknown sheet name
    /// yields no rows.
    pub fn rows(&self, sheet_name: &str) -> Vec<Vec<String>> {
        let Some(sheet) = self.book.get_sheet_by_name(sheet_name) else {
            return Vec::new();
        };
        let max_col = sheet.get_highest_column();
        let max_row = sheet.get_highest_row();
        let mut rows = Vec::with_capacity(max_row as usize);
        for row in 1..=max_row {
            let mut cells: Vec<String> = (1..=max_col)
                .map(|col| sheet.get_value((col, row)))
                .collect();
            while cells.last().is_some_and(|cell| cell.is_empty()) {
                cells.pop();
            }
            rows.push(cells);
        }
        rows
    }

    /// Writes a numeric-formatted cell at the 0-indexed (row, column).
    pub fn set_cell_numeric(&mut self, sheet_name: &str, row: usize, col: usize, value: f64) {
        if let Some(sheet) = self.book.get_sheet_by_name_mut(sheet_name) {
            sheet
                .get_cell_mut((col as u32 + 1, row as u32 + 1))
                .set_value_number(value);
        }
    }

    /// Writes a plain string cell at the 0-indexed (row, column).
    pub fn set_cell_string(&mut self, sheet_name: &str, row: usize, col: usize, value: &str) {
        if let Some(sheet) = self.book.get_sheet_by_name_mut(sheet_name) {
            sheet
                .get_cell_mut((col as u32 + 1, row as u32 + 1))
                .set_value_string(value);
        }
    }

    /// Persists the workbook in place, overwriting the file it was opened
    /// from.
    pub fn save(&self) -> Result<(), MergeError> {
        umya_spreadsheet::writer::xlsx::write(&self.book, &self.path).map_err(|error| {
            MergeError::Save {
                path: self.path.clone(),
                message: error.to_string(),
            }
        })
    }

    /// Writes an unmodified copy of the workbook to `path`. Used for the
    /// pre-mutation backup, so failures surface as [`MergeError::Backup`].
    pub fn save_as(&self, path: &Path) -> Result<(), MergeError> {
        umya_spreadsheet::writer::xlsx::write(&self.book, path).map_err(|error| {
            MergeError::Backup {
                path: path.to_path_buf(),
                message: error.to_string(),
            }
        })
    }
}
