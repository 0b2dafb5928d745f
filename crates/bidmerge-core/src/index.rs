//! Part-number index construction.
//!
//! An index maps a normalized part number (lower-cased, trimmed) to a trimmed
//! cell value. One accumulator is threaded across every vendor file, so a part
//! number quoted by several vendors keeps the value from the file scanned
//! last.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::error::IndexError;
use crate::workbook;

/// Mapping from normalized part number to a trimmed cell value.
pub type PartIndex = BTreeMap<String, String>;

/// Scans every sheet of the workbook at `path` and folds (key, value) column
/// pairs into `index`.
///
/// Rows too short to contain both columns are skipped, as are rows where
/// either cell is empty after trimming. Duplicate keys overwrite: last write
/// wins in sheet-order then row-order. On an open failure the accumulator is
/// left untouched.
pub fn index_columns(
    index: &mut PartIndex,
    path: &Path,
    key_col: usize,
    value_col: usize,
) -> Result<(), IndexError> {
    let sheets = workbook::read_sheets(path)?;
    for (sheet_name, rows) in sheets {
        let mut entries = 0usize;
        for row in &rows {
            if row.len() < key_col.max(value_col) + 1 {
                continue;
            }
            let key = row[key_col].trim().to_lowercase();
            let value = row[value_col].trim();
            if key.is_empty() || value.is_empty() {
                continue;
            }
            index.insert(key, value.to_string());
            entries += 1;
        }
        debug!(file = %path.display(), sheet = %sheet_name, entries, "indexed sheet");
    }
    Ok(())
}

/// Rewrites vendor lead-time markers into English: "周" (weeks) becomes
/// " wks" and "现货" (in stock) becomes "In stock".
///
/// A pure pass over the values, applied once after all vendor files are
/// indexed. The price index never goes through this.
pub fn translate_lead_times(index: PartIndex) -> PartIndex {
    index
        .into_iter()
        .map(|(key, value)| {
            let value = value.replace('周', " wks").replace("现货", "In stock");
            (key, value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_week_marker() {
        let mut index = PartIndex::new();
        index.insert("p100".to_string(), "2周".to_string());
        let index = translate_lead_times(index);
        assert_eq!(index["p100"], "2 wks");
    }

    #[test]
    fn translates_in_stock_marker() {
        let mut index = PartIndex::new();
        index.insert("p200".to_string(), "现货".to_string());
        let index = translate_lead_times(index);
        assert_eq!(index["p200"], "In stock");
    }

    #[test]
    fn leaves_plain_values_alone() {
        let mut index = PartIndex::new();
        index.insert("p300".to_string(), "6-8 weeks".to_string());
        let index = translate_lead_times(index);
        assert_eq!(index["p300"], "6-8 weeks");
    }
}
