//! The merge engine: vendor indices applied to the bid workbook.
//!
//! A run moves through indexing, lead-time translation, backup, and apply as
//! one synchronous sequence. Vendor files that fail to open become warnings
//! and the run continues; anything that goes wrong with the bid file itself
//! is fatal and happens before any cell is written.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, info, warn};

use crate::error::{MergeError, Result};
use crate::index::{PartIndex, index_columns, translate_lead_times};
use crate::workbook::BidWorkbook;

/// Vendor sheet layout: part number in column C, price in H, lead time in L.
pub const VENDOR_KEY_COL: usize = 2;
pub const VENDOR_PRICE_COL: usize = 7;
pub const VENDOR_LEAD_TIME_COL: usize = 11;

/// Bid sheet layout: part number in column F, price in K, lead time in P.
pub const BID_KEY_COL: usize = 5;
pub const BID_PRICE_COL: usize = 10;
pub const BID_LEAD_TIME_COL: usize = 15;

/// Outcome of one merge run.
#[derive(Debug, Clone, Default)]
pub struct MergeReport {
    /// Distinct part numbers matched in either index, counted once each.
    pub found_keys: usize,
    /// Price cells rewritten in the bid workbook.
    pub updated_price_cells: usize,
    /// Lead-time cells rewritten in the bid workbook.
    pub updated_lead_time_cells: usize,
    /// Vendor scans that failed; the run continued without them.
    pub vendor_warnings: Vec<String>,
}

/// Reconciles prices and lead times from `vendor_paths` into the bid workbook
/// at `bid_path`.
///
/// Builds a price index (C → H) and a lead-time index (C → L) across all
/// vendor files in list order, translates lead-time markers, backs up the bid
/// file, then fills matching bid rows (key F, price K as a numeric cell,
/// lead time P as a string cell). The bid workbook is persisted only when at
/// least one cell changed; "nothing to update" is a valid outcome, not an
/// error.
pub fn merge(vendor_paths: &[PathBuf], bid_path: &Path) -> Result<MergeReport> {
    run(vendor_paths, bid_path, &backup_path(bid_path))
}

fn run(vendor_paths: &[PathBuf], bid_path: &Path, backup: &Path) -> Result<MergeReport> {
    let mut price_index = PartIndex::new();
    let mut lead_time_index = PartIndex::new();
    let mut vendor_warnings = Vec::new();

    for path in vendor_paths {
        for (index, value_col) in [
            (&mut price_index, VENDOR_PRICE_COL),
            (&mut lead_time_index, VENDOR_LEAD_TIME_COL),
        ] {
            if let Err(error) = index_columns(index, path, VENDOR_KEY_COL, value_col) {
                warn!(file = %path.display(), %error, "vendor file skipped");
                vendor_warnings.push(error.to_string());
            }
        }
    }

    let lead_time_index = translate_lead_times(lead_time_index);
    info!(
        prices = price_index.len(),
        lead_times = lead_time_index.len(),
        vendors = vendor_paths.len(),
        "vendor files indexed"
    );

    if price_index.is_empty() && lead_time_index.is_empty() {
        return Err(MergeError::NoData);
    }

    let mut workbook = BidWorkbook::open(bid_path)?;

    // Backup must be confirmed on disk before the first cell write.
    workbook.save_as(backup)?;
    info!(backup = %backup.display(), "bid workbook backed up");

    let mut found = BTreeSet::new();
    let mut updated_price_cells = 0usize;
    let mut updated_lead_time_cells = 0usize;
    for sheet_name in workbook.sheet_names() {
        let rows = workbook.rows(&sheet_name);
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() < BID_KEY_COL + 1 {
                continue;
            }
            let key = row[BID_KEY_COL].trim().to_lowercase();
            if key.is_empty() {
                continue;
            }

            if let Some(price) = price_index.get(&key) {
                found.insert(key.clone());
                // Non-numeric prices are never written, but the key still
                // counts as found.
                if let Ok(parsed) = price.parse::<f64>() {
                    if !price_matches(row.get(BID_PRICE_COL), price, parsed) {
                        workbook.set_cell_numeric(&sheet_name, row_idx, BID_PRICE_COL, parsed);
                        updated_price_cells += 1;
                        debug!(sheet = %sheet_name, row = row_idx, %key, %price, "price updated");
                    }
                }
            }

            if let Some(lead_time) = lead_time_index.get(&key) {
                found.insert(key.clone());
                if row
                    .get(BID_LEAD_TIME_COL)
                    .is_none_or(|existing| existing != lead_time)
                {
                    workbook.set_cell_string(&sheet_name, row_idx, BID_LEAD_TIME_COL, lead_time);
                    updated_lead_time_cells += 1;
                    debug!(sheet = %sheet_name, row = row_idx, %key, %lead_time, "lead time updated");
                }
            }
        }
    }

    if updated_price_cells != 0 || updated_lead_time_cells != 0 {
        workbook.save()?;
    }
    info!(
        found_keys = found.len(),
        updated_price_cells, updated_lead_time_cells, "merge complete"
    );

    Ok(MergeReport {
        found_keys: found.len(),
        updated_price_cells,
        updated_lead_time_cells,
        vendor_warnings,
    })
}

/// True when the existing bid cell already carries the mapped price, either
/// textually or numerically. Numeric comparison matters because a numeric
/// cell round-trips "12.50" as "12.5"; without it a re-run would rewrite
/// every matched price. A row too short to contain the cell counts as
/// different.
fn price_matches(existing: Option<&String>, mapped: &str, parsed: f64) -> bool {
    existing.is_some_and(|cell| {
        cell == mapped || cell.parse::<f64>().is_ok_and(|value| value == parsed)
    })
}

/// Backup file next to the bid file, named by local wall-clock time at
/// microsecond precision. Two runs in the same microsecond overwrite, which
/// is acceptable.
fn backup_path(bid_path: &Path) -> PathBuf {
    bid_path.with_file_name(format!(
        "backup.{}.xlsx",
        Local::now().format("%Y%m%d.%H%M%S%.6f")
    ))
}
