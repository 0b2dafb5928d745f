//! Bid-sheet price and lead-time reconciliation.
//!
//! This crate indexes part numbers across vendor quote workbooks and fills
//! the matching rows of a bid workbook:
//!
//! - **Indexing**: every sheet of every vendor file is scanned for part
//!   numbers (column C) mapped to prices (column H) and lead times
//!   (column L). Later files win on duplicate part numbers.
//! - **Merging**: bid rows are matched by part number (column F) and the
//!   price (column K) and lead time (column P) cells are rewritten when they
//!   differ. A timestamped backup of the bid file is written before any
//!   mutation, and the workbook is only persisted when something changed.
//!
//! # Example
//!
//! ```ignore
//! use std::path::{Path, PathBuf};
//! use bidmerge_core::merge;
//!
//! let vendors = vec![PathBuf::from("vendor_a.xlsx"), PathBuf::from("vendor_b.xlsx")];
//! let report = merge(&vendors, Path::new("bid.xlsx"))?;
//! println!("{} part number(s) matched", report.found_keys);
//! ```

pub mod error;
pub mod index;
pub mod merge;
pub mod workbook;

pub use error::{IndexError, MergeError, Result};
pub use index::{PartIndex, index_columns, translate_lead_times};
pub use merge::{MergeReport, merge};
