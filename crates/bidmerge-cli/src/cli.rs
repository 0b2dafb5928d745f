//! CLI argument definitions for bidmerge.

use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(
    name = "bidmerge",
    version,
    about = "Fill bid-sheet prices and lead times from vendor quote spreadsheets",
    long_about = "Scan vendor quote spreadsheets for part numbers (column C), prices (column H),\n\
                  and lead times (column L), then fill the matching rows of the bid spreadsheet\n\
                  (part number F, price K, lead time P).\n\n\
                  A timestamped backup of the bid file is written next to it before anything\n\
                  is changed."
)]
pub struct Cli {
    /// Vendor quote files (.xlsx); later files win on duplicate part numbers.
    #[arg(value_name = "VENDOR_FILE", required = true, num_args = 1..)]
    pub vendor_files: Vec<PathBuf>,

    /// The bid file (.xlsx) to update in place.
    #[arg(long = "bid", short = 'b', value_name = "BID_FILE")]
    pub bid_file: PathBuf,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}
