//! Human-readable summary of a merge run.

use bidmerge_core::MergeReport;

pub fn print_summary(report: &MergeReport, vendor_count: usize) {
    println!(
        "{} matching part number(s) found from {} vendor file(s).",
        report.found_keys, vendor_count
    );
    println!("{} price cell(s) updated.", report.updated_price_cells);
    println!(
        "{} lead time cell(s) updated.",
        report.updated_lead_time_cells
    );
    for warning in &report.vendor_warnings {
        eprintln!("warning: {warning}");
    }
}
