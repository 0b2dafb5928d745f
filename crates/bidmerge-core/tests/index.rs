use std::path::Path;

use tempfile::TempDir;

use bidmerge_core::IndexError;
use bidmerge_core::index::{PartIndex, index_columns};

/// Writes an xlsx workbook with the given sheets, each a grid of cell
/// strings. Empty strings leave the cell unset.
fn write_workbook(path: &Path, sheets: &[(&str, &[&[&str]])]) {
    let mut book = umya_spreadsheet::new_file();
    for (i, (name, rows)) in sheets.iter().enumerate() {
        let sheet = if i == 0 {
            let sheet = book.get_sheet_mut(&0).expect("default sheet");
            sheet.set_name(*name);
            sheet
        } else {
            book.new_sheet(*name).expect("new sheet")
        };
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if !cell.is_empty() {
                    sheet
                        .get_cell_mut(((c + 1) as u32, (r + 1) as u32))
                        .set_value(*cell);
                }
            }
        }
    }
    umya_spreadsheet::writer::xlsx::write(&book, path).expect("write workbook");
}

#[test]
fn normalizes_keys_and_skips_incomplete_rows() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("vendor.xlsx");
    write_workbook(
        &path,
        &[(
            "Quotes",
            &[
                // key in column C (2), value in column H (7)
                &["", "", "  PN-100  ", "", "", "", "", "  12.5  "],
                // value missing: row skipped
                &["", "", "PN-200", "", "", "", "", ""],
                // key missing: row skipped
                &["", "", "", "", "", "", "", "42"],
                // nothing in the value column: skipped
                &["", "", "PN-300", "9"],
            ],
        )],
    );

    let mut index = PartIndex::new();
    index_columns(&mut index, &path, 2, 7).expect("index vendor file");

    assert_eq!(index.len(), 1);
    assert_eq!(index["pn-100"], "12.5");
    assert!(!index.contains_key("pn-200"));
    assert!(!index.contains_key("pn-300"));
}

#[test]
fn last_write_wins_across_sheets_and_files() {
    let dir = TempDir::new().expect("temp dir");
    let first = dir.path().join("vendor_a.xlsx");
    let second = dir.path().join("vendor_b.xlsx");
    // Non-whole prices, so the values survive the numeric-cell round trip
    // unchanged.
    write_workbook(
        &first,
        &[
            (
                "Sheet1",
                &[&["", "", "PN-100", "", "", "", "", "1.5"] as &[&str]],
            ),
            (
                "Sheet2",
                &[&["", "", "pn-100", "", "", "", "", "2.5"] as &[&str]],
            ),
        ],
    );
    write_workbook(
        &second,
        &[(
            "Sheet1",
            &[&["", "", "PN-100", "", "", "", "", "3.5"] as &[&str]],
        )],
    );

    let mut index = PartIndex::new();
    index_columns(&mut index, &first, 2, 7).expect("index first file");
    assert_eq!(index["pn-100"], "2.5");

    index_columns(&mut index, &second, 2, 7).expect("index second file");
    assert_eq!(index["pn-100"], "3.5");
    assert_eq!(index.len(), 1);
}

#[test]
fn open_failure_leaves_accumulator_untouched() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("nope.xlsx");

    let mut index = PartIndex::new();
    index.insert("pn-1".to_string(), "5".to_string());

    let error = index_columns(&mut index, &missing, 2, 7).expect_err("missing file");
    assert!(matches!(error, IndexError::Open { .. }));
    assert_eq!(index.len(), 1);
    assert_eq!(index["pn-1"], "5");
}
