mod common;

use common::fixtures::*;
use common::pdf_assertions::{approx_eq, find_ops, numbers, shown_text, text_positions};
use common::{GeneratedPdf, TestResult, new_builder};
use pdfsmith_layout::{SizedFont, StandardFont};

const A4_TOP: f32 = 841.89 - 50.0;
const A4_TEXT_WIDTH: f32 = 595.28 - 100.0;

fn cells(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

#[test]
fn test_two_by_two_grid_moves_cursor_by_rows_and_leading() -> TestResult {
    let mut builder = new_builder();
    builder.add_table(&cells(&[&["A", "B"], &["C", "D"]]))?;

    let cursor = builder.cursor_y().expect("table opens a page");
    assert!((cursor - (A4_TOP - 2.0 * 20.0 - 14.4)).abs() < 1e-3);

    let pdf = GeneratedPdf::from_builder(builder.as_mut())?;
    let ops = pdf.operations(1);
    assert_eq!(shown_text(&ops), vec!["A", "B", "C", "D"]);

    let borders = find_ops(&ops, "re");
    assert_eq!(borders.len(), 4);
    let first = numbers(borders[0]);
    let column = A4_TEXT_WIDTH / 2.0;
    assert!(approx_eq(first[0], 50.0));
    assert!(approx_eq(first[1], A4_TOP - 20.0));
    assert!(approx_eq(first[2], column));
    assert!(approx_eq(first[3], 20.0));
    let last = numbers(borders[3]);
    assert!(approx_eq(last[0], 50.0 + column));
    assert!(approx_eq(last[1], A4_TOP - 40.0));
    assert_eq!(find_ops(&ops, "S").len(), 4);
    Ok(())
}

#[test]
fn test_cell_text_is_inset_by_padding() -> TestResult {
    let mut builder = new_builder();
    builder.add_table(&cells(&[&["left", "right"]]))?;

    let pdf = GeneratedPdf::from_builder(builder.as_mut())?;
    let positions = text_positions(&pdf.operations(1));
    assert!(approx_eq(positions[0].0, 54.0));
    assert!(approx_eq(positions[1].0, 54.0 + A4_TEXT_WIDTH / 2.0));
    for (_, y) in positions {
        assert!(y > A4_TOP - 20.0 && y < A4_TOP);
    }
    Ok(())
}

#[test]
fn test_long_cell_text_is_truncated_with_ellipsis() -> TestResult {
    let long = "A remarkably long cell value that cannot possibly fit in a quarter of the page";
    let mut builder = new_builder();
    builder.add_table(&cells(&[&[long, "b", "c", "short"]]))?;

    let pdf = GeneratedPdf::from_builder(builder.as_mut())?;
    let shown = shown_text(&pdf.operations(1));
    let font = SizedFont::new(StandardFont::Helvetica, 12.0);
    let limit = A4_TEXT_WIDTH / 4.0 - 8.0;

    assert!(shown[0].ends_with("..."));
    assert!(long.starts_with(shown[0].trim_end_matches("...")));
    assert!(font.measure(&shown[0]) <= limit);
    assert_eq!(&shown[1..], ["b", "c", "short"]);
    Ok(())
}

#[test]
fn test_ragged_rows_use_widest_row_for_columns() -> TestResult {
    let mut builder = new_builder();
    builder.add_table(&cells(&[&["only"], &["x", "y", "z"]]))?;

    let pdf = GeneratedPdf::from_builder(builder.as_mut())?;
    let ops = pdf.operations(1);
    assert_eq!(find_ops(&ops, "re").len(), 6);
    assert_eq!(shown_text(&ops), vec!["only", "x", "y", "z"]);
    Ok(())
}

#[test]
fn test_rows_break_across_pages() -> TestResult {
    // 37 rows of 20pt fit between the margins of an A4 page.
    let mut builder = new_builder();
    builder.add_table(&grid(60, 3))?;

    let pdf = GeneratedPdf::from_builder(builder.as_mut())?;
    assert_pdf_page_count!(pdf, 2);
    assert_eq!(find_ops(&pdf.operations(1), "re").len(), 37 * 3);
    assert_eq!(find_ops(&pdf.operations(2), "re").len(), 23 * 3);
    assert_eq!(shown_text(&pdf.operations(2))[0], "r37c0");

    let first_row = numbers(find_ops(&pdf.operations(2), "re")[0]);
    assert!(approx_eq(first_row[1], A4_TOP - 20.0));
    Ok(())
}

#[test]
fn test_empty_tables_are_ignored() -> TestResult {
    let mut builder = new_builder();
    builder.add_table(&[])?;
    builder.add_table(&[vec![], vec![]])?;
    assert_eq!(builder.page_count(), 0);
    Ok(())
}

#[test]
fn test_empty_cells_keep_their_borders() -> TestResult {
    let mut builder = new_builder();
    builder.add_table(&cells(&[&["", "filled"]]))?;

    let pdf = GeneratedPdf::from_builder(builder.as_mut())?;
    let ops = pdf.operations(1);
    assert_eq!(find_ops(&ops, "re").len(), 2);
    assert_eq!(shown_text(&ops), vec!["filled"]);
    Ok(())
}
