//! Spreadsheet input
//!
//! The first row of the worksheet is the header. Every later row is one
//! invoice, keyed by its location in the `MCs Name` column.

use crate::{ProformaError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Columns every input spreadsheet must have
pub const REQUIRED_COLUMNS: [&str; 4] = [LOCATION_COLUMN, TAXABLE_COLUMN, TAX_COLUMN, TOTAL_COLUMN];

const LOCATION_COLUMN: &str = "MCs Name";
const TAXABLE_COLUMN: &str = "taxable";
const TAX_COLUMN: &str = "gst";
const TOTAL_COLUMN: &str = "total";

/// One invoice row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    /// 1-based spreadsheet line (the header is line 1 of a sheet starting at A1)
    pub line: usize,
    pub location: String,
    pub taxable: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Rows read from a worksheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRows {
    pub rows: Vec<InputRow>,
    /// Lines skipped for a blank, error or "total" location
    pub skipped: Vec<usize>,
}

/// Whether a location cell marks a row that is not an invoice
pub fn is_skipped_location(location: &str) -> bool {
    let location = location.trim();
    location.is_empty() || location.eq_ignore_ascii_case("total")
}

/// Read invoice rows from the first worksheet, or from `sheet` when given
pub fn read_rows<P: AsRef<Path>>(path: P, sheet: Option<&str>) -> Result<SheetRows> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| ProformaError::Workbook(format!("{}: {}", path.display(), e)))?;

    let range = match sheet {
        Some(name) => workbook.worksheet_range(name),
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ProformaError::Workbook(format!("{}: no worksheets", path.display())))?,
    }
    .map_err(|e| ProformaError::Workbook(format!("{}: {}", path.display(), e)))?;

    rows_from_range(&range)
}

/// Validate the header and convert every data row of a worksheet range
pub fn rows_from_range(range: &Range<Data>) -> Result<SheetRows> {
    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .ok_or(ProformaError::EmptySheet)?
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| !header.iter().any(|h| h.as_str() == **name))
        .map(|name| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ProformaError::MissingColumns {
            missing,
            found: header,
        });
    }

    let column = |name: &str| header.iter().position(|h| h.as_str() == name).unwrap_or_default();
    let location_col = column(LOCATION_COLUMN);
    let taxable_col = column(TAXABLE_COLUMN);
    let tax_col = column(TAX_COLUMN);
    let total_col = column(TOTAL_COLUMN);

    let first_line = range.start().map(|(row, _)| row as usize + 1).unwrap_or(1);
    let mut result = SheetRows::default();

    for (offset, cells) in rows.enumerate() {
        let line = first_line + offset + 1;
        let location = location_text(cells.get(location_col));

        if is_skipped_location(&location) {
            debug!(line, location = %location, "Skipping row");
            result.skipped.push(line);
            continue;
        }

        let amount = |col: usize, name: &str| parse_amount(cells.get(col), line, name);
        result.rows.push(InputRow {
            line,
            taxable: amount(taxable_col, TAXABLE_COLUMN)?,
            tax: amount(tax_col, TAX_COLUMN)?,
            total: amount(total_col, TOTAL_COLUMN)?,
            location,
        });
    }

    Ok(result)
}

/// Text of a location cell; error cells (`#N/A`, `#REF!`, ...) read as blank
fn location_text(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) | Some(Data::Error(_)) => String::new(),
        Some(cell) => cell.to_string().trim().to_string(),
    }
}

/// Convert an amount cell to an exact decimal
///
/// Numeric cells go through their shortest decimal rendering so that a cell
/// showing `672591.52` yields exactly `672591.52`.
fn parse_amount(cell: Option<&Data>, line: usize, column: &str) -> Result<Decimal> {
    let malformed = || ProformaError::MalformedAmount {
        row: line,
        column: column.to_string(),
        value: cell.map(|c| c.to_string()).unwrap_or_default(),
    };

    match cell {
        Some(Data::Float(f)) => Decimal::from_str(&f.to_string()).map_err(|_| malformed()),
        Some(Data::Int(i)) => Ok(Decimal::from(*i)),
        Some(Data::String(s)) => Decimal::from_str(s.trim()).map_err(|_| malformed()),
        _ => Err(malformed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;
    use pretty_assertions::assert_eq;

    fn range(cells: &[&[Data]]) -> Range<Data> {
        let height = cells.len() as u32;
        let width = cells.iter().map(|r| r.len()).max().unwrap_or(1) as u32;
        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (r, row) in cells.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                range.set_value((r as u32, c as u32), value.clone());
            }
        }
        range
    }

    fn s(text: &str) -> Data {
        Data::String(text.to_string())
    }

    fn header() -> Vec<Data> {
        vec![s("MCs Name"), s("taxable"), s("gst"), s("total")]
    }

    fn dec(text: &str) -> Decimal {
        Decimal::from_str(text).unwrap()
    }

    #[test]
    fn test_reads_rows() {
        let sheet = range(&[
            header().as_slice(),
            &[s("Panipat"), Data::Float(672591.52), Data::Float(121066.47), Data::Float(793658.0)],
            &[s(" Karnal "), Data::Int(1000), s(" 180.00 "), Data::Int(1180)],
        ]);

        let rows = rows_from_range(&sheet).unwrap();
        assert_eq!(
            rows.rows,
            vec![
                InputRow {
                    line: 2,
                    location: "Panipat".to_string(),
                    taxable: dec("672591.52"),
                    tax: dec("121066.47"),
                    total: dec("793658"),
                },
                InputRow {
                    line: 3,
                    location: "Karnal".to_string(),
                    taxable: dec("1000"),
                    tax: dec("180.00"),
                    total: dec("1180"),
                },
            ]
        );
        assert!(rows.skipped.is_empty());
    }

    #[test]
    fn test_columns_in_any_order() {
        let sheet = range(&[
            &[s("total"), s("Sl"), s("gst"), s("MCs Name"), s("taxable")],
            &[Data::Int(118), Data::Int(1), Data::Int(18), s("Rohtak"), Data::Int(100)],
        ]);
        let rows = rows_from_range(&sheet).unwrap();
        assert_eq!(rows.rows[0].location, "Rohtak");
        assert_eq!(rows.rows[0].taxable, dec("100"));
        assert_eq!(rows.rows[0].tax, dec("18"));
        assert_eq!(rows.rows[0].total, dec("118"));
    }

    #[test]
    fn test_skips_blank_and_total_rows() {
        let sheet = range(&[
            header().as_slice(),
            &[s("Panipat"), Data::Int(1), Data::Int(2), Data::Int(3)],
            &[Data::Empty, Data::Empty, Data::Empty, Data::Empty],
            &[s("   "), Data::Int(1), Data::Int(2), Data::Int(3)],
            &[s("TOTAL"), Data::Int(10), Data::Int(20), Data::Int(30)],
        ]);
        let rows = rows_from_range(&sheet).unwrap();
        assert_eq!(rows.rows.len(), 1);
        assert_eq!(rows.skipped, vec![3, 4, 5]);
    }

    #[test]
    fn test_skips_error_locations() {
        let sheet = range(&[
            header().as_slice(),
            &[Data::Error(CellErrorType::NA), Data::Int(1), Data::Int(2), Data::Int(3)],
            &[Data::Error(CellErrorType::Ref), Data::Empty, Data::Empty, Data::Empty],
            &[s("Panipat"), Data::Int(1), Data::Int(2), Data::Int(3)],
        ]);
        let rows = rows_from_range(&sheet).unwrap();
        let locations: Vec<&str> = rows.rows.iter().map(|r| r.location.as_str()).collect();
        assert_eq!(locations, vec!["Panipat"]);
        assert_eq!(rows.skipped, vec![2, 3]);
    }

    #[test]
    fn test_missing_columns() {
        let sheet = range(&[&[s("MCs Name"), s("taxable"), s("total")]]);
        let err = rows_from_range(&sheet).unwrap_err();
        match err {
            ProformaError::MissingColumns { missing, found } => {
                assert_eq!(missing, vec!["gst".to_string()]);
                assert_eq!(found, vec!["MCs Name", "taxable", "total"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_amount_names_row_and_column() {
        let sheet = range(&[
            header().as_slice(),
            &[s("Panipat"), Data::Int(1), s("n/a"), Data::Int(3)],
        ]);
        let err = rows_from_range(&sheet).unwrap_err();
        match err {
            ProformaError::MalformedAmount { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "gst");
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_amount_is_malformed() {
        let sheet = range(&[
            header().as_slice(),
            &[s("Panipat"), Data::Empty, Data::Int(2), Data::Int(3)],
        ]);
        assert!(matches!(
            rows_from_range(&sheet),
            Err(ProformaError::MalformedAmount { row: 2, .. })
        ));
    }

    #[test]
    fn test_empty_sheet() {
        let sheet: Range<Data> = Range::empty();
        assert!(matches!(rows_from_range(&sheet), Err(ProformaError::EmptySheet)));
    }

    #[test]
    fn test_is_skipped_location() {
        assert!(is_skipped_location(""));
        assert!(is_skipped_location("  "));
        assert!(is_skipped_location("Total"));
        assert!(!is_skipped_location("Totalpur"));
        assert!(!is_skipped_location("Panipat"));
    }
}
