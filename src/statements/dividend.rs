use std::path::Path;

use calamine::Range;
use log::debug;

use crate::core::GenericResult;
use crate::errors::ReportError;
use crate::formats::xls::{self, Cell};
use crate::types::Decimal;

const REPORT: &str = "dividend";
const RECEIVED_DIVIDEND_COLUMN: usize = 3;

/// Reads the received-to-date dividend which is stored in the last row of the statement.
pub fn read_received_dividend(path: &Path) -> GenericResult<Decimal> {
    debug!("Reading dividend statement from {:?}...", path);
    received_dividend(&xls::open_first_sheet(path)?)
}

fn received_dividend(sheet: &Range<Cell>) -> GenericResult<Decimal> {
    let row = sheet.rows()
        .skip(1)
        .filter(|row| !xls::is_empty_row(row))
        .last()
        .ok_or_else(|| ReportError::malformed(REPORT, "the statement has no records"))?;

    let cell = row.get(RECEIVED_DIVIDEND_COLUMN).unwrap_or(&Cell::Empty);

    Ok(xls::coerce_decimal(cell).ok_or_else(|| ReportError::numeric("received dividend", cell))?)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn sheet(rows: &[&[Cell]]) -> Range<Cell> {
        let mut range = Range::new((0, 0), (rows.len() as u32 - 1, 4));
        for (row_id, row) in rows.iter().enumerate() {
            for (column_id, cell) in row.iter().enumerate() {
                range.set_value((row_id as u32, column_id as u32), cell.clone());
            }
        }
        range
    }

    fn header() -> Vec<Cell> {
        ["Date", "Scrip", "Quantity", "Amount"].iter().map(|title| Cell::String(title.to_string())).collect()
    }

    #[rstest(total, expected,
        case(Cell::Float(500.0), dec!(500)),
        case(Cell::String(s!("1,250.75")), dec!(1250.75)),
    )]
    fn dividend(total: Cell, expected: Decimal) {
        let record = [Cell::String(s!("01-02-2024")), Cell::String(s!("ACME")), Cell::Int(5), Cell::Float(100.0)];
        let summary = [Cell::String(s!("Total")), Cell::Empty, Cell::Empty, total];

        let header = header();
        let sheet = sheet(&[&header, &record, &summary, &[]]);
        assert_eq!(received_dividend(&sheet).unwrap(), expected);
    }

    #[test]
    fn no_records() {
        let header = header();
        let err = received_dividend(&sheet(&[&header])).unwrap_err();
        assert!(matches!(err.downcast_ref::<ReportError>(), Some(ReportError::MalformedTable {..})));
    }

    #[test]
    fn non_numeric_dividend() {
        let header = header();
        let summary = [Cell::String(s!("Total")), Cell::Empty, Cell::Empty, Cell::String(s!("N/A"))];

        let err = received_dividend(&sheet(&[&header, &summary])).unwrap_err();
        assert!(matches!(err.downcast_ref::<ReportError>(), Some(ReportError::NumericCoercion {..})));
    }
}
