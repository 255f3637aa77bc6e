//! Export ledger: pay-in and pay-out voucher transactions of the account.

use std::path::Path;

use log::{debug, warn};

use crate::config::LedgerOrder;
use crate::core::GenericResult;
use crate::errors::ReportError;
use crate::formats::xls::{self, Cell, SheetReader, TableReader, XlsTableRow};
use crate::time::DateNormalizer;
use crate::types::{Decimal, Value};

const REPORT: &str = "export";

const PAY_IN: &str = "PAYIN";
const PAY_OUT: &str = "PAYOUT";

pub const CASH_FLOW_COLUMNS: [&str; 4] = ["Voucher Date", "Effective Date", "Voucher Type", "Amount"];

#[derive(XlsTableRow)]
struct LedgerRow {
    #[column(name="VOUCHER DATE")]
    voucher_date: Cell,
    #[column(name="EFFECTIVE DATE")]
    effective_date: Cell,
    #[column(name="VOUCHER TYPE")]
    voucher_type: Value,
    #[column(name="CREDIT")]
    credit: Cell,
    #[column(name="DEBIT")]
    debit: Cell,
}

impl TableReader for LedgerRow {
}

impl LedgerRow {
    fn is(&self, voucher_type: &str) -> bool {
        matches!(&self.voucher_type, Value::Text(value) if value.trim() == voucher_type)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CashFlowRecord {
    pub voucher_date: Value,
    pub effective_date: Value,
    pub voucher_type: Value,
    pub amount: Option<Decimal>,
}

/// Cash flow records of one type with a trailing total.
#[derive(Debug)]
pub struct CashFlowTable {
    pub records: Vec<CashFlowRecord>,
    pub total: Decimal,
}

impl CashFlowTable {
    fn new(records: Vec<CashFlowRecord>) -> CashFlowTable {
        let total = records.iter().filter_map(|record| record.amount).sum();
        CashFlowTable {records, total}
    }

    /// Table rows including the synthetic total one.
    pub fn rows(&self) -> Vec<Vec<Value>> {
        let mut rows: Vec<Vec<Value>> = self.records.iter().map(|record| vec![
            record.voucher_date.clone(), record.effective_date.clone(),
            record.voucher_type.clone(), Value::from(record.amount),
        ]).collect();

        rows.push(vec![Value::from("Total"), Value::Empty, Value::Empty, Value::Number(self.total)]);
        rows
    }
}

#[derive(Debug)]
pub struct CashFlowSummary {
    pub initial_investment_date: Value,
    pub initial_investment: Decimal,
    pub additional_investment: Decimal,
    pub amount_paid_back: Decimal,
    pub pay_in: CashFlowTable,
    pub pay_out: CashFlowTable,
}

impl CashFlowSummary {
    pub fn read(path: &Path, normalizer: &DateNormalizer, order: LedgerOrder) -> GenericResult<CashFlowSummary> {
        debug!("Reading export ledger from {:?}...", path);
        CashFlowSummary::parse(SheetReader::open(path)?, normalizer, order)
    }

    pub fn parse(mut sheet: SheetReader, normalizer: &DateNormalizer, order: LedgerOrder) -> GenericResult<CashFlowSummary> {
        sheet.skip_empty_rows();

        let ledger = xls::read_table::<LedgerRow>(&mut sheet).map_err(|e| {
            ReportError::malformed(REPORT, e.to_string())
        })?;

        CashFlowSummary::summarize(&ledger, normalizer, order)
    }

    fn summarize(ledger: &[LedgerRow], normalizer: &DateNormalizer, order: LedgerOrder) -> GenericResult<CashFlowSummary> {
        let seed = match order {
            LedgerOrder::NewestFirst => ledger.last(),
            LedgerOrder::OldestFirst => ledger.first(),
        }.ok_or_else(|| ReportError::malformed(REPORT, "the ledger is empty"))?;

        if !seed.is(PAY_IN) {
            warn!("The initial investment transaction has {:?} voucher type instead of {}.",
                  seed.voucher_type.to_string(), PAY_IN);
        }

        let initial_investment = xls::coerce_decimal(&seed.credit).ok_or_else(|| {
            ReportError::numeric("initial investment amount", &seed.credit)
        })?;
        let initial_investment_date = normalizer.normalize(&seed.effective_date);

        let table = |voucher_type: &str, amount: fn(&LedgerRow) -> &Cell| {
            CashFlowTable::new(ledger.iter().filter(|row| row.is(voucher_type)).map(|row| CashFlowRecord {
                voucher_date: normalizer.normalize(&row.voucher_date),
                effective_date: normalizer.normalize(&row.effective_date),
                voucher_type: row.voucher_type.clone(),
                amount: xls::coerce_decimal(amount(row)),
            }).collect())
        };

        let pay_in = table(PAY_IN, |row| &row.credit);
        let pay_out = table(PAY_OUT, |row| &row.debit);

        Ok(CashFlowSummary {
            initial_investment_date,
            initial_investment,
            additional_investment: pay_in.total - initial_investment,
            amount_paid_back: pay_out.total,
            pay_in,
            pay_out,
        })
    }
}

#[cfg(test)]
mod tests {
    use calamine::Range;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn row(date: &str, voucher_type: &str, credit: Cell, debit: Cell) -> LedgerRow {
        LedgerRow {
            voucher_date: Cell::String(date.to_owned()),
            effective_date: Cell::String(date.to_owned()),
            voucher_type: Value::from(voucher_type),
            credit, debit,
        }
    }

    fn ledger() -> Vec<LedgerRow> {
        vec![
            row("2024-03-01", "PAYOUT", Cell::Empty, Cell::String(s!("20,000"))),
            row("2024-02-01", "PAYIN", Cell::String(s!("50,000.50")), Cell::Empty),
            row("2024-01-20", "JV", Cell::Float(1.0), Cell::Float(1.0)),
            row("2024-01-15", "PAYIN", Cell::String(s!("-")), Cell::Empty),
            row("2024-01-10", "PAYIN", Cell::Float(100000.0), Cell::Empty),
        ]
    }

    #[test]
    fn summary() {
        let summary = CashFlowSummary::summarize(
            &ledger(), &DateNormalizer::default(), LedgerOrder::NewestFirst).unwrap();

        assert_eq!(summary.initial_investment_date, Value::from("10-01-2024"));
        assert_eq!(summary.initial_investment, dec!(100000));
        assert_eq!(summary.additional_investment, dec!(50000.50));
        assert_eq!(summary.amount_paid_back, dec!(20000));

        assert_eq!(summary.pay_in.records.len(), 3);
        assert_eq!(summary.pay_in.records[1].amount, None);
        assert_eq!(summary.pay_in.total, dec!(150000.50));

        assert_eq!(summary.pay_out.rows(), vec![
            vec![
                Value::from("01-03-2024"), Value::from("01-03-2024"), Value::from("PAYOUT"),
                Value::Number(dec!(20000)),
            ],
            vec![Value::from("Total"), Value::Empty, Value::Empty, Value::Number(dec!(20000))],
        ]);
    }

    #[test]
    fn ledger_with_blank_rows() {
        let rows = [
            vec!["", "", "", "", ""],
            vec!["VOUCHER DATE", "EFFECTIVE DATE", "VOUCHER TYPE", "CREDIT", "DEBIT"],
            vec!["2024-03-01", "2024-03-01", "PAYOUT", "", "20,000"],
            vec!["", "", "", "", ""],
            vec!["2024-02-01", "2024-02-01", "PAYIN", "50,000", ""],
            vec!["", "", "", " ", ""],
            vec!["2024-01-10", "2024-01-11", "PAYIN", "1,00,000", ""],
            vec!["", "", "", "", ""],
        ];

        let mut range = Range::new((0, 0), (rows.len() as u32 - 1, 4));
        for (row_id, row) in rows.iter().enumerate() {
            for (column_id, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    range.set_value((row_id as u32, column_id as u32), Cell::String(value.to_string()));
                }
            }
        }

        let summary = CashFlowSummary::parse(
            SheetReader::new(range), &DateNormalizer::default(), LedgerOrder::NewestFirst).unwrap();

        assert_eq!(summary.initial_investment_date, Value::from("11-01-2024"));
        assert_eq!(summary.initial_investment, dec!(100000));
        assert_eq!(summary.additional_investment, dec!(50000));
        assert_eq!(summary.amount_paid_back, dec!(20000));
        assert_eq!(summary.pay_in.records.len(), 2);
    }

    #[test]
    fn oldest_first_ledger() {
        let mut ledger = ledger();
        ledger.reverse();

        let summary = CashFlowSummary::summarize(
            &ledger, &DateNormalizer::default(), LedgerOrder::OldestFirst).unwrap();

        assert_eq!(summary.initial_investment, dec!(100000));
        assert_eq!(summary.additional_investment, dec!(50000.50));
    }

    #[rstest(ledger, case(Vec::new()), case(vec![row("2024-01-10", "PAYIN", Cell::String(s!("N/A")), Cell::Empty)]))]
    fn invalid_ledger(ledger: Vec<LedgerRow>) {
        assert!(CashFlowSummary::summarize(&ledger, &DateNormalizer::default(), LedgerOrder::NewestFirst).is_err());
    }

    #[test]
    fn empty_tables() {
        let ledger = vec![row("2024-01-10", "PAYIN", Cell::Int(1000), Cell::Empty)];
        let summary = CashFlowSummary::summarize(
            &ledger, &DateNormalizer::default(), LedgerOrder::NewestFirst).unwrap();

        assert_eq!(summary.additional_investment, dec!(0));
        assert!(summary.pay_out.records.is_empty());
        assert_eq!(summary.pay_out.rows(), vec![
            vec![Value::from("Total"), Value::Empty, Value::Empty, Value::Number(dec!(0))],
        ]);
    }
}
