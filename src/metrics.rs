//! Investment performance figures derived from the parsed statements.

use crate::core::GenericResult;
use crate::formatting::table::{self, Cell, Row, Table};
use crate::types::{Decimal, Value};

pub const METRICS_COLUMNS: [&str; 3] = ["Particulars", "Date", "Amount (Rs.)"];

const NO_DATE: &str = "-";

/// Figures taken from the statements as is.
pub struct MetricsInput {
    pub initial_investment_date: Value,
    pub initial_investment: Decimal,
    pub additional_investment: Decimal,
    pub amount_paid_back: Decimal,
    pub todays_value_date: Value,
    pub todays_value: Decimal,
    pub dividend_received: Decimal,
}

#[derive(Debug)]
pub struct Metrics {
    pub initial_investment_date: Value,
    pub initial_investment: Decimal,
    pub additional_investment: Decimal,
    pub total_investment: Decimal,
    pub amount_paid_back: Decimal,
    pub net_investment: Decimal,
    pub todays_value_date: Value,
    pub todays_value: Decimal,
    pub net_profit: Decimal,
    pub dividend_received: Decimal,
    pub total_profit: Decimal,
    pub absolute_profit_pct: Decimal,
}

#[derive(Debug, PartialEq)]
pub struct MetricsRow {
    pub particular: &'static str,
    pub date: Value,
    pub amount: Decimal,
    pub percentage: bool,
}

impl Metrics {
    pub fn calculate(input: MetricsInput) -> GenericResult<Metrics> {
        let total_investment = input.initial_investment + input.additional_investment;
        let net_investment = total_investment - input.amount_paid_back;
        let net_profit = input.todays_value - net_investment;
        let total_profit = net_profit + input.dividend_received;

        let absolute_profit_pct = total_profit.checked_div(net_investment)
            .and_then(|ratio| ratio.checked_mul(dec!(100)))
            .ok_or_else(|| format!(
                "Unable to calculate absolute profit: net investment is {}", net_investment))?;

        Ok(Metrics {
            initial_investment_date: input.initial_investment_date,
            initial_investment: input.initial_investment,
            additional_investment: input.additional_investment,
            total_investment,
            amount_paid_back: input.amount_paid_back,
            net_investment,
            todays_value_date: input.todays_value_date,
            todays_value: input.todays_value,
            net_profit,
            dividend_received: input.dividend_received,
            total_profit,
            absolute_profit_pct,
        })
    }

    pub fn rows(&self) -> Vec<MetricsRow> {
        let row = |particular, date: Option<&Value>, amount| MetricsRow {
            particular,
            date: date.cloned().unwrap_or_else(|| Value::from(NO_DATE)),
            amount,
            percentage: false,
        };

        vec![
            row("Initial Investment", Some(&self.initial_investment_date), self.initial_investment),
            row("Additional Investment", None, self.additional_investment),
            row("Total Investment", None, self.total_investment),
            row("Amount Paid back", None, self.amount_paid_back),
            row("Net Investment", None, self.net_investment),
            row("Todays Value", Some(&self.todays_value_date), self.todays_value),
            row("Net Profit", None, self.net_profit),
            row("Dividend Received", None, self.dividend_received),
            row("Total Profit", None, self.total_profit),
            MetricsRow {
                percentage: true,
                ..row("Absolute Profit %", None, self.absolute_profit_pct)
            },
        ]
    }

    pub fn print(&self, name: &str) {
        let mut summary = Table::new();

        for row in self.rows() {
            let amount = if row.percentage {
                Cell::new_percent(row.amount)
            } else {
                Cell::new_amount(row.amount)
            };
            summary.add_row(Row::new(&[Cell::new(row.particular), Cell::new_value(&row.date), amount]));
        }

        table::print_table(name, &METRICS_COLUMNS, summary);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn input(initial: Decimal, additional: Decimal, paid_back: Decimal, todays_value: Decimal, dividend: Decimal) -> MetricsInput {
        MetricsInput {
            initial_investment_date: Value::from("10-01-2024"),
            initial_investment: initial,
            additional_investment: additional,
            amount_paid_back: paid_back,
            todays_value_date: Value::from("05-03-2024"),
            todays_value,
            dividend_received: dividend,
        }
    }

    #[test]
    fn calculation() {
        let metrics = Metrics::calculate(input(dec!(100000), dec!(0), dec!(20000), dec!(150000), dec!(500))).unwrap();

        assert_eq!(metrics.total_investment, dec!(100000));
        assert_eq!(metrics.net_investment, dec!(80000));
        assert_eq!(metrics.net_profit, dec!(70000));
        assert_eq!(metrics.total_profit, dec!(70500));
        assert_eq!(metrics.absolute_profit_pct, dec!(88.125));

        let rows = metrics.rows();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0], MetricsRow {
            particular: "Initial Investment",
            date: Value::from("10-01-2024"),
            amount: dec!(100000),
            percentage: false,
        });
        assert_eq!(rows[5].date, Value::from("05-03-2024"));
        assert_eq!(rows[9], MetricsRow {
            particular: "Absolute Profit %",
            date: Value::from("-"),
            amount: dec!(88.125),
            percentage: true,
        });
    }

    #[rstest(initial, additional, paid_back, todays_value, dividend,
        case(dec!(100000), dec!(50000.50), dec!(20000), dec!(95000), dec!(0)),
        case(dec!(1000), dec!(0), dec!(1500), dec!(0), dec!(12.5)),
        case(dec!(333.33), dec!(0.01), dec!(0), dec!(400), dec!(7)),
    )]
    fn identities(initial: Decimal, additional: Decimal, paid_back: Decimal, todays_value: Decimal, dividend: Decimal) {
        let metrics = Metrics::calculate(input(initial, additional, paid_back, todays_value, dividend)).unwrap();

        assert_eq!(metrics.net_investment, metrics.total_investment - metrics.amount_paid_back);
        assert_eq!(metrics.total_profit, metrics.net_profit + metrics.dividend_received);

        let expected = metrics.total_profit / metrics.net_investment * dec!(100);
        assert!((metrics.absolute_profit_pct - expected).abs() < dec!(0.000000001));
    }

    #[test]
    fn zero_net_investment() {
        let err = Metrics::calculate(input(dec!(1000), dec!(0), dec!(1000), dec!(10), dec!(0))).unwrap_err();
        assert_eq!(err.to_string(), "Unable to calculate absolute profit: net investment is 0");
    }

    #[test]
    fn absolute_profit_overflow() {
        let todays_value = Decimal::MAX / dec!(50);
        let err = Metrics::calculate(input(dec!(1), dec!(0), dec!(0), todays_value, dec!(0))).unwrap_err();
        assert_eq!(err.to_string(), "Unable to calculate absolute profit: net investment is 1");
    }
}
