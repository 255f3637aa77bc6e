//! Generation of the investment summary workbook.

mod layout;
mod style;
mod table;
mod writer;

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::config::Config;
use crate::core::GenericResult;
use crate::errors::ReportError;
use crate::metrics::{METRICS_COLUMNS, Metrics, MetricsInput};
use crate::statements::InputFiles;
use crate::statements::dividend;
use crate::statements::export::{CASH_FLOW_COLUMNS, CashFlowSummary};
use crate::statements::holding::{HOLDINGS_COLUMNS, HoldingReport};
use crate::types::Value;

use self::table::ReportTable;

pub use self::writer::SHEET_NAME;

const PROFILE_TITLE: &str = "Holding-As On Date";

pub struct GeneratedReport {
    pub path: PathBuf,
    pub metrics: Metrics,
}

/// Generates the report out of statements found in the input directory and saves it to the output
/// directory (which is created if it doesn't exist).
pub fn generate_report(input_dir: &Path, output_dir: &Path, config: &Config) -> GenericResult<GeneratedReport> {
    let inputs = InputFiles::locate(input_dir, config)?;
    let normalizer = config.date_normalizer();

    let holding = HoldingReport::read(&inputs.holding, &normalizer)?;
    let cash_flow = CashFlowSummary::read(&inputs.export, &normalizer, config.ledger_order)?;
    let dividend_received = dividend::read_received_dividend(&inputs.dividend)?;

    let metrics = Metrics::calculate(MetricsInput {
        initial_investment_date: cash_flow.initial_investment_date.clone(),
        initial_investment: cash_flow.initial_investment,
        additional_investment: cash_flow.additional_investment,
        amount_paid_back: cash_flow.amount_paid_back,
        todays_value_date: holding.profile.report_date()?,
        todays_value: holding.todays_value()?,
        dividend_received,
    })?;

    let path = output_dir.join(report_file_name(&holding.profile.client_id()?));
    let tables = build_tables(&holding, &metrics, &cash_flow);
    let mut workbook = writer::render(&tables, config.logo.as_ref())?;

    fs::create_dir_all(output_dir).map_err(|e| ReportError::output_write(output_dir, e))?;
    writer::save(&mut workbook, &path).map_err(|e| ReportError::output_write(&path, e))?;
    info!("The report has been saved to {:?}.", path);

    Ok(GeneratedReport {path, metrics})
}

pub fn report_file_name(client_id: &str) -> String {
    format!("Generated Report - {}.xlsx", client_id.replace('/', "-"))
}

fn build_tables(holding: &HoldingReport, metrics: &Metrics, cash_flow: &CashFlowSummary) -> Vec<ReportTable> {
    let profile = holding.profile.fields.iter()
        .map(|(name, value)| vec![Value::from(name.as_str()), value.clone()])
        .collect();

    let metrics = metrics.rows().into_iter()
        .map(|row| vec![Value::from(row.particular), row.date, Value::Number(row.amount)])
        .collect();

    let holdings = holding.holdings.iter().map(|row| row.values()).collect();

    vec![
        ReportTable::new_titled(PROFILE_TITLE, 2, profile),
        ReportTable::new(&METRICS_COLUMNS, metrics),
        ReportTable::new(&HOLDINGS_COLUMNS, holdings).highlight_last_row(),
        ReportTable::new(&CASH_FLOW_COLUMNS, cash_flow.pay_in.rows()).highlight_last_row(),
        ReportTable::new(&CASH_FLOW_COLUMNS, cash_flow.pay_out.rows()).highlight_last_row(),
    ]
}
