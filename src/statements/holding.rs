//! Holding report: a free-form sheet with a client profile block and a holdings table located
//! by their first column labels.

use std::path::Path;

use calamine::Range;
use log::debug;

use crate::core::GenericResult;
use crate::errors::ReportError;
use crate::formats::xls::{self, Cell, LabelIndex, SheetReader, TableReader, XlsTableRow};
use crate::time::DateNormalizer;
use crate::types::{Decimal, Value};

const REPORT: &str = "holding";

pub const CLIENT_ID_FIELD: &str = "Client Equity Code/UCID/Name";
pub const REPORT_DATE_FIELD: &str = "Report Generation Date";
const PROFILE_ROWS: usize = 4;

const HOLDINGS_ANCHOR: &str = "Instrument Name";

pub const HOLDINGS_COLUMNS: [&str; 7] = [
    "Instrument Name", "Quantity", "Purchase Price", "Purchase Value", "Market Price",
    "Market Value", "UnrealisedGain/Loss",
];

pub struct HoldingReport {
    pub profile: ClientProfile,
    pub holdings: Vec<HoldingRow>,
}

impl HoldingReport {
    pub fn read(path: &Path, normalizer: &DateNormalizer) -> GenericResult<HoldingReport> {
        debug!("Reading holding report from {:?}...", path);
        HoldingReport::parse(SheetReader::open(path)?, normalizer)
    }

    pub fn parse(mut sheet: SheetReader, normalizer: &DateNormalizer) -> GenericResult<HoldingReport> {
        let labels = LabelIndex::from_sheet(sheet.sheet());
        let missing = |label: &str| ReportError::malformed(REPORT, format!("unable to find {:?} row", label));

        let profile_row = match labels.find(CLIENT_ID_FIELD) {
            [] => return Err(missing(CLIENT_ID_FIELD).into()),
            [row_id] => *row_id,
            rows => return Err(ReportError::malformed(REPORT, format!(
                "{:?} row must be present exactly once, but it's found {} times", CLIENT_ID_FIELD, rows.len(),
            )).into()),
        };
        let profile = ClientProfile::parse(sheet.sheet(), profile_row, normalizer)?;

        sheet.seek(labels.get(HOLDINGS_ANCHOR).ok_or_else(|| missing(HOLDINGS_ANCHOR))?);
        let holdings = xls::read_table::<HoldingRow>(&mut sheet).map_err(|e| {
            ReportError::malformed(REPORT, e.to_string())
        })?;

        Ok(HoldingReport {profile, holdings})
    }

    /// Market value of the last holdings row which is the portfolio total.
    pub fn todays_value(&self) -> GenericResult<Decimal> {
        let last = self.holdings.last().ok_or_else(|| ReportError::malformed(
            REPORT, "the holdings table is empty"))?;

        Ok(last.market_value.coerce_decimal().ok_or_else(|| ReportError::numeric(
            "today's value", &last.market_value))?)
    }
}

/// Field/value pairs of the client profile block in their original order.
#[derive(Debug)]
pub struct ClientProfile {
    pub fields: Vec<(String, Value)>,
}

impl ClientProfile {
    fn parse(sheet: &Range<Cell>, start_row: usize, normalizer: &DateNormalizer) -> GenericResult<ClientProfile> {
        let rows: Vec<&[Cell]> = sheet.rows().skip(start_row).take(PROFILE_ROWS).collect();
        if rows.len() != PROFILE_ROWS {
            return Err(ReportError::malformed(REPORT, format!(
                "the client profile must consist of {} rows", PROFILE_ROWS)).into());
        }

        let fields = rows.iter().map(|row| {
            let name = row.first().map(|cell| xls::get_value_cell(cell).to_string()).unwrap_or_default();
            let value = row.get(1).map(|cell| normalizer.normalize(cell)).unwrap_or(Value::Empty);
            (name.trim().to_owned(), value)
        }).collect();

        Ok(ClientProfile {fields})
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(field, _)| field == name).map(|(_, value)| value)
    }

    pub fn client_id(&self) -> GenericResult<String> {
        match self.get(CLIENT_ID_FIELD) {
            Some(Value::Empty) | None => Err(ReportError::malformed(
                REPORT, "the client identifier is missing").into()),
            Some(value) => Ok(value.to_string().trim().to_owned()),
        }
    }

    pub fn report_date(&self) -> GenericResult<Value> {
        Ok(self.get(REPORT_DATE_FIELD).cloned().ok_or_else(|| ReportError::malformed(
            REPORT, format!("the client profile has no {:?} field", REPORT_DATE_FIELD)))?)
    }
}

#[derive(XlsTableRow, Debug, Clone, PartialEq)]
pub struct HoldingRow {
    #[column(name="Instrument Name")]
    pub name: Value,
    #[column(name="Quantity")]
    pub quantity: Value,
    #[column(name="Purchase Price")]
    pub purchase_price: Value,
    #[column(name="Purchase Value")]
    pub purchase_value: Value,
    #[column(name="Market Price")]
    pub market_price: Value,
    #[column(name="Market Value")]
    pub market_value: Value,
    #[column(name="UnrealisedGain/Loss")]
    pub unrealised_profit: Value,
}

impl TableReader for HoldingRow {
    fn dropped_columns() -> &'static [&'static str] {
        &["ST Qty", "ST G/L", "LT Qty", "LT G/L", "UnrealisedGain/Loss%", "ISIN"]
    }
}

impl HoldingRow {
    pub fn values(&self) -> Vec<Value> {
        vec![
            self.name.clone(), self.quantity.clone(), self.purchase_price.clone(),
            self.purchase_value.clone(), self.market_price.clone(), self.market_value.clone(),
            self.unrealised_profit.clone(),
        ]
    }
}
