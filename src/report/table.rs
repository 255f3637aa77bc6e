use crate::types::Value;

pub enum TableHeader {
    /// One title cell per column.
    Columns(Vec<String>),
    /// A single title merged across all table columns.
    Title(String),
}

/// A table to be rendered on the report sheet.
pub struct ReportTable {
    pub header: TableHeader,
    pub columns: usize,
    pub rows: Vec<Vec<Value>>,
    pub highlight_last_row: bool,
}

impl ReportTable {
    pub fn new(titles: &[&str], rows: Vec<Vec<Value>>) -> ReportTable {
        ReportTable {
            header: TableHeader::Columns(titles.iter().map(ToString::to_string).collect()),
            columns: titles.len(),
            rows,
            highlight_last_row: false,
        }
    }

    pub fn new_titled(title: &str, columns: usize, rows: Vec<Vec<Value>>) -> ReportTable {
        ReportTable {
            header: TableHeader::Title(title.to_owned()),
            columns,
            rows,
            highlight_last_row: false,
        }
    }

    pub fn highlight_last_row(mut self) -> ReportTable {
        self.highlight_last_row = true;
        self
    }

    pub fn is_highlighted(&self, row_id: usize) -> bool {
        self.highlight_last_row && row_id + 1 == self.rows.len()
    }
}
