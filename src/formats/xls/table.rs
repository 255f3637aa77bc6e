use itertools::Itertools;
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::core::GenericResult;

use super::{SheetReader, Cell};

static EMPTY_CELL: Cell = Cell::Empty;

pub trait TableRow: Sized {
    fn columns() -> Vec<TableColumn>;
    fn parse(row: &[&Cell]) -> GenericResult<Self>;
}

pub trait TableReader {
    /// Titles of the columns which are known to be present in the source table but must never
    /// get into the parsed rows.
    fn dropped_columns() -> &'static [&'static str] {
        &[]
    }
}

/// Reads a table which starts with a title row at the current sheet position and spans to the end
/// of sheet. Blank spacer rows are skipped, so a total row separated from the data still gets into
/// the table. Columns are looked up by their titles, so their order doesn't matter and unknown
/// columns are ignored.
pub fn read_table<T: TableRow + TableReader>(sheet: &mut SheetReader) -> GenericResult<Vec<T>> {
    trace!("Reading {} table starting from #{} row...", std::any::type_name::<T>(), sheet.next_human_row_id());

    match read_table_rows(sheet) {
        Ok(table) => Ok(table),
        Err(e) => Err(sheet.detalize_error(&e.to_string()).into()),
    }
}

fn read_table_rows<T: TableRow + TableReader>(sheet: &mut SheetReader) -> GenericResult<Vec<T>> {
    let mut table = Vec::new();
    let columns = T::columns();
    let columns_mapping = map_columns(sheet.next_row_checked()?, &columns, T::dropped_columns())?;

    loop {
        sheet.skip_empty_rows();

        let Some(row) = sheet.next_row() else {
            break;
        };

        table.push(TableRow::parse(&columns_mapping.map(row))?);
    }

    Ok(table)
}

pub struct TableColumn {
    name: &'static str,
}

impl TableColumn {
    pub fn new(name: &'static str) -> TableColumn {
        TableColumn {name}
    }

    fn find(&self, titles: &[Option<String>]) -> GenericResult<usize> {
        Ok(titles.iter().position(|title| title.as_deref() == Some(self.name)).ok_or_else(|| format!(
            "The table has no {:?} column", self.name))?)
    }
}

pub struct ColumnsMapping {
    mapping: Vec<usize>,
}

impl ColumnsMapping {
    pub fn map<'a>(&self, row: &'a [Cell]) -> Vec<&'a Cell> {
        self.mapping.iter().map(|&cell_id| row.get(cell_id).unwrap_or(&EMPTY_CELL)).collect()
    }
}

pub fn map_columns(row: &[Cell], columns: &[TableColumn], dropped: &[&str]) -> GenericResult<ColumnsMapping> {
    let mut titles = row.iter().map(normalize_title).collect::<Vec<_>>();

    for title in titles.iter_mut() {
        if let Some(name) = title.as_ref() {
            if dropped.contains(&name.as_str()) {
                trace!("Dropping {:?} column.", name);
                *title = None;
            }
        }
    }

    let mut mapping = Vec::with_capacity(columns.len());
    for column in columns {
        mapping.push(column.find(&titles)?);
    }

    let ignored = titles.iter().enumerate()
        .filter(|(cell_id, title)| title.is_some() && !mapping.contains(cell_id))
        .filter_map(|(_, title)| title.as_deref())
        .collect_vec();

    if !ignored.is_empty() {
        trace!("Ignoring unknown columns: {}.", ignored.iter().map(|title| format!("{:?}", title)).join(", "));
    }

    Ok(ColumnsMapping {mapping})
}

fn normalize_title(cell: &Cell) -> Option<String> {
    lazy_static! {
        static ref EXTRA_SPACES_REGEX: Regex = Regex::new(r"\s{2,}").unwrap();
    }

    match cell {
        Cell::String(value) => {
            let value = EXTRA_SPACES_REGEX.replace_all(value.trim(), " ");
            if value.is_empty() {
                None
            } else {
                Some(value.into_owned())
            }
        },
        Cell::Empty => None,
        _ => Some(cell.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use calamine::Range;
    use pretty_assertions::assert_eq;
    use super::*;

    fn columns() -> Vec<TableColumn> {
        vec![TableColumn::new("Name"), TableColumn::new("Value")]
    }

    fn strings(titles: &[&str]) -> Vec<Cell> {
        titles.iter().map(|title| {
            if title.is_empty() {
                Cell::Empty
            } else {
                Cell::String(title.to_string())
            }
        }).collect()
    }

    #[test]
    fn mapping_by_titles() {
        let header = strings(&["Value", "", "ISIN", "  Name  "]);
        let mapping = map_columns(&header, &columns(), &["ISIN"]).unwrap();

        let row = vec![Cell::Float(1.0), Cell::Empty, Cell::String(s!("X")), Cell::String(s!("A"))];
        assert_eq!(mapping.map(&row), vec![&row[3], &row[0]]);

        let short_row = vec![Cell::Float(1.0)];
        assert_eq!(mapping.map(&short_row), vec![&EMPTY_CELL, &short_row[0]]);
    }

    #[test]
    fn missing_column() {
        let header = strings(&["Name", "ISIN"]);
        let err = map_columns(&header, &columns(), &[]).err().unwrap();
        assert_eq!(err.to_string(), r#"The table has no "Value" column"#);
    }

    #[test]
    fn dropped_column_is_never_mapped() {
        let header = strings(&["Name", "Value", "Value"]);
        let mapping = map_columns(&header, &columns(), &[]).unwrap();
        assert_eq!(mapping.mapping, vec![0, 1]);

        let err = map_columns(&header, &columns(), &["Value"]).err().unwrap();
        assert_eq!(err.to_string(), r#"The table has no "Value" column"#);
    }

    struct Row {
        name: Cell,
    }

    impl TableRow for Row {
        fn columns() -> Vec<TableColumn> {
            vec![TableColumn::new("Name")]
        }

        fn parse(row: &[&Cell]) -> GenericResult<Row> {
            Ok(Row {name: row[0].clone()})
        }
    }

    impl TableReader for Row {
    }

    #[test]
    fn blank_rows_are_skipped() {
        let rows = [
            vec![Cell::String(s!("Name"))],
            vec![Cell::String(s!("A"))],
            vec![Cell::Empty],
            vec![Cell::String(s!(" "))],
            vec![Cell::String(s!("Total"))],
            vec![Cell::Empty],
        ];

        let mut range = Range::new((0, 0), (rows.len() as u32 - 1, 0));
        for (row_id, row) in rows.into_iter().enumerate() {
            range.set_value((row_id as u32, 0), row[0].clone());
        }

        let table = read_table::<Row>(&mut SheetReader::new(range)).unwrap();
        assert_eq!(table.iter().map(|row| row.name.to_string()).collect::<Vec<_>>(), vec![s!("A"), s!("Total")]);
    }
}
