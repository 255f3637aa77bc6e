//! This module provides a thin wrapper around prettytable for printing summaries to terminal.

use num_traits::ToPrimitive;

use prettytable::{Row as RawRow, Cell as RawCell};
use prettytable::format::{FormatBuilder, LinePosition, LineSeparator};

use separator::Separatable;

use crate::types::{Decimal, Value};
use crate::util;

pub use prettytable::{Table, format::Alignment};

#[derive(Clone)]
pub struct Cell {
    text: String,
    align: Alignment,
}

impl Cell {
    pub fn new(text: &str) -> Cell {
        Cell::new_align(text, Alignment::LEFT)
    }

    pub fn new_align(text: &str, align: Alignment) -> Cell {
        Cell {
            text: text.to_owned(),
            align,
        }
    }

    pub fn new_value(value: &Value) -> Cell {
        match value {
            Value::Number(value) => Cell::new_amount(*value),
            _ => Cell::new_align(&value.to_string(), Alignment::CENTER),
        }
    }

    pub fn new_amount(value: Decimal) -> Cell {
        Cell::new_align(&format_amount(value), Alignment::RIGHT)
    }

    pub fn new_percent(value: Decimal) -> Cell {
        Cell::new_align(&format!("{}%", util::round_to(value, 2)), Alignment::RIGHT)
    }
}

pub struct Row {
}

impl Row {
    pub fn new(row: &[Cell]) -> RawRow {
        let mut cells = Vec::with_capacity(row.len());

        for cell in row {
            cells.push(RawCell::new_align(&cell.text, cell.align));
        }

        RawRow::new(cells)
    }
}

pub fn print_table(name: &str, titles: &[&str], mut table: Table) {
    table.set_format(FormatBuilder::new().padding(1, 1).build());
    table.set_titles(RawRow::new(
        titles.iter().map(|name| RawCell::new_align(name, Alignment::CENTER)).collect()));

    let mut wrapping_table = Table::new();

    wrapping_table.set_format(FormatBuilder::new()
        .separator(LinePosition::Title, LineSeparator::new(' ', ' ', ' ', ' '))
        .build());

    wrapping_table.set_titles(RawRow::new(vec![
        RawCell::new_align(&("\n".to_owned() + name), Alignment::CENTER),
    ]));

    wrapping_table.add_row(RawRow::new(vec![RawCell::new(&table.to_string())]));
    wrapping_table.printstd();
}

/// Formats the amount with thousands separators and at most two fractional digits.
fn format_amount(value: Decimal) -> String {
    let value = util::round_to(value, 2);
    let sign = if value.is_sign_negative() && !value.is_zero() {"-"} else {""};

    let value = value.abs();
    let integer = value.trunc();

    match integer.to_i64() {
        Some(integer_value) => {
            let fraction = (value - integer).to_string();
            format!("{}{}{}", sign, integer_value.separated_string(), fraction.trim_start_matches('0'))
        },
        None => format!("{}{}", sign, value),
    }
}
