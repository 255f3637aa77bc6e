use num_traits::cast::FromPrimitive;

use crate::core::GenericResult;
use crate::types::{Decimal, Value};
use crate::util;

pub use calamine::Data as Cell;

/// Best-effort numeric coercion: numbers are taken as is, strings are parsed after removing
/// thousands separators, everything else yields `None`.
pub fn coerce_decimal(cell: &Cell) -> Option<Decimal> {
    match cell {
        Cell::Float(value) => Decimal::from_f64(*value),
        Cell::Int(value) => Decimal::from_i64(*value),
        Cell::String(value) => util::parse_amount(value),
        _ => None,
    }
}

pub fn get_value_cell(cell: &Cell) -> Value {
    match cell {
        Cell::Empty => Value::Empty,
        Cell::String(value) => Value::Text(value.clone()),
        Cell::Float(_) | Cell::Int(_) => Value::from(coerce_decimal(cell)),
        _ => Value::Text(cell.to_string()),
    }
}

pub trait CellType: Sized {
    fn parse(cell: &Cell) -> GenericResult<Self>;
}

impl CellType for Cell {
    fn parse(cell: &Cell) -> GenericResult<Cell> {
        Ok(cell.clone())
    }
}

impl CellType for Value {
    fn parse(cell: &Cell) -> GenericResult<Value> {
        Ok(get_value_cell(cell))
    }
}
