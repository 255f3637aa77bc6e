use super::Cell;

pub fn is_empty_row(row: &[Cell]) -> bool {
    row.iter().all(is_empty_cell)
}

pub fn is_empty_cell(cell: &Cell) -> bool {
    match cell {
        Cell::Empty => true,
        Cell::String(value) => value.trim().is_empty(),
        _ => false,
    }
}
