use std::ops::Index;
use std::path::Path;

use calamine::{Range, Reader, open_workbook_auto};

use crate::core::GenericResult;

use super::{Cell, is_empty_row};

pub struct SheetReader {
    sheet: Range<Cell>,

    prev_row_id: Option<usize>,
    next_row_id: usize,
    eof_reached: bool,
}

impl SheetReader {
    pub fn new(sheet: Range<Cell>) -> SheetReader {
        SheetReader {
            sheet,
            prev_row_id: None,
            next_row_id: 0,
            eof_reached: false,
        }
    }

    pub fn open(path: &Path) -> GenericResult<SheetReader> {
        Ok(SheetReader::new(open_first_sheet(path)?))
    }

    pub fn sheet(&self) -> &Range<Cell> {
        &self.sheet
    }

    /// Positions the reader so that the next returned row is the specified one.
    pub fn seek(&mut self, row_id: usize) {
        self.prev_row_id = None;
        self.next_row_id = row_id;
        self.eof_reached = false;
    }

    pub fn current_human_row_id(&self) -> usize {
        self.next_row_id
    }

    pub fn next_human_row_id(&self) -> usize {
        self.next_row_id + 1
    }

    pub fn next_row(&mut self) -> Option<&[Cell]> {
        if self.next_row_id < self.sheet.height() {
            let row = self.sheet.index(self.next_row_id);
            self.prev_row_id.replace(self.next_row_id);
            self.next_row_id += 1;
            return Some(row);
        }

        self.eof_reached = true;
        None
    }

    pub fn next_row_checked(&mut self) -> GenericResult<&[Cell]> {
        Ok(self.next_row().ok_or("Got an unexpected end of sheet")?)
    }

    pub fn step_back(&mut self) {
        if let Some(row_id) = self.prev_row_id.take() {
            self.next_row_id = row_id;
            self.eof_reached = false;
        }
    }

    pub fn skip_empty_rows(&mut self) {
        while let Some(row) = self.next_row() {
            if !is_empty_row(row) {
                self.step_back();
                break;
            }
        }
    }

    pub fn detalize_error(&self, error: &str) -> String {
        if self.next_row_id == 0 || self.eof_reached {
            error.to_owned()
        } else {
            format!("Starting from #{} row: {:?}: {}",
                    self.current_human_row_id(), self.sheet.index(self.next_row_id - 1), error)
        }
    }
}

/// Opens the first worksheet of the workbook. Note that calamine trims leading empty rows and
/// columns, so row and column indexes are relative to the first used cell.
pub fn open_first_sheet(path: &Path) -> GenericResult<Range<Cell>> {
    let mut workbook = open_workbook_auto(path).map_err(|e| format!(
        "Unable to open {:?}: {}", path, e))?;

    Ok(workbook.worksheet_range_at(0).ok_or_else(|| format!(
        "{:?} has no sheets", path))??)
}
