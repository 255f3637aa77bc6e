use std::collections::HashMap;

use calamine::Range;
use log::trace;

use super::Cell;

/// Maps text labels of the first sheet column to their row indexes.
///
/// Semi-structured reports are parsed in two passes: the index is built once over the whole
/// sheet and then fixed-shape blocks are sliced starting from the found anchors.
pub struct LabelIndex {
    rows: HashMap<String, Vec<usize>>,
}

impl LabelIndex {
    pub fn build(rows: &[&[Cell]]) -> LabelIndex {
        let mut index: HashMap<String, Vec<usize>> = HashMap::new();

        for (row_id, row) in rows.iter().enumerate() {
            if let Some(Cell::String(label)) = row.first() {
                let label = label.trim();
                if !label.is_empty() {
                    index.entry(label.to_owned()).or_default().push(row_id);
                }
            }
        }

        trace!("Found {} row labels.", index.len());
        LabelIndex {rows: index}
    }

    pub fn from_sheet(sheet: &Range<Cell>) -> LabelIndex {
        let rows: Vec<&[Cell]> = sheet.rows().collect();
        LabelIndex::build(&rows)
    }

    /// Returns the first row with the specified label.
    pub fn get(&self, label: &str) -> Option<usize> {
        self.find(label).first().copied()
    }

    /// Returns all rows with the specified label in sheet order.
    pub fn find(&self, label: &str) -> &[usize] {
        self.rows.get(label).map(Vec::as_slice).unwrap_or_default()
    }
}
