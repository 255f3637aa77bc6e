/// Rows reserved for the banner: the first six are merged across the banner columns, the last one
/// is left blank.
pub const BANNER_HEIGHT: u32 = 7;
pub const BANNER_MERGED_ROWS: u32 = 6;
pub const BANNER_COLUMNS: u16 = 16;

/// Blank rows between two adjacent tables.
pub const TABLE_GAP: u32 = 3;

/// Position of one table on the report sheet: a header row followed by the data rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub start: u32,
    pub rows: u32,
}

impl Region {
    pub fn first_data_row(&self) -> u32 {
        self.start + 1
    }

    /// Index of the row following the region.
    pub fn end(&self) -> u32 {
        self.start + 1 + self.rows
    }
}

/// Stacks the tables vertically below the banner.
#[derive(Debug)]
pub struct ReportLayout {
    pub regions: Vec<Region>,
}

impl ReportLayout {
    pub fn new(table_rows: &[u32]) -> ReportLayout {
        let mut start = BANNER_HEIGHT;

        let regions = table_rows.iter().map(|&rows| {
            let region = Region {start, rows};
            start = region.end() + TABLE_GAP;
            region
        }).collect();

        ReportLayout {regions}
    }

    pub fn height(&self) -> u32 {
        self.regions.last().map(Region::end).unwrap_or(BANNER_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn region_offsets() {
        let layout = ReportLayout::new(&[4, 10, 3, 2, 1]);

        assert_eq!(layout.regions, vec![
            Region {start: 7, rows: 4},
            Region {start: 15, rows: 10},
            Region {start: 29, rows: 3},
            Region {start: 36, rows: 2},
            Region {start: 42, rows: 1},
        ]);
        assert_eq!(layout.height(), 44);
    }

    #[rstest(rows,
        case(vec![4, 10, 2, 1, 1]),
        case(vec![4, 10, 0, 7, 0]),
        case(vec![4, 10, 25, 13, 6]),
    )]
    fn tables_are_separated(rows: Vec<u32>) {
        let layout = ReportLayout::new(&rows);

        for pair in layout.regions.windows(2) {
            assert_eq!(pair[1].start - pair[0].end(), TABLE_GAP);
        }

        let tables_height: u32 = rows.iter().map(|rows| 1 + rows).sum();
        assert_eq!(layout.height(), BANNER_HEIGHT + tables_height + TABLE_GAP * (rows.len() as u32 - 1));
    }
}
