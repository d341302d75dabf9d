/// Layout model for the swatch-picker grid. Parses the palette's
/// `picker_grid` descriptor and maps swatch indexes to grid slots; the host
/// toolkit owns the actual buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerGrid {
    columns: usize,
    rows: usize,
}

const DEFAULT_COLUMNS: usize = 4;
const DEFAULT_ROWS: usize = 4;

impl PickerGrid {
    /// Parse a `"<cols>x<rows>"` descriptor such as `"4x4"`. Malformed or
    /// zero-sized descriptors fall back to the 4x4 default.
    pub fn parse(descriptor: &str) -> Self {
        let parsed = descriptor
            .trim()
            .split_once(['x', 'X'])
            .and_then(|(cols, rows)| {
                let columns: usize = cols.trim().parse().ok()?;
                let rows: usize = rows.trim().parse().ok()?;
                (columns > 0 && rows > 0).then_some(Self { columns, rows })
            });
        parsed.unwrap_or_else(|| {
            tracing::debug!(descriptor, "unparsable picker grid, using 4x4");
            Self::default()
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn capacity(&self) -> usize {
        self.columns * self.rows
    }

    /// Grid slot for a swatch index, filling left-to-right, top-to-bottom.
    pub fn slot(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }
}

impl Default for PickerGrid {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_cols_then_rows() {
        let grid = PickerGrid::parse("3x5");
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.capacity(), 15);
    }

    #[test]
    fn parse_tolerates_case_and_whitespace() {
        assert_eq!(PickerGrid::parse(" 4 X 4 "), PickerGrid::default());
    }

    #[test]
    fn parse_falls_back_on_malformed_descriptors() {
        assert_eq!(PickerGrid::parse(""), PickerGrid::default());
        assert_eq!(PickerGrid::parse("4by4"), PickerGrid::default());
        assert_eq!(PickerGrid::parse("0x4"), PickerGrid::default());
        assert_eq!(PickerGrid::parse("4x"), PickerGrid::default());
    }

    #[test]
    fn slot_fills_rows_left_to_right() {
        let grid = PickerGrid::parse("4x4");
        assert_eq!(grid.slot(0), (0, 0));
        assert_eq!(grid.slot(3), (0, 3));
        assert_eq!(grid.slot(4), (1, 0));
        assert_eq!(grid.slot(15), (3, 3));
    }
}
