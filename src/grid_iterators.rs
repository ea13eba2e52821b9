use crate::cells::GridCoordinate;
use crate::units::{ColumnIndex, ColumnsCount, RowIndex, RowsCount};

/// Row major iteration over every cell coordinate of a grid.
#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    current_cell_number: usize,
    cells_count: usize,
    columns: ColumnsCount,
}

impl CellIter {
    pub(crate) fn new(rows: RowsCount, columns: ColumnsCount) -> CellIter {
        CellIter {
            current_cell_number: 0,
            cells_count: rows.0 * columns.0,
            columns,
        }
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = GridCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = GridCoordinate::from_row_major_index(self.current_cell_number, self.columns);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

/// Iterates the grid one whole row of coordinates at a time, top row first.
#[derive(Debug, Copy, Clone)]
pub struct RowIter {
    current_index: usize,
    rows: RowsCount,
    columns: ColumnsCount,
}

impl RowIter {
    pub(crate) fn new(rows: RowsCount, columns: ColumnsCount) -> RowIter {
        RowIter {
            current_index: 0,
            rows,
            columns,
        }
    }
}

impl ExactSizeIterator for RowIter {}
impl Iterator for RowIter {
    type Item = Vec<GridCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        let RowsCount(count) = self.rows;
        if self.current_index < count {
            let ColumnsCount(length) = self.columns;
            let row = self.current_index;
            let coords = (0..length)
                .map(|i: usize| {
                    GridCoordinate::from_row_column_indices(RowIndex(row), ColumnIndex(i))
                })
                .collect();
            self.current_index += 1;
            Some(coords)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.rows.0 - self.current_index;
        (lower_bound, Some(lower_bound))
    }
}
