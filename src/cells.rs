use serde_derive::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::units::{ColumnIndex, ColumnsCount, RowIndex, RowsCount};

/// A cell position in the maze, `row` counting down from the top and `column` across from the left.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd, Serialize, Deserialize)]
pub struct GridCoordinate {
    pub row: usize,
    pub column: usize,
}

impl GridCoordinate {
    pub fn new(row: usize, column: usize) -> GridCoordinate {
        GridCoordinate { row, column }
    }

    #[inline]
    pub fn from_row_major_index(index: usize, columns: ColumnsCount) -> GridCoordinate {
        let ColumnsCount(width) = columns;
        GridCoordinate::new(index / width, index % width)
    }

    #[inline]
    pub fn from_row_column_indices(row_index: RowIndex, col_index: ColumnIndex) -> GridCoordinate {
        let (RowIndex(row), ColumnIndex(col)) = (row_index, col_index);
        GridCoordinate::new(row, col)
    }

    /// Is the coordinate within a `rows` by `columns` grid?
    #[inline]
    pub fn is_within(&self, rows: RowsCount, columns: ColumnsCount) -> bool {
        self.row < rows.0 && self.column < columns.0
    }
}

impl From<(usize, usize)> for GridCoordinate {
    fn from(row_column_pair: (usize, usize)) -> GridCoordinate {
        GridCoordinate::new(row_column_pair.0, row_column_pair.1)
    }
}

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North,
    East,
    South,
    West,
}

/// Candidate carving directions in the order the neighbours are listed before shuffling:
/// up, right, down, left.
pub const CARVE_DIRECTIONS: [CompassPrimary; 4] = [CompassPrimary::North,
                                                   CompassPrimary::East,
                                                   CompassPrimary::South,
                                                   CompassPrimary::West];

impl CompassPrimary {
    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::West => CompassPrimary::East,
        }
    }
}

/// Creates a new `GridCoordinate` offset 1 cell away in the given direction.
/// Returns None if the coordinate would fall off the top or left edge. The bottom and right edges
/// depend on the grid size so are left to the grid's own bounds checks.
pub fn offset_coordinate(coord: GridCoordinate, dir: CompassPrimary) -> Option<GridCoordinate> {
    let (row, column) = (coord.row, coord.column);
    match dir {
        CompassPrimary::North => row.checked_sub(1).map(|r| GridCoordinate::new(r, column)),
        CompassPrimary::South => row.checked_add(1).map(|r| GridCoordinate::new(r, column)),
        CompassPrimary::East => column.checked_add(1).map(|c| GridCoordinate::new(row, c)),
        CompassPrimary::West => column.checked_sub(1).map(|c| GridCoordinate::new(row, c)),
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn offsets() {
        let gc = |r, c| GridCoordinate::new(r, c);
        assert_eq!(offset_coordinate(gc(0, 0), CompassPrimary::North), None);
        assert_eq!(offset_coordinate(gc(0, 0), CompassPrimary::West), None);
        assert_eq!(offset_coordinate(gc(0, 0), CompassPrimary::South), Some(gc(1, 0)));
        assert_eq!(offset_coordinate(gc(0, 0), CompassPrimary::East), Some(gc(0, 1)));
        assert_eq!(offset_coordinate(gc(3, 5), CompassPrimary::North), Some(gc(2, 5)));
        assert_eq!(offset_coordinate(gc(3, 5), CompassPrimary::West), Some(gc(3, 4)));
    }

    #[test]
    fn row_major_index() {
        let coords = (0..6)
            .map(|i| GridCoordinate::from_row_major_index(i, ColumnsCount(3)))
            .collect::<Vec<_>>();
        assert_eq!(coords,
                   vec![GridCoordinate::new(0, 0), GridCoordinate::new(0, 1),
                        GridCoordinate::new(0, 2), GridCoordinate::new(1, 0),
                        GridCoordinate::new(1, 1), GridCoordinate::new(1, 2)]);
    }

    #[test]
    fn opposite_directions() {
        for dir in CARVE_DIRECTIONS.iter() {
            assert_ne!(dir.opposite(), *dir);
            assert_eq!(dir.opposite().opposite(), *dir);
        }
    }

    #[test]
    fn within_bounds() {
        assert!(GridCoordinate::new(1, 2).is_within(RowsCount(2), ColumnsCount(3)));
        assert!(!GridCoordinate::new(2, 2).is_within(RowsCount(2), ColumnsCount(3)));
        assert!(!GridCoordinate::new(1, 3).is_within(RowsCount(2), ColumnsCount(3)));
    }
}
