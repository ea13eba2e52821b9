use bit_set::BitSet;
use error_chain::bail;
use petgraph::graph::{NodeIndex, UnGraph};
use std::fmt;
use std::rc::Rc;

use crate::cells::{self, CompassPrimary, CoordinateSmallVec, GridCoordinate, CARVE_DIRECTIONS};
use crate::errors::*;
use crate::grid_displays::GridDisplay;
use crate::grid_iterators::{CellIter, RowIter};
use crate::units::{ColumnIndex, ColumnsCount, EdgesCount, NodesCount, RowIndex, RowsCount};


/// A rectangular maze grid.
///
/// Holds three boolean matrices, each stored as a row major `BitSet` where a set bit means `true`:
///
/// - visited cells, `rows x columns`
/// - vertical walls, `rows x (columns - 1)`. Entry `[r][c]` is the wall between cell `(r, c)` and
///   cell `(r, c + 1)`.
/// - horizontal walls, `(rows - 1) x columns`. Entry `[r][c]` is the wall between cell `(r, c)`
///   and cell `(r + 1, c)`.
///
/// A wall entry that is `true` is open (a passage). Every wall starts closed and every cell starts
/// unvisited. The sides of cells on the grid's outer edge have no entries at all.
pub struct MazeGrid {
    rows: RowsCount,
    columns: ColumnsCount,
    visited: BitSet,
    vertical_walls: BitSet,
    horizontal_walls: BitSet,
    grid_display: Option<Rc<dyn GridDisplay>>,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GridAccessError {
    InvalidGridCoordinate,
    /// The side asked for faces out of the grid so there is no wall entry for it.
    NoWallAtGridEdge,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
enum WallAxis {
    Vertical,
    Horizontal,
}

impl fmt::Debug for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MazeGrid :: rows: {:?}, columns: {:?}, visited: {}, open walls: {}",
               self.rows, self.columns, self.visited_count(), self.open_walls_count())
    }
}

impl MazeGrid {
    /// A fully walled grid with no visited cells.
    ///
    /// Fails if either dimension is zero.
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<MazeGrid> {
        let (RowsCount(r), ColumnsCount(c)) = (rows, columns);
        if r == 0 || c == 0 {
            bail!(ErrorKind::InvalidGridDimensions(r, c));
        }

        Ok(MazeGrid {
            rows,
            columns,
            visited: BitSet::with_capacity(r * c),
            vertical_walls: BitSet::with_capacity(r * (c - 1)),
            horizontal_walls: BitSet::with_capacity((r - 1) * c),
            grid_display: None,
        })
    }

    #[inline]
    pub fn set_grid_display(&mut self, grid_display: Option<Rc<dyn GridDisplay>>) {
        self.grid_display = grid_display;
    }

    #[inline]
    pub fn grid_display(&self) -> &Option<Rc<dyn GridDisplay>> {
        &self.grid_display
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.rows.0 * self.columns.0
    }

    /// The number of cells and the number of interior walls.
    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let (r, c) = (self.rows.0, self.columns.0);
        (NodesCount(r * c), EdgesCount(r * (c - 1) + (r - 1) * c))
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        coord.is_within(self.rows, self.columns)
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row * self.columns.0 + coord.column)
        } else {
            None
        }
    }

    /// Has the cell been visited? None if the coordinate is outside the grid.
    pub fn is_visited(&self, coord: GridCoordinate) -> Option<bool> {
        self.grid_coordinate_to_index(coord).map(|index| self.visited.contains(index))
    }

    /// Mark a cell as visited. Returns true if it was not visited before.
    pub(crate) fn mark_visited(&mut self, coord: GridCoordinate) -> ::std::result::Result<bool, GridAccessError> {
        let index = self.grid_coordinate_to_index(coord)
            .ok_or(GridAccessError::InvalidGridCoordinate)?;
        Ok(self.visited.insert(index))
    }

    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Is the vertical wall entry `[row][column]` open? None if out of the matrix bounds.
    pub fn vertical_wall(&self, row: RowIndex, column: ColumnIndex) -> Option<bool> {
        let (RowIndex(r), ColumnIndex(c)) = (row, column);
        let width = self.columns.0 - 1;
        if r < self.rows.0 && c < width {
            Some(self.vertical_walls.contains(r * width + c))
        } else {
            None
        }
    }

    /// Is the horizontal wall entry `[row][column]` open? None if out of the matrix bounds.
    pub fn horizontal_wall(&self, row: RowIndex, column: ColumnIndex) -> Option<bool> {
        let (RowIndex(r), ColumnIndex(c)) = (row, column);
        if r < self.rows.0 - 1 && c < self.columns.0 {
            Some(self.horizontal_walls.contains(r * self.columns.0 + c))
        } else {
            None
        }
    }

    /// Open the wall on the `direction` side of `coord`.
    ///
    /// Panics if the wall is already open: each wall is carved at most once, when the cell on the
    /// far side is first discovered, so a second write means the carving went wrong.
    pub(crate) fn open_wall(&mut self,
                            coord: GridCoordinate,
                            direction: CompassPrimary)
                            -> ::std::result::Result<(), GridAccessError> {
        let (axis, index) = self.wall_index(coord, direction)?;
        let newly_opened = match axis {
            WallAxis::Vertical => self.vertical_walls.insert(index),
            WallAxis::Horizontal => self.horizontal_walls.insert(index),
        };
        assert!(newly_opened,
                "wall {:?} of cell {:?} was opened twice", direction, coord);
        Ok(())
    }

    /// Is there a passage from `coord` to its neighbour in `direction`?
    /// False at the grid edge or for an invalid coordinate.
    pub fn is_passage_open(&self, coord: GridCoordinate, direction: CompassPrimary) -> bool {
        match self.wall_index(coord, direction) {
            Ok((WallAxis::Vertical, index)) => self.vertical_walls.contains(index),
            Ok((WallAxis::Horizontal, index)) => self.horizontal_walls.contains(index),
            Err(_) => false,
        }
    }

    #[inline]
    pub fn open_walls_count(&self) -> usize {
        self.vertical_walls.len() + self.horizontal_walls.len()
    }

    pub fn neighbour_at_direction(&self,
                                  coord: GridCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<GridCoordinate> {
        cells::offset_coordinate(coord, direction)
            .filter(|neighbour_coord| self.is_valid_coordinate(*neighbour_coord))
    }

    /// Cells that are to the North, East, South or West of a particular cell, but not
    /// necessarily joined by a passage.
    pub fn neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        CARVE_DIRECTIONS.iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .collect()
    }

    /// Cells joined to a particular cell by an open wall.
    /// Returns None if the coordinate is invalid.
    pub fn links(&self, coord: GridCoordinate) -> Option<CoordinateSmallVec> {
        if !self.is_valid_coordinate(coord) {
            return None;
        }
        let linked = CARVE_DIRECTIONS.iter()
            .filter(|dir| self.is_passage_open(coord, **dir))
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .collect();
        Some(linked)
    }

    /// Are two cells in the grid joined by an open wall? The argument order does not matter.
    pub fn is_linked(&self, a: GridCoordinate, b: GridCoordinate) -> bool {
        CARVE_DIRECTIONS.iter()
            .any(|dir| self.neighbour_at_direction(a, *dir) == Some(b) && self.is_passage_open(a, *dir))
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(self.rows, self.columns)
    }

    #[inline]
    pub fn iter_row(&self) -> RowIter {
        RowIter::new(self.rows, self.columns)
    }

    /// Every pair of cells joined by an open wall, each pair once, with the upper/left cell first.
    /// Horizontal wall passages come before vertical ones.
    pub fn iter_links(&self) -> impl Iterator<Item = (GridCoordinate, GridCoordinate)> + '_ {
        let below = self.iter()
            .filter(move |coord| self.is_passage_open(*coord, CompassPrimary::South))
            .map(|coord| (coord, GridCoordinate::new(coord.row + 1, coord.column)));
        let beside = self.iter()
            .filter(move |coord| self.is_passage_open(*coord, CompassPrimary::East))
            .map(|coord| (coord, GridCoordinate::new(coord.row, coord.column + 1)));
        below.chain(beside)
    }

    pub fn visited_matrix(&self) -> Vec<Vec<bool>> {
        self.iter_row()
            .map(|row| row.into_iter().map(|coord| self.visited.contains(coord.row * self.columns.0 + coord.column)).collect())
            .collect()
    }

    pub fn vertical_walls_matrix(&self) -> Vec<Vec<bool>> {
        (0..self.rows.0)
            .map(|r| {
                (0..self.columns.0 - 1)
                    .map(|c| self.vertical_wall(RowIndex(r), ColumnIndex(c)).unwrap_or(false))
                    .collect()
            })
            .collect()
    }

    pub fn horizontal_walls_matrix(&self) -> Vec<Vec<bool>> {
        (0..self.rows.0 - 1)
            .map(|r| {
                (0..self.columns.0)
                    .map(|c| self.horizontal_wall(RowIndex(r), ColumnIndex(c)).unwrap_or(false))
                    .collect()
            })
            .collect()
    }

    /// The open walls as an undirected petgraph graph. Node `i` is the cell at row major index `i`.
    pub fn to_graph(&self) -> UnGraph<GridCoordinate, ()> {
        let (NodesCount(nodes), EdgesCount(edges)) = self.graph_size();
        let mut graph = UnGraph::with_capacity(nodes, edges);
        for coord in self.iter() {
            let _ = graph.add_node(coord);
        }
        for (a, b) in self.iter_links() {
            if let (Some(a_index), Some(b_index)) = (self.grid_coordinate_to_index(a),
                                                     self.grid_coordinate_to_index(b)) {
                let _ = graph.add_edge(NodeIndex::new(a_index), NodeIndex::new(b_index), ());
            }
        }
        graph
    }

    /// Which matrix and which bit within it holds the wall on the `direction` side of `coord`.
    fn wall_index(&self,
                  coord: GridCoordinate,
                  direction: CompassPrimary)
                  -> ::std::result::Result<(WallAxis, usize), GridAccessError> {
        if !self.is_valid_coordinate(coord) {
            return Err(GridAccessError::InvalidGridCoordinate);
        }
        if self.neighbour_at_direction(coord, direction).is_none() {
            return Err(GridAccessError::NoWallAtGridEdge);
        }

        let (row, column, columns) = (coord.row, coord.column, self.columns.0);
        let wall = match direction {
            CompassPrimary::West => (WallAxis::Vertical, row * (columns - 1) + column - 1),
            CompassPrimary::East => (WallAxis::Vertical, row * (columns - 1) + column),
            CompassPrimary::North => (WallAxis::Horizontal, (row - 1) * columns + column),
            CompassPrimary::South => (WallAxis::Horizontal, row * columns + column),
        };
        Ok(wall)
    }
}
