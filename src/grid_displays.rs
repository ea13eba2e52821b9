use std::fmt;

use crate::cells::{CoordinateSmallVec, GridCoordinate};
use crate::grid::MazeGrid;
use crate::units::{ColumnIndex, ColumnsCount, RowIndex, RowsCount};
use crate::utils::FnvHashSet;


pub trait GridDisplay {
    /// Render the contents of a grid cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _: GridCoordinate) -> String {
        String::from("   ")
    }
}


#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<GridCoordinate>,
}
impl PathDisplay {
    pub fn new(path: &[GridCoordinate]) -> Self {
        PathDisplay { on_path_coordinates: path.iter().cloned().collect() }
    }
}
impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if self.on_path_coordinates.contains(&coord) {
            String::from(" . ")
        } else {
            String::from("   ")
        }
    }
}


#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start_coordinates: CoordinateSmallVec,
    end_coordinates: CoordinateSmallVec,
}
impl StartEndPointsDisplay {
    pub fn new(starts: CoordinateSmallVec, ends: CoordinateSmallVec) -> StartEndPointsDisplay {
        StartEndPointsDisplay {
            start_coordinates: starts,
            end_coordinates: ends,
        }
    }
}
impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {

        let contains_coordinate =
            |coordinates: &CoordinateSmallVec| coordinates.iter().any(|&c| c == coord);

        if contains_coordinate(&self.start_coordinates) {
            String::from(" S ")

        } else if contains_coordinate(&self.end_coordinates) {

            String::from(" E ")

        } else {
            String::from("   ")
        }
    }
}


/// Box drawing glyph for a lattice corner, indexed by which of its arms carry a closed wall.
/// Bit 0 is up, bit 1 down, bit 2 left and bit 3 right.
const CORNER_GLYPHS: [char; 16] = [
    ' ', '╵', '╷', '│', '╴', '┘', '┐', '┤', '╶', '└', '┌', '├', '─', '┴', '┬', '┼',
];
const ARM_UP: usize = 1;
const ARM_DOWN: usize = 1 << 1;
const ARM_LEFT: usize = 1 << 2;
const ARM_RIGHT: usize = 1 << 3;

/// Is the wall along the top of lattice row `lattice_row` above cell column `column` closed?
/// Lattice rows run from 0 (the top edge) to `rows` (the bottom edge).
fn is_horizontal_edge_closed(grid: &MazeGrid, lattice_row: usize, column: usize) -> bool {
    if lattice_row == 0 || lattice_row == grid.rows().0 {
        return true;
    }
    grid.horizontal_wall(RowIndex(lattice_row - 1), ColumnIndex(column)) == Some(false)
}

/// Is the wall on lattice column `lattice_column` beside cell row `row` closed?
/// Lattice columns run from 0 (the left edge) to `columns` (the right edge).
fn is_vertical_edge_closed(grid: &MazeGrid, row: usize, lattice_column: usize) -> bool {
    if lattice_column == 0 || lattice_column == grid.columns().0 {
        return true;
    }
    grid.vertical_wall(RowIndex(row), ColumnIndex(lattice_column - 1)) == Some(false)
}

fn corner_glyph(grid: &MazeGrid, lattice_row: usize, lattice_column: usize) -> char {
    let (RowsCount(rows), ColumnsCount(columns)) = (grid.rows(), grid.columns());
    let mut arms = 0;
    if lattice_row > 0 && is_vertical_edge_closed(grid, lattice_row - 1, lattice_column) {
        arms |= ARM_UP;
    }
    if lattice_row < rows && is_vertical_edge_closed(grid, lattice_row, lattice_column) {
        arms |= ARM_DOWN;
    }
    if lattice_column > 0 && is_horizontal_edge_closed(grid, lattice_row, lattice_column - 1) {
        arms |= ARM_LEFT;
    }
    if lattice_column < columns && is_horizontal_edge_closed(grid, lattice_row, lattice_column) {
        arms |= ARM_RIGHT;
    }
    CORNER_GLYPHS[arms]
}

/// Draws the maze on the lattice of cell corners. Each cell row is a line of cell bodies between
/// vertical walls, sandwiched by lines of corners joined by horizontal walls.
impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (RowsCount(rows), ColumnsCount(columns)) = (self.rows(), self.columns());

        let corner_line = |lattice_row: usize| {
            let mut line = String::new();
            for lattice_column in 0..=columns {
                line.push(corner_glyph(self, lattice_row, lattice_column));
                if lattice_column < columns {
                    let closed = is_horizontal_edge_closed(self, lattice_row, lattice_column);
                    line.push_str(if closed { "───" } else { "   " });
                }
            }
            line
        };

        for row in 0..rows {
            writeln!(f, "{}", corner_line(row))?;

            let mut body_line = String::new();
            for lattice_column in 0..=columns {
                body_line.push(if is_vertical_edge_closed(self, row, lattice_column) { '│' } else { ' ' });
                if lattice_column < columns {
                    let coord = GridCoordinate::new(row, lattice_column);
                    match *self.grid_display() {
                        Some(ref displayer) => body_line.push_str(&displayer.render_cell_body(coord)),
                        None => body_line.push_str("   "),
                    }
                }
            }
            writeln!(f, "{}", body_line)?;
        }
        writeln!(f, "{}", corner_line(rows))
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::cells::CompassPrimary;
    use smallvec::smallvec;
    use std::rc::Rc;

    fn small_grid(rows: usize, columns: usize) -> MazeGrid {
        MazeGrid::new(RowsCount(rows), ColumnsCount(columns)).expect("valid grid dimensions")
    }

    #[test]
    fn single_cell_text() {
        let g = small_grid(1, 1);
        assert_eq!(format!("{}", g), "┌───┐\n│   │\n└───┘\n");
    }

    #[test]
    fn open_corridor_text() {
        let mut g = small_grid(1, 2);
        g.open_wall(GridCoordinate::new(0, 0), CompassPrimary::East).expect("open failed");
        assert_eq!(format!("{}", g), "┌───────┐\n│       │\n└───────┘\n");
    }

    #[test]
    fn closed_pair_text() {
        let g = small_grid(1, 2);
        assert_eq!(format!("{}", g), "┌───┬───┐\n│   │   │\n└───┴───┘\n");
    }

    #[test]
    fn vertical_corridor_text() {
        let mut g = small_grid(2, 1);
        g.open_wall(GridCoordinate::new(0, 0), CompassPrimary::South).expect("open failed");
        assert_eq!(format!("{}", g), "┌───┐\n│   │\n│   │\n│   │\n└───┘\n");
    }

    #[test]
    fn walled_square_text() {
        let g = small_grid(2, 2);
        assert_eq!(format!("{}", g),
                   "┌───┬───┐\n│   │   │\n├───┼───┤\n│   │   │\n└───┴───┘\n");
    }

    #[test]
    fn u_shape_text() {
        let mut g = small_grid(2, 2);
        g.open_wall(GridCoordinate::new(0, 0), CompassPrimary::South).expect("open failed");
        g.open_wall(GridCoordinate::new(1, 0), CompassPrimary::East).expect("open failed");
        g.open_wall(GridCoordinate::new(1, 1), CompassPrimary::North).expect("open failed");
        assert_eq!(format!("{}", g),
                   "┌───┬───┐\n│   │   │\n│   ╵   │\n│       │\n└───────┘\n");
    }

    #[test]
    fn every_closed_wall_is_drawn() {
        let mut g = small_grid(3, 4);
        g.open_wall(GridCoordinate::new(1, 1), CompassPrimary::East).expect("open failed");
        g.open_wall(GridCoordinate::new(1, 1), CompassPrimary::South).expect("open failed");
        let text = format!("{}", g);
        let lines: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();
        assert_eq!(lines.len(), 2 * 3 + 1);
        assert!(lines.iter().all(|line| line.len() == 4 * 4 + 1));
        // vertical wall right of (1, 1) is open, right of (1, 0) is closed
        assert_eq!(lines[3][8], ' ');
        assert_eq!(lines[3][4], '│');
        // horizontal wall under (1, 1) is open, under (1, 0) is closed
        assert_eq!(&lines[4][5..8], &[' ', ' ', ' ']);
        assert_eq!(&lines[4][1..4], &['─', '─', '─']);
    }

    #[test]
    fn start_end_markers() {
        let mut g = small_grid(1, 2);
        g.open_wall(GridCoordinate::new(0, 0), CompassPrimary::East).expect("open failed");
        let markers = StartEndPointsDisplay::new(smallvec![GridCoordinate::new(0, 0)],
                                                 smallvec![GridCoordinate::new(0, 1)]);
        g.set_grid_display(Some(Rc::new(markers) as Rc<dyn GridDisplay>));
        assert_eq!(format!("{}", g), "┌───────┐\n│ S   E │\n└───────┘\n");
    }

    #[test]
    fn path_cells() {
        let display = PathDisplay::new(&[GridCoordinate::new(0, 0), GridCoordinate::new(0, 1)]);
        assert_eq!(display.render_cell_body(GridCoordinate::new(0, 1)), " . ");
        assert_eq!(display.render_cell_body(GridCoordinate::new(1, 1)), "   ");
    }
}
