use log::{debug, trace};
use rand::Rng;

use crate::cells::{CompassPrimary, GridCoordinate, CARVE_DIRECTIONS};
use crate::errors::*;
use crate::grid::MazeGrid;
use crate::units::{ColumnsCount, RowsCount};
use crate::utils;


/// A cell being carved plus the neighbours it still has to try, in shuffled order.
#[derive(Debug, Copy, Clone)]
struct CarveFrame {
    coord: GridCoordinate,
    directions: [CompassPrimary; 4],
    next_direction: usize,
}

impl CarveFrame {
    fn new<R: Rng + ?Sized>(coord: GridCoordinate, rng: &mut R) -> CarveFrame {
        let mut directions = CARVE_DIRECTIONS;
        utils::shuffle(&mut directions, rng);
        CarveFrame {
            coord,
            directions,
            next_direction: 0,
        }
    }
}

/// Pick a cell uniformly at random from the whole grid.
pub fn random_cell<R: Rng + ?Sized>(grid: &MazeGrid, rng: &mut R) -> GridCoordinate {
    let RowsCount(rows) = grid.rows();
    let ColumnsCount(columns) = grid.columns();
    let row = rng.gen_range(0..rows);
    let column = rng.gen_range(0..columns);
    GridCoordinate::new(row, column)
}

/// Apply the recursive backtracker maze generation algorithm to the grid, starting from a
/// random cell.
///
/// This is a randomised depth first search. Entering a cell marks it visited and shuffles its up,
/// right, down and left neighbours. Each neighbour in turn that is inside the grid and not yet
/// visited has the wall between it and the current cell knocked down and is then entered itself.
/// Once every neighbour of a cell is tried the search backs up to the cell it came from.
///
/// Every cell is reached from the start so the grid ends up as a perfect maze: a spanning tree of
/// `rows * columns - 1` open walls with exactly one route between any two cells.
pub fn recursive_backtracker<R: Rng + ?Sized>(grid: &mut MazeGrid, rng: &mut R) {
    let start = random_cell(grid, rng);
    recursive_backtracker_from(grid, start, rng);
}

/// The recursive backtracker from a chosen start cell.
///
/// An explicit stack stands in for the call stack so large grids cannot overflow it. Frames are
/// pushed and processed in exactly the order the recursive description visits cells, so the same
/// random source carves the same maze either way. Does nothing if `start` is invalid or already
/// visited.
pub fn recursive_backtracker_from<R: Rng + ?Sized>(grid: &mut MazeGrid,
                                                   start: GridCoordinate,
                                                   rng: &mut R) {
    if grid.is_visited(start) != Some(false) {
        return;
    }
    debug!("carving {:?} x {:?} maze from {:?}", grid.rows(), grid.columns(), start);

    let mut stack: Vec<CarveFrame> = Vec::with_capacity(grid.size());
    visit(grid, start);
    stack.push(CarveFrame::new(start, rng));

    while let Some(frame) = stack.last_mut() {

        if frame.next_direction == frame.directions.len() {
            // backtrack
            let _ = stack.pop();
            continue;
        }

        let coord = frame.coord;
        let direction = frame.directions[frame.next_direction];
        frame.next_direction += 1;

        let next_coord = match grid.neighbour_at_direction(coord, direction) {
            Some(neighbour) => neighbour,
            None => continue, // out of bounds
        };
        if grid.is_visited(next_coord) == Some(true) {
            continue;
        }

        trace!("carve {:?} {:?} -> {:?}", coord, direction, next_coord);
        grid.open_wall(coord, direction)
            .expect("neighbour within the grid always has a wall entry");
        debug_assert!(grid.is_passage_open(next_coord, direction.opposite()));
        visit(grid, next_coord);
        stack.push(CarveFrame::new(next_coord, rng));
    }

    debug!("carved {} open walls over {} cells", grid.open_walls_count(), grid.visited_count());
}

/// Build a new grid and carve a maze into it.
pub fn carve_maze<R: Rng + ?Sized>(rows: RowsCount, columns: ColumnsCount, rng: &mut R) -> Result<MazeGrid> {
    let mut grid = MazeGrid::new(rows, columns)?;
    recursive_backtracker(&mut grid, rng);
    Ok(grid)
}

fn visit(grid: &mut MazeGrid, coord: GridCoordinate) {
    let newly_visited = grid.mark_visited(coord)
        .expect("carved cells are always within the grid");
    debug_assert!(newly_visited, "cell {:?} visited twice", coord);
}
