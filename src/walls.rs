use log::debug;

use crate::bodies::{Body, BodyLabel, CellUnit, Rectangle};
use crate::grid::MazeGrid;
use crate::units::{ColumnIndex, ColumnsCount, EdgesCount, Height, RowIndex, RowsCount, Width};

/// Height of a wall lying between two vertically adjacent cells.
pub const HORIZONTAL_WALL_THICKNESS: f64 = 3.0;
/// Width of a wall standing between two horizontally adjacent cells.
pub const VERTICAL_WALL_THICKNESS: f64 = 5.0;
/// Thickness of the four walls enclosing the whole world.
pub const BOUNDARY_THICKNESS: f64 = 2.0;

/// A closed interior wall, as a centre positioned rectangle in world space.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct WallSegment {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl WallSegment {
    #[inline]
    pub fn label(&self) -> BodyLabel {
        BodyLabel::Wall
    }

    pub fn as_rectangle(&self) -> Rectangle {
        Rectangle {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    /// A static body labelled `wall`.
    pub fn as_body(&self) -> Body {
        Body::static_rectangle(self.label(), self.as_rectangle())
    }
}

/// One segment per closed wall of a finished maze: every closed horizontal wall entry in row major
/// order, then every closed vertical wall entry. Open walls produce nothing.
///
/// A horizontal entry `[r][c]` sits along the bottom edge of cell `(r, c)` and spans one cell
/// width. A vertical entry `[r][c]` sits along the right edge of cell `(r, c)` and spans one cell
/// height.
pub fn closed_wall_segments(grid: &MazeGrid, unit: &CellUnit) -> Vec<WallSegment> {
    let (RowsCount(rows), ColumnsCount(columns)) = (grid.rows(), grid.columns());
    let (unit_x, unit_y) = (unit.width(), unit.height());

    let (_, EdgesCount(interior_walls)) = grid.graph_size();
    let mut segments = Vec::with_capacity(interior_walls - grid.open_walls_count());

    for row in 0..rows.saturating_sub(1) {
        for column in 0..columns {
            if grid.horizontal_wall(RowIndex(row), ColumnIndex(column)) == Some(false) {
                segments.push(WallSegment {
                    x: column as f64 * unit_x + unit_x / 2.0,
                    y: row as f64 * unit_y + unit_y,
                    width: unit_x,
                    height: HORIZONTAL_WALL_THICKNESS,
                });
            }
        }
    }

    for row in 0..rows {
        for column in 0..columns.saturating_sub(1) {
            if grid.vertical_wall(RowIndex(row), ColumnIndex(column)) == Some(false) {
                segments.push(WallSegment {
                    x: column as f64 * unit_x + unit_x,
                    y: row as f64 * unit_y + unit_y / 2.0,
                    width: VERTICAL_WALL_THICKNESS,
                    height: unit_y,
                });
            }
        }
    }

    debug!("{} closed wall segments for a {} x {} maze", segments.len(), rows, columns);
    segments
}

/// The top, bottom, left and right walls enclosing a `width` by `height` world.
pub fn boundary_walls(width: Width, height: Height) -> [Rectangle; 4] {
    let (Width(w), Height(h)) = (width, height);
    [
        Rectangle { x: w / 2.0, y: 0.0, width: w, height: BOUNDARY_THICKNESS },
        Rectangle { x: w / 2.0, y: h, width: w, height: BOUNDARY_THICKNESS },
        Rectangle { x: 0.0, y: h / 2.0, width: BOUNDARY_THICKNESS, height: h },
        Rectangle { x: w, y: h / 2.0, width: BOUNDARY_THICKNESS, height: h },
    ]
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::cells::{CompassPrimary, GridCoordinate};
    use crate::generators;
    use crate::units::{UnitHeight, UnitWidth};
    use quickcheck::quickcheck;
    use rand::{rngs::StdRng, SeedableRng};

    fn unit(w: f64, h: f64) -> CellUnit {
        CellUnit::new(UnitWidth(w), UnitHeight(h)).unwrap()
    }

    #[test]
    fn single_cell_has_no_interior_walls() {
        let g = MazeGrid::new(RowsCount(1), ColumnsCount(1)).unwrap();
        assert!(closed_wall_segments(&g, &unit(10.0, 10.0)).is_empty());
    }

    #[test]
    fn walled_two_by_two_geometry() {
        let g = MazeGrid::new(RowsCount(2), ColumnsCount(2)).unwrap();
        let segments = closed_wall_segments(&g, &unit(10.0, 20.0));
        assert_eq!(segments,
                   vec![
                       // horizontals, under row 0
                       WallSegment { x: 5.0, y: 20.0, width: 10.0, height: 3.0 },
                       WallSegment { x: 15.0, y: 20.0, width: 10.0, height: 3.0 },
                       // verticals, right of column 0
                       WallSegment { x: 10.0, y: 10.0, width: 5.0, height: 20.0 },
                       WallSegment { x: 10.0, y: 30.0, width: 5.0, height: 20.0 },
                   ]);
        assert!(segments.iter().all(|s| s.label() == BodyLabel::Wall));
    }

    #[test]
    fn open_walls_emit_nothing() {
        let mut g = MazeGrid::new(RowsCount(2), ColumnsCount(2)).unwrap();
        g.open_wall(GridCoordinate::new(0, 0), CompassPrimary::South).unwrap();
        g.open_wall(GridCoordinate::new(1, 0), CompassPrimary::East).unwrap();
        let segments = closed_wall_segments(&g, &unit(10.0, 20.0));
        assert_eq!(segments,
                   vec![WallSegment { x: 15.0, y: 20.0, width: 10.0, height: 3.0 },
                        WallSegment { x: 10.0, y: 10.0, width: 5.0, height: 20.0 }]);
    }

    #[test]
    fn wall_bodies_are_static() {
        let segment = WallSegment { x: 1.0, y: 2.0, width: 3.0, height: 4.0 };
        let body = segment.as_body();
        assert!(body.is_static);
        assert_eq!(body.label, BodyLabel::Wall);
    }

    #[test]
    fn boundary_geometry() {
        let walls = boundary_walls(Width(800.0), Height(600.0));
        assert_eq!(walls[0], Rectangle { x: 400.0, y: 0.0, width: 800.0, height: 2.0 });
        assert_eq!(walls[3], Rectangle { x: 800.0, y: 300.0, width: 2.0, height: 600.0 });
    }

    #[test]
    fn closed_walls_plus_open_walls_is_every_interior_wall() {
        fn p(rows: u8, columns: u8, seed: u64) -> bool {
            let (rows, columns) = (rows as usize % 20 + 1, columns as usize % 20 + 1);
            let g = generators::carve_maze(RowsCount(rows), ColumnsCount(columns),
                                           &mut StdRng::seed_from_u64(seed)).unwrap();
            let interior_walls = rows * (columns - 1) + (rows - 1) * columns;
            let segments = closed_wall_segments(&g, &unit(7.0, 3.0));
            segments.len() + rows * columns - 1 == interior_walls
        }
        quickcheck(p as fn(u8, u8, u64) -> bool)
    }
}
