//! Lays a carved maze out as physics bodies filling the viewport.

use log::debug;
use serde_derive::Serialize;

use crate::bodies::{Body, BodyLabel, CellUnit, Circle, Rectangle};
use crate::config::MazeConfig;
use crate::errors::*;
use crate::grid::MazeGrid;
use crate::units::{ColumnsCount, Height, RowsCount, UnitHeight, UnitWidth, Width};
use crate::walls;
use crate::world::PhysicsWorld;

/// Gravity before the goal is reached. The ball only moves when steered.
pub const INITIAL_GRAVITY_Y: f64 = 0.0;

const GOAL_WIDTH_FRACTION: f64 = 0.7;
const GOAL_HEIGHT_FRACTION: f64 = 0.5;

#[derive(Serialize, PartialEq, Clone, Debug)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub gravity_y: f64,
    /// Every static body: boundary walls, then interior walls, then the goal.
    pub bodies: Vec<Body>,
    pub ball: Body,
}

impl Scene {
    /// Scale the maze to the configured viewport. Each cell is `width / columns` wide and
    /// `height / rows` tall, with the ball in the top left cell and the goal in the bottom right.
    ///
    /// Rows and columns come from the grid. Only the viewport is read from `config`.
    pub fn build(grid: &MazeGrid, config: &MazeConfig) -> Result<Scene> {
        config.validate_viewport()?;
        let (Width(width), Height(height)) = config.viewport();
        let (RowsCount(rows), ColumnsCount(columns)) = (grid.rows(), grid.columns());
        let unit = CellUnit::new(UnitWidth(width / columns as f64),
                                 UnitHeight(height / rows as f64))?;
        let (unit_x, unit_y) = (unit.width(), unit.height());

        let boundaries = walls::boundary_walls(Width(width), Height(height));
        let interior = walls::closed_wall_segments(grid, &unit);

        let mut bodies = Vec::with_capacity(boundaries.len() + interior.len() + 1);
        bodies.extend(boundaries.iter().map(|r| Body::static_rectangle(BodyLabel::Boundary, *r)));
        bodies.extend(interior.iter().map(|segment| segment.as_body()));
        bodies.push(Body::static_rectangle(BodyLabel::Goal,
                                           Rectangle {
                                               x: width - unit_x / 2.0,
                                               y: height - unit_y / 2.0,
                                               width: unit_x * GOAL_WIDTH_FRACTION,
                                               height: unit_y * GOAL_HEIGHT_FRACTION,
                                           }));

        let ball = Body::dynamic_circle(BodyLabel::Ball,
                                        Circle {
                                            x: unit_x / 2.0,
                                            y: unit_y / 2.0,
                                            radius: unit_x.min(unit_y) / 4.0,
                                        });

        Ok(Scene {
            width,
            height,
            gravity_y: INITIAL_GRAVITY_Y,
            bodies,
            ball,
        })
    }

    pub fn bodies_labelled(&self, label: BodyLabel) -> impl Iterator<Item = &Body> {
        self.bodies.iter().chain(Some(&self.ball)).filter(move |body| body.label == label)
    }

    /// Register every body with the world and set its gravity. Returns the ball's handle.
    pub fn install<W: PhysicsWorld>(&self, world: &mut W) -> W::BodyHandle {
        world.set_gravity(self.gravity_y);
        for body in &self.bodies {
            world.add_body(body);
        }
        debug!("installed {} static bodies and the ball", self.bodies.len());
        world.add_body(&self.ball)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::bodies::Shape;
    use crate::world::recording::RecordingWorld;

    fn config(rows: usize, columns: usize) -> MazeConfig {
        MazeConfig { rows, columns, seed: Some(5), ..MazeConfig::default() }
    }

    #[test]
    fn single_cell_scene() {
        let config = config(1, 1);
        let grid = config.generate().unwrap();
        let scene = Scene::build(&grid, &config).unwrap();

        assert_eq!(scene.bodies_labelled(BodyLabel::Boundary).count(), 4);
        assert_eq!(scene.bodies_labelled(BodyLabel::Wall).count(), 0);
        assert_eq!(scene.gravity_y, 0.0);

        let goal = scene.bodies_labelled(BodyLabel::Goal).next().unwrap();
        assert_eq!(goal.shape,
                   Shape::Rectangle(Rectangle { x: 400.0, y: 300.0, width: 560.0, height: 300.0 }));
        assert!(goal.is_static);

        assert_eq!(scene.ball.shape, Shape::Circle(Circle { x: 400.0, y: 300.0, radius: 150.0 }));
        assert!(!scene.ball.is_static);
    }

    #[test]
    fn wall_count_follows_the_maze() {
        let config = config(15, 15);
        let grid = config.generate().unwrap();
        let scene = Scene::build(&grid, &config).unwrap();
        let interior_walls = 15 * 14 * 2;
        assert_eq!(scene.bodies_labelled(BodyLabel::Wall).count(), interior_walls - (15 * 15 - 1));
        assert!(scene.bodies_labelled(BodyLabel::Wall).all(|body| body.is_static));
    }

    #[test]
    fn goal_sits_in_the_bottom_right_cell() {
        let config = MazeConfig { rows: 4, columns: 5, viewport_width: 100.0, viewport_height: 80.0, seed: Some(1) };
        let grid = config.generate().unwrap();
        let scene = Scene::build(&grid, &config).unwrap();
        let goal = scene.bodies_labelled(BodyLabel::Goal).next().unwrap();
        assert_eq!(goal.shape,
                   Shape::Rectangle(Rectangle { x: 90.0, y: 70.0, width: 14.0, height: 10.0 }));
        assert_eq!(scene.ball.shape, Shape::Circle(Circle { x: 10.0, y: 10.0, radius: 5.0 }));
    }

    #[test]
    fn install_registers_everything() {
        let config = config(6, 8);
        let grid = config.generate().unwrap();
        let scene = Scene::build(&grid, &config).unwrap();

        let mut world = RecordingWorld::default();
        let ball = scene.install(&mut world);

        assert_eq!(world.gravity_y, Some(0.0));
        assert_eq!(world.bodies.len(), scene.bodies.len() + 1);
        assert_eq!(world.bodies[ball].label, BodyLabel::Ball);
        assert_eq!(world.bodies_labelled(BodyLabel::Goal).len(), 1);
    }

    #[test]
    fn bad_viewport_fails() {
        let config = MazeConfig { viewport_width: 0.0, ..config(3, 3) };
        let grid = MazeGrid::new(RowsCount(3), ColumnsCount(3)).unwrap();
        assert!(Scene::build(&grid, &config).is_err());
    }

    #[test]
    fn grid_dimensions_win_over_the_config() {
        let grid = MazeGrid::new(RowsCount(2), ColumnsCount(4)).unwrap();
        let config = MazeConfig { rows: 0, columns: 9, viewport_width: 80.0, viewport_height: 40.0, seed: None };
        let scene = Scene::build(&grid, &config).unwrap();
        // 20 x 20 cells from the 2 x 4 grid, all 10 interior walls closed
        assert_eq!(scene.bodies_labelled(BodyLabel::Wall).count(), 10);
        let goal = scene.bodies_labelled(BodyLabel::Goal).next().unwrap();
        assert_eq!(goal.shape,
                   Shape::Rectangle(Rectangle { x: 70.0, y: 30.0, width: 14.0, height: 10.0 }));
    }

    #[test]
    fn json_output() {
        let config = config(2, 2);
        let grid = config.generate().unwrap();
        let json = Scene::build(&grid, &config).unwrap().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["ball"]["label"], "ball");
        assert_eq!(value["width"], 800.0);
        // 4 boundaries, 1 closed interior wall, 1 goal
        assert_eq!(value["bodies"].as_array().map(|bodies| bodies.len()), Some(6));
    }
}
