//! **ballmaze** carves perfect mazes and lays them out as physics bodies for a roll the ball to
//! the goal game.

pub mod bodies;
pub mod cells;
pub mod config;
pub mod edges;
pub mod errors;
pub mod game;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod grid_iterators;
pub mod pathing;
pub mod scene;
pub mod units;
pub mod utils;
pub mod walls;
pub mod world;
