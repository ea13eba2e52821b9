use itertools::Itertools;
use petgraph::algo::{all_simple_paths, connected_components};
use petgraph::graph::NodeIndex;
use smallvec::SmallVec;

use crate::cells::GridCoordinate;
use crate::grid::MazeGrid;
use crate::grid_displays::GridDisplay;
use crate::utils::{self, FnvHashMap};


/// Flood fill step counts from a start cell to every cell reachable through open walls.
#[derive(Debug, Clone)]
pub struct Distances {
    start_coordinate: GridCoordinate,
    distances: FnvHashMap<GridCoordinate, u32>,
    max_distance: u32,
}

impl Distances {
    /// None if `start_coordinate` is outside the grid.
    pub fn new(grid: &MazeGrid, start_coordinate: GridCoordinate) -> Option<Distances> {

        if !grid.is_valid_coordinate(start_coordinate) {
            return None;
        }

        let mut max = 0;
        let mut distances = utils::fnv_hashmap(grid.size());
        distances.insert(start_coordinate, 0);

        // Every step costs one so the first time a cell is reached is via its shortest route, and
        // the distances map doubles as the visited set.
        let mut frontier = vec![start_coordinate];
        while !frontier.is_empty() {

            let mut new_frontier = vec![];
            for cell_coord in &frontier {

                let distance_to_cell = distances[cell_coord];
                if distance_to_cell > max {
                    max = distance_to_cell;
                }

                let links = grid.links(*cell_coord)
                    .expect("frontier cells are always within the grid");
                for link_coordinate in links.iter() {
                    if !distances.contains_key(link_coordinate) {
                        distances.insert(*link_coordinate, distance_to_cell + 1);
                        new_frontier.push(*link_coordinate);
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start_coordinate,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> GridCoordinate {
        self.start_coordinate
    }

    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    #[inline(always)]
    pub fn distance_from_start_to(&self, coord: GridCoordinate) -> Option<u32> {
        self.distances.get(&coord).cloned()
    }

    #[inline]
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// The cells at the maximum distance from the start, in row major order.
    pub fn furthest_points_on_grid(&self) -> SmallVec<[GridCoordinate; 8]> {
        let furthest_distance = self.max();
        self.distances
            .iter()
            .filter(|&(_, distance)| *distance == furthest_distance)
            .map(|(coord, _)| *coord)
            .sorted()
            .collect()
    }
}

impl GridDisplay for Distances {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if let Some(d) = self.distances.get(&coord) {
            // centre align, padding 3, lowercase hexadecimal
            format!("{:^3x}", d)
        } else {
            String::from("   ")
        }
    }
}

/// Walk back from `end_point` towards the start of `distances_from_start`, always stepping to the
/// linked neighbour nearest the start. Returns the path start first, or None if `end_point` cannot
/// be reached.
pub fn shortest_path(grid: &MazeGrid,
                     distances_from_start: &Distances,
                     end_point: GridCoordinate)
                     -> Option<Vec<GridCoordinate>> {

    distances_from_start.distance_from_start_to(end_point)?;

    let mut path = vec![end_point];
    let start = distances_from_start.start();
    let mut current_coord = end_point;

    while current_coord != start {

        let current_distance_to_start = distances_from_start.distance_from_start_to(current_coord)?;

        let closest_to_start = grid.links(current_coord)?
            .iter()
            .filter_map(|coord| {
                distances_from_start.distance_from_start_to(*coord).map(|d| (*coord, d))
            })
            .min_by_key(|&(_, d)| d);

        match closest_to_start {
            Some((closer_coord, closer_distance)) if closer_distance < current_distance_to_start => {
                current_coord = closer_coord;
                path.push(current_coord);
            }
            // Not getting any closer: the distances do not belong to this grid.
            _ => return None,
        }
    }

    path.reverse();
    Some(path)
}

/// The route between the two ends of the longest path in the maze.
///
/// Only correct for a perfect maze: the cell furthest from any cell is one end of the longest
/// path, and the cell furthest from that is the other end.
pub fn longest_path(grid: &MazeGrid) -> Option<Vec<GridCoordinate>> {
    let arbitrary_start_point = GridCoordinate::new(0, 0);
    let first_distances = Distances::new(grid, arbitrary_start_point)?;
    let long_path_start_coordinate = *first_distances.furthest_points_on_grid().first()?;

    let distances_from_start = Distances::new(grid, long_path_start_coordinate)?;
    let end_point = *distances_from_start.furthest_points_on_grid().first()?;

    shortest_path(grid, &distances_from_start, end_point)
}

/// The route from the ball's spawn cell (top left) to the goal cell (bottom right).
pub fn solution_path(grid: &MazeGrid) -> Option<Vec<GridCoordinate>> {
    let start = GridCoordinate::new(0, 0);
    let goal = GridCoordinate::new(grid.rows().0 - 1, grid.columns().0 - 1);
    let distances = Distances::new(grid, start)?;
    shortest_path(grid, &distances, goal)
}

/// A perfect maze has every cell connected and no loops, which for a graph with one component
/// means exactly one fewer open wall than there are cells.
///
/// Checked on a petgraph copy of the open walls, independent of the order the maze was carved in.
pub fn is_perfect_maze(grid: &MazeGrid) -> bool {
    let graph = grid.to_graph();
    connected_components(&graph) == 1 && graph.edge_count() + 1 == graph.node_count()
}

/// How many loop free routes join `from` and `to` through open walls. 1 for every pair of cells in
/// a perfect maze, 0 if either coordinate is invalid.
pub fn count_simple_paths(grid: &MazeGrid, from: GridCoordinate, to: GridCoordinate) -> usize {
    match (grid.grid_coordinate_to_index(from), grid.grid_coordinate_to_index(to)) {
        (Some(a), Some(b)) if a == b => 1,
        (Some(a), Some(b)) => {
            let graph = grid.to_graph();
            all_simple_paths::<Vec<_>, _>(&graph, NodeIndex::new(a), NodeIndex::new(b), 0, None).count()
        }
        _ => 0,
    }
}
