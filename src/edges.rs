use crate::grid::MazeGrid;

/// The maze as a plain text graph.
///
/// Line 1 is `n m`, the number of cells then the number of open walls. Each following line is one
/// open wall as a pair of 1-based row major cell indices.
pub fn edge_list_text(maze_grid: &MazeGrid) -> String {
    let mut graph_data = String::new();
    graph_data.push_str(&maze_grid.size().to_string());
    graph_data.push(' ');
    graph_data.push_str(&maze_grid.open_walls_count().to_string());
    graph_data.push('\n');

    for (src, dst) in maze_grid.iter_links() {
        // iter_links only yields coordinates inside the grid
        if let (Some(index_a), Some(index_b)) = (maze_grid.grid_coordinate_to_index(src),
                                                 maze_grid.grid_coordinate_to_index(dst)) {
            graph_data.push_str(&(index_a + 1).to_string());
            graph_data.push(' ');
            graph_data.push_str(&(index_b + 1).to_string());
            graph_data.push('\n');
        }
    }

    graph_data
}
