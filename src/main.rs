use ballmaze::{
    cells::GridCoordinate,
    config::MazeConfig,
    edges,
    errors::*,
    grid::MazeGrid,
    grid_displays::{GridDisplay, PathDisplay, StartEndPointsDisplay},
    pathing,
    scene::Scene,
};
use docopt::Docopt;
use log::info;
use serde_derive::Deserialize;
use smallvec::smallvec;
use std::{fs::File, io, io::prelude::*, rc::Rc};

const USAGE: &str = "Ball Maze

Usage:
    ballmaze_driver -h | --help
    ballmaze_driver [options] [text [--text-out=<path>] [--show-path | --show-distances]]

Options:
    -h --help                 Show this screen.
    --grid-size=<n>           The grid size is n * n.
    --grid-width=<w>          The grid width in a w*h grid [default: 15].
    --grid-height=<h>         The grid height in a w*h grid [default: 15].
    --viewport-width=<px>     Width of the world the maze is laid out in [default: 800].
    --viewport-height=<px>    Height of the world the maze is laid out in [default: 600].
    --seed=<s>                Seed the random number generator for a repeatable maze.
    --text-out=<path>         Output file path for a textual rendering of a maze.
    --show-path               Show the path from the ball start (top left) to the goal (bottom right).
    --show-distances          Show the distance from the ball start to all other cells.
    --save-edges=<path>       Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices.
    --scene-out=<path>        Write every physics body of the laid out maze to a JSON file.

With no text, --save-edges or --scene-out the maze is printed as text with the start and goal marked.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_size: Option<usize>,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_viewport_width: f64,
    flag_viewport_height: f64,
    flag_seed: Option<u64>,
    cmd_text: bool,
    flag_text_out: String,
    flag_show_path: bool,
    flag_show_distances: bool,
    flag_save_edges: String,
    flag_scene_out: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let (width, height) = if let Some(square_grid_size) = args.flag_grid_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_grid_width, args.flag_grid_height)
    };
    let config = MazeConfig {
        rows: height,
        columns: width,
        viewport_width: args.flag_viewport_width,
        viewport_height: args.flag_viewport_height,
        seed: args.flag_seed,
    };

    let mut maze_grid = config.generate().chain_err(|| "Failed to generate the maze")?;
    info!("generated a {} x {} maze", width, height);

    if !args.flag_save_edges.is_empty() {
        write_text_to_file(&edges::edge_list_text(&maze_grid), &args.flag_save_edges)
            .chain_err(|| format!("Failed to write maze graph to text file {}", args.flag_save_edges))?;
    }

    if !args.flag_scene_out.is_empty() {
        let scene = Scene::build(&maze_grid, &config)?;
        write_text_to_file(&scene.to_json()?, &args.flag_scene_out)
            .chain_err(|| format!("Failed to write scene to file {}", args.flag_scene_out))?;
    }

    let do_text_render = args.cmd_text ||
                         (args.flag_save_edges.is_empty() && args.flag_scene_out.is_empty());
    if do_text_render {

        set_maze_griddisplay(&mut maze_grid, &args)?;

        if args.flag_text_out.is_empty() {
            println!("{}", maze_grid);
        } else {
            write_text_to_file(&format!("{}", maze_grid), &args.flag_text_out)
                .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
        }
    }

    Ok(())
}

/// Decide what goes in the body of each cell when the maze is shown as text:
/// - Distances from the ball start to every cell
/// - The route from the ball start to the goal
/// - Otherwise just the start and goal markers
fn set_maze_griddisplay(maze_grid: &mut MazeGrid, maze_args: &MazeArgs) -> Result<()> {

    let start = GridCoordinate::new(0, 0);
    let goal = GridCoordinate::new(maze_grid.rows().0 - 1, maze_grid.columns().0 - 1);

    if maze_args.flag_show_distances {

        let distances = Rc::new(pathing::Distances::new(maze_grid, start)
            .ok_or("Invalid start coordinate from which to show path distances.")?);
        maze_grid.set_grid_display(Some(distances as Rc<dyn GridDisplay>));

    } else if maze_args.flag_show_path {

        if let Some(path) = pathing::solution_path(maze_grid) {
            let display_path = Rc::new(PathDisplay::new(&path));
            maze_grid.set_grid_display(Some(display_path as Rc<dyn GridDisplay>));
        } else {
            // No route, so not a perfect maze. Show the end points anyway.
            let display_start_end_points = Rc::new(StartEndPointsDisplay::new(smallvec![start],
                                                                              smallvec![goal]));
            maze_grid.set_grid_display(Some(display_start_end_points as Rc<dyn GridDisplay>));
        }

    } else {

        let display_start_end_points = Rc::new(StartEndPointsDisplay::new(smallvec![start],
                                                                          smallvec![goal]));
        maze_grid.set_grid_display(Some(display_start_end_points as Rc<dyn GridDisplay>));
    }

    Ok(())
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
