// `error_chain!` creates the Error, ErrorKind, ResultExt, and Result types.
// Other modules in this crate `use crate::errors::*;` to get access to them.
use error_chain::*;

error_chain! {

    foreign_links {
        DocOptFailure(::docopt::Error);
        Io(::std::io::Error);
        JsonFailure(::serde_json::Error);
    }

    errors {
        InvalidGridDimensions(rows: usize, columns: usize) {
            description("grid dimensions must both be positive")
            display("invalid grid dimensions: {} rows by {} columns", rows, columns)
        }
        InvalidUnitSize(width: f64, height: f64) {
            description("cell unit sizes must be positive and finite")
            display("invalid cell unit size: {} x {}", width, height)
        }
        InvalidViewport(width: f64, height: f64) {
            description("viewport sizes must be positive and finite")
            display("invalid viewport size: {} x {}", width, height)
        }
    }
}
