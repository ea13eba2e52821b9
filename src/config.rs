use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_derive::{Deserialize, Serialize};

use crate::bodies::CellUnit;
use crate::errors::*;
use crate::generators;
use crate::grid::MazeGrid;
use crate::units::{ColumnsCount, Height, RowsCount, UnitHeight, UnitWidth, Width};

pub const DEFAULT_ROWS: usize = 15;
pub const DEFAULT_COLUMNS: usize = 15;
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 800.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 600.0;

/// Everything needed to carve a maze and lay it out in a viewport.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(default)]
pub struct MazeConfig {
    pub rows: usize,
    pub columns: usize,
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Fixed seed for a reproducible maze. Entropy is used when absent.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        MazeConfig {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ErrorKind::InvalidGridDimensions(self.rows, self.columns).into());
        }
        self.validate_viewport()
    }

    /// Only the viewport, for laying out a grid that was built elsewhere.
    pub fn validate_viewport(&self) -> Result<()> {
        let (w, h) = (self.viewport_width, self.viewport_height);
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(ErrorKind::InvalidViewport(w, h).into());
        }
        Ok(())
    }

    #[inline]
    pub fn viewport(&self) -> (Width, Height) {
        (Width(self.viewport_width), Height(self.viewport_height))
    }

    /// Each cell gets an equal share of the viewport: width / columns by height / rows.
    pub fn cell_unit(&self) -> Result<CellUnit> {
        self.validate()?;
        CellUnit::new(UnitWidth(self.viewport_width / self.columns as f64),
                      UnitHeight(self.viewport_height / self.rows as f64))
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Carve a fresh maze of the configured size.
    pub fn generate(&self) -> Result<MazeGrid> {
        self.validate()?;
        let mut rng = self.rng();
        generators::carve_maze(RowsCount(self.rows), ColumnsCount(self.columns), &mut rng)
    }
}
