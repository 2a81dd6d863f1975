//! Regular sampling-grid planner.

use std::error::Error;
use std::fmt;

use crate::config::ExtractionConfig;

/// Errors from grid planning.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// The x extent is too narrow for the y spacing: no columns fit.
    DegenerateGrid {
        /// x extent of the window.
        x_extent: f64,
        /// Row spacing derived from `ny`.
        delta_y: f64,
    },
    /// The x extent implies more columns than the grid can index.
    ExcessiveColumns {
        /// Column count implied by the window and spacing.
        implied: i64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateGrid { x_extent, delta_y } => {
                write!(
                    f,
                    "x extent {x_extent} fits no columns at spacing {delta_y}"
                )
            }
            Self::ExcessiveColumns { implied } => {
                write!(f, "window implies {implied} columns, over the grid limit")
            }
        }
    }
}

impl Error for GridError {}

/// The resolved sampling grid: counts, spacings, and cell centers.
///
/// `ny` is taken from the configuration; `nx` is derived so the columns
/// are spaced as close to `delta_y` as fits. The derivation follows the
/// aspect-ratio rule: `delta_y = (ymax - ymin) / ny`,
/// `nx = trunc((xmax - xmin) / delta_y)`, then `delta_x` is recomputed
/// as `(xmax - xmin) / nx` so the columns exactly tile the window.
/// Sample points sit at cell centers, `spacing * (index + 0.5) + min`.
#[derive(Clone, Debug, PartialEq)]
pub struct GridPlan {
    /// Columns (x samples).
    pub nx: u32,
    /// Rows (y samples).
    pub ny: u32,
    /// Column spacing.
    pub delta_x: f64,
    /// Row spacing.
    pub delta_y: f64,
    /// Lower x bound.
    pub xmin: f64,
    /// Lower y bound.
    pub ymin: f64,
}

impl GridPlan {
    /// Derive the grid from a validated configuration.
    pub fn from_config(cfg: &ExtractionConfig) -> Result<Self, GridError> {
        let x_extent = cfg.xmax - cfg.xmin;
        let delta_y = (cfg.ymax - cfg.ymin) / f64::from(cfg.ny);
        // Truncation, not rounding: a column that does not fully fit
        // is dropped.
        let nx = (x_extent / delta_y) as i64;
        if nx <= 0 {
            return Err(GridError::DegenerateGrid { x_extent, delta_y });
        }
        if nx > i64::from(u32::MAX) {
            return Err(GridError::ExcessiveColumns { implied: nx });
        }
        let delta_x = x_extent / nx as f64;
        Ok(Self {
            nx: nx as u32,
            ny: cfg.ny,
            delta_x,
            delta_y,
            xmin: cfg.xmin,
            ymin: cfg.ymin,
        })
    }

    /// x coordinate of sample column `i`.
    pub fn x(&self, i: u32) -> f64 {
        self.delta_x * (f64::from(i) + 0.5) + self.xmin
    }

    /// y coordinate of sample row `j`.
    pub fn y(&self, j: u32) -> f64 {
        self.delta_y * (f64::from(j) + 0.5) + self.ymin
    }

    /// Total number of sample points.
    pub fn point_count(&self) -> usize {
        self.nx as usize * self.ny as usize
    }
}
