//! Scenario files describing a grid, its obstacles, and the query to run.
//!
//! ```toml
//! name = "warehouse"
//! rows = 12
//! cols = 20
//! start = { row = 0, col = 0 }
//! goal = { row = 11, col = 19 }
//!
//! [[obstacles]]
//! rows = [3, 9]
//! cols = [6, 8]
//!
//! [scatter]
//! density = 0.15
//! seed = 7
//! ```

use std::path::{Path as FsPath, PathBuf};

use gridpath::{Cell, GridError, Occupancy, OccupancyGrid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scenario file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid layout: {0}")]
    Layout(#[from] GridError),

    #[error("grid size must be positive, got {rows}x{cols}")]
    InvalidSize { rows: i32, cols: i32 },

    #[error("scatter density must be within [0, 1], got {0}")]
    InvalidDensity(f64),
}

/// A half-open block of cells, `rows[0]..rows[1]` by `cols[0]..cols[1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub rows: [i32; 2],
    pub cols: [i32; 2],
}

impl Block {
    /// A single-cell block.
    pub const fn cell(row: i32, col: i32) -> Self {
        Self {
            rows: [row, row + 1],
            cols: [col, col + 1],
        }
    }
}

/// Random obstacles sprinkled over the free cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scatter {
    pub density: f64,
    pub seed: u64,
}

/// A grid plus the query to run on it.
///
/// Every field may be omitted in a file. The default is the empty
/// scenario; use [`Scenario::parking_lot`] for the built-in lot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub name: String,
    pub rows: i32,
    pub cols: i32,
    /// Defaults to the top-left corner.
    pub start: Option<Cell>,
    /// Defaults to the bottom-right corner.
    pub goal: Option<Cell>,
    pub obstacles: Vec<Block>,
    /// ASCII grid (`.` free, `#` obstacle). Overrides `rows`, `cols` and
    /// `obstacles` when present.
    pub layout: Option<String>,
    pub scatter: Option<Scatter>,
}

/// A built grid with the endpoints to search between.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub grid: OccupancyGrid,
    pub start: Cell,
    pub goal: Cell,
}

impl Scenario {
    /// The parking lot: a central lane block, two parking rows with
    /// barriers between the spots, the entrance at the top-left and the
    /// reserved spot at the bottom-right.
    pub fn parking_lot(rows: i32, cols: i32) -> Self {
        let mut obstacles = vec![Block {
            rows: [3, 7],
            cols: [4, 6],
        }];
        for row in [1, 8] {
            for col in (2..8).step_by(2) {
                obstacles.push(Block::cell(row, col));
            }
        }
        Self {
            name: "parking lot".to_string(),
            rows,
            cols,
            start: None,
            goal: None,
            obstacles,
            layout: None,
            scatter: None,
        }
    }

    /// Parse a scenario from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a scenario file.
    pub fn from_file<P: AsRef<FsPath>>(path: P) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Build the grid and resolve the endpoints.
    ///
    /// Grids built from `rows`/`cols`/`obstacles` always keep the endpoints
    /// free. A `layout` is taken as written, so an endpoint on one of its
    /// obstacles is left for the search to reject. Scatter never lands on an
    /// endpoint.
    pub fn build(&self) -> Result<Query, ScenarioError> {
        let mut grid = match &self.layout {
            Some(layout) => OccupancyGrid::parse(layout)?,
            None => {
                if self.rows <= 0 || self.cols <= 0 {
                    return Err(ScenarioError::InvalidSize {
                        rows: self.rows,
                        cols: self.cols,
                    });
                }
                let mut grid = OccupancyGrid::new(self.rows, self.cols);
                for b in &self.obstacles {
                    grid.fill_rect(b.rows[0]..b.rows[1], b.cols[0]..b.cols[1], Occupancy::Obstacle);
                }
                grid
            }
        };

        let start = self.start.unwrap_or(Cell::ZERO);
        let goal = self
            .goal
            .unwrap_or_else(|| Cell::new(grid.rows() - 1, grid.cols() - 1));

        if self.layout.is_none() {
            grid.set(start, Occupancy::Free);
            grid.set(goal, Occupancy::Free);
        }

        if let Some(scatter) = self.scatter {
            if !(0.0..=1.0).contains(&scatter.density) {
                return Err(ScenarioError::InvalidDensity(scatter.density));
            }
            let mut rng = StdRng::seed_from_u64(scatter.seed);
            let free: Vec<Cell> = grid
                .iter()
                .filter(|&(c, occ)| occ == Occupancy::Free && c != start && c != goal)
                .map(|(c, _)| c)
                .collect();
            let mut placed = 0usize;
            for c in free {
                if rng.random_bool(scatter.density) {
                    grid.set(c, Occupancy::Obstacle);
                    placed += 1;
                }
            }
            log::debug!("scatter seed {} placed {placed} obstacles", scatter.seed);
        }

        log::info!(
            "scenario \u{201c}{}\u{201d}: {}x{} grid, {} obstacles, {start} -> {goal}",
            self.name,
            grid.rows(),
            grid.cols(),
            grid.count(Occupancy::Obstacle)
        );

        Ok(Query { grid, start, goal })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath::find_path;

    #[test]
    fn parking_lot_layout() {
        let q = Scenario::parking_lot(10, 10).build().unwrap();
        assert_eq!(q.start, Cell::new(0, 0));
        assert_eq!(q.goal, Cell::new(9, 9));
        // 4x2 lane block plus three barriers in each parking row
        assert_eq!(q.grid.count(Occupancy::Obstacle), 8 + 6);
        assert!(q.grid.is_obstacle(Cell::new(3, 4)));
        assert!(q.grid.is_obstacle(Cell::new(6, 5)));
        assert!(q.grid.is_free(Cell::new(7, 5)));
        assert!(q.grid.is_obstacle(Cell::new(1, 2)));
        assert!(q.grid.is_free(Cell::new(1, 3)));
        assert!(q.grid.is_obstacle(Cell::new(8, 6)));
        assert!(q.grid.is_free(Cell::new(8, 8)));
    }

    #[test]
    fn parking_lot_has_a_path() {
        let q = Scenario::parking_lot(10, 10).build().unwrap();
        let path = find_path(q.start, q.goal, &q.grid).unwrap().unwrap();
        assert_eq!(path.start(), q.start);
        assert_eq!(path.goal(), q.goal);
    }

    #[test]
    fn default_scenario_is_empty() {
        let s = Scenario::default();
        assert!(s.name.is_empty());
        assert_eq!((s.rows, s.cols), (0, 0));
        assert!(s.obstacles.is_empty());
        assert!(s.layout.is_none() && s.scatter.is_none());
        assert!(matches!(s.build(), Err(ScenarioError::InvalidSize { rows: 0, cols: 0 })));

        // missing fields fall back to the empty scenario, not the parking lot
        let s = Scenario::from_toml_str("rows = 10\ncols = 10").unwrap();
        assert!(s.obstacles.is_empty());
        assert_eq!(s.build().unwrap().grid.count(Occupancy::Obstacle), 0);
        assert_ne!(s, Scenario::parking_lot(10, 10));
    }

    #[test]
    fn parse_toml_blocks() {
        let s = Scenario::from_toml_str(
            r#"
            name = "corridor"
            rows = 3
            cols = 5
            goal = { row = 0, col = 4 }

            [[obstacles]]
            rows = [0, 2]
            cols = [2, 3]
            "#,
        )
        .unwrap();
        assert_eq!(s.start, None);
        let q = s.build().unwrap();
        assert_eq!(q.goal, Cell::new(0, 4));
        assert_eq!(q.grid.to_string(), "..#..\n..#..\n.....");
        let path = find_path(q.start, q.goal, &q.grid).unwrap().unwrap();
        assert!(path.cells().contains(&Cell::new(2, 2)));
    }

    #[test]
    fn endpoints_are_carved_free() {
        let s = Scenario {
            obstacles: vec![Block {
                rows: [0, 4],
                cols: [0, 4],
            }],
            ..Scenario::parking_lot(4, 4)
        };
        let q = s.build().unwrap();
        assert!(q.grid.is_free(q.start));
        assert!(q.grid.is_free(q.goal));
        assert_eq!(q.grid.count(Occupancy::Free), 2);
        assert!(find_path(q.start, q.goal, &q.grid).unwrap().is_none());
    }

    #[test]
    fn layout_is_taken_as_written() {
        let s = Scenario::from_toml_str(
            r##"
            layout = """
            #..
            ...
            """
            goal = { row = 1, col = 2 }
            "##,
        )
        .unwrap();
        let q = s.build().unwrap();
        assert!(q.grid.is_obstacle(q.start));
        assert!(find_path(q.start, q.goal, &q.grid).is_err());
    }

    #[test]
    fn scatter_is_seeded_and_spares_endpoints() {
        let s = Scenario {
            scatter: Some(Scatter {
                density: 1.0,
                seed: 3,
            }),
            ..Scenario::parking_lot(6, 6)
        };
        let q = s.build().unwrap();
        assert_eq!(q.grid.count(Occupancy::Free), 2);

        let s = Scenario {
            scatter: Some(Scatter {
                density: 0.3,
                seed: 11,
            }),
            ..Scenario::parking_lot(10, 10)
        };
        assert_eq!(s.build().unwrap(), s.build().unwrap());
    }

    #[test]
    fn invalid_scenarios() {
        let s = Scenario {
            scatter: Some(Scatter {
                density: 1.5,
                seed: 0,
            }),
            ..Scenario::parking_lot(10, 10)
        };
        assert!(matches!(s.build(), Err(ScenarioError::InvalidDensity(_))));

        let s = Scenario::parking_lot(0, 3);
        assert!(matches!(s.build(), Err(ScenarioError::InvalidSize { .. })));
        // neither a size nor a layout
        let s = Scenario::from_toml_str("name = \"empty\"").unwrap();
        assert!(matches!(s.build(), Err(ScenarioError::InvalidSize { rows: 0, cols: 0 })));

        assert!(matches!(
            Scenario::from_toml_str("rows = \"ten\""),
            Err(ScenarioError::Toml(_))
        ));
        assert!(matches!(
            Scenario::from_toml_str("layout = \"..\\n.x\"").unwrap().build(),
            Err(ScenarioError::Layout(_))
        ));
        assert!(matches!(
            Scenario::from_file("/nonexistent/scenario.toml"),
            Err(ScenarioError::Io { .. })
        ));
    }

    #[test]
    fn shipped_scenarios_load() {
        let warehouse = Scenario::from_toml_str(include_str!("../scenarios/warehouse.toml")).unwrap();
        let q = warehouse.build().unwrap();
        assert_eq!((q.grid.rows(), q.grid.cols()), (12, 20));
        assert!(q.grid.is_free(q.start) && q.grid.is_free(q.goal));

        let walled = Scenario::from_toml_str(include_str!("../scenarios/walled.toml")).unwrap();
        let q = walled.build().unwrap();
        assert!(find_path(q.start, q.goal, &q.grid).unwrap().is_none());
    }
}
