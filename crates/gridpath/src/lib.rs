//! Shortest paths on 2-D occupancy grids.
//!
//! The main entry point is [`find_path`]: an A* search with 8-directional
//! movement, Euclidean step costs (1 straight, √2 diagonal), the admissible
//! [`octile`] heuristic, and no diagonal corner cutting past blocked cells.
//!
//! ```
//! use gridpath::{find_path, Cell, OccupancyGrid};
//!
//! let grid = OccupancyGrid::parse("
//!     ....
//!     .##.
//!     ....
//! ").unwrap();
//! let path = find_path(Cell::new(1, 0), Cell::new(1, 3), &grid)
//!     .expect("valid query")
//!     .expect("reachable goal");
//! assert_eq!(path.start(), Cell::new(1, 0));
//! assert_eq!(path.goal(), Cell::new(1, 3));
//! ```
//!
//! Outcomes are kept apart: an invalid query (endpoint out of bounds or on
//! an obstacle) is a [`QueryError`], while an unreachable goal is `Ok(None)`.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | [`dijkstra_map`] |
//! | [`AstarPather`] : [`WeightedPather`] | [`astar_path`] |
//!
//! [`OccupancyGrid`] implements all three.

mod astar;
mod dijkstra;
mod distance;
mod error;
mod frontier;
mod neighbors;
mod path;
mod tables;
mod traits;

pub use astar::{astar_path, find_path};
pub use dijkstra::{dijkstra_costs, dijkstra_map};
pub use distance::{octile, step_cost};
pub use error::{Endpoint, QueryError, QueryResult};
pub use gridpath_core::{Bounds, Cell, GridError, Occupancy, OccupancyGrid};
pub use neighbors::{OFFSETS, neighbors};
pub use path::Path;
pub use tables::CostMap;
pub use traits::{AstarPather, Pather, WeightedPather};
