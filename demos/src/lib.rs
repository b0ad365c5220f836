//! Parking-lot scenario shared by the `parking` binary and its tests.
//!
//! Demonstrates: building an [`OccupancyGrid`](gridpath::OccupancyGrid) from
//! a TOML scenario (hand-placed blocks, an ASCII layout, or seeded random
//! scatter), running [`find_path`](gridpath::find_path), and drawing the
//! result in the terminal.

pub mod render;
pub mod scenario;

pub use render::{render, render_plain, summary};
pub use scenario::{Block, Query, Scatter, Scenario, ScenarioError};
