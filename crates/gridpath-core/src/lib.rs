//! **gridpath-core** — data model for grid path planning.
//!
//! This crate provides the types shared across the *gridpath* workspace:
//! (row, column) [`Cell`] coordinates, grid [`Bounds`], and the
//! [`OccupancyGrid`] that marks each cell free or blocked.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Bounds, BoundsIter, Cell};
pub use grid::{GridIter, Occupancy, OccupancyGrid};
