use gridpath_core::{Bounds, Cell, OccupancyGrid};

use crate::distance::{octile, step_cost};
use crate::neighbors::push_octile;

/// Minimal pathfinding interface: search area, passability and neighbor
/// enumeration.
pub trait Pather {
    /// The rectangle searched over. Endpoints outside it are rejected.
    fn bounds(&self) -> Bounds;

    /// Whether an in-bounds cell can be part of a path.
    fn passable(&self, c: Cell) -> bool;

    /// Append neighbors of `c` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Cell, to: Cell) -> f64;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Cell, to: Cell) -> f64;
}

// An occupancy grid is searched with 8-directional moves, no corner cutting,
// Euclidean step costs and the octile estimate.

impl Pather for OccupancyGrid {
    #[inline]
    fn bounds(&self) -> Bounds {
        OccupancyGrid::bounds(self)
    }

    #[inline]
    fn passable(&self, c: Cell) -> bool {
        self.is_free(c)
    }

    #[inline]
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        push_octile(self, c, buf);
    }
}

impl WeightedPather for OccupancyGrid {
    #[inline]
    fn cost(&self, from: Cell, to: Cell) -> f64 {
        step_cost(from, to)
    }
}

impl AstarPather for OccupancyGrid {
    #[inline]
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        octile(from, to)
    }
}
