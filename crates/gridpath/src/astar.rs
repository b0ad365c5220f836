use gridpath_core::{Cell, OccupancyGrid};
use log::{debug, trace};

use crate::error::{Endpoint, QueryError, QueryResult};
use crate::frontier::Frontier;
use crate::path::Path;
use crate::tables::{CostMap, Predecessors};
use crate::traits::{AstarPather, Pather};

/// Find a minimum-cost 8-directional path from `start` to `goal`.
///
/// Returns `Ok(Some(path))` when the goal is reachable, `Ok(None)` when it is
/// not, and `Err` when either endpoint is out of bounds or on an obstacle.
/// Diagonal steps never cut between blocked orthogonal cells.
///
/// Equal-priority frontier entries are expanded in insertion order, so
/// repeated calls on the same inputs return the same path.
pub fn find_path(start: Cell, goal: Cell, grid: &OccupancyGrid) -> QueryResult<Option<Path>> {
    astar_path(grid, start, goal)
}

/// A* over any [`AstarPather`]. See [`find_path`].
pub fn astar_path<P: AstarPather>(pather: &P, start: Cell, goal: Cell) -> QueryResult<Option<Path>> {
    check_endpoint(pather, Endpoint::Start, start)?;
    check_endpoint(pather, Endpoint::Goal, goal)?;

    if start == goal {
        return Ok(Some(Path::new(vec![start], 0.0)));
    }

    let bounds = pather.bounds();
    let mut costs = CostMap::new(bounds);
    let mut came_from = Predecessors::new(bounds);
    let mut frontier = Frontier::new();

    costs.improve(start, 0.0);
    frontier.push(0.0, 0.0, start);

    let mut nbuf = Vec::with_capacity(8);
    let mut expanded = 0usize;

    while let Some(current) = frontier.pop() {
        // Skip stale entries.
        if costs.get(current.cell).is_some_and(|best| current.cost > best) {
            continue;
        }
        if current.cell == goal {
            break;
        }

        expanded += 1;
        trace!("expand {} g={:.3} f={:.3}", current.cell, current.cost, current.priority);

        nbuf.clear();
        pather.neighbors(current.cell, &mut nbuf);

        for &next in nbuf.iter() {
            let tentative = current.cost + pather.cost(current.cell, next);
            if costs.improve(next, tentative) {
                came_from.set(next, current.cell);
                frontier.push(tentative + pather.estimate(next, goal), tentative, next);
            }
        }
    }

    let Some(cells) = came_from.walk_back(start, goal) else {
        debug!(
            "no path {start} -> {goal}: expanded {expanded} cells, {} pushes",
            frontier.pushed()
        );
        return Ok(None);
    };
    let cost = costs.get(goal).unwrap_or_default();
    debug!(
        "path {start} -> {goal}: {} cells, cost {cost:.3}, expanded {expanded} cells, {} pushes",
        cells.len(),
        frontier.pushed()
    );
    Ok(Some(Path::new(cells, cost)))
}

/// Reject an endpoint outside the pather's bounds or on an impassable cell.
pub(crate) fn check_endpoint<P: Pather>(pather: &P, endpoint: Endpoint, cell: Cell) -> QueryResult<()> {
    let bounds = pather.bounds();
    if !bounds.contains(cell) {
        return Err(QueryError::OutOfBounds {
            endpoint,
            cell,
            bounds,
        });
    }
    if !pather.passable(cell) {
        return Err(QueryError::Blocked { endpoint, cell });
    }
    Ok(())
}
