use gridpath_core::{Cell, OccupancyGrid};
use log::debug;

use crate::astar::check_endpoint;
use crate::error::{Endpoint, QueryResult};
use crate::frontier::Frontier;
use crate::tables::CostMap;
use crate::traits::WeightedPather;

/// Compute the lowest cost from `source` to every reachable cell.
///
/// Uses the same adjacency and step costs as [`find_path`](crate::find_path)
/// but no heuristic and no early exit, so it explores the whole reachable
/// region. The source is validated like a search start.
pub fn dijkstra_costs(source: Cell, grid: &OccupancyGrid) -> QueryResult<CostMap> {
    dijkstra_map(grid, source)
}

/// Single-source Dijkstra over any [`WeightedPather`]. See [`dijkstra_costs`].
pub fn dijkstra_map<P: WeightedPather>(pather: &P, source: Cell) -> QueryResult<CostMap> {
    check_endpoint(pather, Endpoint::Start, source)?;

    let mut costs = CostMap::new(pather.bounds());
    let mut open = Frontier::new();
    costs.improve(source, 0.0);
    open.push(0.0, 0.0, source);

    let mut nbuf = Vec::with_capacity(8);

    while let Some(current) = open.pop() {
        if costs.get(current.cell).is_some_and(|best| current.cost > best) {
            continue;
        }

        nbuf.clear();
        pather.neighbors(current.cell, &mut nbuf);

        for &next in nbuf.iter() {
            let tentative = current.cost + pather.cost(current.cell, next);
            if costs.improve(next, tentative) {
                open.push(tentative, tentative, next);
            }
        }
    }

    debug!("dijkstra from {source}: reached {} cells", costs.len());
    Ok(costs)
}
