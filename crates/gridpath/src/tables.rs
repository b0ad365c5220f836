use gridpath_core::{Bounds, Cell};

/// Lowest known cumulative cost from a source to every reached cell.
///
/// Returned by [`dijkstra_costs`](crate::dijkstra_costs); also used as the
/// cost-so-far table of an A* search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostMap {
    bounds: Bounds,
    costs: Vec<Option<f64>>,
}

impl CostMap {
    pub(crate) fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            costs: vec![None; bounds.len()],
        }
    }

    /// Cost recorded for `c`, or `None` if it was never reached.
    #[inline]
    pub fn get(&self, c: Cell) -> Option<f64> {
        self.bounds.index(c).and_then(|i| self.costs.get(i).copied().flatten())
    }

    /// Whether `c` was reached.
    #[inline]
    pub fn reached(&self, c: Cell) -> bool {
        self.get(c).is_some()
    }

    /// The bounds this map covers.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of reached cells.
    pub fn len(&self) -> usize {
        self.costs.iter().filter(|c| c.is_some()).count()
    }

    /// Whether no cell was reached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over reached cells and their costs, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, f64)> + '_ {
        let bounds = self.bounds;
        self.costs
            .iter()
            .enumerate()
            .filter_map(move |(i, &c)| c.map(|cost| (bounds.cell(i), cost)))
    }

    /// Record `cost` for `c` if it is the first cost seen or strictly lower
    /// than the recorded one. Returns whether the table changed.
    pub(crate) fn improve(&mut self, c: Cell, cost: f64) -> bool {
        let Some(slot) = self.bounds.index(c).and_then(|i| self.costs.get_mut(i)) else {
            return false;
        };
        match *slot {
            Some(best) if cost >= best => false,
            _ => {
                *slot = Some(cost);
                true
            }
        }
    }
}

/// The cell each reached cell got its lowest cost from.
pub(crate) struct Predecessors {
    bounds: Bounds,
    from: Vec<Option<Cell>>,
}

impl Predecessors {
    pub(crate) fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            from: vec![None; bounds.len()],
        }
    }

    pub(crate) fn set(&mut self, c: Cell, prev: Cell) {
        if let Some(slot) = self.bounds.index(c).and_then(|i| self.from.get_mut(i)) {
            *slot = Some(prev);
        }
    }

    pub(crate) fn get(&self, c: Cell) -> Option<Cell> {
        self.bounds.index(c).and_then(|i| self.from.get(i).copied().flatten())
    }

    /// Follow predecessors from `goal` back to `start` and return the cells
    /// in start-to-goal order, or `None` if `goal` was never reached.
    pub(crate) fn walk_back(&self, start: Cell, goal: Cell) -> Option<Vec<Cell>> {
        if start == goal {
            return Some(vec![start]);
        }
        self.get(goal)?;
        let mut cells = vec![goal];
        let mut cur = goal;
        while cur != start {
            cur = self.get(cur)?;
            cells.push(cur);
        }
        cells.reverse();
        Some(cells)
    }
}
