use std::fmt;

use gridpath_core::Cell;

use crate::distance::step_cost;

/// An ordered, non-empty sequence of cells from start to goal inclusive,
/// with the total step cost the search assigned to it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PathData"))]
pub struct Path {
    cells: Vec<Cell>,
    cost: f64,
}

/// Unchecked wire form of a [`Path`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PathData {
    cells: Vec<Cell>,
    cost: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<PathData> for Path {
    type Error = &'static str;

    fn try_from(data: PathData) -> Result<Self, Self::Error> {
        if data.cells.is_empty() {
            return Err("path has no cells");
        }
        Ok(Self {
            cells: data.cells,
            cost: data.cost,
        })
    }
}

impl Path {
    pub(crate) fn new(cells: Vec<Cell>, cost: f64) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells, cost }
    }

    /// The cells, start first.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Total cost of the path.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a path holds at least its start cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves (one less than the number of cells).
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// Whether start and goal are the same cell.
    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.cells.len() == 1
    }

    /// First cell.
    #[inline]
    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    /// Last cell.
    #[inline]
    pub fn goal(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Iterate over the cells, start first.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Sum of [`step_cost`] over consecutive cells.
    pub fn recomputed_cost(&self) -> f64 {
        self.cells.windows(2).map(|w| step_cost(w[0], w[1])).sum()
    }

    /// Consume the path, returning its cells.
    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
