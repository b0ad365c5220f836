//! A 2-D occupancy grid.
//!
//! [`OccupancyGrid`] stores one [`Occupancy`] value per cell in row-major
//! order. It is plain owned data, so a built grid can be shared read-only
//! between threads running independent searches.

use std::fmt;
use std::ops::Range;

use crate::error::GridError;
use crate::geom::{Bounds, BoundsIter, Cell};

/// Occupancy of a single cell: `0` = free, `1` = obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupancy {
    #[default]
    Free,
    Obstacle,
}

impl Occupancy {
    /// The bit value of this occupancy.
    #[inline]
    pub const fn bit(self) -> u8 {
        match self {
            Self::Free => 0,
            Self::Obstacle => 1,
        }
    }

    /// The character used by [`OccupancyGrid::parse`] and `Display`.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Self::Free => FREE_CHAR,
            Self::Obstacle => OBSTACLE_CHAR,
        }
    }
}

impl TryFrom<u8> for Occupancy {
    type Error = u8;

    fn try_from(v: u8) -> Result<Self, u8> {
        match v {
            0 => Ok(Self::Free),
            1 => Ok(Self::Obstacle),
            other => Err(other),
        }
    }
}

const FREE_CHAR: char = '.';
const OBSTACLE_CHAR: char = '#';

/// A fixed-size grid of [`Occupancy`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancyGrid {
    cells: Vec<Occupancy>,
    bounds: Bounds,
}

impl OccupancyGrid {
    /// Create a new grid with every cell free.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Bounds::new(rows, cols);
        Self {
            cells: vec![Occupancy::Free; bounds.len()],
            bounds,
        }
    }

    /// Build a grid from rows of bits (`0` free, `1` obstacle).
    ///
    /// All rows must have the same length and at least one cell must exist.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let expected = rows.first().map_or(0, |r| r.as_ref().len());
        if expected == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(rows.len() * expected);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != expected {
                return Err(GridError::RaggedRows {
                    row: r,
                    expected,
                    found: row.len(),
                });
            }
            for (c, &bit) in row.iter().enumerate() {
                let occ = Occupancy::try_from(bit).map_err(|value| GridError::InvalidBit {
                    cell: Cell::new(r as i32, c as i32),
                    value,
                })?;
                cells.push(occ);
            }
        }
        Ok(Self {
            cells,
            bounds: Bounds::new(rows.len() as i32, expected as i32),
        })
    }

    /// Parse an ASCII layout: one line per row, `.` free and `#` obstacle.
    ///
    /// Leading and trailing whitespace of the whole string is trimmed, as are
    /// the indentation and trailing blanks of each line.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s.trim().lines().map(str::trim).collect();
        let expected = lines.first().map_or(0, |l| l.chars().count());
        if expected == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(lines.len() * expected);
        for (r, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(GridError::RaggedRows {
                    row: r,
                    expected,
                    found,
                });
            }
            for (c, ch) in line.chars().enumerate() {
                let occ = match ch {
                    FREE_CHAR => Occupancy::Free,
                    OBSTACLE_CHAR => Occupancy::Obstacle,
                    _ => {
                        return Err(GridError::InvalidChar {
                            ch,
                            cell: Cell::new(r as i32, c as i32),
                        });
                    }
                };
                cells.push(occ);
            }
        }
        Ok(Self {
            cells,
            bounds: Bounds::new(lines.len() as i32, expected as i32),
        })
    }

    /// The bounds of this grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Whether the grid contains the given cell.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.bounds.contains(c)
    }

    /// Occupancy at a cell, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, c: Cell) -> Option<Occupancy> {
        self.bounds.index(c).and_then(|i| self.cells.get(i).copied())
    }

    /// Whether the cell is in bounds and free.
    #[inline]
    pub fn is_free(&self, c: Cell) -> bool {
        self.get(c) == Some(Occupancy::Free)
    }

    /// Whether the cell is in bounds and blocked.
    #[inline]
    pub fn is_obstacle(&self, c: Cell) -> bool {
        self.get(c) == Some(Occupancy::Obstacle)
    }

    /// Set the occupancy at a cell. Does nothing if out of bounds.
    pub fn set(&mut self, c: Cell, occ: Occupancy) {
        if let Some(slot) = self.bounds.index(c).and_then(|i| self.cells.get_mut(i)) {
            *slot = occ;
        }
    }

    /// Set every cell in the half-open block `rows x cols`, clipped to the
    /// grid bounds.
    pub fn fill_rect(&mut self, rows: Range<i32>, cols: Range<i32>, occ: Occupancy) {
        let r0 = rows.start.max(0);
        let r1 = rows.end.min(self.rows());
        let c0 = cols.start.max(0);
        let c1 = cols.end.min(self.cols());
        for r in r0..r1 {
            for c in c0..c1 {
                self.set(Cell::new(r, c), occ);
            }
        }
    }

    /// Count how many cells have the given occupancy.
    pub fn count(&self, occ: Occupancy) -> usize {
        self.cells.iter().filter(|&&o| o == occ).count()
    }

    /// Iterate over `(Cell, Occupancy)` pairs in row-major order.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows() {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..self.cols() {
                let occ = self.get(Cell::new(r, c)).unwrap_or_default();
                write!(f, "{}", occ.symbol())?;
            }
        }
        Ok(())
    }
}

/// Iterator over `(Cell, Occupancy)` pairs of an [`OccupancyGrid`].
pub struct GridIter<'a> {
    grid: &'a OccupancyGrid,
    inner: BoundsIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Cell, Occupancy);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let c = self.inner.next()?;
        self.grid.get(c).map(|occ| (c, occ))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for GridIter<'_> {}

impl<'a> IntoIterator for &'a OccupancyGrid {
    type Item = (Cell, Occupancy);
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> GridIter<'a> {
        self.iter()
    }
}
