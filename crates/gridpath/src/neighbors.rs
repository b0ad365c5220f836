use gridpath_core::{Cell, OccupancyGrid};

/// The eight neighbor offsets `(dr, dc)` in enumeration order: rows
/// top to bottom, and within a row, columns left to right.
pub const OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Legal 8-directional neighbors of `c`, in [`OFFSETS`] order.
///
/// A neighbor is legal when it is inside the grid, is free, and, for a
/// diagonal step, neither orthogonal pass-through cell `(row + dr, col)` nor
/// `(row, col + dc)` is an obstacle.
pub fn neighbors(c: Cell, grid: &OccupancyGrid) -> Vec<Cell> {
    let mut buf = Vec::with_capacity(8);
    push_octile(grid, c, &mut buf);
    buf
}

pub(crate) fn push_octile(grid: &OccupancyGrid, c: Cell, buf: &mut Vec<Cell>) {
    for (dr, dc) in OFFSETS {
        let n = c.shift(dr, dc);
        if !grid.contains(n) {
            continue;
        }
        if dr != 0 && dc != 0 && (grid.is_obstacle(c.shift(dr, 0)) || grid.is_obstacle(c.shift(0, dc))) {
            continue;
        }
        if grid.is_obstacle(n) {
            continue;
        }
        buf.push(n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_field_has_eight_in_order() {
        let g = OccupancyGrid::new(3, 3);
        let ns = neighbors(Cell::new(1, 1), &g);
        let expected: Vec<Cell> = OFFSETS.iter().map(|&(dr, dc)| Cell::new(1 + dr, 1 + dc)).collect();
        assert_eq!(ns, expected);
    }

    #[test]
    fn corner_cell_is_clipped_to_bounds() {
        let g = OccupancyGrid::new(3, 3);
        let ns = neighbors(Cell::ZERO, &g);
        assert_eq!(ns, vec![Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)]);
    }

    #[test]
    fn obstacles_are_excluded() {
        let g = OccupancyGrid::parse(
            "
            .#.
            ...
            ...",
        )
        .unwrap();
        let ns = neighbors(Cell::new(1, 1), &g);
        assert!(!ns.contains(&Cell::new(0, 1)));
        // both top diagonals pass beside the blocked top cell
        assert!(!ns.contains(&Cell::new(0, 0)));
        assert!(!ns.contains(&Cell::new(0, 2)));
        assert_eq!(ns.len(), 5);
    }

    #[test]
    fn diagonal_between_blocked_corners_is_rejected() {
        let g = OccupancyGrid::parse(
            "
            .#.
            #..
            ...",
        )
        .unwrap();
        let from = Cell::new(0, 0);
        let ns = neighbors(from, &g);
        assert!(!ns.contains(&Cell::new(1, 1)));
        assert!(ns.is_empty());
        let back = neighbors(Cell::new(1, 1), &g);
        assert!(!back.contains(&from));
    }

    #[test]
    fn single_blocked_side_still_prevents_diagonal() {
        let g = OccupancyGrid::parse(
            "
            ..
            #.",
        )
        .unwrap();
        let ns = neighbors(Cell::new(0, 0), &g);
        assert_eq!(ns, vec![Cell::new(0, 1)]);
    }

    #[test]
    fn blocked_origin_still_lists_free_neighbors() {
        let g = OccupancyGrid::parse("#.").unwrap();
        assert_eq!(neighbors(Cell::ZERO, &g), vec![Cell::new(0, 1)]);
    }
}
