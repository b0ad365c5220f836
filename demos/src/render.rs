//! Terminal drawing of a grid with an optional path overlay.

use std::collections::HashSet;
use std::io::{self, Write};

use crossterm::style::{Color, Stylize};
use gridpath::{Cell, OccupancyGrid, Path};

const COL_OBSTACLE: Color = Color::Rgb { r: 44, g: 62, b: 80 };
const COL_FREE: Color = Color::Rgb {
    r: 149,
    g: 165,
    b: 166,
};
const COL_PATH: Color = Color::Rgb { r: 39, g: 174, b: 96 };
const COL_START: Color = Color::Rgb { r: 52, g: 152, b: 219 };
const COL_GOAL: Color = Color::Rgb { r: 231, g: 76, b: 60 };

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Glyph {
    Obstacle,
    Free,
    Path,
    Start,
    Goal,
}

impl Glyph {
    fn symbol(self) -> char {
        match self {
            Self::Obstacle => '#',
            Self::Free => '.',
            Self::Path => '*',
            Self::Start => 'S',
            Self::Goal => 'G',
        }
    }

    fn color(self) -> Color {
        match self {
            Self::Obstacle => COL_OBSTACLE,
            Self::Free => COL_FREE,
            Self::Path => COL_PATH,
            Self::Start => COL_START,
            Self::Goal => COL_GOAL,
        }
    }
}

struct Overlay<'a> {
    grid: &'a OccupancyGrid,
    on_path: HashSet<Cell>,
    start: Cell,
    goal: Cell,
}

impl<'a> Overlay<'a> {
    fn new(grid: &'a OccupancyGrid, path: Option<&Path>, start: Cell, goal: Cell) -> Self {
        Self {
            grid,
            on_path: path.map(|p| p.iter().copied().collect()).unwrap_or_default(),
            start,
            goal,
        }
    }

    fn glyph(&self, c: Cell) -> Glyph {
        if c == self.start {
            Glyph::Start
        } else if c == self.goal {
            Glyph::Goal
        } else if self.grid.is_obstacle(c) {
            Glyph::Obstacle
        } else if self.on_path.contains(&c) {
            Glyph::Path
        } else {
            Glyph::Free
        }
    }
}

/// Draw `grid` with colours: obstacles `#`, path `*`, start `S`, goal `G`,
/// free cells `.`.
pub fn render<W: Write>(
    out: &mut W,
    grid: &OccupancyGrid,
    path: Option<&Path>,
    start: Cell,
    goal: Cell,
) -> io::Result<()> {
    let overlay = Overlay::new(grid, path, start, goal);
    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            let g = overlay.glyph(Cell::new(r, c));
            write!(out, "{} ", g.symbol().with(g.color()))?;
        }
        writeln!(out)?;
    }
    out.flush()
}

/// Same layout as [`render`] without colours, one line per row.
pub fn render_plain(grid: &OccupancyGrid, path: Option<&Path>, start: Cell, goal: Cell) -> String {
    let overlay = Overlay::new(grid, path, start, goal);
    (0..grid.rows())
        .map(|r| {
            (0..grid.cols())
                .map(|c| overlay.glyph(Cell::new(r, c)).symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line description of a found path: cell count, move count and cost.
pub fn summary(path: &Path) -> String {
    format!(
        "Found optimal path with {} cells ({} moves, cost {:.3}):",
        path.len(),
        path.steps(),
        path.cost()
    )
}
