use crate::colour::Colour;
use crate::palette::Palette;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::units::Pt;

use super::Margins;

/// How far below a whole number a width / box ratio may fall and still count as that
/// whole number. Absorbs the rounding that comes from expressing metric lengths in
/// points, so that e.g. 180mm of space fits exactly ten 18mm boxes.
const FIT_TOLERANCE: f64 = 1e-4;

/// The number of whole boxes that fit on a page, in each direction
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Grid {
    pub columns: usize,
    pub rows: usize,
}

/// The colour slot a cell is painted with. Corner roles take precedence over the
/// checkerboard roles, and earlier corners take precedence over later ones.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CellRole {
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
    /// A non-corner cell where `row + col` is even
    CheckerEven,
    /// A non-corner cell where `row + col` is odd
    CheckerOdd,
}

impl CellRole {
    pub fn is_corner(self) -> bool {
        !matches!(self, CellRole::CheckerEven | CellRole::CheckerOdd)
    }
}

fn fit_count(length: Pt, box_size: Pt) -> usize {
    if *box_size <= 0.0 {
        return 0;
    }
    let ratio = *length as f64 / *box_size as f64;
    if ratio.is_finite() && ratio > 0.0 {
        (ratio + FIT_TOLERANCE).floor() as usize
    } else {
        0
    }
}

/// Work out how many `box_size` squares fit on a page of `page_size` once `margin` is
/// removed from every edge. Leftover space is left blank along the top and right.
/// Margins that swallow the page, or a non-positive box size, give an empty grid.
pub fn compute_grid(page_size: PageSize, margin: Pt, box_size: Pt) -> Grid {
    let (width, height) = Margins::all(margin).drawable_area(page_size);
    Grid::fit((width, height), box_size)
}

impl Grid {
    pub fn new(columns: usize, rows: usize) -> Grid {
        Grid { columns, rows }
    }

    /// Fit as many whole `box_size` squares as possible into an area of
    /// `(width, height)`
    pub fn fit(area: (Pt, Pt), box_size: Pt) -> Grid {
        Grid {
            columns: fit_count(area.0, box_size),
            rows: fit_count(area.1, box_size),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }

    /// Number of cells, saturating at `usize::MAX` for absurdly fine grids
    pub fn cell_count(&self) -> usize {
        self.columns.checked_mul(self.rows).unwrap_or(usize::MAX)
    }

    /// Iterate over every `(row, col)` in the grid, bottom row first, left to right
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |row| (0..columns).map(move |col| (row, col)))
    }

    /// The square occupied by a cell, given the bottom-left corner of the grid
    pub fn cell_rect(&self, row: usize, col: usize, origin: (Pt, Pt), box_size: Pt) -> Rect {
        let x1 = origin.0 + box_size * col as f32;
        let y1 = origin.1 + box_size * row as f32;
        Rect {
            x1,
            y1,
            x2: x1 + box_size,
            y2: y1 + box_size,
        }
    }
}

/// Determine which colour role the cell at `(row, col)` plays. Row 0 is the bottom
/// of the page.
pub fn classify_cell(row: usize, col: usize, grid: &Grid) -> CellRole {
    let last_row = grid.rows.saturating_sub(1);
    let last_col = grid.columns.saturating_sub(1);

    match (row, col) {
        (0, 0) => CellRole::BottomLeft,
        (0, c) if c == last_col => CellRole::BottomRight,
        (r, 0) if r == last_row => CellRole::TopLeft,
        (r, c) if r == last_row && c == last_col => CellRole::TopRight,
        (r, c) if (r + c) % 2 == 0 => CellRole::CheckerEven,
        _ => CellRole::CheckerOdd,
    }
}

/// The colour of the cell at `(row, col)`
pub fn colour_for_cell(row: usize, col: usize, grid: &Grid, palette: &Palette) -> Colour {
    palette.colour_for(classify_cell(row, col, grid))
}
