//! Geometry for placing calibration squares on a page.
//!
//! [`Margins`] shrink a page down to its drawable area, and [`compute_grid`] works out
//! how many whole squares fit inside it. Every cell of the resulting [`Grid`] has a
//! [`CellRole`] derived purely from its position, which a
//! [`Palette`](crate::Palette) turns into a colour.
//!
//! # Example
//!
//! ```
//! use checker_sheet::layout::{compute_grid, classify_cell, CellRole};
//! use checker_sheet::pagesize;
//! use checker_sheet::{Cm, Mm};
//!
//! let grid = compute_grid(pagesize::A4, Cm(1.5).into(), Mm(18.0).into());
//! assert_eq!((grid.columns, grid.rows), (10, 14));
//! assert_eq!(classify_cell(0, 0, &grid), CellRole::BottomLeft);
//! assert_eq!(classify_cell(13, 9, &grid), CellRole::TopRight);
//! ```

mod grid;
mod margins;

pub use grid::*;
pub use margins::*;
