//! Calibration sheet assembly.
//!
//! [`SheetConfig`] describes the sheet; [`CalibrationSheet::new`] validates it and
//! works out the grid, after which the sheet can be rendered into a [`Document`] or
//! written straight to disk.
//!
//! ```
//! use checker_sheet::{CalibrationSheet, SheetConfig};
//!
//! let sheet = CalibrationSheet::new(SheetConfig::default()).expect("default config is valid");
//! assert_eq!((sheet.grid().columns, sheet.grid().rows), (10, 14));
//!
//! let mut pdf: Vec<u8> = Vec::new();
//! sheet.write(&mut pdf).expect("can write to memory");
//! assert!(pdf.starts_with(b"%PDF-"));
//! ```

use crate::document::Document;
use crate::info::Info;
use crate::layout::{colour_for_cell, compute_grid, Grid, Margins};
use crate::page::Page;
use crate::pagesize::{PageSize, A4};
use crate::palette::{HueTable, Palette};
use crate::units::*;
use crate::SheetError;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Upper bound on the squares in one sheet; a 1mm grid on A3 is about 125,000
pub const MAX_CELLS: usize = 250_000;

/// Everything needed to describe a calibration sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetConfig {
    /// Size of the (single) page, in portrait or landscape
    pub page_size: PageSize,
    /// Side length of each square
    pub box_size: Mm,
    /// Blank space left on every edge of the page
    pub margin: Cm,
    /// Hue used for each colour role
    pub hues: HueTable,
    /// Render a blank page instead of failing when no square fits
    pub allow_empty: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        SheetConfig {
            page_size: A4,
            box_size: Mm(18.0),
            margin: Cm(1.5),
            hues: HueTable::default(),
            allow_empty: false,
        }
    }
}

impl SheetConfig {
    /// Check the lengths make sense on their own, before any grid is computed
    pub fn validate(&self) -> Result<(), SheetError> {
        if !self.box_size.is_finite() || *self.box_size <= 0.0 {
            return Err(SheetError::InvalidBoxSize(*self.box_size));
        }
        if !self.margin.is_finite() || *self.margin < 0.0 {
            return Err(SheetError::InvalidMargin(*self.margin));
        }
        Ok(())
    }
}

/// A validated calibration sheet with its grid and colours worked out
#[derive(Debug, Clone)]
pub struct CalibrationSheet {
    config: SheetConfig,
    grid: Grid,
    palette: Palette,
}

impl CalibrationSheet {
    /// Validate `config` and lay out the grid. Fails if no square fits on the page,
    /// unless [`SheetConfig::allow_empty`] is set.
    pub fn new(config: SheetConfig) -> Result<CalibrationSheet, SheetError> {
        config.validate()?;

        info!("Using a {:.1} cm margin on all sides", *config.margin);
        info!(
            "Box size: {} mm ({:.2} cm)",
            *config.box_size,
            *Cm::from(config.box_size)
        );

        let grid = compute_grid(
            config.page_size,
            config.margin.into(),
            config.box_size.into(),
        );
        if grid.is_empty() {
            if !config.allow_empty {
                return Err(SheetError::EmptyGrid {
                    box_mm: *config.box_size,
                    margin_cm: *config.margin,
                    columns: grid.columns,
                    rows: grid.rows,
                });
            }
            warn!("No squares fit inside the margins, the page will be blank");
        }
        if grid.cell_count() > MAX_CELLS {
            return Err(SheetError::GridTooLarge {
                box_mm: *config.box_size,
                columns: grid.columns,
                rows: grid.rows,
                max_cells: MAX_CELLS,
            });
        }
        info!(
            "Grid of {}x{} squares ({} total)",
            grid.columns,
            grid.rows,
            grid.cell_count()
        );
        info!("Hues: {}", config.hues);

        let palette = Palette::from_hues(&config.hues);
        info!("Colours: {}", palette);
        Ok(CalibrationSheet {
            config,
            grid,
            palette,
        })
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Lay the sheet out on a fresh page
    pub fn render_page(&self) -> Page {
        let margin: Pt = self.config.margin.into();
        let mut page = Page::new(self.config.page_size, Some(Margins::all(margin)));
        render_grid(
            &mut page,
            self.grid,
            &self.palette,
            self.config.box_size.into(),
            margin,
        );
        page
    }

    /// Build a single-page document containing the sheet
    pub fn render(&self) -> Document {
        let mut doc = Document::default();

        let mut info = Info::new();
        info.title("Colour calibration sheet")
            .subject(format!(
                "{}x{} grid of {} mm squares, {} cm margin",
                self.grid.columns, self.grid.rows, *self.config.box_size, *self.config.margin
            ))
            .keywords("calibration, colour, checkerboard");
        doc.set_info(info);

        doc.add_page(self.render_page());
        doc
    }

    /// Render the sheet and write it as PDF to `w`
    pub fn write<W: Write>(&self, w: W) -> Result<(), SheetError> {
        self.render().write(w)
    }

    /// Render the sheet and write it as PDF to a file at `path`, replacing any
    /// existing file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SheetError> {
        let path = path.as_ref();
        let out = BufWriter::new(File::create(path)?);
        self.write(out)?;
        info!("Created '{}'", path.display());
        Ok(())
    }
}

/// Paint one square per grid cell onto `page`. Cell `(row, col)` sits at
/// `(margin + col * box_size, margin + row * box_size)`, so row 0 is at the bottom.
pub fn render_grid(page: &mut Page, grid: Grid, palette: &Palette, box_size: Pt, margin: Pt) {
    for (row, col) in grid.cells() {
        let rect = grid.cell_rect(row, col, (margin, margin), box_size);
        page.add_filled_rect(rect, colour_for_cell(row, col, &grid, palette));
    }
    debug!("rendered {} squares", grid.cell_count());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{classify_cell, CellRole};
    use crate::rect::Rect;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_sheet_has_140_squares() {
        let sheet = CalibrationSheet::new(SheetConfig::default()).expect("valid config");
        let page = sheet.render_page();
        assert_eq!(page.filled_rects().count(), 140);
    }

    #[test]
    fn squares_start_at_the_margin() {
        let sheet = CalibrationSheet::new(SheetConfig::default()).expect("valid config");
        let page = sheet.render_page();
        let first = page.filled_rects().next().expect("at least one square");

        let margin: Pt = Cm(1.5).into();
        let side: Pt = Mm(18.0).into();
        assert_eq!(
            first.rect,
            Rect {
                x1: margin,
                y1: margin,
                x2: margin + side,
                y2: margin + side,
            }
        );
        assert_eq!(first.colour, sheet.palette().bottom_left);
        assert_eq!(page.content_box.x1, margin);
    }

    #[test]
    fn squares_are_coloured_by_role() {
        let sheet = CalibrationSheet::new(SheetConfig::default()).expect("valid config");
        let grid = sheet.grid();
        let page = sheet.render_page();

        for ((row, col), square) in grid.cells().zip(page.filled_rects()) {
            let role = classify_cell(row, col, &grid);
            assert_eq!(square.colour, sheet.palette().colour_for(role));
        }

        let last = page.filled_rects().last().expect("at least one square");
        assert_eq!(last.colour, sheet.palette().colour_for(CellRole::TopRight));
    }

    #[test]
    fn rejects_non_positive_box_size() {
        let config = SheetConfig {
            box_size: Mm(0.0),
            ..SheetConfig::default()
        };
        assert!(matches!(
            CalibrationSheet::new(config),
            Err(SheetError::InvalidBoxSize(_))
        ));
    }

    #[test]
    fn rejects_negative_margin() {
        let config = SheetConfig {
            margin: Cm(-1.0),
            ..SheetConfig::default()
        };
        assert!(matches!(
            CalibrationSheet::new(config),
            Err(SheetError::InvalidMargin(_))
        ));
    }

    #[test]
    fn microscopic_boxes_are_rejected() {
        for box_mm in [1e-30, 0.001] {
            let config = SheetConfig {
                box_size: Mm(box_mm),
                ..SheetConfig::default()
            };
            match CalibrationSheet::new(config) {
                Err(SheetError::GridTooLarge { max_cells, .. }) => assert_eq!(max_cells, MAX_CELLS),
                other => panic!("expected a grid too large error, got {other:?}"),
            }
        }
    }

    #[test]
    fn one_millimetre_boxes_fit_within_the_limit() {
        let config = SheetConfig {
            box_size: Mm(1.0),
            ..SheetConfig::default()
        };
        let sheet = CalibrationSheet::new(config).expect("1mm squares are allowed");
        assert_eq!(sheet.grid(), Grid::new(180, 267));
    }

    #[test]
    fn empty_grid_is_an_error_by_default() {
        let config = SheetConfig {
            margin: Cm(10.5),
            ..SheetConfig::default()
        };
        match CalibrationSheet::new(config) {
            Err(SheetError::EmptyGrid { columns, .. }) => assert_eq!(columns, 0),
            other => panic!("expected an empty grid error, got {other:?}"),
        }
    }

    #[test]
    fn empty_grid_renders_blank_when_allowed() {
        let config = SheetConfig {
            margin: Cm(10.5),
            allow_empty: true,
            ..SheetConfig::default()
        };
        let sheet = CalibrationSheet::new(config).expect("blank pages allowed");
        assert!(sheet.grid().is_empty());

        let page = sheet.render_page();
        assert_eq!(page.filled_rects().count(), 0);
        assert_eq!(page.size(), A4);
    }
}
