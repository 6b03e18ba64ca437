use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum SheetError {
    #[error(transparent)]
    /// An I/O error occurred while writing the document
    Io(#[from] std::io::Error),

    #[error("box size must be a positive length, got {0}mm")]
    /// The calibration squares would have no area
    InvalidBoxSize(f32),

    #[error("margin must not be negative, got {0}cm")]
    /// Margins have to shrink the page, not grow it
    InvalidMargin(f32),

    #[error(
        "no {box_mm}mm squares fit on the page with a {margin_cm}cm margin \
         (grid would be {columns}x{rows})"
    )]
    /// The margins and box size leave no room for a single square
    EmptyGrid {
        box_mm: f32,
        margin_cm: f32,
        columns: usize,
        rows: usize,
    },

    #[error(
        "{box_mm}mm squares would need a {columns}x{rows} grid, more than the {max_cells} \
         squares a sheet can hold"
    )]
    /// The box size is so small that the sheet would be unreasonably large
    GridTooLarge {
        box_mm: f32,
        columns: usize,
        rows: usize,
        max_cells: usize,
    },

    #[error("invalid hue {0:?}, expected a number of degrees")]
    /// A hue in a hue table could not be parsed
    InvalidHue(String),

    #[error("expected 6 hues (bottom-left, bottom-right, top-left, top-right, even, odd), got {0}")]
    /// A hue table had the wrong number of entries
    HueCount(usize),

    #[error("page {0} is missing from the document")]
    /// A page in the document order could not be found
    PageMissing(usize),
}
