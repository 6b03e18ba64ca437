//! Printable checkerboard sheets for checking how a printer or display reproduces colour.
//!
//! A sheet is a single PDF page covered (inside a uniform margin) by a grid of
//! equally sized squares: four distinctly coloured corner squares over a two colour
//! checkerboard, each colour a fully saturated hue.

mod colour;
pub use colour::*;

mod content;

mod document;
pub use document::*;

mod info;
pub use info::*;

/// Margins, grid fitting and cell colour roles
pub mod layout;

mod page;
pub use page::*;

/// Standard paper sizes
pub mod pagesize;

mod palette;
pub use palette::*;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod sheet;
pub use sheet::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
