//! Pre-defined page sizes for common paper formats.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height.
//! Use the [`PageOrientation`](crate::pagesize::PageOrientation) trait to convert between
//! portrait and landscape.
//!
//! # Example
//!
//! ```
//! use checker_sheet::pagesize::{A4, PageOrientation, PaperFormat};
//!
//! assert_eq!(PaperFormat::A4.size(), A4);
//! let landscape = A4.landscape();
//! assert!(landscape.0 > landscape.1);
//! ```

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

// north american sizes
pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(14.0 * 72.0));
pub const TABLOID: PageSize = (Pt(11.0 * 72.0), Pt(17.0 * 72.0));

// iso a-series (converted from mm to points)
pub const A3: PageSize = (Pt(297.0 * 72.0 / 25.4), Pt(420.0 * 72.0 / 25.4));
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageSize = (Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));
pub const A6: PageSize = (Pt(105.0 * 72.0 / 25.4), Pt(148.0 * 72.0 / 25.4));

/// Named paper formats that a sheet can be printed on
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum PaperFormat {
    A3,
    #[default]
    A4,
    A5,
    A6,
    Letter,
    Legal,
    Tabloid,
}

impl PaperFormat {
    /// The portrait size of this format
    pub fn size(self) -> PageSize {
        match self {
            PaperFormat::A3 => A3,
            PaperFormat::A4 => A4,
            PaperFormat::A5 => A5,
            PaperFormat::A6 => A6,
            PaperFormat::Letter => LETTER,
            PaperFormat::Legal => LEGAL,
            PaperFormat::Tabloid => TABLOID,
        }
    }
}

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_is_210_by_297_mm() {
        let (w, h) = A4;
        let w: Mm = w.into();
        let h: Mm = h.into();
        assert!((*w - 210.0).abs() < 1e-3);
        assert!((*h - 297.0).abs() < 1e-3);
    }

    #[test]
    fn orientation_swaps_only_when_needed() {
        assert_eq!(A4.portrait(), A4);
        assert_eq!(A4.landscape(), (A4.1, A4.0));
        assert_eq!(A4.landscape().portrait(), A4);
    }
}
