use crate::pagesize::PageSize;
use crate::units::Pt;

/// Margins around the edges of a page. Squares are only laid out inside the
/// margins, and the margins are applied to [`Page`](crate::Page)s to determine the
/// `ArtBox` attribute of each page in the generated PDF
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::all(Pt(0.0))
    }

    /// The (width, height) left over once the margins are removed from a page.
    /// Either dimension may be negative when the margins overlap.
    pub fn drawable_area(&self, page_size: PageSize) -> (Pt, Pt) {
        let (width, height) = page_size;
        (
            width - self.left - self.right,
            height - self.top - self.bottom,
        )
    }
}
