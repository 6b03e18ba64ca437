//! Physical length units.
//!
//! PDF user space is measured in points (1/72 inch). Everything that ends up in the
//! document is expressed in [`Pt`]; the other units exist so that callers can think in
//! the units printed on a ruler and convert with `.into()`.
//!
//! ```
//! use checker_sheet::{Cm, Mm, Pt};
//!
//! let margin: Pt = Cm(1.5).into();
//! let box_size: Pt = Mm(18.0).into();
//! assert!((*margin - 42.519_684).abs() < 1e-3);
//! assert!((*box_size - 51.023_624).abs() < 1e-3);
//! ```

use derive_more::{Add, AddAssign, Deref, DerefMut, Display, From, Into, MulAssign, Sub, Sum};
use std::ops::{Div, Mul};

const POINTS_PER_INCH: f32 = 72.0;
const MM_PER_INCH: f32 = 25.4;

/// A length in PDF points (1/72 inch)
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    MulAssign,
    Sum,
    Deref,
    DerefMut,
    Display,
    From,
    Into,
)]
pub struct Pt(pub f32);

/// A length in millimetres
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Deref, Display, From, Into,
)]
pub struct Mm(pub f32);

/// A length in centimetres
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Deref, Display, From, Into,
)]
pub struct Cm(pub f32);

/// A length in inches
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Deref, Display, From, Into,
)]
pub struct In(pub f32);

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(value.0 * POINTS_PER_INCH)
    }
}

impl From<Mm> for Pt {
    fn from(value: Mm) -> Self {
        Pt(value.0 * POINTS_PER_INCH / MM_PER_INCH)
    }
}

impl From<Cm> for Pt {
    fn from(value: Cm) -> Self {
        Mm::from(value).into()
    }
}

impl From<Cm> for Mm {
    fn from(value: Cm) -> Self {
        Mm(value.0 * 10.0)
    }
}

impl From<Mm> for Cm {
    fn from(value: Mm) -> Self {
        Cm(value.0 / 10.0)
    }
}

impl From<Pt> for Mm {
    fn from(value: Pt) -> Self {
        Mm(value.0 * MM_PER_INCH / POINTS_PER_INCH)
    }
}

impl From<Pt> for In {
    fn from(value: Pt) -> Self {
        In(value.0 / POINTS_PER_INCH)
    }
}
