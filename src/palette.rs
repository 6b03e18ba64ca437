//! Role-to-colour assignment for calibration sheets.
//!
//! A sheet uses six colour roles: one per corner square and two alternating
//! checkerboard colours. Roles are described by hue in a [`HueTable`] and turned
//! into concrete colours (full saturation and value) by [`Palette::from_hues`].

use crate::colour::Colour;
use crate::layout::CellRole;
use crate::SheetError;
use std::str::FromStr;

/// Hue, in degrees, assigned to each [`CellRole`]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HueTable {
    pub bottom_left: f32,
    pub bottom_right: f32,
    pub top_left: f32,
    pub top_right: f32,
    pub checker_even: f32,
    pub checker_odd: f32,
}

impl Default for HueTable {
    /// Red and yellow-green corners (left and right columns respectively) over a
    /// cyan / blue-magenta checkerboard, so that corner squares never share a
    /// colour with the checkerboard around them.
    fn default() -> Self {
        HueTable {
            bottom_left: 0.0,
            bottom_right: 90.0,
            top_left: 0.0,
            top_right: 90.0,
            checker_even: 180.0,
            checker_odd: 270.0,
        }
    }
}

impl HueTable {
    /// Hues in role order: bottom-left, bottom-right, top-left, top-right,
    /// checker even, checker odd
    pub fn as_array(&self) -> [f32; 6] {
        [
            self.bottom_left,
            self.bottom_right,
            self.top_left,
            self.top_right,
            self.checker_even,
            self.checker_odd,
        ]
    }

    pub fn hue_for(&self, role: CellRole) -> f32 {
        match role {
            CellRole::BottomLeft => self.bottom_left,
            CellRole::BottomRight => self.bottom_right,
            CellRole::TopLeft => self.top_left,
            CellRole::TopRight => self.top_right,
            CellRole::CheckerEven => self.checker_even,
            CellRole::CheckerOdd => self.checker_odd,
        }
    }
}

/// Parses six comma separated hues in role order, e.g. `"0,90,180,270,0,180"`
impl FromStr for HueTable {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hues = s
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<f32>()
                    .ok()
                    .filter(|h| h.is_finite())
                    .ok_or_else(|| SheetError::InvalidHue(part.to_string()))
            })
            .collect::<Result<Vec<f32>, SheetError>>()?;

        let [bottom_left, bottom_right, top_left, top_right, checker_even, checker_odd] =
            <[f32; 6]>::try_from(hues.as_slice())
                .map_err(|_| SheetError::HueCount(hues.len()))?;

        Ok(HueTable {
            bottom_left,
            bottom_right,
            top_left,
            top_right,
            checker_even,
            checker_odd,
        })
    }
}

impl std::fmt::Display for HueTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "corners BL {}° BR {}° TL {}° TR {}°, checkerboard {}° / {}°",
            self.bottom_left,
            self.bottom_right,
            self.top_left,
            self.top_right,
            self.checker_even,
            self.checker_odd
        )
    }
}

/// Concrete colours for every [`CellRole`]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub bottom_left: Colour,
    pub bottom_right: Colour,
    pub top_left: Colour,
    pub top_right: Colour,
    pub checker_even: Colour,
    pub checker_odd: Colour,
}

impl Palette {
    /// Build a palette of fully saturated, full brightness colours from a hue table
    pub fn from_hues(hues: &HueTable) -> Palette {
        Palette {
            bottom_left: Colour::from_hue(hues.bottom_left),
            bottom_right: Colour::from_hue(hues.bottom_right),
            top_left: Colour::from_hue(hues.top_left),
            top_right: Colour::from_hue(hues.top_right),
            checker_even: Colour::from_hue(hues.checker_even),
            checker_odd: Colour::from_hue(hues.checker_odd),
        }
    }

    pub fn colour_for(&self, role: CellRole) -> Colour {
        match role {
            CellRole::BottomLeft => self.bottom_left,
            CellRole::BottomRight => self.bottom_right,
            CellRole::TopLeft => self.top_left,
            CellRole::TopRight => self.top_right,
            CellRole::CheckerEven => self.checker_even,
            CellRole::CheckerOdd => self.checker_odd,
        }
    }
}

impl std::fmt::Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "corners BL {} BR {} TL {} TR {}, checkerboard {} / {}",
            self.bottom_left,
            self.bottom_right,
            self.top_left,
            self.top_right,
            self.checker_even,
            self.checker_odd
        )
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::from_hues(&HueTable::default())
    }
}
