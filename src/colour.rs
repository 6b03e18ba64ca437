/// A DeviceRGB colour; r, g, and b range from 0.0 to 1.0
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Convert a hue / saturation / value triple to RGB.
    ///
    /// `hue` is in degrees and wraps around, so `360.0` and `-90.0` are valid and
    /// mean the same as `0.0` and `270.0`. `saturation` and `value` are clamped to
    /// 0.0..=1.0.
    ///
    /// ```
    /// use checker_sheet::Colour;
    ///
    /// let c = Colour::from_hsv(90.0, 1.0, 1.0);
    /// assert_eq!(c, Colour::new_rgb(0.5, 1.0, 0.0));
    /// ```
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Colour {
        let s = saturation.clamp(0.0, 1.0);
        let v = value.clamp(0.0, 1.0);

        let h = hue.rem_euclid(360.0) / 60.0;
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs
        let sector = (h.floor() as u8).min(5);
        let f = h - sector as f32;

        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Colour { r, g, b }
    }

    /// A fully saturated, full brightness colour at the given hue (in degrees)
    pub fn from_hue(hue: f32) -> Colour {
        Colour::from_hsv(hue, 1.0, 1.0)
    }

    /// The colour as 0-255 bytes, rounded to nearest
    pub fn to_rgb_bytes(self) -> (u8, u8, u8) {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (byte(self.r), byte(self.g), byte(self.b))
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

impl<T: Into<f32>> From<[T; 3]> for Colour {
    fn from(c: [T; 3]) -> Self {
        let [r, g, b] = c;
        Colour {
            r: r.into(),
            g: g.into(),
            b: b.into(),
        }
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (r, g, b) = self.to_rgb_bytes();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const WHITE: Colour = Colour {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };
    pub const RED: Colour = Colour {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const CYAN: Colour = Colour {
        r: 0.0,
        g: 1.0,
        b: 1.0,
    };
}
