use crate::core::data::colour::Colour;

/// Hue, saturation and brightness, each normalised to `[0, 1]`.
///
/// Construct through [`Hsb::new`], which wraps the hue and clamps the other
/// channels, so a value of this type is always in range.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hsb {
    hue: f64,
    saturation: f64,
    brightness: f64,
}

impl Hsb {
    pub const BLACK: Self = Self {
        hue: 0.0,
        saturation: 0.0,
        brightness: 0.0,
    };
    pub const WHITE: Self = Self {
        hue: 0.0,
        saturation: 0.0,
        brightness: 1.0,
    };

    #[must_use]
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue: wrap_unit(hue),
            saturation: clamp_unit(saturation),
            brightness: clamp_unit(brightness),
        }
    }

    #[must_use]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    #[must_use]
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    #[must_use]
    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    #[must_use]
    pub fn to_colour(self) -> Colour {
        let v = self.brightness;
        let s = self.saturation;
        let h = self.hue * 6.0;
        let sextant = h.floor();
        let f = h - sextant;
        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        let (r, g, b) = match sextant as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Colour {
            r: to_channel(r),
            g: to_channel(g),
            b: to_channel(b),
        }
    }
}

impl From<Hsb> for Colour {
    fn from(hsb: Hsb) -> Self {
        hsb.to_colour()
    }
}

fn wrap_unit(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }

    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    let wrapped = value.rem_euclid(1.0);
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round() as u8
}
