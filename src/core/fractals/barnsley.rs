//! Barnsley fern by chaos-game sampling of four affine maps.

use rand::Rng;

use crate::core::colour_mapping::hsb::Hsb;
use crate::core::data::vec2::Vec2;
use crate::core::util::map_range::map_range;

#[must_use]
pub fn fern_colour() -> Hsb {
    Hsb::new(0.3, 1.0, 1.0)
}

const X_RANGE: (f64, f64) = (-2.5, 2.5);
const Y_RANGE: (f64, f64) = (0.0, 10.0);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FernTransform {
    Stem,
    SuccessiveLeaflets,
    LeftLeaflet,
    RightLeaflet,
}

impl FernTransform {
    pub const ALL: &'static [Self] = &[
        Self::Stem,
        Self::SuccessiveLeaflets,
        Self::LeftLeaflet,
        Self::RightLeaflet,
    ];

    /// Picks a transform from a uniform draw in `[0, 1)`.
    #[must_use]
    pub fn choose(r: f64) -> Self {
        if r < 0.01 {
            Self::Stem
        } else if r < 0.86 {
            Self::SuccessiveLeaflets
        } else if r < 0.93 {
            Self::LeftLeaflet
        } else {
            Self::RightLeaflet
        }
    }

    #[must_use]
    pub fn probability(self) -> f64 {
        match self {
            Self::Stem => 0.01,
            Self::SuccessiveLeaflets => 0.85,
            Self::LeftLeaflet | Self::RightLeaflet => 0.07,
        }
    }

    #[must_use]
    pub fn apply(self, p: Vec2) -> Vec2 {
        match self {
            Self::Stem => Vec2::new(0.0, 0.16 * p.y),
            Self::SuccessiveLeaflets => {
                Vec2::new(0.85 * p.x + 0.04 * p.y, -0.04 * p.x + 0.85 * p.y + 1.6)
            }
            Self::LeftLeaflet => Vec2::new(0.2 * p.x - 0.26 * p.y, 0.23 * p.x + 0.22 * p.y + 1.6),
            Self::RightLeaflet => {
                Vec2::new(-0.15 * p.x + 0.28 * p.y, 0.26 * p.x + 0.24 * p.y + 0.44)
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FernSample {
    pub transform: FernTransform,
    /// Position in fern space after the transform.
    pub point: Vec2,
}

/// Unbounded stream of fern samples starting from the origin.
#[derive(Debug)]
pub struct FernSampler<R: Rng> {
    rng: R,
    current: Vec2,
}

impl<R: Rng> FernSampler<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            current: Vec2::default(),
        }
    }
}

impl<R: Rng> Iterator for FernSampler<R> {
    type Item = FernSample;

    fn next(&mut self) -> Option<Self::Item> {
        let transform = FernTransform::choose(self.rng.r#gen::<f64>());
        self.current = transform.apply(self.current);

        Some(FernSample {
            transform,
            point: self.current,
        })
    }
}

pub fn generate_points<R: Rng>(rng: R) -> FernSampler<R> {
    FernSampler::new(rng)
}

/// Maps fern space onto the canvas, with `y = 0` at the bottom edge.
#[must_use]
pub fn to_canvas(point: Vec2, width: f64, height: f64) -> Vec2 {
    Vec2::new(
        map_range(point.x, X_RANGE.0, X_RANGE.1, 0.0, width),
        map_range(point.y, Y_RANGE.0, Y_RANGE.1, height, 0.0),
    )
}
