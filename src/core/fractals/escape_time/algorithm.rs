use std::convert::Infallible;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::colour_mapping::colour_map::ColourMap;
use crate::core::colour_mapping::escape_time::EscapeTimeColourMap;
use crate::core::colour_mapping::hsb::Hsb;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::escape_time::iteration::{iterate_newton, iterate_quadratic};
use crate::core::fractals::escape_time::outcome::EscapeOutcome;
use crate::core::fractals::escape_time::variant::{EscapeTimeVariant, JULIA_CONSTANT};
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeAlgorithm {
    pixel_rect: PixelRect,
    variant: EscapeTimeVariant,
    max_iterations: u32,
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = EscapeOutcome;
    type Failure = Infallible;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let z = pixel_to_complex_coords(pixel, self.pixel_rect, self.variant.region());

        Ok(match self.variant {
            EscapeTimeVariant::Mandelbrot => iterate_quadratic(z, z, self.max_iterations),
            EscapeTimeVariant::Julia => iterate_quadratic(z, JULIA_CONSTANT, self.max_iterations),
            EscapeTimeVariant::Newton => iterate_newton(z, self.max_iterations),
        })
    }

    fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }
}

impl EscapeTimeAlgorithm {
    /// A zero iteration budget is raised to one.
    #[must_use]
    pub fn new(pixel_rect: PixelRect, variant: EscapeTimeVariant, max_iterations: u32) -> Self {
        Self {
            pixel_rect,
            variant,
            max_iterations: max_iterations.max(1),
        }
    }

    #[must_use]
    pub fn variant(&self) -> EscapeTimeVariant {
        self.variant
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn outcome(&self, pixel: Point) -> EscapeOutcome {
        self.compute(pixel).unwrap_or_else(|never| match never {})
    }
}

/// Colour of a single pixel of an escape-time fractal on a `width` x `height` canvas.
///
/// Returns black for a zero-sized canvas.
#[must_use]
pub fn evaluate(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    max_iterations: u32,
    variant: EscapeTimeVariant,
) -> Hsb {
    let Ok(pixel_rect) = PixelRect::new(width, height) else {
        return Hsb::BLACK;
    };

    let algorithm = EscapeTimeAlgorithm::new(pixel_rect, variant, max_iterations);
    let pixel = Point {
        x: x as i32,
        y: y as i32,
    };

    EscapeTimeColourMap::new(algorithm.max_iterations()).map(algorithm.outcome(pixel))
}
