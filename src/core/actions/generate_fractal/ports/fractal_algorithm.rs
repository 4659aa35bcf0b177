use std::error::Error;

use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Per-pixel computation over a fixed canvas.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;

    fn pixel_rect(&self) -> PixelRect;
}
