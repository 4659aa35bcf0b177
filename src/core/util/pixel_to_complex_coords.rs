use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::util::map_range::map_range;

/// Maps a pixel onto `complex_rect`, with pixel `x` spanning `[0, width)`.
///
/// Column `width` would land on the right edge of the region, so the last
/// column on the canvas stops one pixel short of it.
#[must_use]
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> Complex {
    let top_left = complex_rect.top_left();
    let bottom_right = complex_rect.bottom_right();

    Complex {
        real: map_range(
            pixel_position.x as f64,
            0.0,
            pixel_rect.width() as f64,
            top_left.real,
            bottom_right.real,
        ),
        imag: map_range(
            pixel_position.y as f64,
            0.0,
            pixel_rect.height() as f64,
            top_left.imag,
            bottom_right.imag,
        ),
    }
}
