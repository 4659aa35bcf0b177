use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;

/// Computes every pixel of `pixel_rect` in row-major order on the calling thread.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    pixel_rect
        .points()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use std::error::Error;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    struct StubAlgorithm {
        pixel_rect: PixelRect,
        fail_at: Option<Point>,
    }

    impl FractalAlgorithm for StubAlgorithm {
        type Success = (i32, i32);
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            if self.fail_at == Some(pixel) {
                return Err(StubError {});
            }
            Ok((pixel.x, pixel.y))
        }

        fn pixel_rect(&self) -> PixelRect {
            self.pixel_rect
        }
    }

    #[test]
    fn test_generate_fractal_covers_every_pixel_including_last_row_and_column() {
        let pixel_rect = PixelRect::new(3, 2).unwrap();
        let algorithm = StubAlgorithm {
            pixel_rect,
            fail_at: None,
        };

        let results = generate_fractal(pixel_rect, &algorithm).unwrap();

        assert_eq!(results, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_generate_fractal_propagates_failure() {
        let pixel_rect = PixelRect::new(4, 4).unwrap();
        let algorithm = StubAlgorithm {
            pixel_rect,
            fail_at: Some(Point { x: 2, y: 3 }),
        };

        assert_eq!(generate_fractal(pixel_rect, &algorithm), Err(StubError {}));
    }
}
