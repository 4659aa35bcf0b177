use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::fractals::fractal_kinds::FractalKinds;

pub const JULIA_CONSTANT: Complex = Complex::new(-0.7, 0.272);

const MANDELBROT_REGION: ComplexRect =
    ComplexRect::from_corners(Complex::new(-2.0, -1.25), Complex::new(0.5, 1.25));
const JULIA_REGION: ComplexRect =
    ComplexRect::from_corners(Complex::new(-1.5, -1.5), Complex::new(1.5, 1.5));
const NEWTON_REGION: ComplexRect =
    ComplexRect::from_corners(Complex::new(-1.5, -1.5), Complex::new(1.5, 1.5));

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EscapeTimeVariant {
    Mandelbrot,
    Julia,
    Newton,
}

impl EscapeTimeVariant {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia, Self::Newton];

    #[must_use]
    pub fn from_kind(kind: FractalKinds) -> Option<Self> {
        match kind {
            FractalKinds::Mandelbrot => Some(Self::Mandelbrot),
            FractalKinds::Julia => Some(Self::Julia),
            FractalKinds::Newton => Some(Self::Newton),
            _ => None,
        }
    }

    /// Region of the complex plane stretched over the whole canvas.
    #[must_use]
    pub fn region(self) -> ComplexRect {
        match self {
            Self::Mandelbrot => MANDELBROT_REGION,
            Self::Julia => JULIA_REGION,
            Self::Newton => NEWTON_REGION,
        }
    }
}
