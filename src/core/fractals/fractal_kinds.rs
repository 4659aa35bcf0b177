/// How a fractal reaches the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFamily {
    /// Every pixel is computed, then the surface is flushed once.
    Pixel,
    /// Drawing primitives are issued straight to the surface.
    Vector,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FractalKinds {
    Mandelbrot,
    #[default]
    Julia,
    Newton,
    Sierpinski,
    Koch,
    Dragon,
    Barnsley,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Julia,
        Self::Newton,
        Self::Sierpinski,
        Self::Koch,
        Self::Dragon,
        Self::Barnsley,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot Set",
            Self::Julia => "Julia Set",
            Self::Newton => "Newton Fractal",
            Self::Sierpinski => "Sierpinski Triangle",
            Self::Koch => "Koch Snowflake",
            Self::Dragon => "Dragon Curve",
            Self::Barnsley => "Barnsley Fern",
        }
    }

    #[must_use]
    pub const fn family(self) -> RenderFamily {
        match self {
            Self::Mandelbrot | Self::Julia | Self::Newton => RenderFamily::Pixel,
            Self::Sierpinski | Self::Koch | Self::Dragon | Self::Barnsley => RenderFamily::Vector,
        }
    }

    /// Whether two renders with the same parameters are guaranteed to match
    /// without pinning the random seed.
    #[must_use]
    pub const fn is_deterministic(self) -> bool {
        !matches!(self, Self::Barnsley)
    }
}

impl std::fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
