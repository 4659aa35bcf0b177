use crate::core::config::{
    DEFAULT_DEPTH, DEFAULT_FRACTAL, DEFAULT_MAX_ITERATIONS, DEPTH_RANGE, ITERATION_RANGE,
};
use crate::core::fractals::fractal_kinds::FractalKinds;

/// Snapshot of the user's choices for one render pass.
///
/// Values outside the accepted ranges are clamped rather than rejected, so a
/// `RenderParameters` is always renderable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RenderParameters {
    fractal_kind: FractalKinds,
    max_iterations: u32,
    depth: u32,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            fractal_kind: DEFAULT_FRACTAL,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            depth: DEFAULT_DEPTH,
        }
    }
}

impl RenderParameters {
    #[must_use]
    pub fn new(fractal_kind: FractalKinds, max_iterations: u32, depth: u32) -> Self {
        Self {
            fractal_kind,
            max_iterations: clamp_to(max_iterations, &ITERATION_RANGE, "max_iterations"),
            depth: clamp_to(depth, &DEPTH_RANGE, "depth"),
        }
    }

    #[must_use]
    pub fn fractal_kind(&self) -> FractalKinds {
        self.fractal_kind
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn with_fractal_kind(self, fractal_kind: FractalKinds) -> Self {
        Self {
            fractal_kind,
            ..self
        }
    }

    #[must_use]
    pub fn with_max_iterations(self, max_iterations: u32) -> Self {
        Self::new(self.fractal_kind, max_iterations, self.depth)
    }

    #[must_use]
    pub fn with_depth(self, depth: u32) -> Self {
        Self::new(self.fractal_kind, self.max_iterations, depth)
    }
}

fn clamp_to(value: u32, range: &std::ops::RangeInclusive<u32>, name: &'static str) -> u32 {
    let clamped = value.clamp(*range.start(), *range.end());

    if clamped != value {
        tracing::warn!(parameter = name, requested = value, clamped, "parameter out of range");
    }

    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_initial_ui_state() {
        let params = RenderParameters::default();

        assert_eq!(params.fractal_kind(), FractalKinds::Julia);
        assert_eq!(params.max_iterations(), 100);
        assert_eq!(params.depth(), 5);
    }

    #[test]
    fn test_in_range_values_are_kept() {
        let params = RenderParameters::new(FractalKinds::Koch, 1, 12);

        assert_eq!(params.max_iterations(), 1);
        assert_eq!(params.depth(), 12);
    }

    #[test]
    fn test_zero_values_clamp_to_one() {
        let params = RenderParameters::new(FractalKinds::Sierpinski, 0, 0);

        assert_eq!(params.max_iterations(), 1);
        assert_eq!(params.depth(), 1);
    }

    #[test]
    fn test_large_values_clamp_to_upper_bound() {
        let params = RenderParameters::new(FractalKinds::Mandelbrot, 10_000, 40);

        assert_eq!(params.max_iterations(), 200);
        assert_eq!(params.depth(), 12);
    }

    #[test]
    fn test_builders_clamp_and_preserve_other_fields() {
        let params = RenderParameters::default()
            .with_fractal_kind(FractalKinds::Dragon)
            .with_depth(99)
            .with_max_iterations(50);

        assert_eq!(params, RenderParameters::new(FractalKinds::Dragon, 50, 12));
    }
}
