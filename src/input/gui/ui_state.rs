use crate::core::config::DEFAULT_SEED;
use crate::core::data::render_parameters::RenderParameters;
use crate::core::fractals::fractal_kinds::FractalKinds;

/// Control-panel values plus what was last drawn from them.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub fractal_kind: FractalKinds,
    pub max_iterations: u32,
    pub depth: u32,
    seed: u64,
    last_rendered: Option<(RenderParameters, u64)>,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl UiState {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let params = RenderParameters::default();

        Self {
            fractal_kind: params.fractal_kind(),
            max_iterations: params.max_iterations(),
            depth: params.depth(),
            seed,
            last_rendered: None,
        }
    }

    #[must_use]
    pub fn params(&self) -> RenderParameters {
        RenderParameters::new(self.fractal_kind, self.max_iterations, self.depth)
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// New randomness for the fern; also forces the next frame to be redrawn.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.last_rendered = None;
    }

    #[must_use]
    pub fn should_render(&self) -> bool {
        self.last_rendered != Some((self.params(), self.seed))
    }

    pub fn record_render(&mut self) {
        self.last_rendered = Some((self.params(), self.seed));
    }
}
