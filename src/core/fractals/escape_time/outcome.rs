use crate::core::data::complex::Complex;

/// How an escape-time iteration ended for one sample.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EscapeOutcome {
    /// The iteration budget ran out first.
    Bounded,
    /// `|z|²` passed the escape radius after `iterations` completed updates.
    Escaped { iterations: u32, modulus_squared: f64 },
    /// Successive `|z|²` values settled after `iterations` completed updates.
    Converged { iterations: u32, z: Complex },
    /// The sample sat on the singularity of the map (`z = 0` for Newton).
    Degenerate,
}

impl EscapeOutcome {
    #[must_use]
    pub fn iterations(&self) -> Option<u32> {
        match self {
            Self::Escaped { iterations, .. } | Self::Converged { iterations, .. } => {
                Some(*iterations)
            }
            Self::Bounded | Self::Degenerate => None,
        }
    }
}
