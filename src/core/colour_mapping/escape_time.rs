use std::f64::consts::PI;

use crate::core::colour_mapping::colour_map::ColourMap;
use crate::core::colour_mapping::hsb::Hsb;
use crate::core::fractals::escape_time::outcome::EscapeOutcome;

/// Colours the exit state of an escape-time iteration.
///
/// - points that never leave (or hit the Newton singularity) are black;
/// - escaping points get the smoothed hue `(0.5 + n - log2(log2(|z|²))) / max`
///   with brightness `n / max`;
/// - converged Newton points take their hue from the angle of the root they
///   reached.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EscapeTimeColourMap {
    max_iterations: u32,
}

impl EscapeTimeColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self {
            max_iterations: max_iterations.max(1),
        }
    }

    fn fraction(&self, iterations: u32) -> f64 {
        iterations as f64 / self.max_iterations as f64
    }

    fn smoothed_hue(&self, iterations: u32, modulus_squared: f64) -> f64 {
        // log2(log2(m)) is only defined for m > 1
        if modulus_squared <= 1.0 {
            return self.fraction(iterations);
        }

        (0.5 + iterations as f64 - modulus_squared.log2().log2()) / self.max_iterations as f64
    }
}

impl ColourMap for EscapeTimeColourMap {
    type Input = EscapeOutcome;

    fn map(&self, outcome: EscapeOutcome) -> Hsb {
        match outcome {
            EscapeOutcome::Bounded | EscapeOutcome::Degenerate => Hsb::BLACK,
            EscapeOutcome::Escaped {
                iterations,
                modulus_squared,
            } => Hsb::new(
                self.smoothed_hue(iterations, modulus_squared),
                1.0,
                self.fraction(iterations),
            ),
            EscapeOutcome::Converged { iterations, z } => {
                Hsb::new((z.argument() + PI) / (2.0 * PI), 1.0, self.fraction(iterations))
            }
        }
    }
}
