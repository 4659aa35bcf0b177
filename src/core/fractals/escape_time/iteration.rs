use std::ops::ControlFlow;

use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::outcome::EscapeOutcome;

/// `|z|²` threshold, i.e. an escape radius of 4.
pub const ESCAPE_RADIUS_SQUARED: f64 = 16.0;

/// Smallest change in `|z|²` between Newton steps that still counts as moving.
pub const CONVERGENCE_EPSILON: f64 = 1e-6;

/// Iterates `z ← z² + c` from `z0`, testing the escape radius after each update.
#[must_use]
pub fn iterate_quadratic(z0: Complex, c: Complex, max_iterations: u32) -> EscapeOutcome {
    let result = (0..max_iterations).try_fold(z0, |z, iteration| {
        let next = z * z + c;
        let modulus_squared = next.magnitude_squared();

        if modulus_squared > ESCAPE_RADIUS_SQUARED {
            ControlFlow::Break(EscapeOutcome::Escaped {
                iterations: iteration,
                modulus_squared,
            })
        } else {
            ControlFlow::Continue(next)
        }
    });

    match result {
        ControlFlow::Break(outcome) => outcome,
        ControlFlow::Continue(_) => EscapeOutcome::Bounded,
    }
}

/// Newton's method for `z³ - 1 = 0`: `z ← z - (z³ - 1) / 3z²`.
#[must_use]
pub fn iterate_newton(z0: Complex, max_iterations: u32) -> EscapeOutcome {
    let mut z = z0;

    for iteration in 0..max_iterations {
        let modulus_squared = z.magnitude_squared();
        if modulus_squared == 0.0 {
            return EscapeOutcome::Degenerate;
        }

        let z_squared = z * z;
        z = z - (z_squared * z - Complex::ONE) / z_squared.scale(3.0);

        if (z.magnitude_squared() - modulus_squared).abs() < CONVERGENCE_EPSILON {
            return EscapeOutcome::Converged {
                iterations: iteration,
                z,
            };
        }
    }

    EscapeOutcome::Bounded
}
