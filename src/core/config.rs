//! Compile-time defaults and accepted parameter ranges.

use std::ops::RangeInclusive;

use crate::core::fractals::fractal_kinds::FractalKinds;

pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 800;

pub const ITERATION_RANGE: RangeInclusive<u32> = 1..=200;
pub const DEPTH_RANGE: RangeInclusive<u32> = 1..=12;

pub const DEFAULT_FRACTAL: FractalKinds = FractalKinds::Julia;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_DEPTH: u32 = 5;

/// Samples plotted per unit of `max_iterations` for the Barnsley fern.
pub const FERN_SAMPLES_PER_ITERATION: u64 = 100;

/// Seed used when a caller does not choose one.
pub const DEFAULT_SEED: u64 = 0x5eed_f3a7;
