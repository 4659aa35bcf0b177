//! Escape-time fractals: Mandelbrot, Julia and Newton.

pub mod algorithm;
pub mod iteration;
pub mod outcome;
pub mod variant;
