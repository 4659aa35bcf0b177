//! Input adapters for the fractal visualizer.
//!
//! This module contains adapters that receive input from various sources
//! and translate them into render parameters.

pub mod cli;
pub mod gui;
