//! Rendering engine: parameters, fractal generators and the render pass.
//!
//! Nothing in here knows about windows or files; output goes through the
//! [`CanvasSurface`](actions::render::ports::canvas_surface::CanvasSurface) port.

pub mod actions;
pub mod colour_mapping;
pub mod config;
pub mod data;
pub mod fractals;
pub mod util;
