pub mod adapters;
pub mod controllers;
pub mod core;
pub mod input;
mod logging;
pub mod presenters;

pub use crate::core::actions::render::render::{Execution, RenderOptions, RenderStats, render};
pub use crate::core::data::render_parameters::RenderParameters;
pub use crate::core::fractals::fractal_kinds::FractalKinds;
#[cfg(feature = "gui")]
pub use input::gui::run_gui;
pub use logging::init_tracing;
