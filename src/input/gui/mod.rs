//! Interactive front end: a winit window with a `pixels` framebuffer and an
//! egui control panel.
//!
//! Only the panel state is available without the `gui` feature.

#[cfg(feature = "gui")]
mod app;
#[cfg(feature = "gui")]
pub mod errors;
pub mod ui_state;

#[cfg(feature = "gui")]
pub use app::run_gui;
