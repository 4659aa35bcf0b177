//! Main GUI application loop.

use std::time::Instant;

use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::core::actions::render::render::{Execution, RenderOptions, render};
use crate::core::config::{CANVAS_HEIGHT, CANVAS_WIDTH, DEPTH_RANGE, ITERATION_RANGE};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::input::gui::errors::GuiError;
use crate::input::gui::ui_state::UiState;
use crate::presenters::pixels::presenter::PixelsPresenter;
use crate::presenters::raster::canvas::RasterCanvas;

struct App {
    presenter: PixelsPresenter,
    ui_state: UiState,
    last_render_millis: Option<u128>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl App {
    fn new(window: &'static Window, event_loop: &EventLoop<()>) -> Result<Self, GuiError> {
        let canvas = PixelRect::new(CANVAS_WIDTH, CANVAS_HEIGHT)?;
        let presenter = PixelsPresenter::new(window, canvas)?;

        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Ok(Self {
            presenter,
            ui_state: UiState::new(rand::random()),
            last_render_millis: None,
            egui_ctx,
            egui_state,
        })
    }

    /// Renders a new frame when the panel values changed since the last one.
    fn refresh_frame(&mut self) {
        if !self.ui_state.should_render() {
            return;
        }

        let params = self.ui_state.params();
        let options = RenderOptions::default()
            .with_execution(Execution::Rayon)
            .with_seed(self.ui_state.seed());

        let mut canvas = RasterCanvas::new(self.presenter.canvas());
        let start = Instant::now();
        render(params, &options, &mut canvas);
        let elapsed = start.elapsed();

        tracing::info!(fractal = %params.fractal_kind(), duration = ?elapsed, "frame rendered");

        if let Err(error) = self.presenter.show_frame(canvas.pixel_buffer()) {
            tracing::error!(%error, "could not copy frame");
        }

        self.last_render_millis = Some(elapsed.as_millis());
        self.ui_state.record_render();
    }

    fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Fractal")
                .default_pos([10.0, 10.0])
                .resizable(false)
                .show(ctx, |ui| {
                    egui::ComboBox::from_label("Type")
                        .selected_text(self.ui_state.fractal_kind.display_name())
                        .show_ui(ui, |ui| {
                            for &kind in FractalKinds::ALL {
                                ui.selectable_value(
                                    &mut self.ui_state.fractal_kind,
                                    kind,
                                    kind.display_name(),
                                );
                            }
                        });

                    ui.add(
                        egui::Slider::new(&mut self.ui_state.max_iterations, ITERATION_RANGE)
                            .text("Max iterations"),
                    );
                    ui.add(egui::Slider::new(&mut self.ui_state.depth, DEPTH_RANGE).text("Depth"));

                    if ui.button("Redraw").clicked() {
                        self.ui_state.reseed(rand::random());
                    }

                    if let Some(millis) = self.last_render_millis {
                        ui.separator();
                        ui.label(format!("Last render: {millis} ms"));
                    }
                });
        })
    }

    /// Returns `(consumed, repaint)` as reported by egui.
    fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}

/// Runs the GUI application.
///
/// This function does not return until the window is closed.
pub fn run_gui() -> Result<(), GuiError> {
    let event_loop = EventLoop::new()?;

    // pixels needs a 'static window
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Fractal Visualizer")
            .with_inner_size(LogicalSize::new(CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    let mut app = App::new(window, &event_loop)?;
    let mut redraw_pending = true;

    tracing::info!("window open");

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => {
            let (_, egui_repaint) = app.handle_window_event(window, event);

            match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::RedrawRequested => {
                    redraw_pending = false;

                    let egui_output = app.update_ui(window);
                    app.egui_state
                        .handle_platform_output(window, egui_output.platform_output.clone());

                    if egui_output
                        .viewport_output
                        .values()
                        .any(|v| v.repaint_delay.is_zero())
                    {
                        redraw_pending = true;
                    }

                    app.refresh_frame();

                    if let Err(error) = app.presenter.render(egui_output, &app.egui_ctx) {
                        tracing::error!(%error, "render failed");
                        elwt.exit();
                    }
                }
                WindowEvent::Resized(size) => {
                    if let Err(error) = app.presenter.resize_surface(size.width, size.height) {
                        tracing::error!(%error, "resize failed");
                    }
                    redraw_pending = true;
                }
                WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                    app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                    let size = window.inner_size();
                    if let Err(error) = app.presenter.resize_surface(size.width, size.height) {
                        tracing::error!(%error, "resize failed");
                    }
                    redraw_pending = true;
                }
                _ => {
                    if egui_repaint {
                        redraw_pending = true;
                    }
                }
            }
        }
        Event::AboutToWait => {
            if redraw_pending {
                window.request_redraw();
            }
        }
        _ => {}
    })?;

    Ok(())
}
