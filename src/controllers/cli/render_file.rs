use std::path::Path;
use std::time::Instant;

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::actions::render::render::{RenderOptions, RenderStats, render};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::render_parameters::RenderParameters;
use crate::presenters::raster::canvas::RasterCanvas;

/// Renders a single frame off-screen and hands it to a file presenter.
pub struct RenderFileController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> RenderFileController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(
        &mut self,
        params: RenderParameters,
        options: &RenderOptions,
        pixel_rect: PixelRect,
    ) -> RenderStats {
        tracing::info!(
            fractal = %params.fractal_kind(),
            max_iterations = params.max_iterations(),
            depth = params.depth(),
            width = pixel_rect.width(),
            height = pixel_rect.height(),
            seed = options.seed,
            "rendering"
        );

        let mut canvas = RasterCanvas::new(pixel_rect);
        let start = Instant::now();
        let stats = render(params, options, &mut canvas);

        tracing::info!(duration = ?start.elapsed(), "render finished");

        self.buffer = Some(canvas.into_pixel_buffer());
        stats
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Writes the last generated frame. Does nothing before the first
    /// [`generate`](Self::generate).
    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), PresentError> {
        let Some(buffer) = &self.buffer else {
            tracing::warn!("nothing rendered yet, skipping write");
            return Ok(());
        };

        self.presenter.present(buffer, filepath.as_ref())?;
        tracing::info!(path = %filepath.as_ref().display(), "saved");

        Ok(())
    }
}
