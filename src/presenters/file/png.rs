use std::path::Path;

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Default)]
pub struct PngFilePresenter {}

impl PngFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> Result<(), PresentError> {
        let path = filepath.as_ref();
        let rect = buffer.pixel_rect();

        image::save_buffer_with_format(
            path,
            buffer.buffer(),
            rect.width(),
            rect.height(),
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )
        .map_err(|source| PresentError::Image {
            path: path.to_path_buf(),
            source,
        })
    }
}
