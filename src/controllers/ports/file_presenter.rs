use std::path::{Path, PathBuf};

use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, thiserror::Error)]
pub enum PresentError {
    #[error("failed to write '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode '{}'", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Writes a finished frame somewhere on disk.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> Result<(), PresentError>;
}
