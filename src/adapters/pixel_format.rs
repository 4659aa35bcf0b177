//! Pixel format conversion between the RGB [`PixelBuffer`] and RGBA framebuffers.
//!
//! [`PixelBuffer`]: crate::core::data::pixel_buffer::PixelBuffer

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PixelFormatError {
    #[error("rgb source length {0} is not a multiple of 3")]
    RaggedSource(usize),
    #[error("rgba destination length {actual} does not match expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Copies RGB pixels into an RGBA frame, making every pixel opaque.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % 3 != 0 {
        return Err(PixelFormatError::RaggedSource(src.len()));
    }

    let expected = (src.len() / 3) * 4;
    if dst.len() != expected {
        return Err(PixelFormatError::SizeMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }

    Ok(())
}
