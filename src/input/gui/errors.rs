#[derive(Debug, thiserror::Error)]
pub enum GuiError {
    #[error("failed to create event loop")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create pixels surface")]
    Pixels(#[from] pixels::Error),
    #[error("invalid canvas size")]
    Canvas(#[from] crate::core::data::pixel_rect::PixelRectError),
}
