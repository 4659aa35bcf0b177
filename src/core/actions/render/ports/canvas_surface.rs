use crate::core::colour_mapping::hsb::Hsb;
use crate::core::data::draw_command::DrawCommand;
use crate::core::data::vec2::Vec2;

/// Drawing target for a render pass.
///
/// Coordinates are in device pixels with the origin at the top left and `y`
/// growing downwards. Implementations clip anything that falls outside the
/// surface instead of failing.
pub trait CanvasSurface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn clear(&mut self, colour: Hsb);

    /// Staged write; only guaranteed visible after [`flush`](Self::flush).
    fn set_pixel(&mut self, x: u32, y: u32, colour: Hsb);

    fn flush(&mut self);

    fn draw_line(&mut self, from: Vec2, to: Vec2, colour: Hsb);

    fn draw_filled_polygon(&mut self, vertices: &[Vec2], colour: Hsb);

    fn draw_polyline(&mut self, points: &[Vec2], colour: Hsb);

    fn plot_point(&mut self, at: Vec2, colour: Hsb);

    fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Line { from, to, colour } => self.draw_line(*from, *to, *colour),
            DrawCommand::FilledPolygon { vertices, colour } => {
                self.draw_filled_polygon(vertices, *colour)
            }
            DrawCommand::Polyline { points, colour } => self.draw_polyline(points, *colour),
            DrawCommand::Point { at, colour } => self.plot_point(*at, *colour),
        }
    }
}
