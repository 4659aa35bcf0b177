use crate::core::actions::render::ports::canvas_surface::CanvasSurface;
use crate::core::colour_mapping::hsb::Hsb;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::vec2::Vec2;

/// Software canvas drawing straight into a [`PixelBuffer`].
///
/// Vector primitives are rasterised in device space: lines with Bresenham
/// after clipping to the canvas, polygons with a scanline fill sampled at
/// pixel centres. Writes that land outside the buffer are dropped.
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    buffer: PixelBuffer,
    flushes: u32,
}

impl RasterCanvas {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            buffer: PixelBuffer::new(pixel_rect),
            flushes: 0,
        }
    }

    #[must_use]
    pub fn pixel_buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn into_pixel_buffer(self) -> PixelBuffer {
        self.buffer
    }

    /// Number of times the canvas has been flushed since it was created.
    #[must_use]
    pub fn flushes(&self) -> u32 {
        self.flushes
    }

    fn put(&mut self, x: i64, y: i64, colour: Colour) {
        let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) else {
            return;
        };

        // clipped
        let _ = self.buffer.set_pixel(Point { x, y }, colour);
    }

    fn bounds(&self) -> (Vec2, Vec2) {
        let rect = self.buffer.pixel_rect();
        (
            Vec2::new(0.0, 0.0),
            Vec2::new(rect.width() as f64, rect.height() as f64),
        )
    }

    fn line(&mut self, from: Vec2, to: Vec2, colour: Colour) {
        let (min, max) = self.bounds();
        let Some((from, to)) = clip_segment(from, to, min, max) else {
            return;
        };

        let (mut x, mut y) = (from.x.floor() as i64, from.y.floor() as i64);
        let (x1, y1) = (to.x.floor() as i64, to.y.floor() as i64);

        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put(x, y, colour);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn fill_polygon(&mut self, vertices: &[Vec2], colour: Colour) {
        if vertices.len() < 3 || !vertices.iter().all(|v| v.x.is_finite() && v.y.is_finite()) {
            return;
        }

        let rect = self.buffer.pixel_rect();
        let (width, height) = (rect.width() as i64, rect.height() as i64);

        let (min_y, max_y) = vertices
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v.y), hi.max(v.y))
            });

        // rows whose centre lies in [min_y, max_y)
        let first_row = ((min_y - 0.5).ceil() as i64).max(0);
        let last_row = ((max_y - 0.5).ceil() as i64 - 1).min(height - 1);

        let mut crossings = Vec::with_capacity(vertices.len());
        for row in first_row..=last_row {
            let centre_y = row as f64 + 0.5;

            crossings.clear();
            for (i, &a) in vertices.iter().enumerate() {
                let b = vertices[(i + 1) % vertices.len()];
                if (a.y <= centre_y && b.y > centre_y) || (b.y <= centre_y && a.y > centre_y) {
                    crossings.push(a.x + (centre_y - a.y) / (b.y - a.y) * (b.x - a.x));
                }
            }
            crossings.sort_by(f64::total_cmp);

            for span in crossings.chunks_exact(2) {
                let start = ((span[0] - 0.5).ceil() as i64).max(0);
                let end = ((span[1] - 0.5).ceil() as i64 - 1).min(width - 1);
                for column in start..=end {
                    self.put(column, row, colour);
                }
            }
        }
    }
}

/// Liang-Barsky clip of a segment against the box `[min, max]`.
///
/// Segments with a non-finite endpoint are rejected.
fn clip_segment(from: Vec2, to: Vec2, min: Vec2, max: Vec2) -> Option<(Vec2, Vec2)> {
    if ![from.x, from.y, to.x, to.y].iter().all(|c| c.is_finite()) {
        return None;
    }

    let delta = to - from;
    let mut t_enter = 0.0_f64;
    let mut t_exit = 1.0_f64;

    for (p, q) in [
        (-delta.x, from.x - min.x),
        (delta.x, max.x - from.x),
        (-delta.y, from.y - min.y),
        (delta.y, max.y - from.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }

        let t = q / p;
        if p < 0.0 {
            if t > t_exit {
                return None;
            }
            t_enter = t_enter.max(t);
        } else {
            if t < t_enter {
                return None;
            }
            t_exit = t_exit.min(t);
        }
    }

    Some((from + delta * t_enter, from + delta * t_exit))
}

impl CanvasSurface for RasterCanvas {
    fn width(&self) -> u32 {
        self.buffer.pixel_rect().width()
    }

    fn height(&self) -> u32 {
        self.buffer.pixel_rect().height()
    }

    fn clear(&mut self, colour: Hsb) {
        self.buffer.fill(colour.to_colour());
    }

    fn set_pixel(&mut self, x: u32, y: u32, colour: Hsb) {
        self.put(i64::from(x), i64::from(y), colour.to_colour());
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, colour: Hsb) {
        self.line(from, to, colour.to_colour());
    }

    fn draw_filled_polygon(&mut self, vertices: &[Vec2], colour: Hsb) {
        self.fill_polygon(vertices, colour.to_colour());
    }

    fn draw_polyline(&mut self, points: &[Vec2], colour: Hsb) {
        let colour = colour.to_colour();

        match points {
            [] => {}
            [single] => self.line(*single, *single, colour),
            _ => {
                for pair in points.windows(2) {
                    self.line(pair[0], pair[1], colour);
                }
            }
        }
    }

    fn plot_point(&mut self, at: Vec2, colour: Hsb) {
        if at.x.is_finite() && at.y.is_finite() {
            self.put(at.x.floor() as i64, at.y.floor() as i64, colour.to_colour());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render::render::{RenderOptions, render};
    use crate::core::data::render_parameters::RenderParameters;
    use crate::core::fractals::fractal_kinds::FractalKinds;

    const RED: Colour = Colour { r: 255, g: 0, b: 0 };

    fn canvas(width: u32, height: u32) -> RasterCanvas {
        RasterCanvas::new(PixelRect::new(width, height).unwrap())
    }

    fn pixel(canvas: &RasterCanvas, x: i32, y: i32) -> Colour {
        canvas.pixel_buffer().get_pixel(Point { x, y }).unwrap()
    }

    fn lit(canvas: &RasterCanvas) -> Vec<Point> {
        let rect = canvas.pixel_buffer().pixel_rect();
        rect.points()
            .filter(|&p| canvas.pixel_buffer().get_pixel(p).unwrap() != Colour::BLACK)
            .collect()
    }

    #[test]
    fn test_clear_fills_every_pixel() {
        let mut canvas = canvas(4, 3);

        canvas.clear(Hsb::WHITE);

        assert!(canvas.pixel_buffer().buffer().iter().all(|&byte| byte == 255));
    }

    #[test]
    fn test_set_pixel_outside_is_dropped() {
        let mut canvas = canvas(4, 3);

        canvas.set_pixel(4, 0, Hsb::WHITE);
        canvas.set_pixel(0, 3, Hsb::WHITE);
        canvas.set_pixel(u32::MAX, u32::MAX, Hsb::WHITE);

        assert!(lit(&canvas).is_empty());
    }

    #[test]
    fn test_flush_is_counted() {
        let mut canvas = canvas(2, 2);

        canvas.flush();
        canvas.flush();

        assert_eq!(canvas.flushes(), 2);
    }

    #[test]
    fn test_horizontal_line_includes_both_ends() {
        let mut canvas = canvas(8, 4);

        canvas.draw_line(Vec2::new(1.0, 1.0), Vec2::new(5.0, 1.0), Hsb::WHITE);

        assert_eq!(
            lit(&canvas),
            (1..=5).map(|x| Point { x, y: 1 }).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_diagonal_line_is_connected() {
        let mut canvas = canvas(8, 8);

        canvas.draw_line(Vec2::new(0.0, 0.0), Vec2::new(7.0, 7.0), Hsb::WHITE);

        assert_eq!(
            lit(&canvas),
            (0..8).map(|i| Point { x: i, y: i }).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_huge_line_is_clipped_to_the_canvas() {
        let mut canvas = canvas(10, 5);

        canvas.draw_line(Vec2::new(-1e12, 2.5), Vec2::new(1e12, 2.5), Hsb::WHITE);

        assert_eq!(
            lit(&canvas),
            (0..10).map(|x| Point { x, y: 2 }).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_line_entirely_outside_draws_nothing() {
        let mut canvas = canvas(10, 5);

        canvas.draw_line(Vec2::new(-5.0, -5.0), Vec2::new(20.0, -1.0), Hsb::WHITE);

        assert!(lit(&canvas).is_empty());
    }

    #[test]
    fn test_non_finite_geometry_is_ignored() {
        let mut canvas = canvas(10, 5);

        canvas.draw_line(Vec2::new(f64::NAN, 0.0), Vec2::new(3.0, 3.0), Hsb::WHITE);
        canvas.plot_point(Vec2::new(f64::INFINITY, 1.0), Hsb::WHITE);
        canvas.draw_filled_polygon(
            &[
                Vec2::new(0.0, 0.0),
                Vec2::new(f64::NAN, 4.0),
                Vec2::new(4.0, 4.0),
            ],
            Hsb::WHITE,
        );

        assert!(lit(&canvas).is_empty());
    }

    #[test]
    fn test_rectangle_fill_samples_pixel_centres() {
        let mut canvas = canvas(6, 5);

        canvas.draw_filled_polygon(
            &[
                Vec2::new(1.0, 1.0),
                Vec2::new(4.0, 1.0),
                Vec2::new(4.0, 3.0),
                Vec2::new(1.0, 3.0),
            ],
            Hsb::WHITE,
        );

        let expected: Vec<Point> = (1..3)
            .flat_map(|y| (1..4).map(move |x| Point { x, y }))
            .collect();
        assert_eq!(lit(&canvas), expected);
    }

    #[test]
    fn test_shared_edges_are_filled_once() {
        let mut canvas = canvas(4, 2);
        let left = Hsb::new(0.0, 1.0, 1.0);

        canvas.draw_filled_polygon(
            &[
                Vec2::new(0.0, 0.0),
                Vec2::new(2.0, 0.0),
                Vec2::new(2.0, 2.0),
                Vec2::new(0.0, 2.0),
            ],
            left,
        );
        canvas.draw_filled_polygon(
            &[
                Vec2::new(2.0, 0.0),
                Vec2::new(4.0, 0.0),
                Vec2::new(4.0, 2.0),
                Vec2::new(2.0, 2.0),
            ],
            Hsb::WHITE,
        );

        assert_eq!(pixel(&canvas, 1, 0), RED);
        assert_eq!(pixel(&canvas, 2, 0), Colour::WHITE);
        assert_eq!(pixel(&canvas, 1, 1), RED);
    }

    #[test]
    fn test_degenerate_polygon_draws_nothing() {
        let mut canvas = canvas(4, 4);

        canvas.draw_filled_polygon(&[Vec2::new(0.0, 0.0), Vec2::new(3.0, 3.0)], Hsb::WHITE);

        assert!(lit(&canvas).is_empty());
    }

    #[test]
    fn test_polyline_joins_consecutive_points() {
        let mut canvas = canvas(6, 6);

        canvas.draw_polyline(
            &[Vec2::new(0.0, 0.0), Vec2::new(3.0, 0.0), Vec2::new(3.0, 3.0)],
            Hsb::WHITE,
        );

        let lit = lit(&canvas);
        assert_eq!(lit.len(), 7);
        assert!(lit.contains(&Point { x: 0, y: 0 }));
        assert!(lit.contains(&Point { x: 3, y: 3 }));
    }

    #[test]
    fn test_plot_point_floors_to_pixel() {
        let mut canvas = canvas(4, 4);

        canvas.plot_point(Vec2::new(2.7, 1.2), Hsb::WHITE);

        assert_eq!(lit(&canvas), vec![Point { x: 2, y: 1 }]);
    }

    #[test]
    fn test_render_mandelbrot_single_iteration_corner_is_black() {
        let mut canvas = canvas(800, 800);
        let params = RenderParameters::new(FractalKinds::Mandelbrot, 1, 1);

        render(params, &RenderOptions::default(), &mut canvas);

        assert_eq!(pixel(&canvas, 0, 0), Colour::BLACK);
        assert_eq!(canvas.flushes(), 1);
    }

    #[test]
    fn test_render_sierpinski_leaves_middle_hole() {
        let mut canvas = canvas(800, 800);
        let params = RenderParameters::new(FractalKinds::Sierpinski, 100, 1);

        render(params, &RenderOptions::default(), &mut canvas);

        // inside the top corner triangle
        assert_eq!(pixel(&canvas, 400, 300), RED);
        // centroid of the removed middle triangle
        assert_eq!(pixel(&canvas, 400, 507), Colour::BLACK);
        assert_eq!(canvas.flushes(), 0);
    }

    #[test]
    fn test_render_dragon_draws_white_from_the_fixed_start() {
        let mut canvas = canvas(800, 800);
        let params = RenderParameters::new(FractalKinds::Dragon, 100, 6);

        render(params, &RenderOptions::default(), &mut canvas);

        assert_eq!(pixel(&canvas, 200, 400), Colour::WHITE);
        assert_eq!(pixel(&canvas, 600, 400), Colour::WHITE);
    }
}
