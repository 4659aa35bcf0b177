use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::render::ports::canvas_surface::CanvasSurface;
use crate::core::colour_mapping::colour_map::ColourMap;
use crate::core::colour_mapping::escape_time::EscapeTimeColourMap;
use crate::core::colour_mapping::hsb::Hsb;
use crate::core::config::{DEFAULT_SEED, FERN_SAMPLES_PER_ITERATION};
use crate::core::data::draw_command::DrawCommand;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::render_parameters::RenderParameters;
use crate::core::fractals::barnsley::{fern_colour, generate_points, to_canvas};
use crate::core::fractals::dragon::dragon_curve;
use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::escape_time::variant::EscapeTimeVariant;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::koch::{self, snowflake_edges};
use crate::core::fractals::sierpinski::{self, root_triangle};

/// Where escape-time pixels are computed. Both produce identical output.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Execution {
    #[default]
    Sequential,
    Rayon,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub execution: Execution,
    /// Seed for the Barnsley fern's random source.
    pub seed: u64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            execution: Execution::default(),
            seed: DEFAULT_SEED,
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn with_execution(self, execution: Execution) -> Self {
        Self { execution, ..self }
    }

    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }
}

/// What a pass did to its surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct RenderStats {
    pub pixels_written: u64,
    pub commands_issued: u64,
    pub flushes: u32,
}

/// Runs one complete render pass of `params` onto `surface`.
///
/// The surface is cleared to black first. Escape-time fractals write every
/// pixel and flush once; vector fractals issue drawing commands and never
/// flush.
#[tracing::instrument(skip(surface))]
pub fn render(
    params: RenderParameters,
    options: &RenderOptions,
    surface: &mut impl CanvasSurface,
) -> RenderStats {
    surface.clear(Hsb::BLACK);

    let stats = match EscapeTimeVariant::from_kind(params.fractal_kind()) {
        Some(variant) => {
            render_escape_time(variant, params.max_iterations(), options.execution, surface)
        }
        None => {
            let mut stats = RenderStats::default();
            let (width, height) = (surface.width() as f64, surface.height() as f64);

            emit_vector_commands(params, options.seed, width, height, &mut |command| {
                surface.draw(&command);
                stats.commands_issued += 1;
            });

            stats
        }
    };

    tracing::debug!(
        pixels = stats.pixels_written,
        commands = stats.commands_issued,
        flushes = stats.flushes,
        "render pass complete"
    );

    stats
}

fn render_escape_time(
    variant: EscapeTimeVariant,
    max_iterations: u32,
    execution: Execution,
    surface: &mut impl CanvasSurface,
) -> RenderStats {
    let mut stats = RenderStats::default();

    if let Ok(pixel_rect) = PixelRect::new(surface.width(), surface.height()) {
        let algorithm = EscapeTimeAlgorithm::new(pixel_rect, variant, max_iterations);
        let outcomes = match execution {
            Execution::Sequential => generate_fractal(pixel_rect, &algorithm),
            Execution::Rayon => generate_fractal_rayon(pixel_rect, &algorithm),
        }
        .unwrap_or_else(|never| match never {});

        let colour_map = EscapeTimeColourMap::new(algorithm.max_iterations());
        for (pixel, outcome) in pixel_rect.points().zip(outcomes) {
            surface.set_pixel(pixel.x as u32, pixel.y as u32, colour_map.map(outcome));
            stats.pixels_written += 1;
        }
    }

    surface.flush();
    stats.flushes += 1;

    stats
}

/// Feeds the drawing commands of a vector fractal to `emit`, in draw order.
///
/// Escape-time kinds emit nothing.
pub fn emit_vector_commands(
    params: RenderParameters,
    seed: u64,
    width: f64,
    height: f64,
    emit: &mut impl FnMut(DrawCommand),
) {
    match params.fractal_kind() {
        FractalKinds::Sierpinski => sierpinski::subdivide(
            root_triangle(width, height),
            params.depth(),
            params.max_iterations(),
            emit,
        ),
        FractalKinds::Koch => {
            for edge in snowflake_edges(width, height) {
                koch::subdivide(edge, params.depth(), emit);
            }
        }
        FractalKinds::Dragon => emit(dragon_curve(width, height, params.depth())),
        FractalKinds::Barnsley => {
            let samples = u64::from(params.max_iterations()) * FERN_SAMPLES_PER_ITERATION;
            let colour = fern_colour();

            for sample in generate_points(StdRng::seed_from_u64(seed)).take(samples as usize) {
                emit(DrawCommand::Point {
                    at: to_canvas(sample.point, width, height),
                    colour,
                });
            }
        }
        FractalKinds::Mandelbrot | FractalKinds::Julia | FractalKinds::Newton => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::vec2::Vec2;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear(Hsb),
        Pixel(u32, u32, Hsb),
        Flush,
        Line(Vec2, Vec2),
        Polygon(Vec<Vec2>),
        Polyline(Vec<Vec2>),
        Point(Vec2),
    }

    #[derive(Debug)]
    struct RecordingSurface {
        width: u32,
        height: u32,
        calls: Vec<Call>,
    }

    impl RecordingSurface {
        fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                calls: Vec::new(),
            }
        }

        fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
            self.calls.iter().filter(|call| predicate(call)).count()
        }
    }

    impl CanvasSurface for RecordingSurface {
        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn clear(&mut self, colour: Hsb) {
            self.calls.push(Call::Clear(colour));
        }

        fn set_pixel(&mut self, x: u32, y: u32, colour: Hsb) {
            self.calls.push(Call::Pixel(x, y, colour));
        }

        fn flush(&mut self) {
            self.calls.push(Call::Flush);
        }

        fn draw_line(&mut self, from: Vec2, to: Vec2, _colour: Hsb) {
            self.calls.push(Call::Line(from, to));
        }

        fn draw_filled_polygon(&mut self, vertices: &[Vec2], _colour: Hsb) {
            self.calls.push(Call::Polygon(vertices.to_vec()));
        }

        fn draw_polyline(&mut self, points: &[Vec2], _colour: Hsb) {
            self.calls.push(Call::Polyline(points.to_vec()));
        }

        fn plot_point(&mut self, at: Vec2, _colour: Hsb) {
            self.calls.push(Call::Point(at));
        }
    }

    fn render_calls(params: RenderParameters, options: RenderOptions) -> Vec<Call> {
        let mut surface = RecordingSurface::new(40, 30);
        render(params, &options, &mut surface);
        surface.calls
    }

    #[test]
    fn test_pixel_fractal_writes_every_pixel_then_flushes_once() {
        for &variant in EscapeTimeVariant::ALL {
            let kind = match variant {
                EscapeTimeVariant::Mandelbrot => FractalKinds::Mandelbrot,
                EscapeTimeVariant::Julia => FractalKinds::Julia,
                EscapeTimeVariant::Newton => FractalKinds::Newton,
            };
            let mut surface = RecordingSurface::new(40, 30);

            let stats = render(
                RenderParameters::new(kind, 50, 1),
                &RenderOptions::default(),
                &mut surface,
            );

            assert_eq!(surface.calls.first(), Some(&Call::Clear(Hsb::BLACK)));
            assert_eq!(surface.calls.last(), Some(&Call::Flush));
            assert_eq!(surface.count(|c| matches!(c, Call::Flush)), 1);
            assert_eq!(surface.count(|c| matches!(c, Call::Pixel(..))), 40 * 30);
            assert_eq!(stats.pixels_written, 1200);
            assert_eq!(stats.flushes, 1);
        }
    }

    #[test]
    fn test_vector_fractals_never_flush() {
        for kind in [
            FractalKinds::Sierpinski,
            FractalKinds::Koch,
            FractalKinds::Dragon,
            FractalKinds::Barnsley,
        ] {
            let calls = render_calls(RenderParameters::new(kind, 10, 3), RenderOptions::default());

            assert_eq!(calls[0], Call::Clear(Hsb::BLACK));
            assert!(!calls.contains(&Call::Flush), "{kind} flushed");
            assert!(!calls.iter().any(|c| matches!(c, Call::Pixel(..))));
        }
    }

    #[test]
    fn test_vector_command_counts() {
        let params = RenderParameters::new;
        let options = RenderOptions::default();

        let mut surface = RecordingSurface::new(800, 800);
        let stats = render(params(FractalKinds::Sierpinski, 100, 3), &options, &mut surface);
        assert_eq!(stats.commands_issued, 27);
        assert_eq!(surface.count(|c| matches!(c, Call::Polygon(v) if v.len() == 3)), 27);

        let mut surface = RecordingSurface::new(800, 800);
        render(params(FractalKinds::Koch, 100, 2), &options, &mut surface);
        assert_eq!(surface.count(|c| matches!(c, Call::Line(..))), 48);

        let mut surface = RecordingSurface::new(800, 800);
        render(params(FractalKinds::Dragon, 100, 4), &options, &mut surface);
        assert_eq!(surface.count(|c| matches!(c, Call::Polyline(p) if p.len() == 17)), 1);

        let mut surface = RecordingSurface::new(800, 800);
        render(params(FractalKinds::Barnsley, 5, 1), &options, &mut surface);
        assert_eq!(surface.count(|c| matches!(c, Call::Point(..))), 500);
    }

    #[test]
    fn test_rerender_is_identical_for_deterministic_kinds() {
        for &kind in FractalKinds::ALL.iter().filter(|kind| kind.is_deterministic()) {
            let params = RenderParameters::new(kind, 30, 3);
            let options = RenderOptions::default().with_seed(1);

            let first = render_calls(params, options);
            let second = render_calls(params, options.with_seed(2));

            assert_eq!(first, second, "{kind} differed between passes");
        }
    }

    #[test]
    fn test_fern_depends_only_on_seed() {
        let params = RenderParameters::new(FractalKinds::Barnsley, 20, 1);

        let first = render_calls(params, RenderOptions::default().with_seed(42));
        let second = render_calls(params, RenderOptions::default().with_seed(42));
        let other = render_calls(params, RenderOptions::default().with_seed(43));

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_rayon_matches_sequential() {
        for kind in [FractalKinds::Mandelbrot, FractalKinds::Julia, FractalKinds::Newton] {
            let params = RenderParameters::new(kind, 80, 1);

            let sequential = render_calls(params, RenderOptions::default());
            let rayon = render_calls(
                params,
                RenderOptions::default().with_execution(Execution::Rayon),
            );

            assert_eq!(sequential, rayon);
        }
    }

    #[test]
    fn test_zero_sized_surface_still_flushes_once() {
        let mut surface = RecordingSurface::new(0, 0);

        let stats = render(RenderParameters::default(), &RenderOptions::default(), &mut surface);

        assert_eq!(surface.calls, vec![Call::Clear(Hsb::BLACK), Call::Flush]);
        assert_eq!(stats.pixels_written, 0);
    }

    #[test]
    fn test_pixel_kinds_emit_no_vector_commands() {
        let mut count = 0;

        emit_vector_commands(RenderParameters::default(), 0, 800.0, 800.0, &mut |_| count += 1);

        assert_eq!(count, 0);
    }
}
