//! Sierpinski triangle by recursive midpoint subdivision.

use crate::core::colour_mapping::hsb::Hsb;
use crate::core::data::draw_command::DrawCommand;
use crate::core::data::vec2::Vec2;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
}

impl Triangle {
    #[must_use]
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { a, b, c }
    }

    #[must_use]
    pub fn vertices(&self) -> [Vec2; 3] {
        [self.a, self.b, self.c]
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        ((self.b.x - self.a.x) * (self.c.y - self.a.y) - (self.c.x - self.a.x) * (self.b.y - self.a.y))
            .abs()
            / 2.0
    }

    /// The corner triangles left after removing the middle one.
    #[must_use]
    pub fn corners(&self) -> [Triangle; 3] {
        let ab = self.a.midpoint(self.b);
        let bc = self.b.midpoint(self.c);
        let ca = self.c.midpoint(self.a);

        [
            Triangle::new(self.a, ab, ca),
            Triangle::new(ab, self.b, bc),
            Triangle::new(ca, bc, self.c),
        ]
    }
}

/// Apex-up triangle spanning 80% of the smaller canvas side, centred.
#[must_use]
pub fn root_triangle(width: f64, height: f64) -> Triangle {
    let size = width.min(height) * 0.8;
    let centre_x = width / 2.0;
    let centre_y = height / 2.0;

    Triangle::new(
        Vec2::new(centre_x, centre_y - size / 2.0),
        Vec2::new(centre_x + size / 2.0, centre_y + size / 2.0),
        Vec2::new(centre_x - size / 2.0, centre_y + size / 2.0),
    )
}

/// Hue is keyed on the remaining depth, which is always zero at a leaf.
fn leaf_colour(depth: u32, max_iterations: u32) -> Hsb {
    Hsb::new(depth as f64 / max_iterations.max(1) as f64, 1.0, 1.0)
}

/// Emits one filled triangle per leaf, `3^depth` in total.
pub fn subdivide(
    triangle: Triangle,
    depth: u32,
    max_iterations: u32,
    emit: &mut impl FnMut(DrawCommand),
) {
    if depth == 0 {
        emit(DrawCommand::FilledPolygon {
            vertices: triangle.vertices().to_vec(),
            colour: leaf_colour(depth, max_iterations),
        });
        return;
    }

    for corner in triangle.corners() {
        subdivide(corner, depth - 1, max_iterations, emit);
    }
}

#[must_use]
pub fn sierpinski(width: f64, height: f64, depth: u32, max_iterations: u32) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(3usize.pow(depth));
    subdivide(
        root_triangle(width, height),
        depth,
        max_iterations,
        &mut |command| commands.push(command),
    );
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_count_is_three_to_the_depth() {
        for depth in 0..=6 {
            assert_eq!(sierpinski(800.0, 800.0, depth, 100).len(), 3usize.pow(depth));
        }
    }

    #[test]
    fn test_root_triangle_is_centred() {
        let triangle = root_triangle(800.0, 800.0);

        assert_eq!(triangle.a, Vec2::new(400.0, 80.0));
        assert_eq!(triangle.b, Vec2::new(720.0, 720.0));
        assert_eq!(triangle.c, Vec2::new(80.0, 720.0));
    }

    #[test]
    fn test_root_triangle_uses_smaller_side() {
        let triangle = root_triangle(1000.0, 500.0);

        assert_eq!(triangle.a, Vec2::new(500.0, 50.0));
        assert_eq!(triangle.b, Vec2::new(700.0, 450.0));
    }

    #[test]
    fn test_depth_zero_emits_the_root_triangle() {
        let commands = sierpinski(800.0, 800.0, 0, 100);

        assert_eq!(
            commands,
            vec![DrawCommand::FilledPolygon {
                vertices: root_triangle(800.0, 800.0).vertices().to_vec(),
                colour: Hsb::new(0.0, 1.0, 1.0),
            }]
        );
    }

    #[test]
    fn test_leaves_cover_three_quarters_of_the_parent_per_level() {
        let root = root_triangle(800.0, 800.0);
        let depth = 4;

        let leaf_area: f64 = sierpinski(800.0, 800.0, depth, 100)
            .iter()
            .map(|command| match command {
                DrawCommand::FilledPolygon { vertices, .. } => {
                    Triangle::new(vertices[0], vertices[1], vertices[2]).area()
                }
                other => panic!("unexpected command {other:?}"),
            })
            .sum();

        let expected = root.area() * 0.75f64.powi(depth as i32);
        assert!((leaf_area - expected).abs() < 1e-6);
    }

    #[test]
    fn test_first_leaf_touches_the_apex() {
        let commands = sierpinski(800.0, 800.0, 3, 100);

        let DrawCommand::FilledPolygon { vertices, .. } = &commands[0] else {
            panic!("expected a filled polygon");
        };
        assert_eq!(vertices[0], root_triangle(800.0, 800.0).a);
    }

    #[test]
    fn test_leaves_are_red() {
        for command in sierpinski(800.0, 800.0, 2, 37) {
            assert_eq!(command.colour(), Hsb::new(0.0, 1.0, 1.0));
        }
    }
}
