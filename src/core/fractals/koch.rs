//! Koch curve and snowflake.

use std::f64::consts::FRAC_PI_3;

use crate::core::colour_mapping::hsb::Hsb;
use crate::core::data::draw_command::DrawCommand;
use crate::core::data::vec2::Vec2;
use crate::core::fractals::sierpinski::root_triangle;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

impl Segment {
    #[must_use]
    pub fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.from.distance_to(self.to)
    }

    /// The four segments that replace this one: the outer thirds plus the two
    /// sides of a bump raised on the middle third, rotated -60° from the
    /// segment direction.
    #[must_use]
    pub fn split(&self) -> [Segment; 4] {
        let third = (self.to - self.from) * (1.0 / 3.0);
        let one_third = self.from + third;
        let two_thirds = self.from + third * 2.0;

        let angle = (self.to - self.from).angle() - FRAC_PI_3;
        let length = third.length();
        let apex = one_third + Vec2::new(angle.cos(), angle.sin()) * length;

        [
            Segment::new(self.from, one_third),
            Segment::new(one_third, apex),
            Segment::new(apex, two_thirds),
            Segment::new(two_thirds, self.to),
        ]
    }
}

/// Emits one line per leaf segment, `4^depth` in total.
pub fn subdivide(segment: Segment, depth: u32, emit: &mut impl FnMut(DrawCommand)) {
    if depth == 0 {
        emit(DrawCommand::Line {
            from: segment.from,
            to: segment.to,
            colour: Hsb::WHITE,
        });
        return;
    }

    for part in segment.split() {
        subdivide(part, depth - 1, emit);
    }
}

/// Edges of the snowflake's starting triangle, walked apex → right → left.
#[must_use]
pub fn snowflake_edges(width: f64, height: f64) -> [Segment; 3] {
    let [a, b, c] = root_triangle(width, height).vertices();

    [Segment::new(a, b), Segment::new(b, c), Segment::new(c, a)]
}

#[must_use]
pub fn snowflake(width: f64, height: f64, depth: u32) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(3 * 4usize.pow(depth));
    for edge in snowflake_edges(width, height) {
        subdivide(edge, depth, &mut |command| commands.push(command));
    }
    commands
}
