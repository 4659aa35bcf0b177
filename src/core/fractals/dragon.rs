//! Heighway dragon built by repeatedly folding a polyline at its midpoints.

use crate::core::colour_mapping::hsb::Hsb;
use crate::core::data::draw_command::DrawCommand;
use crate::core::data::vec2::Vec2;

#[must_use]
pub fn initial_polyline(width: f64, height: f64) -> Vec<Vec2> {
    vec![
        Vec2::new(width / 4.0, height / 2.0),
        Vec2::new(3.0 * width / 4.0, height / 2.0),
    ]
}

/// One fold: every segment gains a corner point, alternating sides.
#[must_use]
pub fn fold_pass(points: &[Vec2]) -> Vec<Vec2> {
    let Some(&last) = points.last() else {
        return Vec::new();
    };

    let mut folded = Vec::with_capacity(points.len() * 2 - 1);
    for (j, pair) in points.windows(2).enumerate() {
        let (p1, p2) = (pair[0], pair[1]);
        let mid = p1.midpoint(p2);
        let delta = p2 - p1;

        let corner = if j % 2 == 0 {
            Vec2::new(mid.x + delta.y / 2.0, mid.y - delta.x / 2.0)
        } else {
            Vec2::new(mid.x - delta.y / 2.0, mid.y + delta.x / 2.0)
        };

        folded.push(p1);
        folded.push(corner);
    }
    folded.push(last);

    folded
}

#[must_use]
pub fn fold_polyline(points: Vec<Vec2>, passes: u32) -> Vec<Vec2> {
    (0..passes).fold(points, |points, _| fold_pass(&points))
}

#[must_use]
pub fn dragon_curve(width: f64, height: f64, depth: u32) -> DrawCommand {
    DrawCommand::Polyline {
        points: fold_polyline(initial_polyline(width, height), depth),
        colour: Hsb::WHITE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_count_after_passes() {
        for depth in 0..=10 {
            let points = fold_polyline(initial_polyline(800.0, 800.0), depth);

            assert_eq!(points.len(), 2usize.pow(depth) + 1);
        }
    }

    #[test]
    fn test_endpoints_never_move() {
        let start = initial_polyline(800.0, 600.0);
        let points = fold_polyline(start.clone(), 9);

        assert_eq!(points[0], start[0]);
        assert_eq!(points[points.len() - 1], start[1]);
    }

    #[test]
    fn test_first_fold_raises_corner_above_midpoint() {
        let points = fold_pass(&initial_polyline(800.0, 800.0));

        assert_eq!(
            points,
            vec![
                Vec2::new(200.0, 400.0),
                Vec2::new(400.0, 200.0),
                Vec2::new(600.0, 400.0),
            ]
        );
    }

    #[test]
    fn test_second_fold_alternates_sides() {
        let points = fold_polyline(initial_polyline(800.0, 800.0), 2);

        assert_eq!(
            points,
            vec![
                Vec2::new(200.0, 400.0),
                Vec2::new(200.0, 200.0),
                Vec2::new(400.0, 200.0),
                Vec2::new(400.0, 400.0),
                Vec2::new(600.0, 400.0),
            ]
        );
    }

    #[test]
    fn test_folding_an_empty_polyline_stays_empty() {
        assert!(fold_pass(&[]).is_empty());
    }

    #[test]
    fn test_dragon_is_a_white_polyline() {
        let command = dragon_curve(800.0, 800.0, 3);

        let DrawCommand::Polyline { points, colour } = command else {
            panic!("expected a polyline");
        };
        assert_eq!(points.len(), 9);
        assert_eq!(colour, Hsb::WHITE);
    }
}
