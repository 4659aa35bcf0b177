use crate::core::colour_mapping::hsb::Hsb;
use crate::core::data::vec2::Vec2;

/// A vector primitive in device coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line { from: Vec2, to: Vec2, colour: Hsb },
    FilledPolygon { vertices: Vec<Vec2>, colour: Hsb },
    Polyline { points: Vec<Vec2>, colour: Hsb },
    Point { at: Vec2, colour: Hsb },
}

impl DrawCommand {
    #[must_use]
    pub fn colour(&self) -> Hsb {
        match self {
            Self::Line { colour, .. }
            | Self::FilledPolygon { colour, .. }
            | Self::Polyline { colour, .. }
            | Self::Point { colour, .. } => *colour,
        }
    }
}
