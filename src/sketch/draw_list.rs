use crate::color::Color;
use crate::floorplan::Segment;
use crate::math::Point2;

use super::Grid;

/// Radius of the endpoint handles.
pub const HANDLE_RADIUS: f64 = 5.0;

/// Font used for length labels.
pub const LABEL_FONT: &str = "12px Arial";

/// A single canvas drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point2,
        to: Point2,
        color: Color,
    },
    Circle {
        center: Point2,
        radius: f64,
        color: Color,
    },
    Text {
        position: Point2,
        text: String,
        font: &'static str,
        color: Color,
    },
}

/// Everything needed to repaint the canvas, in paint order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Grid first, then for each stroke: the line, both handles, and its length label.
    #[must_use]
    pub fn build<'a, I>(grid: &Grid, segments: I) -> Self
    where
        I: IntoIterator<Item = &'a Segment>,
    {
        let mut commands: Vec<DrawCommand> = grid
            .lines()
            .into_iter()
            .map(|(from, to)| DrawCommand::Line {
                from,
                to,
                color: Color::GRAY,
            })
            .collect();

        for segment in segments {
            commands.push(DrawCommand::Line {
                from: segment.start,
                to: segment.end,
                color: segment.color,
            });
            for center in [segment.start, segment.end] {
                commands.push(DrawCommand::Circle {
                    center,
                    radius: HANDLE_RADIUS,
                    color: Color::BLUE,
                });
            }
            commands.push(DrawCommand::Text {
                position: segment.midpoint(),
                text: format!("{:.2}", segment.length()),
                font: LABEL_FONT,
                color: segment.color,
            });
        }

        Self { commands }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
