// Rendering seam between the layout engine and a drawing backend

use crate::data_types::{Color, Hatching, Point, Rect};

/// Drawing backend. Coordinates are plot-local pixels with (0, 0) at the
/// bottom-left corner of the plot area and y growing upwards.
pub trait Renderer {
    fn draw_solid_rect(&mut self, rect: Rect, fill_color: Color, hatch_pattern: Hatching);

    fn draw_polyline(&mut self, points: &[Point], thickness: f32, color: Color);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    SolidRect {
        rect: Rect,
        fill_color: Color,
        hatch_pattern: Hatching,
    },
    Polyline {
        points: Vec<Point>,
        thickness: f32,
        color: Color,
    },
}

/// Renderer that keeps every command it receives, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    pub commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rects(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::SolidRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn polylines(&self) -> Vec<&[Point]> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Polyline { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn draw_solid_rect(&mut self, rect: Rect, fill_color: Color, hatch_pattern: Hatching) {
        self.commands.push(DrawCommand::SolidRect {
            rect,
            fill_color,
            hatch_pattern,
        });
    }

    fn draw_polyline(&mut self, points: &[Point], thickness: f32, color: Color) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            thickness,
            color,
        });
    }
}
