use serde::{Deserialize, Serialize};

use super::plot_configs::Color;

/// Direction in which bars grow. Vertical bars put the categories on the x
/// axis and the values on the y axis; horizontal bars swap the two.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Tick positions and labels produced by a layout pass.
///
/// The four vectors are parallel per axis: `x_markers[i]` is labelled by
/// `x_markers_text[i]`. Value-axis ticks come out as an upward walk from the
/// origin followed by a downward walk, so they are not sorted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotMarkers {
    pub x_markers: Vec<f32>,
    pub x_markers_text: Vec<String>,
    pub y_markers: Vec<f32>,
    pub y_markers_text: Vec<String>,
}

impl PlotMarkers {
    pub fn is_empty(&self) -> bool {
        self.x_markers.is_empty() && self.y_markers.is_empty()
    }

    pub fn push_x(&mut self, position: f32, text: String) {
        self.x_markers.push(position);
        self.x_markers_text.push(text);
    }

    pub fn push_y(&mut self, position: f32, text: String) {
        self.y_markers.push(position);
        self.y_markers_text.push(text);
    }
}

/// Icon drawn next to a legend label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LegendIcon {
    Square(Color),
}
