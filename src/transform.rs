//! Orientation-aware projection between (category, value) coordinates and
//! plot-local x/y pixels.

use crate::data_types::{Orientation, PlotMarkers, Point, Rect, Size};

/// Maps the categorical and value axes onto x/y for one orientation.
///
/// Layout code works purely in (category, value) terms and lets this type
/// decide which screen axis each one lands on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisMapping {
    pub orientation: Orientation,
    /// Pixel length of the axis the categories are spread along
    pub category_length: f32,
    /// Pixel length of the axis the values grow along
    pub value_length: f32,
}

impl AxisMapping {
    pub fn new(orientation: Orientation, size: Size) -> Self {
        let (category_length, value_length) = match orientation {
            Orientation::Vertical => (size.width, size.height),
            Orientation::Horizontal => (size.height, size.width),
        };
        Self {
            orientation,
            category_length,
            value_length,
        }
    }

    pub fn point(&self, category: f32, value: f32) -> Point {
        match self.orientation {
            Orientation::Vertical => Point::new(category, value),
            Orientation::Horizontal => Point::new(value, category),
        }
    }

    /// Builds a rectangle from extents along each logical axis. Extents may be
    /// negative; call [`Rect::normalized`] before handing it to a renderer.
    pub fn rect(
        &self,
        category_start: f32,
        category_extent: f32,
        value_start: f32,
        value_extent: f32,
    ) -> Rect {
        let origin = self.point(category_start, value_start);
        let size = match self.orientation {
            Orientation::Vertical => Size::new(category_extent, value_extent),
            Orientation::Horizontal => Size::new(value_extent, category_extent),
        };
        Rect::new(origin, size)
    }

    pub fn push_category_marker(&self, markers: &mut PlotMarkers, position: f32, text: String) {
        match self.orientation {
            Orientation::Vertical => markers.push_x(position, text),
            Orientation::Horizontal => markers.push_y(position, text),
        }
    }

    pub fn push_value_marker(&self, markers: &mut PlotMarkers, position: f32, text: String) {
        match self.orientation {
            Orientation::Vertical => markers.push_y(position, text),
            Orientation::Horizontal => markers.push_x(position, text),
        }
    }

    /// Tick positions along the category axis, in emission order.
    pub fn category_markers<'a>(&self, markers: &'a PlotMarkers) -> &'a [f32] {
        match self.orientation {
            Orientation::Vertical => &markers.x_markers,
            Orientation::Horizontal => &markers.y_markers,
        }
    }
}
