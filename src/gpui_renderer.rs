//! [`Renderer`] backend painting into a GPUI window.

use gpui::{fill, point, px, Bounds, Hsla, PathBuilder, Pixels, Rgba, Window};

use crate::data_types::{Color, Hatching, Point, Rect};
use crate::rendering::Renderer;

/// Paints plot-local geometry into `bounds`, flipping y so that plot (0, 0)
/// lands on the bottom-left corner of the bounds.
///
/// Hatch patterns are not drawn: every rectangle is a solid fill.
pub struct GpuiRenderer<'a> {
    pub window: &'a mut Window,
    pub bounds: Bounds<Pixels>,
}

impl<'a> GpuiRenderer<'a> {
    pub fn new(window: &'a mut Window, bounds: Bounds<Pixels>) -> Self {
        Self { window, bounds }
    }

    fn to_screen(&self, p: Point) -> gpui::Point<Pixels> {
        let bottom = self.bounds.origin.y + self.bounds.size.height;
        point(self.bounds.origin.x + px(p.x), bottom - px(p.y))
    }
}

fn to_hsla(color: Color) -> Hsla {
    Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
    .into()
}

impl Renderer for GpuiRenderer<'_> {
    fn draw_solid_rect(&mut self, rect: Rect, fill_color: Color, hatch_pattern: Hatching) {
        let rect = rect.normalized();
        // Top-left in screen space is the plot-space top edge.
        let top_left = self.to_screen(Point::new(rect.origin.x, rect.max_y()));
        let bounds = Bounds::new(
            top_left,
            gpui::Size::new(px(rect.size.width), px(rect.size.height)),
        );
        if hatch_pattern != Hatching::None {
            tracing::debug!(?hatch_pattern, "hatching not supported by the gpui backend");
        }
        self.window.paint_quad(fill(bounds, to_hsla(fill_color)));
    }

    fn draw_polyline(&mut self, points: &[Point], thickness: f32, color: Color) {
        let mut iter = points.iter();
        let Some(first) = iter.next() else {
            return;
        };
        let mut builder = PathBuilder::stroke(px(thickness));
        builder.move_to(self.to_screen(*first));
        for p in iter {
            builder.line_to(self.to_screen(*p));
        }
        if let Ok(path) = builder.build() {
            self.window.paint_path(path, to_hsla(color));
        }
    }
}
