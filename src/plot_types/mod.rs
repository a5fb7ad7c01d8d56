// Plot types module

pub mod bar;
pub mod histogram;

pub use bar::BarChart;
pub use histogram::Histogram;

use crate::data_types::{LegendIcon, PlotMarkers, Size};
use crate::error::{ChartError, Result};
use crate::rendering::Renderer;

/// Trait implemented by every chart type.
///
/// A draw call is `layout` followed by `render`. `layout` recomputes all
/// derived state (scale, origin, pixel caches) from the raw data; `render`
/// only reads it.
pub trait PlotRenderer: Send + Sync {
    /// Computes scale and tick markers for a plot area of `size`.
    fn layout(&mut self, size: Size) -> Result<PlotMarkers>;

    /// Issues drawing commands using the state of the last `layout` call.
    fn render(&self, markers: &PlotMarkers, size: Size, renderer: &mut dyn Renderer);

    /// Legend entries, primary series first.
    fn legend_labels(&self) -> Vec<(String, LegendIcon)>;

    fn draw(&mut self, size: Size, renderer: &mut dyn Renderer) -> Result<PlotMarkers> {
        let markers = self.layout(size)?;
        self.render(&markers, size, renderer);
        Ok(markers)
    }
}

pub(crate) fn check_plot_size(size: Size) -> Result<()> {
    let valid = |v: f32| v.is_finite() && v > 0.0;
    if valid(size.width) && valid(size.height) {
        Ok(())
    } else {
        Err(ChartError::InvalidPlotSize {
            width: size.width,
            height: size.height,
        })
    }
}
