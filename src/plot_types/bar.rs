use super::{check_plot_size, PlotRenderer};
use crate::data_types::{
    BarPlotConfig, Categorical, Color, Hatching, LegendIcon, Numeric, Orientation, Pair,
    PlotMarkers, Series, Size,
};
use crate::error::{ChartError, Result};
use crate::geometry::{build_bar_geometry, BarRect, BarSlots};
use crate::rendering::Renderer;
use crate::scales::{category_slot_width, category_ticks, ValueExtent, ValueScale};
use crate::transform::AxisMapping;
use crate::utils::label_formatter::format_rounded;

/// State left behind by the last layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarLayoutState {
    pub value_scale: ValueScale,
    pub slot_width: f32,
    pub orientation: Orientation,
}

/// Bar chart with optional stacked layers.
pub struct BarChart<X, Y> {
    pub config: BarPlotConfig,
    series: Series<X, Y>,
    stack_series: Vec<Series<X, Y>>,
    state: Option<BarLayoutState>,
    buffer: parking_lot::Mutex<Vec<BarRect>>,
}

impl<X: Categorical, Y: Numeric> BarChart<X, Y> {
    pub fn new() -> Self {
        Self::with_config(BarPlotConfig::default())
    }

    pub fn with_config(config: BarPlotConfig) -> Self {
        Self {
            config,
            series: Series::default(),
            stack_series: Vec::new(),
            state: None,
            buffer: parking_lot::Mutex::new(Vec::new()),
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    /// Changing orientation drops the cached scale until the next layout.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.config.orientation != orientation {
            self.config.orientation = orientation;
            self.state = None;
        }
    }

    /// Replaces the primary series. Stack layers whose point count no longer
    /// matches are logged and dropped.
    pub fn set_series(&mut self, series: Series<X, Y>) {
        self.series = series;
        self.state = None;

        let mut stacks = std::mem::take(&mut self.stack_series);
        stacks.retain(|stack| {
            let keep = self.accepts_stack(stack.len());
            if !keep {
                self.reject_stack(stack.label(), stack.len());
            }
            keep
        });
        self.stack_series = stacks;
    }

    pub fn add_series_values(
        &mut self,
        values: Vec<Pair<X, Y>>,
        label: impl Into<String>,
        color: Color,
        hatch_pattern: Hatching,
        orientation: Orientation,
    ) {
        self.set_series(Series::new(values, label, color, hatch_pattern));
        self.set_orientation(orientation);
    }

    /// Builds the primary series from parallel category and value vectors.
    pub fn add_series(
        &mut self,
        x: Vec<X>,
        y: Vec<Y>,
        label: impl Into<String>,
        color: Color,
        hatch_pattern: Hatching,
        orientation: Orientation,
    ) -> Result<()> {
        if x.len() != y.len() {
            return Err(ChartError::InvalidInput(format!(
                "{} categories but {} values",
                x.len(),
                y.len()
            )));
        }
        let values = x.into_iter().zip(y).map(|(x, y)| Pair::new(x, y)).collect();
        self.add_series_values(values, label, color, hatch_pattern, orientation);
        Ok(())
    }

    /// Appends a stack layer. Layers whose point count differs from the
    /// primary series (or any layer while the primary is empty) are logged
    /// and dropped. Returns whether the layer was kept.
    pub fn add_stack_series(&mut self, series: Series<X, Y>) -> bool {
        if !self.accepts_stack(series.len()) {
            self.reject_stack(series.label(), series.len());
            return false;
        }
        self.stack_series.push(series);
        self.state = None;
        true
    }

    /// Stacks `y` on the primary series, reusing its categories.
    pub fn add_stack_values(
        &mut self,
        y: Vec<Y>,
        label: impl Into<String>,
        color: Color,
        hatch_pattern: Hatching,
    ) -> bool {
        let label = label.into();
        if !self.accepts_stack(y.len()) {
            self.reject_stack(&label, y.len());
            return false;
        }
        let values = self
            .series
            .values
            .iter()
            .zip(y)
            .map(|(p, y)| Pair::new(p.x.clone(), y))
            .collect();
        self.add_stack_series(Series::new(values, label, color, hatch_pattern))
    }

    fn accepts_stack(&self, points: usize) -> bool {
        !self.series.is_empty() && self.series.len() == points
    }

    fn reject_stack(&self, label: &str, points: usize) {
        tracing::warn!(
            label,
            stack_points = points,
            series_points = self.series.len(),
            "Stack point count does not match the series point count, dropping stack"
        );
    }

    pub fn series(&self) -> &Series<X, Y> {
        &self.series
    }

    pub fn stack_series(&self) -> &[Series<X, Y>] {
        &self.stack_series
    }

    pub fn layout_state(&self) -> Option<&BarLayoutState> {
        self.state.as_ref()
    }

    /// Rectangles `render` would draw for these markers, in draw order.
    pub fn geometry(&self, markers: &PlotMarkers, size: Size) -> Vec<BarRect> {
        let mut out = Vec::with_capacity(self.series.len() * (self.stack_series.len() + 1));
        self.build_geometry(markers, size, &mut out);
        out
    }

    fn build_geometry(&self, markers: &PlotMarkers, size: Size, out: &mut Vec<BarRect>) {
        let Some(state) = self.state else {
            out.clear();
            return;
        };
        let mapping = AxisMapping::new(state.orientation, size);
        let slots = BarSlots {
            mapping,
            slot_width: state.slot_width,
            space: self.config.space,
            origin: state.value_scale.origin,
        };
        build_bar_geometry(
            &slots,
            mapping.category_markers(markers),
            &self.series,
            &self.stack_series,
            out,
        );
    }
}

impl<X: Categorical, Y: Numeric> Default for BarChart<X, Y> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X: Categorical, Y: Numeric> PlotRenderer for BarChart<X, Y> {
    fn layout(&mut self, size: Size) -> Result<PlotMarkers> {
        check_plot_size(size)?;
        let mut markers = PlotMarkers::default();
        self.state = None;

        if self.series.is_empty() {
            return Ok(markers);
        }

        let orientation = self.config.orientation;
        let mapping = AxisMapping::new(orientation, size);
        let count = self.series.len();
        let slot_width = category_slot_width(mapping.category_length, count);

        let extent = ValueExtent::from_series(
            &self.series.values,
            self.stack_series.iter().map(|s| s.values.as_slice()),
        );
        let value_scale = ValueScale::compute(
            extent,
            mapping.value_length,
            self.config.far_margin_pct,
            self.config.max_divisions,
        );

        for tick in value_scale.ticks() {
            mapping.push_value_marker(&mut markers, tick.position, format_rounded(tick.value));
        }
        for (position, pair) in category_ticks(slot_width, count)
            .into_iter()
            .zip(&self.series.values)
        {
            mapping.push_category_marker(&mut markers, position, pair.x.label());
        }

        self.series.rescale(value_scale.scale, value_scale.origin);
        for stack in self.stack_series.iter_mut() {
            stack.rescale(value_scale.scale, value_scale.origin);
        }

        tracing::debug!(
            ?orientation,
            minimum = extent.minimum,
            maximum = extent.maximum,
            scale = value_scale.scale,
            origin = value_scale.origin,
            slot_width,
            "bar chart layout"
        );

        self.state = Some(BarLayoutState {
            value_scale,
            slot_width,
            orientation,
        });
        Ok(markers)
    }

    fn render(&self, markers: &PlotMarkers, size: Size, renderer: &mut dyn Renderer) {
        let mut buffer = self.buffer.lock();
        self.build_geometry(markers, size, &mut buffer);
        for bar in buffer.iter() {
            renderer.draw_solid_rect(bar.rect, bar.fill_color, bar.hatch_pattern);
        }
    }

    fn legend_labels(&self) -> Vec<(String, LegendIcon)> {
        std::iter::once(&self.series)
            .chain(self.stack_series.iter())
            .map(|s| (s.label().to_string(), LegendIcon::Square(s.color())))
            .collect()
    }
}
