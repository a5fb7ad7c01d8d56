use super::{check_plot_size, PlotRenderer};
use crate::data_types::{
    Color, HistogramConfig, HistogramSeries, HistogramType, LegendIcon, PlotMarkers, Point, Rect,
    Size,
};
use crate::error::{ChartError, Result};
use crate::rendering::Renderer;
use crate::scales::{nice_step, Tick, ValueExtent, ValueScale};
use crate::utils::label_formatter::{format_numeric, format_rounded};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistogramLayoutState {
    pub value_scale: ValueScale,
    /// Data range covered by the bins
    pub minimum_x: f64,
    pub maximum_x: f64,
    pub bin_width: f32,
}

/// Histogram of one or more stacked sample sets sharing the same bins.
pub struct Histogram {
    pub config: HistogramConfig,
    series: Option<HistogramSeries>,
    stack_series: Vec<HistogramSeries>,
    state: Option<HistogramLayoutState>,
}

impl Histogram {
    pub fn new() -> Self {
        Self::with_config(HistogramConfig::default())
    }

    pub fn with_config(config: HistogramConfig) -> Self {
        Self {
            config,
            series: None,
            stack_series: Vec::new(),
            state: None,
        }
    }

    /// Replaces the primary sample set.
    pub fn add_series(
        &mut self,
        data: Vec<f64>,
        label: impl Into<String>,
        color: Color,
    ) -> Result<()> {
        let series = Self::make_series(data, label, color, self.config.histogram_type)?;
        self.series = Some(series);
        self.rebin();
        Ok(())
    }

    /// Adds a sample set stacked on top of the existing ones. Ignored (with a
    /// warning) when there is no primary series yet.
    pub fn add_stack_series(
        &mut self,
        data: Vec<f64>,
        label: impl Into<String>,
        color: Color,
    ) -> Result<bool> {
        let series = Self::make_series(data, label, color, self.config.histogram_type)?;
        if self.series.is_none() {
            tracing::warn!(
                label = series.style.label.as_str(),
                "histogram has no primary series, dropping stack"
            );
            return Ok(false);
        }
        self.stack_series.push(series);
        self.rebin();
        Ok(true)
    }

    fn make_series(
        data: Vec<f64>,
        label: impl Into<String>,
        color: Color,
        histogram_type: HistogramType,
    ) -> Result<HistogramSeries> {
        let label = label.into();
        if !data.iter().any(|v| v.is_finite()) {
            return Err(ChartError::EmptyHistogram(label));
        }
        let mut series = HistogramSeries::new(data, label, color);
        series.histogram_type = histogram_type;
        Ok(series)
    }

    pub fn series(&self) -> Option<&HistogramSeries> {
        self.series.as_ref()
    }

    pub fn stack_series(&self) -> &[HistogramSeries] {
        &self.stack_series
    }

    pub fn layout_state(&self) -> Option<&HistogramLayoutState> {
        self.state.as_ref()
    }

    fn all_series(&self) -> impl Iterator<Item = &HistogramSeries> {
        self.series.iter().chain(self.stack_series.iter())
    }

    /// Recounts every series over the shared data range.
    pub fn rebin(&mut self) {
        let (minimum, maximum) = self
            .all_series()
            .flat_map(|s| s.data.iter().copied())
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if minimum > maximum {
            return;
        }

        let bins = self.config.bins;
        let normalized = self.config.normalized;
        let histogram_type = self.config.histogram_type;
        for series in self.series.iter_mut().chain(self.stack_series.iter_mut()) {
            series.compute_bins(minimum, maximum, bins, normalized);
            series.histogram_type = histogram_type;
        }
    }

    /// Per-bin totals of all layers up to and including `layers`.
    fn cumulative(&self, layers: usize) -> Vec<f64> {
        let mut totals: Vec<f64> = Vec::new();
        for series in self.all_series().take(layers) {
            if totals.len() < series.bin_frequency.len() {
                totals.resize(series.bin_frequency.len(), 0.0);
            }
            for (total, f) in totals.iter_mut().zip(&series.bin_frequency) {
                *total += f;
            }
        }
        totals
    }

    fn x_ticks(&self, minimum: f64, maximum: f64, width: f32) -> Vec<Tick> {
        let span = maximum - minimum;
        let max_divisions = self.config.max_divisions.max(2);
        let step = nice_step(span, max_divisions - 1);
        let px_per_unit = width as f64 / span;

        let mut ticks = Vec::new();
        let mut k = (minimum / step - 1e-9).ceil();
        loop {
            let value = k * step;
            if value > maximum + step * 1e-9 || ticks.len() >= max_divisions {
                break;
            }
            ticks.push(Tick {
                position: ((value - minimum) * px_per_unit) as f32,
                value,
            });
            k += 1.0;
        }
        ticks
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotRenderer for Histogram {
    fn layout(&mut self, size: Size) -> Result<PlotMarkers> {
        check_plot_size(size)?;
        let mut markers = PlotMarkers::default();
        self.state = None;

        if self.series.is_none() {
            return Ok(markers);
        }
        self.rebin();

        let Some((minimum_x, interval, bins)) = self
            .series
            .as_ref()
            .and_then(|s| Some((s.minimum_x?, s.bin_interval?, s.bins)))
        else {
            return Ok(markers);
        };
        let maximum_x = minimum_x + interval * bins as f64;

        let layers = self.stack_series.len() + 1;
        let totals = self.cumulative(layers);
        let highest = totals.iter().copied().fold(0.0, f64::max);

        let value_scale = ValueScale::compute(
            ValueExtent::new(0.0, highest),
            size.height,
            self.config.far_margin_pct,
            self.config.max_divisions,
        );
        for tick in value_scale.ticks() {
            let text = if self.config.normalized {
                format_numeric(value_scale.to_data(tick.position))
            } else {
                format_rounded(tick.value)
            };
            markers.push_y(tick.position, text);
        }
        for tick in self.x_ticks(minimum_x, maximum_x, size.width) {
            markers.push_x(tick.position, format_numeric(tick.value));
        }

        for layer in 0..layers {
            let scaled: Vec<f32> = self
                .cumulative(layer + 1)
                .into_iter()
                .map(|total| value_scale.to_pixels(total))
                .collect();
            let series = if layer == 0 {
                self.series.as_mut()
            } else {
                self.stack_series.get_mut(layer - 1)
            };
            if let Some(series) = series {
                series.scaled_bin_frequency = scaled;
            }
        }

        let bin_width = size.width / bins as f32;
        tracing::debug!(
            bins,
            minimum_x,
            maximum_x,
            highest,
            scale = value_scale.scale,
            "histogram layout"
        );

        self.state = Some(HistogramLayoutState {
            value_scale,
            minimum_x,
            maximum_x,
            bin_width,
        });
        Ok(markers)
    }

    fn render(&self, _markers: &PlotMarkers, _size: Size, renderer: &mut dyn Renderer) {
        let Some(state) = self.state else {
            return;
        };
        let origin = state.value_scale.origin;
        let width = state.bin_width;

        match self.config.histogram_type {
            HistogramType::Bar => {
                let mut below: Vec<f32> = Vec::new();
                for series in self.all_series() {
                    for (bin, &top) in series.scaled_bin_frequency.iter().enumerate() {
                        let bottom = below.get(bin).copied().unwrap_or(origin);
                        if top > bottom {
                            let rect = Rect::new(
                                Point::new(bin as f32 * width, bottom),
                                Size::new(width, top - bottom),
                            );
                            renderer.draw_solid_rect(
                                rect,
                                series.style.color,
                                series.style.hatch_pattern,
                            );
                        }
                    }
                    below.clone_from(&series.scaled_bin_frequency);
                }
            }
            HistogramType::Step => {
                for series in self.all_series() {
                    let bins = series.scaled_bin_frequency.len();
                    let mut points = Vec::with_capacity(bins * 2 + 2);
                    points.push(Point::new(0.0, origin));
                    for (bin, &top) in series.scaled_bin_frequency.iter().enumerate() {
                        points.push(Point::new(bin as f32 * width, top));
                        points.push(Point::new((bin + 1) as f32 * width, top));
                    }
                    points.push(Point::new(bins as f32 * width, origin));
                    renderer.draw_polyline(&points, self.config.line_width, series.style.color);
                }
            }
        }
    }

    fn legend_labels(&self) -> Vec<(String, LegendIcon)> {
        self.all_series()
            .map(|s| (s.style.label.clone(), LegendIcon::Square(s.style.color)))
            .collect()
    }
}
