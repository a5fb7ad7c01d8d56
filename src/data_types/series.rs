use serde::{Deserialize, Serialize};

use super::data::{Categorical, Numeric, Pair};
use super::plot_configs::{hex_color, Color, Hatching, HistogramType};

/// Styling shared by every series kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub label: String,
    #[serde(with = "hex_color")]
    pub color: Color,
    pub hatch_pattern: Hatching,
}

impl SeriesStyle {
    pub fn new(label: impl Into<String>, color: Color, hatch_pattern: Hatching) -> Self {
        Self {
            label: label.into(),
            color,
            hatch_pattern,
        }
    }
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self::new("", Color::LIGHT_BLUE, Hatching::None)
    }
}

/// A named, styled sequence of data points.
///
/// `scaled_values` is a derived cache holding the same points projected into
/// plot pixels. It is cleared and rebuilt from `values` at the start of every
/// layout pass and must not be edited by hand.
#[derive(Clone, Debug)]
pub struct Series<X, Y> {
    pub values: Vec<Pair<X, Y>>,
    pub scaled_values: Vec<Pair<X, f32>>,
    pub style: SeriesStyle,
}

impl<X: Categorical, Y: Numeric> Series<X, Y> {
    pub fn new(
        values: Vec<Pair<X, Y>>,
        label: impl Into<String>,
        color: Color,
        hatch_pattern: Hatching,
    ) -> Self {
        Self {
            values,
            scaled_values: Vec::new(),
            style: SeriesStyle::new(label, color, hatch_pattern),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn label(&self) -> &str {
        &self.style.label
    }

    pub fn color(&self) -> Color {
        self.style.color
    }

    pub fn hatch_pattern(&self) -> Hatching {
        self.style.hatch_pattern
    }

    /// Rebuilds the pixel cache with `scaled = y * (1 / scale) + origin`.
    pub fn rescale(&mut self, scale: f64, origin: f32) {
        let inv = 1.0 / scale;
        self.scaled_values.clear();
        self.scaled_values.extend(
            self.values
                .iter()
                .map(|p| Pair::new(p.x.clone(), (p.y.to_f64() * inv + origin as f64) as f32)),
        );
    }
}

impl<X: Categorical, Y: Numeric> Default for Series<X, Y> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            scaled_values: Vec::new(),
            style: SeriesStyle::default(),
        }
    }
}

/// Raw samples of one histogram layer plus the binning derived from them.
#[derive(Clone, Debug, Default)]
pub struct HistogramSeries {
    pub data: Vec<f64>,
    pub bins: usize,
    pub bin_frequency: Vec<f64>,
    /// Pixel height of each bin's top edge, rebuilt on every layout pass
    pub scaled_bin_frequency: Vec<f32>,
    pub maximum_frequency: f64,
    pub minimum_x: Option<f64>,
    pub maximum_x: Option<f64>,
    pub bin_interval: Option<f64>,
    pub style: SeriesStyle,
    pub histogram_type: HistogramType,
    pub is_normalized: bool,
}

impl HistogramSeries {
    pub fn new(data: Vec<f64>, label: impl Into<String>, color: Color) -> Self {
        Self {
            data,
            style: SeriesStyle::new(label, color, Hatching::None),
            ..Default::default()
        }
    }

    /// Counts samples into `bins` equal-width buckets over `[minimum, maximum]`.
    ///
    /// The last bucket is closed so `maximum` itself lands in it. A zero-width
    /// range puts every sample in the first bucket.
    pub fn compute_bins(&mut self, minimum: f64, maximum: f64, bins: usize, normalized: bool) {
        let bins = bins.max(1);
        let span = maximum - minimum;
        let interval = if span > 0.0 { span / bins as f64 } else { 1.0 };

        let mut frequency = vec![0.0; bins];
        let mut counted = 0usize;
        for &value in self.data.iter().filter(|v| v.is_finite()) {
            let index = ((value - minimum) / interval).floor();
            let index = (index.max(0.0) as usize).min(bins - 1);
            frequency[index] += 1.0;
            counted += 1;
        }

        // Non-finite samples are skipped, so only counted ones form the total.
        if normalized && counted > 0 {
            let total = counted as f64;
            for f in frequency.iter_mut() {
                *f /= total;
            }
        }

        self.maximum_frequency = frequency.iter().copied().fold(0.0, f64::max);
        self.bin_frequency = frequency;
        self.bins = bins;
        self.minimum_x = Some(minimum);
        self.maximum_x = Some(maximum);
        self.bin_interval = Some(interval);
        self.is_normalized = normalized;
    }
}
