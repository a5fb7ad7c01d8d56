//! barscale: scale and layout engine for bar charts and histograms.
//!
//! Chart types compute value-axis scales, "nice" tick marks and stacked bar
//! geometry in plot-local pixels, then hand rectangles to a pluggable
//! [`Renderer`].
//!
//! ```rust
//! use barscale::{BarChart, Color, Hatching, Orientation, PlotRenderer, RecordingRenderer, Size};
//!
//! let mut chart = BarChart::<&str, f32>::new();
//! chart
//!     .add_series(
//!         vec!["2008", "2009", "2010", "2011"],
//!         vec![320.0, -100.0, 420.0, 500.0],
//!         "Plot 1",
//!         Color::ORANGE,
//!         Hatching::None,
//!         Orientation::Vertical,
//!     )
//!     .unwrap();
//!
//! let mut renderer = RecordingRenderer::new();
//! let markers = chart.draw(Size::new(1000.0, 660.0), &mut renderer).unwrap();
//! assert_eq!(markers.x_markers.len(), 4);
//! assert_eq!(renderer.rects().len(), 4);
//! ```

pub mod data_types;
pub mod error;
pub mod geometry;
#[cfg(feature = "gpui")]
pub mod gpui_renderer;
pub mod plot_types;
pub mod rendering;
pub mod scales;
pub mod transform;
pub mod utils;

pub use data_types::{
    Categorical, Color, Hatching, HistogramType, LegendIcon, Numeric, Orientation, Pair,
    PlotMarkers, Point, Rect, Series, Size,
};
pub use error::{ChartError, Result};
pub use plot_types::{BarChart, Histogram, PlotRenderer};
pub use rendering::{DrawCommand, RecordingRenderer, Renderer};
