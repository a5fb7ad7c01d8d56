use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("plot area must be positive, got {width}x{height}")]
    InvalidPlotSize { width: f32, height: f32 },

    #[error("histogram series `{0}` has no data")]
    EmptyHistogram(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
