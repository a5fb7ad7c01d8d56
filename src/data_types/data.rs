// Core data traits and the data point type

use std::fmt::Debug;
use std::ops::{Add, Sub};

use chrono::NaiveDate;

/// A value that can sit on the categorical axis.
///
/// Only requirement is that it can be rendered to display text for the
/// category tick labels.
pub trait Categorical: Clone + Debug + Send + Sync {
    fn label(&self) -> String;
}

macro_rules! categorical_via_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl Categorical for $t {
                fn label(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

categorical_via_display!(String, &'static str, char, i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);

impl Categorical for NaiveDate {
    fn label(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }
}

/// A value that can sit on the value axis.
pub trait Numeric:
    Copy + Debug + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Send + Sync
{
    fn zero() -> Self;
    fn to_f64(self) -> f64;
    fn from_f64(value: f64) -> Self;
}

macro_rules! numeric_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                fn zero() -> Self {
                    0 as $t
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

numeric_primitive!(f32, f64, i32, i64, u32, u64);

/// One data point. `x` is the category, `y` the value.
#[derive(Clone, Debug, PartialEq)]
pub struct Pair<X, Y> {
    pub x: X,
    pub y: Y,
}

impl<X, Y> Pair<X, Y> {
    pub fn new(x: X, y: Y) -> Self {
        Self { x, y }
    }
}

/// Largest y among the points, seeded at zero.
pub fn max_y<X, Y: Numeric>(points: &[Pair<X, Y>]) -> Y {
    points
        .iter()
        .fold(Y::zero(), |acc, p| if p.y > acc { p.y } else { acc })
}

/// Smallest y among the points, seeded at zero.
pub fn min_y<X, Y: Numeric>(points: &[Pair<X, Y>]) -> Y {
    points
        .iter()
        .fold(Y::zero(), |acc, p| if p.y < acc { p.y } else { acc })
}
