//! Value-axis scale computation: data extent, pixel scale, origin and
//! human-readable tick spacing.

use crate::data_types::{max_y, min_y, Numeric, Pair};

/// Default cap on the number of value-axis tick marks.
pub const MAX_DIV: usize = 50;

/// Data-space bounds of the value axis. Always brackets zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueExtent {
    pub minimum: f64,
    pub maximum: f64,
}

impl ValueExtent {
    pub fn new(minimum: f64, maximum: f64) -> Self {
        Self {
            minimum: minimum.min(0.0),
            maximum: maximum.max(0.0),
        }
    }

    /// Extent of a primary series plus the worst case of every stack layer.
    ///
    /// A stack layer adds its largest positive value to the maximum and its
    /// most negative value to the minimum, regardless of which categories
    /// those values belong to, so the result can overshoot the real stacked
    /// totals.
    pub fn from_series<'a, X: 'a, Y: Numeric + 'a>(
        primary: &[Pair<X, Y>],
        stacks: impl IntoIterator<Item = &'a [Pair<X, Y>]>,
    ) -> Self {
        let mut maximum = max_y(primary).to_f64();
        let mut minimum = min_y(primary).to_f64();

        for stack in stacks {
            let stack_max = max_y(stack).to_f64();
            let stack_min = min_y(stack).to_f64();
            if stack_max > 0.0 {
                maximum += stack_max;
            }
            if stack_min < 0.0 {
                minimum += stack_min;
            }
        }

        Self::new(minimum, maximum)
    }

    pub fn span(&self) -> f64 {
        self.maximum - self.minimum
    }

    pub fn is_degenerate(&self) -> bool {
        self.span() <= 0.0 || !self.span().is_finite()
    }
}

/// One emitted tick: pixel position on its axis and the data value it reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub position: f32,
    pub value: f64,
}

/// Result of scaling one value axis to its pixel length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub extent: ValueExtent,
    /// Data units per pixel
    pub scale: f64,
    /// Pixel position of data value zero
    pub origin: f32,
    /// Pixel distance between neighbouring ticks, zero for a degenerate extent
    pub increment: f32,
    pub length: f32,
    pub max_divisions: usize,
}

impl ValueScale {
    /// Fits `extent` into `length` pixels, keeping `far_margin_pct` of the
    /// axis free past the maximum.
    pub fn compute(
        extent: ValueExtent,
        length: f32,
        far_margin_pct: f32,
        max_divisions: usize,
    ) -> Self {
        let max_divisions = max_divisions.max(2);
        let length_f = length as f64;

        if extent.is_degenerate() {
            // All-zero data: nothing to spread out, keep a unit scale.
            return Self {
                extent,
                scale: 1.0,
                origin: 0.0,
                increment: 0.0,
                length,
                max_divisions,
            };
        }

        let origin = if extent.minimum >= 0.0 {
            0.0
        } else {
            (length_f / extent.span()) * -extent.minimum
        };

        let margin = far_margin_pct.clamp(0.0, 0.95) as f64;
        let scale = extent.span() / (length_f - margin * length_f);

        let step = tick_step(extent.maximum, extent.minimum);
        let mut increment = step / scale;
        // MAX_DIV counts marks, so the axis holds at most MAX_DIV - 1 gaps.
        let gaps = (max_divisions - 1) as f64;
        if length_f / increment > gaps {
            increment = length_f / gaps;
        }

        Self {
            extent,
            scale,
            origin: origin as f32,
            increment: increment as f32,
            length,
            max_divisions,
        }
    }

    pub fn to_pixels(&self, value: f64) -> f32 {
        (value * (1.0 / self.scale) + self.origin as f64) as f32
    }

    pub fn to_data(&self, pixel: f32) -> f64 {
        (pixel as f64 - self.origin as f64) * self.scale
    }

    /// Ticks walking up from the origin to the far end, then down from one
    /// step below the origin towards zero. Values are rounded to whole units.
    pub fn ticks(&self) -> Vec<Tick> {
        let length = self.length as f64;
        let origin = self.origin as f64;
        let mut ticks = Vec::new();

        if self.increment <= 0.0 {
            if (0.0..=length).contains(&origin) {
                ticks.push(Tick {
                    position: self.origin,
                    value: 0.0,
                });
            }
            return ticks;
        }

        let increment = self.increment as f64;
        let mut step = 0usize;
        loop {
            let position = origin + step as f64 * increment;
            if position > length || ticks.len() >= self.max_divisions {
                break;
            }
            if position >= 0.0 {
                ticks.push(self.tick_at(position));
            }
            step += 1;
        }

        let mut step = 1usize;
        loop {
            let position = origin - step as f64 * increment;
            if position <= 0.0 || ticks.len() >= self.max_divisions {
                break;
            }
            ticks.push(self.tick_at(position));
            step += 1;
        }

        tracing::trace!(count = ticks.len(), increment, "value ticks");
        ticks
    }

    fn tick_at(&self, position: f64) -> Tick {
        Tick {
            position: position as f32,
            value: (self.scale * (position - self.origin as f64)).round(),
        }
    }
}

/// Number of digits in the integer part of `value`, ignoring sign.
/// Anything with a zero integer part has zero digits.
pub fn number_of_digits(value: f64) -> u32 {
    let mut x = value.trunc().abs();
    if !x.is_finite() {
        return 0;
    }
    let mut count = 0;
    while x >= 1.0 {
        x = (x / 10.0).trunc();
        count += 1;
    }
    count
}

/// Raw tick spacing in data units, a power of ten picked from the magnitude
/// of the larger bound.
pub fn tick_step(maximum: f64, minimum: f64) -> f64 {
    let digits = number_of_digits(maximum).max(number_of_digits(minimum)) as i32;
    if digits > 1 && maximum <= 10f64.powi(digits - 1) {
        10f64.powi(digits - 2)
    } else if digits > 1 {
        10f64.powi(digits - 1)
    } else {
        1.0
    }
}

/// 1-2-5 stepping for free numeric axes: the smallest of `{1, 2, 5, 10} * 10^k`
/// that splits `span` into at most `target` intervals.
pub fn nice_step(span: f64, target: usize) -> f64 {
    if span <= 0.0 || !span.is_finite() {
        return 1.0;
    }
    let raw = span / target.max(1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let norm = raw / magnitude;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Width of one category slot, rounded to whole pixels.
pub fn category_slot_width(length: f32, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    (length / count as f32).round()
}

/// Centre of each category slot.
pub fn category_ticks(slot_width: f32, count: usize) -> Vec<f32> {
    (0..count)
        .map(|i| i as f32 * slot_width + slot_width * 0.5)
        .collect()
}
