//! Bar rectangles from scaled series values.

use crate::data_types::{Categorical, Color, Hatching, Numeric, Rect, Series};
use crate::transform::AxisMapping;

/// One rectangle ready to hand to a renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub rect: Rect,
    /// 0 for the primary series, `n` for the n-th stack series
    pub layer: usize,
    pub category: usize,
    pub fill_color: Color,
    pub hatch_pattern: Hatching,
}

/// Slot geometry shared by every bar of one layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarSlots {
    pub mapping: AxisMapping,
    /// Width of one category slot along the category axis
    pub slot_width: f32,
    /// Gap removed from each slot, half on either side
    pub space: f32,
    /// Pixel position of value zero along the value axis
    pub origin: f32,
}

impl BarSlots {
    fn bar_start(&self, tick: f32) -> f32 {
        tick - self.slot_width * 0.5 + self.space * 0.5
    }

    fn bar_extent(&self) -> f32 {
        (self.slot_width - self.space).max(0.0)
    }
}

/// Emits, for every category, the primary bar followed by one rectangle per
/// stack layer in registration order.
///
/// Stacked layers keep two running extents per category. A layer at or above
/// the origin starts at `origin + positive` and a layer below it at
/// `origin - negative - value`; each running extent then grows by the layer's
/// scaled pixel value.
pub fn build_bar_geometry<X: Categorical, Y: Numeric>(
    slots: &BarSlots,
    category_ticks: &[f32],
    primary: &Series<X, Y>,
    stacks: &[Series<X, Y>],
    out: &mut Vec<BarRect>,
) {
    out.clear();
    let origin = slots.origin;
    let bar_extent = slots.bar_extent();

    for (index, (tick, scaled)) in category_ticks
        .iter()
        .zip(primary.scaled_values.iter())
        .enumerate()
    {
        let start = slots.bar_start(*tick);
        let extent = scaled.y - origin;
        let (mut positive, mut negative) = if extent >= 0.0 {
            (extent, 0.0)
        } else {
            (0.0, extent)
        };

        out.push(BarRect {
            rect: slots.mapping.rect(start, bar_extent, origin, extent).normalized(),
            layer: 0,
            category: index,
            fill_color: primary.color(),
            hatch_pattern: primary.hatch_pattern(),
        });

        for (layer, stack) in stacks.iter().enumerate() {
            let Some(scaled) = stack.scaled_values.get(index) else {
                continue;
            };
            let value = scaled.y;
            let extent = value - origin;
            let value_start = if extent >= 0.0 {
                let value_start = origin + positive;
                positive += value;
                value_start
            } else {
                let value_start = origin - negative - value;
                negative += value;
                value_start
            };

            out.push(BarRect {
                rect: slots
                    .mapping
                    .rect(start, bar_extent, value_start, extent)
                    .normalized(),
                layer: layer + 1,
                category: index,
                fill_color: stack.color(),
                hatch_pattern: stack.hatch_pattern(),
            });
        }
    }
}
