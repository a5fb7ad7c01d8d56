use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

use super::state::Orientation;

/// RGBA color, each channel in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const LIGHT_BLUE: Color = Color::rgb(0.529, 0.808, 0.922);
    pub const DARK_BLUE: Color = Color::rgb(0.0, 0.0, 0.545);
    pub const ORANGE: Color = Color::rgb(1.0, 0.647, 0.0);
    pub const PINK: Color = Color::rgb(1.0, 0.753, 0.796);
    pub const PURPLE: Color = Color::rgb(0.5, 0.0, 0.5);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::LIGHT_BLUE
    }
}

// Serialization of Color <-> Hex String
pub mod hex_color {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(color: &Color, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_hex_string(color))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<Color, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        parse_hex_str(&hex).map_err(|e| serde::de::Error::custom(format!("{e:#}")))
    }

    pub fn to_hex_string(color: &Color) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let rgb = format!(
            "#{:02x}{:02x}{:02x}",
            channel(color.r),
            channel(color.g),
            channel(color.b)
        );
        if color.a < 1.0 {
            format!("{rgb}{:02x}", channel(color.a))
        } else {
            rgb
        }
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn parse_hex_str(hex: &str) -> Result<Color> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 && digits.len() != 8 {
            eyre::bail!("expected 6 or 8 hex digits, got {:?}", hex);
        }
        if !digits.is_ascii() {
            eyre::bail!("non-ascii color string {:?}", hex);
        }

        let channel = |i: usize| -> Result<f32> {
            let byte = u8::from_str_radix(&digits[i..i + 2], 16)
                .wrap_err_with(|| format!("invalid hex color {:?}", hex))?;
            Ok(byte as f32 / 255.0)
        };

        let a = if digits.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Color::new(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

/// Fill pattern drawn over a bar by the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hatching {
    #[default]
    None,
    ForwardSlash,
    BackwardSlash,
    HollowCircle,
    FilledCircle,
    Vertical,
    Horizontal,
    Grid,
    Cross,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarPlotConfig {
    /// Gap between neighbouring bars, in pixels
    pub space: f32,
    pub orientation: Orientation,
    /// Fraction of the value axis kept free beyond the largest bar
    pub far_margin_pct: f32,
    /// Upper bound on value-axis tick marks
    pub max_divisions: usize,
}

impl Default for BarPlotConfig {
    fn default() -> Self {
        Self {
            space: 20.0,
            orientation: Orientation::Vertical,
            far_margin_pct: 0.1,
            max_divisions: 50,
        }
    }
}

impl BarPlotConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("invalid bar plot config")
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistogramType {
    #[default]
    Bar,
    Step,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramConfig {
    pub bins: usize,
    /// Divide frequencies by the number of samples
    pub normalized: bool,
    pub histogram_type: HistogramType,
    /// Outline thickness for `HistogramType::Step`
    pub line_width: f32,
    pub far_margin_pct: f32,
    pub max_divisions: usize,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            bins: 10,
            normalized: false,
            histogram_type: HistogramType::Bar,
            line_width: 1.5,
            far_margin_pct: 0.1,
            max_divisions: 50,
        }
    }
}

impl HistogramConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("invalid histogram config")
    }
}
