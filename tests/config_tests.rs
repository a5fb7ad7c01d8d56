use barscale::data_types::{
    hex_color, BarPlotConfig, HistogramConfig, HistogramType, SeriesStyle,
};
use barscale::{Color, Hatching, Orientation};

#[test]
fn test_bar_config_defaults() {
    let config = BarPlotConfig::default();
    assert_eq!(config.space, 20.0);
    assert_eq!(config.orientation, Orientation::Vertical);
    assert_eq!(config.max_divisions, 50);
    assert!((config.far_margin_pct - 0.1).abs() < f32::EPSILON);
}

#[test]
fn test_bar_config_partial_json() {
    let config = BarPlotConfig::from_json(r#"{ "space": 4.0, "orientation": "Horizontal" }"#)
        .unwrap();
    assert_eq!(config.space, 4.0);
    assert_eq!(config.orientation, Orientation::Horizontal);
    assert_eq!(config.max_divisions, 50);
}

#[test]
fn test_bad_config_reports_context() {
    let err = BarPlotConfig::from_json(r#"{ "space": "wide" }"#).unwrap_err();
    assert_eq!(err.to_string(), "invalid bar plot config");
}

#[test]
fn test_histogram_config_json() {
    let config =
        HistogramConfig::from_json(r#"{ "bins": 25, "histogram_type": "Step" }"#).unwrap();
    assert_eq!(config.bins, 25);
    assert_eq!(config.histogram_type, HistogramType::Step);
    assert!(!config.normalized);
}

#[test]
fn test_hex_color_parsing() {
    let color = hex_color::parse_hex_str("#ff8000").unwrap();
    assert_eq!(color.r, 1.0);
    assert!((color.g - 128.0 / 255.0).abs() < 1e-6);
    assert_eq!(color.b, 0.0);
    assert_eq!(color.a, 1.0);

    let translucent = hex_color::parse_hex_str("00000080").unwrap();
    assert!((translucent.a - 128.0 / 255.0).abs() < 1e-6);

    assert!(hex_color::parse_hex_str("#fff").is_err());
    assert!(hex_color::parse_hex_str("#gg0000").is_err());
}

#[test]
fn test_hex_color_formatting() {
    assert_eq!(hex_color::to_hex_string(&Color::ORANGE), "#ffa500");
    assert_eq!(hex_color::to_hex_string(&Color::BLACK.alpha(0.0)), "#00000000");
}

#[test]
fn test_series_style_serialization() {
    let style = SeriesStyle::new("Plot 1", Color::RED, Hatching::Cross);
    let json = serde_json::to_string(&style).unwrap();
    assert_eq!(
        json,
        r##"{"label":"Plot 1","color":"#ff0000","hatch_pattern":"Cross"}"##
    );

    let back: SeriesStyle = serde_json::from_str(&json).unwrap();
    assert_eq!(back, style);
}
