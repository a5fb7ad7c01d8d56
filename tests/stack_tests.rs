use barscale::{
    BarChart, ChartError, Color, Hatching, LegendIcon, Orientation, PlotRenderer, Series, Size,
};
use barscale::data_types::Pair;

fn years_chart() -> BarChart<String, f32> {
    let mut chart = BarChart::new();
    chart
        .add_series(
            ["2008", "2009", "2010", "2011"].map(String::from).to_vec(),
            vec![320.0, -100.0, 420.0, 500.0],
            "Plot 1",
            Color::ORANGE,
            Hatching::HollowCircle,
            Orientation::Vertical,
        )
        .unwrap();
    chart
}

#[test]
fn test_mismatched_xy_is_rejected() {
    let mut chart = BarChart::<&str, f64>::new();
    let err = chart
        .add_series(
            vec!["a", "b", "c"],
            vec![1.0, 2.0],
            "bad",
            Color::BLUE,
            Hatching::None,
            Orientation::Vertical,
        )
        .unwrap_err();
    assert!(matches!(err, ChartError::InvalidInput(_)));
    assert!(chart.series().is_empty(), "primary must stay untouched");
}

#[test]
fn test_stack_with_matching_length_is_kept() {
    let mut chart = years_chart();
    assert!(chart.add_stack_values(vec![50.0; 4], "Plot 2", Color::BLUE, Hatching::None));
    assert_eq!(chart.stack_series().len(), 1);

    let stack = &chart.stack_series()[0];
    let labels: Vec<&str> = stack.values.iter().map(|p| p.x.as_str()).collect();
    assert_eq!(labels, vec!["2008", "2009", "2010", "2011"]);
}

#[test]
fn test_stack_with_wrong_length_is_dropped() {
    let mut chart = years_chart();
    assert!(!chart.add_stack_values(vec![1.0, 2.0], "short", Color::BLUE, Hatching::None));

    let long = Series::new(
        (0..5).map(|i| Pair::new(i.to_string(), 1.0)).collect(),
        "long",
        Color::RED,
        Hatching::None,
    );
    assert!(!chart.add_stack_series(long));
    assert!(chart.stack_series().is_empty());
}

#[test]
fn test_stack_on_empty_primary_is_dropped() {
    let mut chart = BarChart::<String, f32>::new();
    let empty = Series::new(Vec::new(), "empty", Color::RED, Hatching::None);
    assert!(!chart.add_stack_series(empty));
    assert!(!chart.add_stack_values(Vec::new(), "also empty", Color::RED, Hatching::None));
    assert!(chart.stack_series().is_empty());
}

#[test]
fn test_scaled_counts_match_after_layout() {
    let mut chart = years_chart();
    chart.add_stack_values(vec![50.0; 4], "Plot 2", Color::BLUE, Hatching::None);
    chart.add_stack_values(vec![-10.0, 20.0, 0.0, 5.0], "Plot 3", Color::GREEN, Hatching::Cross);

    for size in [Size::new(400.0, 500.0), Size::new(1000.0, 60.0)] {
        chart.layout(size).unwrap();
        assert_eq!(chart.series().scaled_values.len(), chart.series().len());
        for stack in chart.stack_series() {
            assert_eq!(stack.scaled_values.len(), stack.len());
        }
    }
}

#[test]
fn test_legend_lists_primary_first() {
    let mut chart = years_chart();
    chart.add_stack_values(vec![50.0; 4], "Plot 2", Color::BLUE, Hatching::None);
    chart.add_stack_values(vec![5.0; 4], "Plot 3", Color::GREEN, Hatching::None);

    let legend = chart.legend_labels();
    let labels: Vec<&str> = legend.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(labels, vec!["Plot 1", "Plot 2", "Plot 3"]);
    assert_eq!(legend[0].1, LegendIcon::Square(Color::ORANGE));
    assert_eq!(legend[2].1, LegendIcon::Square(Color::GREEN));
}

#[test]
fn test_replacing_series_and_orientation_invalidates_layout() {
    let mut chart = years_chart();
    chart.layout(Size::new(400.0, 500.0)).unwrap();
    assert!(chart.layout_state().is_some());

    chart.set_orientation(Orientation::Horizontal);
    assert!(chart.layout_state().is_none());

    chart.layout(Size::new(400.0, 500.0)).unwrap();
    assert_eq!(
        chart.layout_state().map(|s| s.orientation),
        Some(Orientation::Horizontal)
    );
}

#[test]
fn test_replacing_series_drops_mismatched_stacks() {
    let mut chart = years_chart();
    assert!(chart.add_stack_values(vec![1000.0; 4], "tall", Color::BLUE, Hatching::None));

    chart
        .add_series(
            vec!["a".to_string(), "b".to_string()],
            vec![1.0, 2.0],
            "short",
            Color::RED,
            Hatching::None,
            Orientation::Vertical,
        )
        .unwrap();
    assert!(chart.stack_series().is_empty());

    chart.layout(Size::new(400.0, 500.0)).unwrap();
    let extent = chart.layout_state().unwrap().value_scale.extent;
    assert_eq!(extent.maximum, 2.0);
}

#[test]
fn test_replacing_series_keeps_matching_stacks() {
    let mut chart = years_chart();
    assert!(chart.add_stack_values(vec![50.0; 4], "Plot 2", Color::BLUE, Hatching::None));

    chart
        .add_series(
            ["2012", "2013", "2014", "2015"].map(String::from).to_vec(),
            vec![10.0, 20.0, 30.0, 40.0],
            "Plot 1",
            Color::ORANGE,
            Hatching::None,
            Orientation::Vertical,
        )
        .unwrap();
    assert_eq!(chart.stack_series().len(), 1);
}
