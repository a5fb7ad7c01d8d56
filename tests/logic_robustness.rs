#[cfg(test)]
mod tests {
    use barscale::data_types::{Categorical, Pair};
    use barscale::{
        BarChart, ChartError, Color, Hatching, Orientation, PlotRenderer, RecordingRenderer,
        Series, Size,
    };
    use chrono::NaiveDate;

    #[test]
    fn test_empty_chart_is_a_no_op() {
        let mut chart = BarChart::<String, f64>::new();
        let mut renderer = RecordingRenderer::new();
        let markers = chart.draw(Size::new(400.0, 300.0), &mut renderer).unwrap();
        assert!(markers.is_empty());
        assert!(renderer.commands.is_empty());
        assert!(chart.layout_state().is_none());
    }

    #[test]
    fn test_all_zero_series() {
        // Case: max == min == 0, the scale formula would divide by zero
        let mut chart = BarChart::new();
        chart
            .add_series(
                vec!["a", "b", "c"],
                vec![0.0f64; 3],
                "zeros",
                Color::BLUE,
                Hatching::None,
                Orientation::Vertical,
            )
            .unwrap();

        let size = Size::new(300.0, 200.0);
        let markers = chart.layout(size).unwrap();
        let state = chart.layout_state().unwrap();
        assert_eq!(state.value_scale.scale, 1.0);
        assert_eq!(markers.y_markers, vec![0.0]);
        assert_eq!(markers.y_markers_text, vec!["0"]);

        for bar in chart.geometry(&markers, size) {
            assert!(!bar.rect.origin.y.is_nan());
            assert_eq!(bar.rect.size.height, 0.0);
        }
    }

    #[test]
    fn test_invalid_plot_size() {
        let mut chart = BarChart::new();
        chart
            .add_series(vec![1u32], vec![1.0f32], "one", Color::BLUE, Hatching::None, Orientation::Vertical)
            .unwrap();
        for size in [Size::new(0.0, 100.0), Size::new(100.0, -1.0), Size::new(f32::NAN, 10.0)] {
            let err = chart.layout(size).unwrap_err();
            assert!(matches!(err, ChartError::InvalidPlotSize { .. }));
        }
    }

    #[test]
    fn test_origin_is_zero_for_positive_data() {
        let mut chart = BarChart::new();
        chart
            .add_series(vec![1, 2, 3], vec![4i64, 9, 1], "ints", Color::BLUE, Hatching::None, Orientation::Vertical)
            .unwrap();
        chart.layout(Size::new(300.0, 300.0)).unwrap();
        assert_eq!(chart.layout_state().unwrap().value_scale.origin, 0.0);
    }

    #[test]
    fn test_all_negative_series_hangs_from_top() {
        let mut chart = BarChart::new();
        chart
            .add_series(vec!["x", "y"], vec![-10.0f64, -40.0], "neg", Color::RED, Hatching::None, Orientation::Vertical)
            .unwrap();
        let size = Size::new(200.0, 400.0);
        let markers = chart.layout(size).unwrap();
        let state = *chart.layout_state().unwrap();
        assert_eq!(state.value_scale.extent.maximum, 0.0);
        assert!((state.value_scale.origin - 400.0).abs() < 1e-3);
        for bar in chart.geometry(&markers, size) {
            assert!(bar.rect.max_y() <= state.value_scale.origin + 1e-3);
        }
    }

    #[test]
    fn test_round_trip_through_series_cache() {
        let values = vec![320.0f64, -100.0, 420.0, 500.0];
        let mut chart = BarChart::new();
        chart.set_series(Series::new(
            values.iter().enumerate().map(|(i, v)| Pair::new(i, *v)).collect(),
            "rt",
            Color::BLUE,
            Hatching::None,
        ));
        chart.layout(Size::new(640.0, 480.0)).unwrap();
        let state = chart.layout_state().unwrap();
        for (raw, scaled) in values.iter().zip(&chart.series().scaled_values) {
            let back = state.value_scale.to_data(scaled.y);
            assert!((back - raw).abs() < 1e-2, "{} vs {}", back, raw);
        }
    }

    #[test]
    fn test_category_labels() {
        assert_eq!("2008".label(), "2008");
        assert_eq!(String::from("Q1").label(), "Q1");
        assert_eq!(42u32.label(), "42");
        assert_eq!(2.5f64.label(), "2.5");
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(date.label(), "2024-03-09");
    }

    #[test]
    fn test_date_categories_on_axis() {
        let days: Vec<NaiveDate> = (1..=3)
            .filter_map(|d| NaiveDate::from_ymd_opt(2024, 1, d))
            .collect();
        let mut chart = BarChart::new();
        chart
            .add_series(days, vec![3.0f32, 1.0, 2.0], "daily", Color::GREEN, Hatching::None, Orientation::Horizontal)
            .unwrap();
        let markers = chart.layout(Size::new(500.0, 300.0)).unwrap();
        assert_eq!(
            markers.y_markers_text,
            vec!["2024-01-01", "2024-01-02", "2024-01-03"]
        );
        assert_eq!(markers.y_markers, vec![50.0, 150.0, 250.0]);
    }
}
