use csvplot::rotation::{label_rotation, Axis, Rotation};
use csvplot::{
    generate_plot, CanvasConfig, Cell, Column, Dataset, PlotError, PlotKind, Plotter,
    RenderParams, ToolError,
};
use serde_json::json;
use std::fs;

const PNG_MAGIC: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Check if bytes are a valid PNG
fn is_valid_png(bytes: &[u8]) -> bool {
    bytes.len() > 8 && bytes[0..8] == PNG_MAGIC
}

fn plotter() -> Plotter {
    Plotter::new(CanvasConfig {
        width: 5.0,
        height: 3.0,
        dpi: 80,
    })
}

fn fixture(name: &str) -> Dataset {
    let csv = fs::read_to_string(format!("test/{name}")).expect("Failed to read test CSV");
    Dataset::from_csv_str(&csv).expect("Failed to parse test CSV")
}

fn texts(name: &str, values: &[&str]) -> Column {
    Column::new(name, values.iter().map(|v| Cell::Text(v.to_string())).collect())
}

fn numbers(name: &str, values: &[f64]) -> Column {
    Column::new(name, values.iter().map(|v| Cell::Number(*v)).collect())
}

#[test]
fn test_every_kind_renders_png() {
    let cases = [
        (PlotKind::Line, fixture("monthly_sales.csv"), json!({"x": "month", "y": "sales", "hue": "region"})),
        (PlotKind::Bar, fixture("monthly_sales.csv"), json!({"x": "region", "y": "sales"})),
        (PlotKind::Pie, fixture("survey.csv"), json!({})),
        (PlotKind::WorldMap, fixture("cities.csv"), json!({"title": "Largest cities"})),
    ];
    for (kind, dataset, params) in cases {
        let params = RenderParams::from_map(params.as_object().cloned().unwrap_or_default());
        let image = plotter().render(&dataset, kind, params).unwrap();
        assert!(!image.is_empty(), "{kind}");
        assert!(is_valid_png(image.as_bytes()), "{kind} is not a PNG");
    }
}

#[test]
fn test_empty_datasets_fail_for_every_kind() {
    let no_rows = Dataset::from_csv_str("lat,lon\n").unwrap();
    for kind in PlotKind::ALL {
        let err = plotter().render(&no_rows, kind, RenderParams::new()).unwrap_err();
        assert!(matches!(err, PlotError::EmptyDataset), "{kind}");
        let err = plotter().render(&Dataset::default(), kind, RenderParams::new()).unwrap_err();
        assert_eq!(err.to_string(), "CSV data is empty");
    }
}

#[test]
fn test_null_cells_fail_for_every_kind() {
    let dataset = Dataset::from_csv_str("x,y\n1,2\n2,\n3,6").unwrap();
    for kind in PlotKind::ALL {
        let err = plotter().render(&dataset, kind, RenderParams::new()).unwrap_err();
        assert!(matches!(err, PlotError::NullValuesPresent), "{kind}");
    }
}

#[test]
fn test_unsupported_kind_lists_valid_kinds() {
    for kind in ["scatter", "histogram", "Line", ""] {
        let err = kind.parse::<PlotKind>().unwrap_err();
        assert!(matches!(err, PlotError::UnsupportedPlotKind(_)));
        let message = err.to_string();
        for valid in ["line", "bar", "pie", "worldmap"] {
            assert!(message.contains(valid), "{message}");
        }
    }
}

#[test]
fn test_pie_single_column_counts() {
    let dataset = Dataset::new(vec![texts("category", &["A", "B", "A", "C", "B", "A"])]).unwrap();
    let pie = csvplot::pie::resolve_pie(&dataset, &mut RenderParams::new()).unwrap();
    assert_eq!(pie.wedge_count(), 3);
    assert_eq!(pie.values, vec![3.0, 2.0, 1.0]);

    let image = plotter().render(&dataset, PlotKind::Pie, RenderParams::new()).unwrap();
    assert!(is_valid_png(image.as_bytes()));
}

#[test]
fn test_pie_two_columns() {
    let dataset = Dataset::new(vec![
        texts("categories", &["A", "B", "C"]),
        numbers("values", &[30.0, 45.0, 25.0]),
    ])
    .unwrap();
    let pie = csvplot::pie::resolve_pie(&dataset, &mut RenderParams::new()).unwrap();
    assert_eq!(pie.wedge_count(), 3);

    let params = RenderParams::new().with("labels", json!(["X", "Y", "Z"]));
    let err = plotter().render(&dataset, PlotKind::Pie, params).unwrap_err();
    assert!(matches!(err, PlotError::LabelsNotAllowed));
}

#[test]
fn test_pie_three_columns() {
    let dataset = Dataset::new(vec![
        numbers("a", &[1.0]),
        numbers("b", &[2.0]),
        numbers("c", &[3.0]),
    ])
    .unwrap();
    let err = plotter().render(&dataset, PlotKind::Pie, RenderParams::new()).unwrap_err();
    assert!(matches!(err, PlotError::TooManyColumns(3)));
}

#[test]
fn test_worldmap_with_lat_lon() {
    let dataset = Dataset::new(vec![
        numbers("lat", &[51.5, -33.9, 40.7]),
        numbers("lon", &[-0.1, 18.4, -74.0]),
    ])
    .unwrap();
    for marker in ["circle", "s", "^", "D", "x"] {
        let params = RenderParams::new().with("marker", marker).with("s", 80);
        let image = plotter().render(&dataset, PlotKind::WorldMap, params).unwrap();
        assert!(is_valid_png(image.as_bytes()), "{marker}");
    }
}

#[test]
fn test_worldmap_without_coordinates() {
    let dataset = Dataset::new(vec![numbers("a", &[1.0]), numbers("b", &[2.0])]).unwrap();
    let err = plotter()
        .render(&dataset, PlotKind::WorldMap, RenderParams::new())
        .unwrap_err();
    assert!(matches!(err, PlotError::MissingCoordinateColumns));
}

#[test]
fn test_label_rotation_thresholds() {
    let long: Vec<String> = (0..10).map(|i| format!("{:0>20}", i)).collect();
    assert_eq!(label_rotation(&long, Axis::X), Rotation::Vertical);
    assert_eq!(label_rotation(&long, Axis::X).degrees(), 90);
    assert_eq!(label_rotation(&["A", "B", "C", "D"], Axis::X).degrees(), 0);
}

#[test]
fn test_crowded_bar_axis_renders() {
    let names: Vec<String> = (0..12).map(|i| format!("Department number {i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let values: Vec<f64> = (0..12).map(|i| i as f64 * 1.5).collect();
    let dataset = Dataset::new(vec![texts("department", &refs), numbers("budget", &values)]).unwrap();
    let params = RenderParams::new()
        .with("x", "department")
        .with("y", "budget")
        .with("title", "Budget")
        .with("xlabel", "Department")
        .with("ylabel", "EUR (millions)");
    // full-size canvas: vertical labels need room
    let image = Plotter::default().render(&dataset, PlotKind::Bar, params).unwrap();
    assert!(is_valid_png(image.as_bytes()));
}

#[test]
fn test_wide_form_line_renders() {
    let dataset = Dataset::from_csv_str("a,b,label\n1,4,x\n2,5,y\n3,7,z").unwrap();
    let image = plotter()
        .render(&dataset, PlotKind::Line, RenderParams::new())
        .unwrap();
    assert!(is_valid_png(image.as_bytes()));
}

#[test]
fn test_unknown_column_is_reported() {
    let dataset = fixture("monthly_sales.csv");
    let params = RenderParams::new().with("x", "week").with("y", "sales");
    let err = plotter().render(&dataset, PlotKind::Line, params).unwrap_err();
    assert_eq!(err.to_string(), "Column 'week' not found");
}

#[test]
fn test_tool_round_trip() {
    let csv = fs::read_to_string("test/cities.csv").unwrap();
    let output = generate_plot(&csv, "worldmap", Some(r#"{"c": "navy"}"#), &CanvasConfig::default()).unwrap();
    assert_eq!(output.message, "Plot generated successfully");
    assert!(output.data_uri().starts_with("data:image/png;base64,iVBORw0KGgo"));
}

#[test]
fn test_tool_rejects_bad_params() {
    let err = generate_plot("x,y\n1,2", "line", Some("{oops"), &CanvasConfig::default()).unwrap_err();
    assert!(matches!(err, ToolError::InvalidParams(_)));
}

#[test]
fn test_nan_spellings_fail_for_every_kind() {
    for token in ["-nan", "NAN", "-NaN", "nan", "#N/A", "n/a", "1.#QNAN"] {
        let csv = format!("lat,lon\n1,2\n2,{token}\n3,6");
        for kind in PlotKind::ALL {
            let err = generate_plot(&csv, kind.as_str(), None, &CanvasConfig::default()).unwrap_err();
            assert_eq!(err.to_string(), "CSV data contains NaN/null values", "{token} {kind}");
        }
    }
}

#[test]
fn test_nan_numbers_fail_for_every_kind() {
    let dataset = Dataset::new(vec![numbers("lat", &[1.0, f64::NAN]), numbers("lon", &[2.0, 3.0])]).unwrap();
    for kind in PlotKind::ALL {
        let err = plotter().render(&dataset, kind, RenderParams::new()).unwrap_err();
        assert!(matches!(err, PlotError::NullValuesPresent), "{kind}");
    }
}

#[test]
fn test_infinite_values_are_rejected() {
    for value in ["inf", "-Infinity", "1e400"] {
        let dataset = Dataset::from_csv_str(&format!("lat,lon\n1,2\n3,{value}")).unwrap();
        for kind in PlotKind::ALL {
            let err = plotter().render(&dataset, kind, RenderParams::new()).unwrap_err();
            assert!(matches!(err, PlotError::NonFiniteValue(_)), "{value} {kind}: {err}");
        }
    }
}

#[test]
fn test_extreme_finite_values_render() {
    let dataset = Dataset::from_csv_str("x,y\n-1e308,1e308\n0,0\n1e308,-1e308").unwrap();
    for kind in [PlotKind::Line, PlotKind::Bar] {
        let params = RenderParams::new().with("x", "x").with("y", "y");
        let image = plotter().render(&dataset, kind, params).unwrap();
        assert!(is_valid_png(image.as_bytes()), "{kind}");
    }
}

#[test]
fn test_extreme_canvas_configs_are_rejected() {
    let dataset = fixture("survey.csv");
    let configs = [
        CanvasConfig { width: 0.0, height: 3.0, dpi: 80 },
        CanvasConfig { width: f64::INFINITY, height: 3.0, dpi: 80 },
        CanvasConfig { width: 5.0, height: 3.0, dpi: 0 },
        CanvasConfig { width: 1e12, height: 1e12, dpi: u32::MAX },
    ];
    for config in configs {
        let err = Plotter::new(config.clone())
            .render(&dataset, PlotKind::Pie, RenderParams::new())
            .unwrap_err();
        assert!(matches!(err, PlotError::InvalidCanvas(_)), "{config:?}");
    }
}
