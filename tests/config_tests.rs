use mathplot::data_types::{Color, Font, Pen, PlotViewConfig};
use mathplot::surface::{DrawCall, RecordingSurface};
use mathplot::{FunctionX, PlotTheme, PlotView, ScaleY};

#[test]
fn test_default_config() {
    let config = PlotViewConfig::default();
    assert_eq!(config.theme.background, Color::WHITE);
    assert_eq!(config.theme.layer_pen, Pen::black());
    assert_eq!(config.theme.scale_pen, Pen::grey());
    assert_eq!(config.theme.layer_font, Font::normal());
    assert_eq!(config.theme.scale_font, Font::small());
    assert_eq!(config.axis.target_tick_spacing, 128.0);
    assert_eq!(config.axis.tick_length, 4);
    assert_eq!(config.axis.min_label_gap_x, 64);
    assert_eq!(config.axis.min_label_gap_y, 32);
    assert_eq!(config.label_margin, 8);
    assert!(config.validate().is_ok());
}

#[test]
fn test_json_round_trip() {
    let mut config = PlotViewConfig::default();
    config.label_margin = 12;
    config.axis.min_label_gap_x = 80;
    let json = config.to_json().unwrap();
    let parsed = PlotViewConfig::from_json(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_partial_json_uses_defaults() {
    let config = PlotViewConfig::from_json(r#"{ "label_margin": 4, "axis": { "tick_length": 6 } }"#)
        .unwrap();
    assert_eq!(config.label_margin, 4);
    assert_eq!(config.axis.tick_length, 6);
    assert_eq!(config.axis.min_label_gap_y, 32);
    assert_eq!(config.initial_transform.scale_x, 1.0);
}

#[test]
fn test_rejects_non_positive_scale() {
    let err = PlotViewConfig::from_json(
        r#"{ "initial_transform": { "scale_x": 0.0, "scale_y": 1.0, "pos_x": 0.0, "pos_y": 0.0 } }"#,
    )
    .unwrap_err();
    assert!(format!("{err}").contains("initial scale"));

    assert!(PlotViewConfig::from_json(r#"{ "axis": { "target_tick_spacing": -1.0 } }"#).is_err());
    assert!(PlotViewConfig::from_json("not json").is_err());
}

#[test]
fn test_view_uses_config() {
    let config = PlotViewConfig::from_json(
        r#"{ "initial_transform": { "scale_x": 4.0, "scale_y": 2.0, "pos_x": 1.0, "pos_y": -1.0 } }"#,
    )
    .unwrap();
    let mut view = PlotView::with_config(mathplot::NullHost, config);
    assert_eq!(view.scale_x(), 4.0);
    assert_eq!(view.pos_y(), -1.0);

    view.add_layer(Box::new(FunctionX::new("f", |x| x)));
    assert_eq!(view.view_state().label_margin, 8);
    assert_eq!(view.view_state().theme, PlotTheme::default());
}

#[test]
fn test_themed_config_drives_render() {
    let config = PlotViewConfig::from_json(
        r#"{
            "theme": {
                "background": { "r": 0, "g": 0, "b": 0 },
                "layer_pen": { "color": { "r": 255, "g": 255, "b": 0 }, "width": 2.0 },
                "scale_font": { "point_size": 6.0 }
            }
        }"#,
    )
    .unwrap();
    assert_eq!(config.theme.scale_pen, Pen::grey());

    let mut view = PlotView::with_config(mathplot::NullHost, config);
    view.add_layer(Box::new(FunctionX::new("f", |x| x)));
    view.add_layer(Box::new(ScaleY::new("y")));

    let mut surface = RecordingSurface::new(100, 80);
    view.render(&mut surface);

    let yellow = Pen {
        color: Color::rgb(255, 255, 0),
        width: 2.0,
    };
    assert_eq!(surface.calls[1], DrawCall::Clear(Color::BLACK));
    let pens: Vec<Pen> = surface
        .calls
        .iter()
        .filter_map(|c| match c {
            DrawCall::SetPen(p) => Some(*p),
            _ => None,
        })
        .collect();
    assert_eq!(pens, vec![yellow, Pen::grey()]);
    let fonts: Vec<Font> = surface
        .calls
        .iter()
        .filter_map(|c| match c {
            DrawCall::SetFont(f) => Some(*f),
            _ => None,
        })
        .collect();
    assert_eq!(fonts, vec![Font::normal(), Font { point_size: 6.0 }]);
}
