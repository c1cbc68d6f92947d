use mathplot::axis_renderer::{
    format_tick, tick_exponent, tick_precision, tick_step, ticks, AxisRenderer, LabelGate,
};
use mathplot::data_types::{AxisConfig, LayerStyle, ViewState};
use mathplot::surface::RecordingSurface;
use mathplot::theme::PlotTheme;
use mathplot::transform::PlotTransform;
use glam::IVec2;

fn view(transform: PlotTransform, width: i32, height: i32) -> ViewState {
    ViewState {
        transform,
        scr_x: width,
        scr_y: height,
        axis: AxisConfig::default(),
        label_margin: 8,
        theme: PlotTheme::default(),
    }
}

#[test]
fn test_tick_step_power_of_ten() {
    let coarse = tick_step(1.0, 128.0);
    let fine = tick_step(100.0, 128.0);
    assert!((coarse - 100.0).abs() < 1e-9);
    assert!((fine - 1.0).abs() < 1e-12);
    assert!((coarse / fine - 100.0).abs() < 1e-9);

    assert_eq!(tick_exponent(1000.0, 128.0), -1.0);
    assert_eq!(tick_exponent(1.0, 50.0), 1.0);
}

#[test]
fn test_tick_precision() {
    assert_eq!(tick_precision(2.0), 0);
    assert_eq!(tick_precision(1.0), 0);
    assert_eq!(tick_precision(0.0), 2);
    assert_eq!(tick_precision(-1.0), 2);
    assert_eq!(tick_precision(-3.0), 3);
    assert_eq!(tick_precision(-6.0), 6);
}

#[test]
fn test_format_tick() {
    assert_eq!(format_tick(200.0, 0), "200");
    assert_eq!(format_tick(-1.5, 2), "-1.50");
    assert_eq!(format_tick(0.001, 3), "0.001");
}

#[test]
fn test_ticks_cover_visible_range() {
    let t = ticks(-0.35, 0.2, 0.1);
    assert_eq!(t.len(), 6);
    assert!((t[0] - -0.4).abs() < 1e-12);
    assert!(t.iter().all(|n| *n < 0.2));
}

#[test]
fn test_label_gate() {
    let mut gate = LabelGate::new(64);
    assert!(gate.admit(0, 10));
    assert!(!gate.admit(50, 60));
    assert!(!gate.admit(74, 84));
    assert!(gate.admit(75, 85));
    assert!(!gate.admit(100, 110));
}

#[test]
fn test_paint_x_axis() {
    let mut surface = RecordingSurface::new(400, 300);
    let v = view(PlotTransform::default(), 400, 300);
    AxisRenderer::paint_x_axis(&mut surface, &v, &LayerStyle::named("x"));

    let lines: Vec<_> = surface.lines().collect();
    assert_eq!(lines[0], (IVec2::new(-200, 0), IVec2::new(200, 0)));
    // Ticks at -200, -100, 0 and 100.
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1], (IVec2::new(-200, 0), IVec2::new(-200, 4)));

    let texts: Vec<_> = surface.texts().collect();
    assert_eq!(
        texts,
        vec![
            ("-200", IVec2::new(-212, 4)),
            ("-100", IVec2::new(-112, 4)),
            ("0", IVec2::new(-3, 4)),
            ("100", IVec2::new(91, 4)),
            ("x", IVec2::new(190, 16)),
        ]
    );
}

#[test]
fn test_paint_x_axis_follows_origin() {
    let mut surface = RecordingSurface::new(400, 300);
    let v = view(PlotTransform::new(1.0, 2.0, 0.0, 10.0), 400, 300);
    AxisRenderer::paint_x_axis(&mut surface, &v, &LayerStyle::named("x"));

    let (from, to) = surface.lines().next().unwrap();
    assert_eq!(from.y, 20);
    assert_eq!(to.y, 20);
}

#[test]
fn test_crowded_labels_are_skipped() {
    let mut surface = RecordingSurface::new(400, 300);
    let mut v = view(PlotTransform::default(), 400, 300);
    v.axis.target_tick_spacing = 16.0;
    AxisRenderer::paint_x_axis(&mut surface, &v, &LayerStyle::named(""));

    // Step 10 gives 40 ticks but only a handful of labels.
    assert_eq!(surface.lines().count(), 41);
    let centers: Vec<i32> = surface
        .texts()
        .filter(|(s, _)| !s.is_empty())
        .map(|(s, at)| at.x + s.len() as i32 * 3)
        .collect();
    assert!(centers.len() > 1 && centers.len() < 10);
    for pair in centers.windows(2) {
        assert!(pair[1] - pair[0] > 64, "{:?}", centers);
    }
    assert_eq!(centers[0], -200);
}

#[test]
fn test_paint_y_axis() {
    let mut surface = RecordingSurface::new(400, 300);
    let v = view(PlotTransform::default(), 400, 300);
    AxisRenderer::paint_y_axis(&mut surface, &v, &LayerStyle::named("y"));

    let lines: Vec<_> = surface.lines().collect();
    assert_eq!(lines[0], (IVec2::new(0, -150), IVec2::new(0, 150)));
    // Ticks at -200, -100, 0 and 100, bottom to top.
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1], (IVec2::new(0, 200), IVec2::new(4, 200)));
    assert_eq!(lines[4], (IVec2::new(0, -100), IVec2::new(4, -100)));

    let texts: Vec<_> = surface.texts().collect();
    assert_eq!(texts[0], ("-200", IVec2::new(4, 194)));
    assert_eq!(texts[3], ("100", IVec2::new(4, -106)));
    assert_eq!(texts[4], ("y", IVec2::new(-10, -134)));
}

#[test]
fn test_y_labels_spaced_beyond_min_gap_are_all_drawn() {
    let mut surface = RecordingSurface::new(400, 300);
    let v = view(PlotTransform::new(1.0, 4.0, 0.0, 0.0), 400, 300);
    AxisRenderer::paint_y_axis(&mut surface, &v, &LayerStyle::named(""));

    // Step 10 at 40 px per tick: -40 through 30.
    assert_eq!(surface.lines().count(), 9);
    let labels: Vec<_> = surface.texts().filter(|(s, _)| !s.is_empty()).collect();
    assert_eq!(labels.len(), 8);
    assert_eq!(labels[0], ("-40", IVec2::new(4, 154)));
    assert_eq!(labels[1], ("-30", IVec2::new(4, 114)));
    assert_eq!(labels[7], ("30", IVec2::new(4, -126)));
}

#[test]
fn test_crowded_y_labels_are_skipped() {
    let mut surface = RecordingSurface::new(400, 300);
    let mut v = view(PlotTransform::default(), 400, 300);
    v.axis.target_tick_spacing = 16.0;
    AxisRenderer::paint_y_axis(&mut surface, &v, &LayerStyle::named(""));

    // Ticks every 10 px; a label is kept once its top is more than 32 px
    // above the previous one.
    let tops: Vec<i32> = surface
        .texts()
        .filter(|(s, _)| !s.is_empty())
        .map(|(_, at)| at.y)
        .collect();
    assert_eq!(tops[0], 144);
    assert!(tops.len() > 1);
    for pair in tops.windows(2) {
        assert_eq!(pair[0] - pair[1], 40, "{:?}", tops);
    }
}

#[test]
fn test_degenerate_scale_draws_no_ticks() {
    let mut surface = RecordingSurface::new(400, 300);
    let v = view(PlotTransform::new(0.0, 0.0, 0.0, 0.0), 400, 300);
    AxisRenderer::paint_x_axis(&mut surface, &v, &LayerStyle::named("x"));
    assert_eq!(surface.lines().count(), 1);
}
