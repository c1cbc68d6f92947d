use crate::data_types::{LayerStyle, ViewState};
use crate::surface::DrawSurface;
use glam::IVec2;

/// Far more ticks than fit on any screen; bounds the tick loop when the
/// caller hands in a step that does not match the visible range.
const MAX_TICKS: f64 = 10_000.0;

/// Power-of-ten exponent of the tick step for a given scale, aiming for one
/// tick every `target_spacing` pixels.
pub fn tick_exponent(scale: f64, target_spacing: f64) -> f64 {
    (target_spacing / scale).log10().floor()
}

pub fn tick_step(scale: f64, target_spacing: f64) -> f64 {
    10f64.powf(tick_exponent(scale, target_spacing))
}

/// Number of decimals for tick labels given the step exponent.
pub fn tick_precision(exponent: f64) -> usize {
    if exponent >= 1.0 {
        0
    } else {
        (-exponent).max(2.0) as usize
    }
}

pub fn format_tick(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

/// Multiples of `step` from the first one at or below `lower` up to, but
/// excluding, `upper`.
pub fn ticks(lower: f64, upper: f64, step: f64) -> Vec<f64> {
    if !(step.is_finite() && step > 0.0 && lower.is_finite() && upper.is_finite()) {
        return vec![];
    }
    let first = (lower / step).floor();
    let last = (upper / step).ceil();
    if !first.is_finite() || !last.is_finite() || last - first > MAX_TICKS {
        return vec![];
    }

    let first = first as i64;
    let last = last as i64;
    (first..=last)
        .map(|k| k as f64 * step)
        .take_while(|n| *n < upper)
        .collect()
}

/// Drops labels that would crowd the previously drawn one.
///
/// Positions are measured along the direction labels are laid out in, so a
/// label spans `leading..trailing` with `leading <= trailing`.
#[derive(Clone, Copy, Debug)]
pub struct LabelGate {
    min_gap: i32,
    last_trailing: Option<i32>,
}

impl LabelGate {
    pub fn new(min_gap: i32) -> Self {
        Self {
            min_gap,
            last_trailing: None,
        }
    }

    /// Returns true and remembers the label if it may be drawn.
    pub fn admit(&mut self, leading: i32, trailing: i32) -> bool {
        let clear = match self.last_trailing {
            Some(last) => leading - last > self.min_gap,
            None => true,
        };
        if clear {
            self.last_trailing = Some(trailing);
        }
        clear
    }
}

pub struct AxisRenderer;

impl AxisRenderer {
    /// Horizontal axis through world y = 0 with ticks below it.
    pub fn paint_x_axis(surface: &mut dyn DrawSurface, view: &ViewState, style: &LayerStyle) {
        surface.set_pen(&style.pen_or(view.theme.scale_pen));
        surface.set_font(&style.font_or(view.theme.scale_font));

        let t = &view.transform;
        let axis = &view.axis;
        let org_y = t.y_to_device(0.0) as i32;
        let extend = view.scr_x / 2;

        surface.draw_line(IVec2::new(-extend, org_y), IVec2::new(extend, org_y));

        let exponent = tick_exponent(t.scale_x, axis.target_tick_spacing);
        let step = 10f64.powf(exponent);
        let precision = tick_precision(exponent);
        let lower = t.device_to_x(-extend as f64);
        let upper = t.device_to_x(extend as f64);

        let mut gate = LabelGate::new(axis.min_label_gap_x);
        for n in ticks(lower, upper, step) {
            let p = t.x_to_device(n) as i32;
            surface.draw_line(
                IVec2::new(p, org_y),
                IVec2::new(p, org_y + axis.tick_length),
            );

            let label = format_tick(n, precision);
            let extent = surface.text_extent(&label);
            let left = p - extent.x / 2;
            if gate.admit(left, left + extent.x) {
                surface.draw_text(&label, IVec2::new(left, org_y + axis.tick_length));
            }
        }

        let extent = surface.text_extent(&style.name);
        surface.draw_text(
            &style.name,
            IVec2::new(
                extend - extent.x - axis.name_offset,
                org_y + axis.tick_length + extent.y,
            ),
        );
    }

    /// Vertical axis through world x = 0 with ticks to its right.
    pub fn paint_y_axis(surface: &mut dyn DrawSurface, view: &ViewState, style: &LayerStyle) {
        surface.set_pen(&style.pen_or(view.theme.scale_pen));
        surface.set_font(&style.font_or(view.theme.scale_font));

        let t = &view.transform;
        let axis = &view.axis;
        let org_x = t.x_to_device(0.0) as i32;
        let extend = view.scr_y / 2;

        surface.draw_line(IVec2::new(org_x, -extend), IVec2::new(org_x, extend));

        let exponent = tick_exponent(t.scale_y, axis.target_tick_spacing);
        let step = 10f64.powf(exponent);
        let precision = tick_precision(exponent);
        let lower = t.device_to_y(extend as f64);
        let upper = t.device_to_y(-extend as f64);

        // Labels are laid out bottom to top and compared by their top edge,
        // so device y is negated for the gate.
        let mut gate = LabelGate::new(axis.min_label_gap_y);
        for n in ticks(lower, upper, step) {
            let p = t.y_to_device(n) as i32;
            surface.draw_line(
                IVec2::new(org_x, p),
                IVec2::new(org_x + axis.tick_length, p),
            );

            let label = format_tick(n, precision);
            let extent = surface.text_extent(&label);
            let top = p - extent.y / 2;
            if gate.admit(-top, -top) {
                surface.draw_text(&label, IVec2::new(org_x + axis.tick_length, top));
            }
        }

        let extent = surface.text_extent(&style.name);
        surface.draw_text(
            &style.name,
            IVec2::new(
                org_x - extent.x - axis.name_offset,
                -extend + extent.y + axis.name_offset,
            ),
        );
    }
}
