// src/gui/components/bar_chart.rs
//
// Minimal vertical bar chart painted straight onto the panel.
// One bar per player, names slanted under the axis, value on hover.

use std::f32::consts::FRAC_PI_4;

use eframe::egui::{
    self, epaint::TextShape, Align2, Color32, FontId, Pos2, Rect, RichText, Sense, Stroke,
};

pub struct BarSeries<'a> {
    pub name: &'a str,
    pub unit: &'a str,
    pub labels: &'a [String],
    pub values: &'a [f64],
    pub fill: Color32,
}

const LEFT: f32 = 48.0;
const BOTTOM: f32 = 72.0;
const TOP: f32 = 8.0;
const TICKS: usize = 4;

pub fn draw(ui: &mut egui::Ui, series: &BarSeries) {
    ui.label(RichText::new(format!("{} ({})", series.name, series.unit)).strong());

    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
    let outer = response.rect;
    let plot = Rect::from_min_max(
        Pos2::new(outer.left() + LEFT, outer.top() + TOP),
        Pos2::new(outer.right() - 8.0, outer.bottom() - BOTTOM),
    );
    if plot.width() <= 0.0 || plot.height() <= 0.0 {
        return;
    }

    let n = series.values.len().min(series.labels.len());
    let text = ui.visuals().text_color();
    let weak = ui.visuals().weak_text_color();
    let grid = Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color);
    let font = FontId::proportional(11.0);

    let top = nice_max(series.values.iter().copied().fold(0.0, f64::max));

    // Horizontal grid + y ticks
    for t in 0..=TICKS {
        let v = top * t as f64 / TICKS as f64;
        let y = y_for(plot, v, top);
        painter.line_segment([Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)], grid);
        painter.text(Pos2::new(plot.left() - 4.0, y), Align2::RIGHT_CENTER, fmt_tick(v), font.clone(), weak);
    }
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], Stroke::new(1.0, weak));

    if n == 0 {
        return;
    }

    let slot = plot.width() / n as f32;
    let bar_w = (slot * 0.8).max(1.0);
    let hover = response.hover_pos();
    let mut hovered = None;

    for i in 0..n {
        let v = series.values[i];
        let cx = plot.left() + slot * (i as f32 + 0.5);
        let bar = Rect::from_min_max(
            Pos2::new(cx - bar_w / 2.0, y_for(plot, v, top)),
            Pos2::new(cx + bar_w / 2.0, plot.bottom()),
        );

        let over = hover.is_some_and(|p| p.x >= cx - slot / 2.0 && p.x < cx + slot / 2.0 && plot.contains(p));
        if over {
            hovered = Some(i);
        }
        let fill = if over { series.fill.gamma_multiply(0.7) } else { series.fill };
        painter.rect_filled(bar, 0.0, fill);

        let galley = painter.layout_no_wrap(series.labels[i].clone(), font.clone(), text);
        let anchor = Pos2::new(cx, plot.bottom() + 4.0);
        painter.add(TextShape::new(anchor, galley, text).with_angle(FRAC_PI_4));
    }

    if let Some(i) = hovered {
        response.on_hover_text_at_pointer(format!(
            "{}: {} {}",
            series.labels[i],
            fmt_tick(series.values[i]),
            series.unit
        ));
    }
}

fn y_for(plot: Rect, v: f64, top: f64) -> f32 {
    let frac = if top > 0.0 { (v / top).clamp(0.0, 1.0) } else { 0.0 };
    plot.bottom() - plot.height() * frac as f32
}

/// Round the axis top up to 1, 2 or 5 × 10^k so ticks land on readable values.
pub fn nice_max(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let mag = 10f64.powf(max.log10().floor());
    let norm = max / mag;
    let step = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * mag
}

fn fmt_tick(v: f64) -> String {
    if v.fract() == 0.0 { format!("{v:.0}") } else { format!("{v:.1}") }
}
