//! Koordinaten-Achsen am Kartenrand.
//!
//! Die Achsen zeigen die gefitteten Welt-Domänen und bleiben beim
//! Pan/Zoom stehen (sie hängen nicht an der [`ViewTransform`]).
//!
//! [`ViewTransform`]: crate::core::ViewTransform

use eframe::egui;

use crate::core::Mapper;

const TICK_LENGTH: f32 = 4.0;
const LABEL_GAP: f32 = 6.0;

/// Zeichnet X-Achse unter und Y-Achse links neben der Kartenfläche.
pub fn paint_axes(painter: &egui::Painter, mapper: &Mapper, map_rect: egui::Rect) {
    let color = egui::Color32::GRAY;
    let stroke = egui::Stroke::new(1.0, color);
    let font = egui::FontId::proportional(10.0);

    let x_target = (map_rect.width() / 80.0).clamp(2.0, 10.0) as usize;
    for value in tick_values(mapper.x.domain(), x_target) {
        let x = map_rect.left() + mapper.x.scale(value) as f32;
        if x < map_rect.left() || x > map_rect.right() {
            continue;
        }
        let base = egui::pos2(x, map_rect.bottom());
        painter.line_segment([base, base + egui::vec2(0.0, TICK_LENGTH)], stroke);
        painter.text(
            base + egui::vec2(0.0, TICK_LENGTH + LABEL_GAP),
            egui::Align2::CENTER_TOP,
            format_tick(value),
            font.clone(),
            color,
        );
    }

    let y_target = (map_rect.height() / 60.0).clamp(2.0, 10.0) as usize;
    for value in tick_values(mapper.y.domain(), y_target) {
        let y = map_rect.top() + mapper.y.scale(value) as f32;
        if y < map_rect.top() || y > map_rect.bottom() {
            continue;
        }
        let base = egui::pos2(map_rect.left(), y);
        painter.line_segment([base, base - egui::vec2(TICK_LENGTH, 0.0)], stroke);
        painter.text(
            base - egui::vec2(TICK_LENGTH + LABEL_GAP, 0.0),
            egui::Align2::RIGHT_CENTER,
            format_tick(value),
            font.clone(),
            color,
        );
    }
}

fn format_tick(value: f64) -> String {
    if value.abs() >= 1000.0 {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.1}");
        text.strip_suffix(".0")
            .map(str::to_string)
            .unwrap_or(text)
    }
}

/// Tick-Positionen mit Schrittweite 1/2/5 · 10^k über der Domäne.
fn tick_values(domain: [f64; 2], target: usize) -> Vec<f64> {
    let span = domain[1] - domain[0];
    if !span.is_finite() || span <= 0.0 || target == 0 {
        return vec![domain[0]];
    }

    let step = tick_step(span, target);
    let first = (domain[0] / step).ceil();
    let last = (domain[1] / step).floor();
    let mut values = Vec::new();
    let mut i = first;
    while i <= last {
        values.push(i * step);
        i += 1.0;
    }
    values
}

fn tick_step(span: f64, target: usize) -> f64 {
    let raw = span / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let factor = if residual > 5.0 {
        10.0
    } else if residual > 2.0 {
        5.0
    } else if residual > 1.0 {
        2.0
    } else {
        1.0
    };
    magnitude * factor
}
