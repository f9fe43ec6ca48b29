use eframe::egui;

use crate::core::ChartSeries;

const CHART_HEIGHT: f32 = 160.0;
const LABEL_HEIGHT: f32 = 16.0;

/// Bar chart of the top displayed quotes. Consumes only the label/value
/// series; it has no access to the quote list itself.
pub fn draw(ui: &mut egui::Ui, series: &ChartSeries) {
    if series.is_empty() {
        return;
    }

    ui.label(egui::RichText::new("Top 5 quotes").strong());

    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), CHART_HEIGHT),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);

    let max_value = series.values.iter().copied().max().unwrap_or(1).max(1) as f32;
    let slot_width = rect.width() / series.values.len() as f32;
    let bar_width = slot_width * 0.6;
    let plot_height = rect.height() - LABEL_HEIGHT;

    let bar_color = ui.visuals().selection.bg_fill;
    let text_color = ui.visuals().text_color();

    for (i, (&value, label)) in series.values.iter().zip(&series.labels).enumerate() {
        let center_x = rect.left() + slot_width * (i as f32 + 0.5);
        let bar_height = (value as f32 / max_value) * (plot_height - LABEL_HEIGHT);
        let bottom = rect.top() + plot_height;

        let bar = egui::Rect::from_min_max(
            egui::pos2(center_x - bar_width / 2.0, bottom - bar_height),
            egui::pos2(center_x + bar_width / 2.0, bottom),
        );
        painter.rect_filled(bar, egui::CornerRadius::same(2), bar_color);

        painter.text(
            egui::pos2(center_x, bar.top() - 2.0),
            egui::Align2::CENTER_BOTTOM,
            value.to_string(),
            egui::FontId::proportional(11.0),
            text_color,
        );

        painter.text(
            egui::pos2(center_x, bottom + 2.0),
            egui::Align2::CENTER_TOP,
            label,
            egui::FontId::proportional(10.0),
            text_color,
        );
    }

    ui.add_space(4.0);
    ui.separator();
}
