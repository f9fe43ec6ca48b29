use eframe::egui;

/// Dimmed full-window spinner. Consumes a single boolean; the controller's
/// coarse loading flag and the login submission both feed it.
pub struct LoadingOverlay;

impl LoadingOverlay {
    pub fn show(ctx: &egui::Context, active: bool) {
        if !active {
            return;
        }

        // Background dim
        egui::Area::new(egui::Id::new("loading_overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::Pos2::new(0.0, 0.0))
            .show(ctx, |ui| {
                let screen_size = ui.ctx().screen_rect().size();
                ui.allocate_space(screen_size);
                ui.painter().rect_filled(
                    ui.ctx().screen_rect(),
                    0.0,
                    egui::Color32::from_black_alpha(120),
                );
            });

        egui::Window::new("loading_spinner")
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .fixed_size(egui::Vec2::new(160.0, 80.0))
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::new(0.0, 0.0))
            .show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.add(egui::Spinner::new().size(28.0));
                });
            });
    }
}
