use eframe::egui;

use crate::core::ErrorSignal;

/// Modal over the controller's single error slot. Returns true when the
/// user acknowledged it; the app decides what acknowledgment means (auth
/// failures end the session instead of just closing).
pub struct ErrorModal;

impl ErrorModal {
    pub fn show(ctx: &egui::Context, signal: &ErrorSignal) -> bool {
        let title = if signal.auth_failure { "Session required" } else { "Something went wrong" };

        let modal = egui::Modal::new(egui::Id::new("error_modal")).show(ctx, |ui| {
            ui.set_width(380.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(24.0).color(egui::Color32::RED));
                ui.label(egui::RichText::new(title).size(18.0).strong());
            });

            ui.add_space(10.0);

            ui.label(egui::RichText::new(&signal.message).size(14.0));

            ui.add_space(15.0);

            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("OK").clicked() {
                        ui.close();
                    }
                });
            });
        });

        modal.should_close()
    }
}
