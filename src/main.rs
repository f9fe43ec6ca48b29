use eframe::egui;
use quotevote::gui::VoteApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 680.0])
            .with_min_inner_size([480.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native("Quote Vote", options, Box::new(|cc| Ok(Box::new(VoteApp::new(cc)))))
}
