use eframe::egui;

/// The login boundary. Collects credentials and reports a submit intent;
/// the session itself is the backend's business.
#[derive(Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub submitting: bool,
}

impl LoginForm {
    pub fn clear(&mut self) {
        self.username.clear();
        self.password.clear();
        self.submitting = false;
    }

    /// Renders the form. Returns true when the user asked to log in.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let mut submit = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.25);
                ui.heading("Quote Vote");
                ui.add_space(20.0);

                ui.scope(|ui| {
                    ui.set_max_width(280.0);

                    ui.label("Username");
                    let username = ui.add(
                        egui::TextEdit::singleline(&mut self.username)
                            .hint_text("Username")
                            .desired_width(f32::INFINITY),
                    );

                    ui.add_space(8.0);

                    ui.label("Password");
                    let password = ui.add(
                        egui::TextEdit::singleline(&mut self.password)
                            .hint_text("Password")
                            .password(true)
                            .desired_width(f32::INFINITY),
                    );

                    ui.add_space(16.0);

                    let can_submit = !self.submitting
                        && !self.username.trim().is_empty()
                        && !self.password.is_empty();

                    let clicked = ui
                        .add_enabled(
                            can_submit,
                            egui::Button::new("Log in").min_size(egui::vec2(280.0, 32.0)),
                        )
                        .clicked();

                    let entered = can_submit
                        && (username.lost_focus() || password.lost_focus())
                        && ui.input(|i| i.key_pressed(egui::Key::Enter));

                    if clicked || entered {
                        submit = true;
                    }
                });
            });
        });

        submit
    }
}
