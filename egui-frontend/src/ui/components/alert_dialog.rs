use eframe::egui;

use crate::ui::app_state::GoFinancesApp;

impl GoFinancesApp {
    /// Show the pending alert, if any, until the user presses OK
    pub fn render_alert_dialog(&mut self, ctx: &egui::Context) {
        let Some(alert) = self.alerts.current() else {
            return;
        };
        let message = alert.message.clone();

        let mut dismissed = false;
        egui::Window::new("Alerta")
            .id(egui::Id::new("alert_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.set_min_width(260.0);
                ui.label(message);
                ui.add_space(12.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed || ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.alerts.dismiss();
        }
    }
}
