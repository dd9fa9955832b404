//! # App Coordinator Module
//!
//! The eframe update loop: apply styling, render the screen for the current
//! route, then any modal on top (category picker, alert).

use eframe::egui;
use shared::Route;

use crate::ui::app_state::GoFinancesApp;
use crate::ui::components::setup_app_style;

impl eframe::App for GoFinancesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_app_style(ctx);

        // ESC closes the category picker
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.register.close_category_modal();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(crate::ui::components::CURRENT_THEME.layout.background))
            .show(ctx, |ui| match self.navigation.current() {
                Route::Register => self.render_register_screen(ui),
                Route::Listing => {
                    self.refresh_listing_if_stale();
                    self.render_listing_screen(ui);
                }
            });

        self.render_category_select_modal(ctx);
        self.render_alert_dialog(ctx);
    }
}
