//! # Category Select Modal
//!
//! The category picker presented over the register screen. Picking an entry
//! sets the register screen's category and closes the picker; "Selecionar"
//! closes it keeping the current choice.

use eframe::egui;
use shared::{Category, CATEGORIES};

use super::styling::category_color;
use super::theme::CURRENT_THEME;
use crate::ui::app_state::GoFinancesApp;

impl GoFinancesApp {
    pub fn render_category_select_modal(&mut self, ctx: &egui::Context) {
        if !self.register.is_category_modal_open() {
            return;
        }

        let mut close = false;

        egui::Window::new("Categoria")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.set_min_width(320.0);

                for info in CATEGORIES.iter() {
                    let is_active = self.register.category().key == info.key;
                    let text = egui::RichText::new(format!("●  {}", info.name))
                        .color(if is_active { category_color(info.color) } else { CURRENT_THEME.typography.title });

                    let response = ui.add_sized(
                        [ui.available_width(), 36.0],
                        egui::SelectableLabel::new(is_active, text),
                    );
                    if response.clicked() {
                        log::info!("🏷️ Category selected: {}", info.key);
                        self.register.set_category(Category::from(info));
                        close = true;
                    }
                }

                ui.separator();
                let select_button = egui::Button::new(egui::RichText::new("Selecionar").color(egui::Color32::WHITE))
                    .fill(CURRENT_THEME.transaction.submit)
                    .min_size(egui::vec2(ui.available_width(), 40.0));
                if ui.add(select_button).clicked() {
                    close = true;
                }
            });

        if close {
            self.register.close_category_modal();
        }
    }
}
