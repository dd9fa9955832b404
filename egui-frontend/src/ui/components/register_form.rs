//! # Register Form
//!
//! Renders the "Cadastro" screen: name and amount inputs with inline errors,
//! the Income/Outcome toggles, the category button and the submit button.

use eframe::egui;
use shared::TransactionType;

use super::styling::{draw_field_error, draw_screen_header};
use super::theme::CURRENT_THEME;
use crate::backend::domain::FormField;
use crate::ui::app_state::GoFinancesApp;

const FORM_WIDTH: f32 = 360.0;

impl GoFinancesApp {
    pub fn render_register_screen(&mut self, ui: &mut egui::Ui) {
        draw_screen_header(ui, "Cadastro");
        ui.add_space(24.0);

        let mut submit_clicked = false;
        // Alerts and the category picker are modal over the form
        let interactive = self.register.is_interactive(&self.alerts);

        ui.add_enabled_ui(interactive, |ui| ui.vertical_centered(|ui| {
            ui.set_max_width(FORM_WIDTH);

            ui.add(egui::TextEdit::singleline(&mut self.register.form.name)
                .hint_text("Nome")
                .desired_width(FORM_WIDTH)
                .margin(egui::vec2(12.0, 10.0)));
            draw_field_error(ui, self.register.field_error(FormField::Name));

            ui.add(egui::TextEdit::singleline(&mut self.register.form.amount)
                .hint_text("Preço")
                .desired_width(FORM_WIDTH)
                .margin(egui::vec2(12.0, 10.0)));
            draw_field_error(ui, self.register.field_error(FormField::Amount));

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let button_width = (FORM_WIDTH - ui.spacing().item_spacing.x) / 2.0;
                for transaction_type in [TransactionType::Positive, TransactionType::Negative] {
                    if self.transaction_type_button(ui, transaction_type, button_width).clicked() {
                        self.register.select_transaction_type(transaction_type);
                    }
                }
            });

            ui.add_space(8.0);
            let category_name = self.register.category().name.clone();
            let category_button = egui::Button::new(egui::RichText::new(format!("{}  ▾", category_name))
                    .color(if self.register.category().is_selected() {
                        CURRENT_THEME.typography.title
                    } else {
                        CURRENT_THEME.typography.text
                    }))
                .fill(CURRENT_THEME.layout.shape)
                .min_size(egui::vec2(FORM_WIDTH, 44.0));
            if ui.add(category_button).clicked() {
                self.register.open_category_modal();
            }

            ui.add_space(32.0);
            let submit_button = egui::Button::new(egui::RichText::new("Enviar")
                    .color(egui::Color32::WHITE)
                    .strong())
                .fill(CURRENT_THEME.transaction.submit)
                .rounding(egui::Rounding::same(5.0))
                .min_size(egui::vec2(FORM_WIDTH, 48.0));
            submit_clicked = ui.add(submit_button).clicked();
        }));

        if submit_clicked {
            log::info!("📝 Register form submitted");
            self.submit_register_form();
        }
    }

    fn transaction_type_button(
        &self,
        ui: &mut egui::Ui,
        transaction_type: TransactionType,
        width: f32,
    ) -> egui::Response {
        let is_active = self.register.is_type_active(transaction_type);
        let (icon, accent, light) = match transaction_type {
            TransactionType::Positive => ("⬆", CURRENT_THEME.transaction.income, CURRENT_THEME.transaction.income_light),
            TransactionType::Negative => ("⬇", CURRENT_THEME.transaction.outcome, CURRENT_THEME.transaction.outcome_light),
        };

        let button = egui::Button::new(egui::RichText::new(format!("{} {}", icon, transaction_type.label()))
                .color(if is_active { accent } else { CURRENT_THEME.typography.title }))
            .fill(if is_active { light } else { egui::Color32::TRANSPARENT })
            .stroke(egui::Stroke::new(1.5, if is_active { accent } else { CURRENT_THEME.layout.border }))
            .rounding(egui::Rounding::same(5.0))
            .min_size(egui::vec2(width, 48.0));

        ui.add(button)
    }
}
