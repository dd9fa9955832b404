//! # Listing Screen
//!
//! "Listagem": the signed-in user's transactions in the order they were
//! registered.

use eframe::egui;
use shared::TransactionType;

use super::styling::draw_screen_header;
use super::theme::CURRENT_THEME;
use crate::ui::app_state::GoFinancesApp;
use crate::ui::state::listing_state::{category_display_name, format_listing_amount};

impl GoFinancesApp {
    pub fn render_listing_screen(&mut self, ui: &mut egui::Ui) {
        draw_screen_header(ui, "Listagem");
        ui.add_space(12.0);

        let mut back_clicked = false;
        ui.horizontal(|ui| {
            ui.add_space(16.0);
            back_clicked = ui.button("← Cadastro").clicked();
        });

        if let Some(error) = &self.listing.error_message {
            ui.label(egui::RichText::new(error).color(CURRENT_THEME.typography.error));
        } else if self.listing.transactions.is_empty() {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Nenhuma transação cadastrada")
                    .color(CURRENT_THEME.typography.text));
            });
        } else {
            egui::ScrollArea::vertical().show(ui, |ui| {
                for transaction in &self.listing.transactions {
                    egui::Frame::none()
                        .fill(CURRENT_THEME.layout.shape)
                        .rounding(egui::Rounding::same(5.0))
                        .inner_margin(egui::Margin::symmetric(16.0, 12.0))
                        .outer_margin(egui::Margin::symmetric(16.0, 4.0))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(egui::RichText::new(&transaction.name).color(CURRENT_THEME.typography.title));

                            let amount_color = match transaction.transaction_type {
                                TransactionType::Positive => CURRENT_THEME.transaction.income,
                                TransactionType::Negative => CURRENT_THEME.transaction.outcome,
                            };
                            ui.label(egui::RichText::new(format_listing_amount(transaction))
                                .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                                .color(amount_color));

                            ui.horizontal(|ui| {
                                ui.label(egui::RichText::new(category_display_name(transaction))
                                    .color(CURRENT_THEME.typography.text));
                                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                    ui.label(egui::RichText::new(transaction.date.format("%d/%m/%y").to_string())
                                        .color(CURRENT_THEME.typography.text));
                                });
                            });
                        });
                }
            });
        }

        if back_clicked {
            self.navigation.go_back();
        }
    }
}
