//! # Styling Module
//!
//! Global egui style setup and the small drawing helpers shared by the
//! screens.

use eframe::egui;

use super::theme::CURRENT_THEME;

/// Configure global egui styling for the app
pub fn setup_app_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.panel_fill = CURRENT_THEME.layout.background;
        style.visuals.window_fill = CURRENT_THEME.layout.shape;
        style.visuals.button_frame = true;

        // In egui 0.28 text edits use extreme_bg_color
        style.visuals.extreme_bg_color = CURRENT_THEME.layout.shape;

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(20.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );

        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style
    });
}

/// Purple band with the screen title
pub fn draw_screen_header(ui: &mut egui::Ui, title: &str) {
    egui::Frame::none()
        .fill(CURRENT_THEME.layout.header)
        .inner_margin(egui::Margin::symmetric(16.0, 20.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(title)
                    .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                    .color(CURRENT_THEME.typography.on_header));
            });
        });
}

/// Inline field error under an input
pub fn draw_field_error(ui: &mut egui::Ui, error: Option<&str>) {
    if let Some(error) = error {
        ui.label(egui::RichText::new(error)
            .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
            .color(CURRENT_THEME.typography.error));
    }
}

/// Convert a catalogue RGB triple into an egui color
pub fn category_color(rgb: (u8, u8, u8)) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}
