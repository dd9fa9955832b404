//! # UI Components Module
//!
//! - `register_form`: the "Cadastro" screen
//! - `category_select`: category picker modal
//! - `alert_dialog`: blocking alerts
//! - `listing`: the "Listagem" screen
//! - `styling` / `theme`: global style and palette

pub mod alert_dialog;
pub mod category_select;
pub mod listing;
pub mod register_form;
pub mod styling;
pub mod theme;

pub use styling::setup_app_style;
pub use theme::*;
