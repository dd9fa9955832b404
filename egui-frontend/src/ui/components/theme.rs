//! # Theme Configuration
//!
//! Centralized colors for the GoFinances screens. All visual styling should
//! use these constants so the palette can be changed in one place.

use eframe::egui::Color32;

#[derive(Debug, Clone)]
pub struct Theme {
    pub layout: LayoutColors,
    pub typography: TypographyColors,
    pub transaction: TransactionColors,
}

/// Background and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    pub background: Color32,
    /// Header band behind the screen title
    pub header: Color32,
    /// Inputs, cards and inactive buttons
    pub shape: Color32,
    pub border: Color32,
}

#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub title: Color32,
    pub text: Color32,
    pub on_header: Color32,
    pub error: Color32,
}

/// Income/outcome accents and the submit button
#[derive(Debug, Clone)]
pub struct TransactionColors {
    pub income: Color32,
    pub income_light: Color32,
    pub outcome: Color32,
    pub outcome_light: Color32,
    pub submit: Color32,
}

pub const CURRENT_THEME: Theme = Theme {
    layout: LayoutColors {
        background: Color32::from_rgb(0xF0, 0xF2, 0xF5),
        header: Color32::from_rgb(0x56, 0x36, 0xD3),
        shape: Color32::WHITE,
        border: Color32::from_rgb(0xD6, 0xD9, 0xE0),
    },
    typography: TypographyColors {
        title: Color32::from_rgb(0x36, 0x3F, 0x5F),
        text: Color32::from_rgb(0x96, 0x9C, 0xB2),
        on_header: Color32::WHITE,
        error: Color32::from_rgb(0xE8, 0x3F, 0x5B),
    },
    transaction: TransactionColors {
        income: Color32::from_rgb(0x12, 0xA4, 0x54),
        income_light: Color32::from_rgb(0xE7, 0xF6, 0xEE),
        outcome: Color32::from_rgb(0xE8, 0x3F, 0x5B),
        outcome_light: Color32::from_rgb(0xFD, 0xEC, 0xEF),
        submit: Color32::from_rgb(0xFF, 0x87, 0x2C),
    },
};
