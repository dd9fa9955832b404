//! # UI Module
//!
//! egui rendering and the state it drives.
//!
//! - `state`: screen controllers, navigation and alerts (no egui types)
//! - `components`: rendering of each screen and modal
//! - `app_state` / `app_coordinator`: the app struct and its update loop

pub mod app_coordinator;
pub mod app_state;
pub mod components;
pub mod state;

pub use app_state::GoFinancesApp;
