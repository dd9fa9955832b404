//! GoFinances transaction register.
//!
//! `backend` holds storage and domain logic, `ui` the egui screens.

pub mod backend;
pub mod ui;
