//! # Alert State
//!
//! Blocking alert dialogs. Alerts are queued and shown one at a time until the
//! user dismisses them.

use std::collections::VecDeque;

pub const SELECT_TRANSACTION_TYPE: &str = "Selecione o tipo de transação";
pub const SELECT_CATEGORY: &str = "Selecione a categoria";
pub const SAVE_FAILED: &str = "Não foi possível salvar";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
}

impl Alert {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[derive(Debug, Default)]
pub struct AlertState {
    pending: VecDeque<Alert>,
}

impl AlertState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>) {
        let alert = Alert::new(message);
        log::info!("⚠️ Alert: {}", alert.message);
        self.pending.push_back(alert);
    }

    /// The alert currently on screen
    pub fn current(&self) -> Option<&Alert> {
        self.pending.front()
    }

    /// Close the alert on screen, revealing the next one if any
    pub fn dismiss(&mut self) -> Option<Alert> {
        self.pending.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
