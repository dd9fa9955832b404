//! # App State Module
//!
//! The central application struct. It owns the backend connection, the
//! navigator, the alert queue and the per-screen state, and exposes the
//! actions the rendering code triggers.

use log::{error, info};

use crate::backend::Backend;
use crate::ui::state::{AlertState, ListingState, NavigationState, RegisterScreen, SubmitOutcome};

pub struct GoFinancesApp {
    pub backend: Backend,
    pub navigation: NavigationState,
    pub alerts: AlertState,
    pub register: RegisterScreen,
    pub listing: ListingState,
}

impl GoFinancesApp {
    pub fn new(backend: Backend) -> Self {
        let user = backend.auth.user();
        info!("🚀 Initializing GoFinancesApp for {} <{}>", user.name, user.email);
        Self {
            backend,
            navigation: NavigationState::default(),
            alerts: AlertState::new(),
            register: RegisterScreen::new(),
            listing: ListingState::new(),
        }
    }

    /// Submit the register form, blocking the UI thread until storage answers
    pub fn submit_register_form(&mut self) -> SubmitOutcome {
        let user_id = self.backend.auth.user_id();
        let outcome = self.backend.block_on(self.register.submit(
            &self.backend.transaction_service,
            user_id,
            &mut self.navigation,
            &mut self.alerts,
        ));

        if matches!(outcome, SubmitOutcome::Saved(_)) {
            self.listing.mark_stale();
        }
        outcome
    }

    /// Reload the listing if a save happened since the last load
    pub fn refresh_listing_if_stale(&mut self) {
        if !self.listing.is_stale() {
            return;
        }

        let user_id = self.backend.auth.user_id();
        match self.backend.block_on(self.backend.transaction_service.list_transactions(user_id)) {
            Ok(transactions) => {
                info!("📋 Loaded {} transactions", transactions.len());
                self.listing.set_loaded(transactions);
            }
            Err(e) => {
                error!("Failed to load transactions: {}", e);
                self.listing.set_error(format!("Não foi possível carregar as transações: {}", e));
            }
        }
    }
}
