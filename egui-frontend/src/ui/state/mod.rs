//! # UI State
//!
//! Plain state structs owned by the app, kept free of egui so the screen
//! logic can be exercised in unit tests.

pub mod alert_state;
pub mod listing_state;
pub mod navigation_state;
pub mod register_state;

pub use alert_state::{Alert, AlertState};
pub use listing_state::ListingState;
pub use navigation_state::NavigationState;
pub use register_state::{RegisterScreen, SubmitOutcome};
