use log::info;
use shared::Route;

/// Stack navigator holding the visible screen
#[derive(Debug)]
pub struct NavigationState {
    stack: Vec<Route>,
}

impl NavigationState {
    pub fn new(initial: Route) -> Self {
        Self { stack: vec![initial] }
    }

    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Register)
    }

    /// Show `route`. Navigating to a route already on the stack returns to it.
    pub fn navigate(&mut self, route: Route) {
        info!("🧭 Navigating to {}", route.name());
        if let Some(position) = self.stack.iter().position(|r| *r == route) {
            self.stack.truncate(position + 1);
        } else {
            self.stack.push(route);
        }
    }

    /// Pop the current screen; the root screen stays
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(Route::Register)
    }
}
