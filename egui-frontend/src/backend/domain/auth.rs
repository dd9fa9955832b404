use log::info;
use shared::User;

/// The authenticated user context consumed by the screens
#[derive(Debug, Clone)]
pub struct AuthSession {
    user: User,
}

impl AuthSession {
    pub fn new(user: User) -> Self {
        info!("👤 Signed in as {} ({})", user.name, user.id);
        Self { user }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn user_id(&self) -> &str {
        &self.user.id
    }
}
