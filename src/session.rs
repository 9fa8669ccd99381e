use crate::model::AppState;

/// In-memory authentication state. Establishing and clearing it is driven by
/// the login/logout flows; persistence goes through `ConfigStore`.
#[derive(Clone, Debug, Default)]
pub struct AuthSession {
    token: Option<String>,
    username: Option<String>,
}

impl AuthSession {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            token: state.token.clone(),
            username: state.username.clone(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn establish(&mut self, token: String, username: String) {
        self.token = Some(token);
        self.username = Some(username);
    }

    pub fn clear(&mut self) {
        self.token = None;
        self.username = None;
    }
}
