/// Authentication lifecycle state for one remote connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Disconnected,
    Connected,
}

/// The session token and its state. Owned exclusively by the dispatcher;
/// the token is discarded on close.
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
    token: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == SessionState::Connected
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Single transition into `Connected`, capturing the token returned by
    /// the open operation.
    pub fn connect(&mut self, token: String) {
        self.state = SessionState::Connected;
        self.token = Some(token);
    }

    /// Single transition into `Disconnected`; the token is dropped.
    pub fn disconnect(&mut self) {
        self.state = SessionState::Disconnected;
        self.token = None;
    }
}
