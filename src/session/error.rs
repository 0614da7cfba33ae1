/// Failures surfaced by the identity provider client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Provider unreachable, misconfigured, or rejected the login.
    InitializationFailed(String),
    /// Session ended by the provider after it was established.
    SessionExpired,
    /// Provider failed to end the session.
    LogoutFailed(String),
}

impl SessionError {
    /// Any error out of session initialization, as `InitializationFailed`.
    pub fn into_initialization(self) -> Self {
        match self {
            Self::InitializationFailed(_) => self,
            other => Self::InitializationFailed(other.to_string()),
        }
    }
    /// Any error out of ending the session, as `LogoutFailed`.
    pub fn into_logout(self) -> Self {
        match self {
            Self::LogoutFailed(_) => self,
            other => Self::LogoutFailed(other.to_string()),
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InitializationFailed(s) => write!(f, "initialization failed: {}", s),
            Self::SessionExpired => write!(f, "session expired"),
            Self::LogoutFailed(s) => write!(f, "logout failed: {}", s),
        }
    }
}

impl std::error::Error for SessionError {}
