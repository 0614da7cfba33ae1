/// What the view shows for its current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Placeholder while not authenticated. No interactive elements.
    Loading,
    /// Greeting plus a logout control. The username is absent when the
    /// provider did not supply a display name.
    Welcome { username: Option<String> },
    /// Initialization failed; shown instead of a perpetual placeholder.
    Failed { reason: String },
}

#[cfg(test)]
impl Screen {
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Welcome { username } => username.as_deref(),
            _ => None,
        }
    }
    /// Only the welcome screen carries the logout control.
    pub fn has_logout(&self) -> bool {
        matches!(self, Self::Welcome { .. })
    }
}
