/// Local authentication flag of a mounted view.
///
/// There is no separate "initializing" value: while the single
/// initialization is in flight the state is still `Unauthenticated`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

impl From<bool> for SessionState {
    fn from(authenticated: bool) -> Self {
        match authenticated {
            true => Self::Authenticated,
            false => Self::Unauthenticated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unauthenticated() {
        assert!(SessionState::default() == SessionState::Unauthenticated);
    }

    #[test]
    fn from_provider_flag() {
        assert!(SessionState::from(true).is_authenticated());
        assert!(!SessionState::from(false).is_authenticated());
    }
}
