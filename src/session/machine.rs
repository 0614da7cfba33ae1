use super::*;
use crate::identity::Identity;
use crate::identity::InitOptions;

/// Sans-IO session lifecycle of one mounted view.
///
/// - `mount` yields [`Command::Initialize`] exactly once
/// - `resolve` records the provider's answer (monotonic: never back to unauthenticated)
/// - `logout` yields [`Command::EndSession`] without touching local state
/// - `screen` turns the state into a render decision
#[derive(Debug, Default, Clone)]
pub struct Session {
    state: SessionState,
    options: InitOptions,
    mounted: bool,
    failure: Option<SessionError>,
}

impl Session {
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// First mount starts initialization; every later call is a no-op.
    pub fn mount(&mut self) -> Option<Command> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        Some(Command::Initialize(self.options))
    }

    /// Applies the outcome of the initialization started by `mount`.
    pub fn resolve(&mut self, outcome: Result<bool, SessionError>) {
        match outcome {
            Ok(authenticated) => {
                if self.state.is_authenticated() {
                    return;
                }
                self.state = SessionState::from(authenticated);
                if !authenticated {
                    log::debug!("provider reported no session, staying on placeholder");
                }
            }
            Err(error) => {
                self.failure = Some(error.into_initialization());
            }
        }
    }

    /// Logout control press. Leaves local state untouched; the provider
    /// performs any redirect itself.
    pub fn logout(&self) -> Option<Command> {
        match self.state {
            SessionState::Authenticated => Some(Command::EndSession),
            SessionState::Unauthenticated => None,
        }
    }

    pub fn screen(&self, identity: Option<&Identity>) -> Screen {
        match (self.state, &self.failure) {
            (SessionState::Authenticated, _) => Screen::Welcome {
                username: identity
                    .and_then(Identity::preferred_username)
                    .map(str::to_string),
            },
            (SessionState::Unauthenticated, Some(failure)) => Screen::Failed {
                reason: failure.to_string(),
            },
            (SessionState::Unauthenticated, None) => Screen::Loading,
        }
    }
}
