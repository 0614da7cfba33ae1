use super::*;
use futures::channel::oneshot;
use std::cell::Cell;
use std::cell::RefCell;

/// Scripted identity client for driving views in tests.
/// Counts calls and either resolves immediately or waits on a sender.
#[derive(Default)]
pub struct MockClient {
    outcome: RefCell<Option<Result<bool, SessionError>>>,
    pending: RefCell<Option<oneshot::Receiver<Result<bool, SessionError>>>>,
    logout: RefCell<Option<SessionError>>,
    identity: Option<Identity>,
    options: Cell<Option<InitOptions>>,
    inits: Cell<usize>,
    ends: Cell<usize>,
}

impl MockClient {
    /// Resolves initialization with `outcome` on first poll.
    pub fn resolving(outcome: Result<bool, SessionError>) -> Self {
        Self {
            outcome: RefCell::new(Some(outcome)),
            ..Self::default()
        }
    }
    /// Initialization stays pending until the returned sender fires.
    pub fn pending() -> (Self, oneshot::Sender<Result<bool, SessionError>>) {
        let (tx, rx) = oneshot::channel();
        let client = Self {
            pending: RefCell::new(Some(rx)),
            ..Self::default()
        };
        (client, tx)
    }
    pub fn with_identity(self, identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            ..self
        }
    }
    pub fn with_username(self, username: &str) -> Self {
        let claims = serde_json::json!({ "preferred_username": username });
        self.with_identity(serde_json::from_value(claims).unwrap())
    }
    pub fn failing_logout(self, error: SessionError) -> Self {
        *self.logout.borrow_mut() = Some(error);
        self
    }
    pub fn inits(&self) -> usize {
        self.inits.get()
    }
    pub fn ends(&self) -> usize {
        self.ends.get()
    }
    pub fn options(&self) -> Option<InitOptions> {
        self.options.get()
    }
}

#[async_trait::async_trait(?Send)]
impl IdentityClient for MockClient {
    async fn initialize(&self, options: InitOptions) -> Result<bool, SessionError> {
        self.inits.set(self.inits.get() + 1);
        self.options.set(Some(options));
        let pending = self.pending.borrow_mut().take();
        match pending {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(SessionError::InitializationFailed("dropped".into()))),
            None => self
                .outcome
                .borrow()
                .clone()
                .unwrap_or_else(|| Err(SessionError::InitializationFailed("unscripted".into()))),
        }
    }
    async fn end_session(&self) -> Result<(), SessionError> {
        self.ends.set(self.ends.get() + 1);
        match self.logout.borrow().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
    fn identity(&self) -> Option<Identity> {
        self.identity.clone()
    }
}
