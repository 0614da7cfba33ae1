use super::*;
use crate::identity::IdentityClient;
use futures::FutureExt;
use std::cell::RefCell;
use std::rc::Rc;

/// Login-gated view bound to an injected identity client.
///
/// Owns the local [`Session`], performs its commands on a [`Spawner`], and
/// calls the listener whenever an asynchronous completion changed what
/// [`SessionView::render`] returns.
pub struct SessionView<C, S> {
    client: Rc<C>,
    spawner: S,
    session: Rc<RefCell<Session>>,
    lifetime: Lifetime,
    listener: Rc<dyn Fn()>,
}

impl<C, S> SessionView<C, S>
where
    C: IdentityClient + 'static,
    S: Spawner,
{
    pub fn new(client: Rc<C>, spawner: S) -> Self {
        Self {
            client,
            spawner,
            session: Rc::new(RefCell::new(Session::default())),
            lifetime: Lifetime::default(),
            listener: Rc::new(|| {}),
        }
    }
    /// Called after every asynchronous state change.
    pub fn with_listener(self, listener: impl Fn() + 'static) -> Self {
        Self {
            listener: Rc::new(listener),
            ..self
        }
    }

    /// Teardown handle. Ending it discards in-flight completions; it is
    /// `Send + Sync`, so framework cleanup hooks can own it.
    pub fn lifetime(&self) -> Lifetime {
        self.lifetime.clone()
    }
    pub fn state(&self) -> SessionState {
        self.session.borrow().state()
    }

    /// Starts initialization on first mount. The outcome is recorded in a
    /// later turn, and only while the view is still alive.
    pub fn mount(&self) {
        let Some(command) = self.session.borrow_mut().mount() else {
            log::debug!("already mounted, skipping initialization");
            return;
        };
        let Command::Initialize(options) = command else {
            return;
        };
        log::info!("{:<32}{:<32}", "initializing session", options.on_load());
        let client = self.client.clone();
        let session = self.session.clone();
        let lifetime = self.lifetime.clone();
        let listener = self.listener.clone();
        self.spawner.spawn(
            async move {
                let outcome = client.initialize(options).await;
                if !lifetime.alive() {
                    log::debug!("view unmounted before initialization resolved");
                    return;
                }
                match &outcome {
                    Ok(true) => log::info!("session established"),
                    Ok(false) => log::info!("no session established"),
                    Err(e) => log::warn!("{}", e),
                }
                session.borrow_mut().resolve(outcome);
                listener();
            }
            .boxed_local(),
        );
    }

    pub fn render(&self) -> Screen {
        let identity = self.client.identity();
        self.session.borrow().screen(identity.as_ref())
    }

    /// Logout control press. Fire-and-forget: nothing is awaited by the
    /// caller and the local state is not reset.
    pub fn logout(&self) {
        let Some(Command::EndSession) = self.session.borrow().logout() else {
            log::debug!("logout ignored, no session");
            return;
        };
        log::info!("ending session");
        let client = self.client.clone();
        self.spawner.spawn(
            async move {
                if let Err(e) = client.end_session().await {
                    log::warn!("{}", e.into_logout());
                }
            }
            .boxed_local(),
        );
    }
}
