//! The identity provider, seen from the view.
//!
//! Login UI, redirects, token issuance and validation all live behind
//! [`IdentityClient`]. The view only starts a session, ends it, and reads
//! the claims the provider already parsed.
mod claims;
#[cfg(test)]
mod mock;
mod options;

pub use claims::*;
#[cfg(test)]
pub use mock::*;
pub use options::*;

use crate::session::SessionError;

/// Opaque client for an external identity provider.
///
/// Futures are not `Send`: the browser implementation awaits JS promises.
#[async_trait::async_trait(?Send)]
pub trait IdentityClient {
    /// Establish a session. Resolves to whether one is now active.
    async fn initialize(&self, options: InitOptions) -> Result<bool, SessionError>;
    /// Terminate the active session. The provider may redirect on its own.
    async fn end_session(&self) -> Result<(), SessionError>;
    /// Claims parsed by the provider, if a session has been established.
    fn identity(&self) -> Option<Identity>;
}
