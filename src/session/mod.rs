//! Session lifecycle for the login-gated view.
//!
//! [`Session`] holds the state and decides what happens next without doing
//! any I/O; [`SessionView`] performs those decisions against an injected
//! [`IdentityClient`](crate::identity::IdentityClient).
mod command;
mod error;
mod lifetime;
mod machine;
mod screen;
mod spawner;
mod state;
mod view;

pub use command::*;
pub use error::*;
pub use lifetime::*;
pub use machine::*;
pub use screen::*;
pub use spawner::*;
pub use state::*;
pub use view::*;
