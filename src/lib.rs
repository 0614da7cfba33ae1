//! Login-gated browser client backed by an external identity provider.
//!
//! Authentication is delegated entirely to Keycloak through `keycloak-js`;
//! this crate only decides what to render while a session is being
//! established and after it exists.
//!
//! ## Core
//!
//! - [`session::Session`] — Sans-IO state machine (mount, resolve, logout)
//! - [`session::SessionView`] — Drives a [`session::Session`] against an injected client
//! - [`session::Screen`] — Render decision (loading, welcome, failure)
//!
//! ## Collaborators
//!
//! - [`identity::IdentityClient`] — Opaque provider client seam
//! - [`identity::Identity`] — Provider-parsed claim set, read defensively
//! - [`wasm::KeycloakClient`] — `keycloak-js` binding used in the browser
//!
//! ## Front end
//!
//! - `ui` — leptos components, behind the `client` feature
pub mod config;
pub mod identity;
pub mod logging;
pub mod session;
pub mod wasm;

#[cfg(feature = "client")]
pub mod ui;

// ============================================================================
// IDENTITY PROVIDER DEFAULTS
// Overridable at build time; trunk forwards the environment to rustc.
// ============================================================================
/// Base URL of the Keycloak server.
pub const KEYCLOAK_URL: &str = match option_env!("KEYCLOAK_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};
/// Realm the client is registered in.
pub const KEYCLOAK_REALM: &str = match option_env!("KEYCLOAK_REALM") {
    Some(realm) => realm,
    None => "myrealm",
};
/// Public client id registered with the realm.
pub const KEYCLOAK_CLIENT_ID: &str = match option_env!("KEYCLOAK_CLIENT_ID") {
    Some(id) => id,
    None => "myclient",
};

// ============================================================================
// RENDERING
// ============================================================================
/// Placeholder shown while the session is not (yet) authenticated.
pub const LOADING_TEXT: &str = "Loading Keycloak...";
/// Greeting printed before the preferred username.
pub const WELCOME_PREFIX: &str = "Welcome, ";
/// Label of the logout control.
pub const LOGOUT_LABEL: &str = "Logout";
/// Document title set by the front end.
pub const PAGE_TITLE: &str = "keygate";

// ============================================================================
// LOGGING
// ============================================================================
/// Log level filter, overridable at build time via KEYGATE_LOG.
pub const LOG_LEVEL: &str = match option_env!("KEYGATE_LOG") {
    Some(level) => level,
    None => "info",
};
