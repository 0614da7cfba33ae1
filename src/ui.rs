use crate::LOADING_TEXT;
use crate::LOGOUT_LABEL;
use crate::PAGE_TITLE;
use crate::WELCOME_PREFIX;
use crate::config::KeycloakConfig;
use crate::identity::IdentityClient;
use crate::session::Browser;
use crate::session::Screen;
use crate::session::SessionView;
use crate::wasm::KeycloakClient;
use leptos::prelude::*;
use leptos_meta::*;
use std::rc::Rc;

/// Root component: builds the Keycloak client from build-time config.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let client = KeycloakConfig::from_env()
        .map_err(|e| e.to_string())
        .and_then(|config| KeycloakClient::new(config).map_err(|e| e.to_string()));
    let body = match client {
        Ok(client) => view! { <SessionPanel client=Rc::new(client) /> }.into_any(),
        Err(reason) => {
            log::error!("{}", reason);
            view! { <Failure reason=reason /> }.into_any()
        }
    };
    view! {
        <Title text=PAGE_TITLE />
        {body}
    }
}

/// Login-gated panel over any identity client.
/// Initializes once after mount and re-renders when the session resolves.
#[component]
pub fn SessionPanel<C>(client: Rc<C>) -> impl IntoView
where
    C: IdentityClient + 'static,
{
    let tick = RwSignal::new(0usize);
    let session = SessionView::new(client, Browser).with_listener(move || {
        tick.try_update(|n| *n += 1);
    });
    let lifetime = session.lifetime();
    on_cleanup(move || lifetime.end());
    let session = StoredValue::new_local(session);
    Effect::new(move |_| session.with_value(SessionView::mount));
    move || {
        tick.track();
        match session.with_value(SessionView::render) {
            Screen::Loading => view! { <div class="loading">{LOADING_TEXT}</div> }.into_any(),
            Screen::Welcome { username } => view! {
                <div>
                    <h2>{WELCOME_PREFIX}{username}</h2>
                    <button on:click=move |_| session.with_value(SessionView::logout)>
                        {LOGOUT_LABEL}
                    </button>
                </div>
            }
            .into_any(),
            Screen::Failed { reason } => view! { <Failure reason=reason /> }.into_any(),
        }
    }
}

#[component]
fn Failure(reason: String) -> impl IntoView {
    view! { <div class="error" role="alert">{reason}</div> }
}
