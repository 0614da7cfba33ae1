use crate::config::KeycloakConfig;
use crate::identity::*;
use crate::session::SessionError;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

// keycloak-js adapter, loaded as a global by index.html

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    type Keycloak;

    #[wasm_bindgen(constructor, catch)]
    fn new(config: &JsValue) -> Result<Keycloak, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn init(this: &Keycloak, options: &JsValue) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn logout(this: &Keycloak) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method, getter, js_name = tokenParsed)]
    fn token_parsed(this: &Keycloak) -> JsValue;
}

/// Serde value to plain JS object, via JSON.
fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, String> {
    let json = serde_json::to_string(value).map_err(|e| e.to_string())?;
    js_sys::JSON::parse(&json).map_err(|ref e| describe(e))
}

/// Best-effort text for a rejected promise or thrown value.
fn describe(error: &JsValue) -> String {
    error
        .as_string()
        .or_else(|| {
            error
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .or_else(|| js_sys::JSON::stringify(error).ok().and_then(|s| s.as_string()))
        .unwrap_or_else(|| "unknown error".to_string())
}

/// Identity client backed by a `keycloak-js` instance.
#[derive(Debug)]
pub struct KeycloakClient {
    inner: Keycloak,
}

impl KeycloakClient {
    pub fn new(config: KeycloakConfig) -> Result<Self, SessionError> {
        let ref options = to_js(&config).map_err(SessionError::InitializationFailed)?;
        let inner = Keycloak::new(options)
            .map_err(|ref e| SessionError::InitializationFailed(describe(e)))?;
        log::info!("{:<32}{}", "created keycloak adapter", config);
        Ok(Self { inner })
    }
}

#[async_trait::async_trait(?Send)]
impl IdentityClient for KeycloakClient {
    async fn initialize(&self, options: InitOptions) -> Result<bool, SessionError> {
        let ref options = to_js(&options).map_err(SessionError::InitializationFailed)?;
        let promise = self
            .inner
            .init(options)
            .map_err(|ref e| SessionError::InitializationFailed(describe(e)))?;
        JsFuture::from(promise)
            .await
            .map(|authenticated| authenticated.as_bool().unwrap_or(false))
            .map_err(|ref e| SessionError::InitializationFailed(describe(e)))
    }
    async fn end_session(&self) -> Result<(), SessionError> {
        let promise = self
            .inner
            .logout()
            .map_err(|ref e| SessionError::LogoutFailed(describe(e)))?;
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|ref e| SessionError::LogoutFailed(describe(e)))
    }
    fn identity(&self) -> Option<Identity> {
        let claims = self.inner.token_parsed();
        if claims.is_undefined() || claims.is_null() {
            return None;
        }
        js_sys::JSON::stringify(&claims)
            .ok()
            .and_then(|json| json.as_string())
            .and_then(|json| {
                Identity::try_from(json.as_str())
                    .inspect_err(|e| log::warn!("{}", e))
                    .ok()
            })
    }
}

/// Browser entry setup: panic messages and log records go to the console.
pub fn start() {
    console_error_panic_hook::set_once();
    crate::logging::init();
}
