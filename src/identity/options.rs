use serde::Serialize;

/// What the provider does on load when no session exists yet.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OnLoad {
    /// Force an interactive login.
    #[default]
    #[serde(rename = "login-required")]
    LoginRequired,
}

impl std::fmt::Display for OnLoad {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::LoginRequired => f.pad("login-required"),
        }
    }
}

/// Options passed to session initialization.
/// Serializes to the `keycloak-js` init options object.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitOptions {
    on_load: OnLoad,
}

impl InitOptions {
    pub fn on_load(&self) -> OnLoad {
        self.on_load
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_requires_login() {
        let json = serde_json::to_string(&InitOptions::default()).unwrap();
        assert!(json == r#"{"onLoad":"login-required"}"#);
    }
}
