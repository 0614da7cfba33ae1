use serde::Serialize;

/// Where the identity provider lives and which client this is.
/// Serializes to the object `new Keycloak(..)` expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeycloakConfig {
    url: String,
    realm: String,
    client_id: String,
}

impl KeycloakConfig {
    pub fn new(url: &str, realm: &str, client_id: &str) -> anyhow::Result<Self> {
        Self {
            url: url.trim_end_matches('/').to_string(),
            realm: realm.to_string(),
            client_id: client_id.to_string(),
        }
        .validated()
    }
    /// Build-time configuration, see [`KEYCLOAK_URL`](crate::KEYCLOAK_URL) and friends.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::new(
            crate::KEYCLOAK_URL,
            crate::KEYCLOAK_REALM,
            crate::KEYCLOAK_CLIENT_ID,
        )
    }
    /// Issuer of the tokens this realm hands out.
    pub fn issuer(&self) -> String {
        format!("{}/realms/{}", self.url, self.realm)
    }

    fn validated(self) -> anyhow::Result<Self> {
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            anyhow::bail!("keycloak url must be http(s): {:?}", self.url);
        }
        if self.realm.trim().is_empty() {
            anyhow::bail!("keycloak realm is empty");
        }
        if self.client_id.trim().is_empty() {
            anyhow::bail!("keycloak client id is empty");
        }
        Ok(self)
    }
}

impl std::fmt::Display for KeycloakConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.issuer(), self.client_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(KeycloakConfig::from_env().is_ok());
    }

    #[test]
    fn trims_trailing_slash() {
        let config = KeycloakConfig::new("https://sso.example.com/", "acme", "web").unwrap();
        assert!(config.issuer() == "https://sso.example.com/realms/acme");
        assert!(config.to_string() == "https://sso.example.com/realms/acme (web)");
    }

    #[test]
    fn serializes_for_keycloak_js() {
        let config = KeycloakConfig::new("http://localhost:8080", "acme", "web").unwrap();
        let json = serde_json::to_value(&config).unwrap();
        assert!(json["url"] == "http://localhost:8080");
        assert!(json["clientId"] == "web");
        assert!(json["realm"] == "acme");
    }

    #[test]
    fn rejects_incomplete() {
        assert!(KeycloakConfig::new("localhost:8080", "acme", "web").is_err());
        assert!(KeycloakConfig::new("http://localhost:8080", " ", "web").is_err());
        assert!(KeycloakConfig::new("http://localhost:8080", "acme", "").is_err());
    }
}
