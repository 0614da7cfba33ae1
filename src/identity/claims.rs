use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

/// Claim set parsed by the identity provider.
///
/// The provider owns the shape, so nothing is assumed beyond "a JSON
/// object". A missing or non-string claim reads as `None`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(Map<String, Value>);

impl Identity {
    /// Human-readable display name shown after login.
    pub fn preferred_username(&self) -> Option<&str> {
        self.0.get("preferred_username").and_then(Value::as_str)
    }
}

impl TryFrom<&str> for Identity {
    type Error = anyhow::Error;
    fn try_from(json: &str) -> Result<Self, Self::Error> {
        serde_json::from_str(json).map_err(|e| anyhow::anyhow!("malformed claims: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_preferred_username() {
        let identity = Identity::try_from(
            r#"{"sub":"f1b2","preferred_username":"alice","email":"alice@example.com"}"#,
        )
        .unwrap();
        assert!(identity.preferred_username() == Some("alice"));
    }

    #[test]
    fn missing_username_is_none() {
        let identity = Identity::try_from(r#"{"sub":"f1b2"}"#).unwrap();
        assert!(identity.preferred_username().is_none());
    }

    #[test]
    fn non_string_username_is_none() {
        let identity = Identity::try_from(r#"{"preferred_username":42}"#).unwrap();
        assert!(identity.preferred_username().is_none());
    }

    #[test]
    fn rejects_non_object() {
        assert!(Identity::try_from("[]").is_err());
        assert!(Identity::try_from("not json").is_err());
    }
}
