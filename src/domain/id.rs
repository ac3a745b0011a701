use {
    super::error::BridgeError,
    derive_more::Display,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Braintree authorization (client token or tokenization key).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientToken(String);

impl ClientToken {
    pub fn new(token: impl Into<String>) -> Result<Self, BridgeError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(BridgeError::ClientInitialization(
                "client token is missing or empty".into(),
            ));
        }
        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Never print the authorization itself.
impl fmt::Debug for ClientToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClientToken(<{} bytes>)", self.0.len())
    }
}

/// Opaque string the vendor issues when the browser switch is launched.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContinuationToken(String);

impl ContinuationToken {
    pub fn new(token: impl Into<String>) -> Result<Self, BridgeError> {
        let token = token.into();
        if token.is_empty() {
            return Err(BridgeError::ClientInitialization(
                "vendor issued an empty continuation token".into(),
            ));
        }
        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
