use serde::{Deserialize, Serialize};

/// App reactivation delivered by the host OS (intent data or opened URL).
/// Transient, never stored beyond the host's "current activation".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationEvent {
    pub url: Option<String>,
}

impl ActivationEvent {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }

    /// Activation without any URL, e.g. the user switched back manually.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// Where the OS sends the user back after the browser switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnUrls {
    pub app_link_return_url: Option<String>,
    pub deep_link_scheme: String,
}
