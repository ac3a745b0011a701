use {
    crate::domain::{activation::ReturnUrls, error::BridgeError},
    std::env,
};

const DEFAULT_RETURN_MARKERS: [&str; 2] = ["onetouch", "braintree"];

/// What happens when a PayPal flow is launched while another is pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PendingPolicy {
    /// The new launch overwrites the slot; the older flow's waiter gets
    /// `NoPendingRequest`.
    #[default]
    Replace,
    /// The new launch fails with `RequestInFlight`.
    Reject,
}

impl TryFrom<&str> for PendingPolicy {
    type Error = BridgeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "replace" => Ok(Self::Replace),
            "reject" => Ok(Self::Reject),
            other => Err(BridgeError::Config(format!(
                "unknown pending policy: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    pub application_id: String,
    pub app_link_return_url: Option<String>,
    pub return_markers: Vec<String>,
    pub pending_policy: PendingPolicy,
}

impl BridgeConfig {
    pub fn for_application(application_id: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            app_link_return_url: None,
            return_markers: DEFAULT_RETURN_MARKERS.iter().map(|m| m.to_string()).collect(),
            pending_policy: PendingPolicy::default(),
        }
    }

    pub fn with_app_link_return_url(mut self, url: impl Into<String>) -> Self {
        self.app_link_return_url = Some(url.into());
        self
    }

    pub fn with_pending_policy(mut self, policy: PendingPolicy) -> Self {
        self.pending_policy = policy;
        self
    }

    /// Reads `.env` (if any) and then the process environment.
    pub fn load() -> Result<Self, BridgeError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BridgeError> {
        let application_id = lookup("BRIDGE_APPLICATION_ID")
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| BridgeError::Config("BRIDGE_APPLICATION_ID must be set".into()))?;

        let mut config = Self::for_application(application_id);
        config.app_link_return_url = lookup("BRIDGE_APP_LINK_RETURN_URL").filter(|u| !u.is_empty());

        if let Some(markers) = lookup("BRIDGE_RETURN_MARKERS") {
            config.return_markers = markers
                .split(',')
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(policy) = lookup("BRIDGE_PENDING_POLICY") {
            config.pending_policy = PendingPolicy::try_from(policy.trim())?;
        }
        Ok(config)
    }

    /// Fallback URL scheme registered in the manifest / Info.plist.
    pub fn deep_link_scheme(&self) -> String {
        format!("{}.braintree", self.application_id)
    }

    pub fn return_urls(&self) -> ReturnUrls {
        ReturnUrls {
            app_link_return_url: self.app_link_return_url.clone(),
            deep_link_scheme: self.deep_link_scheme(),
        }
    }
}
