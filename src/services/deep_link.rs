use {
    super::continuation::{PayPalOutcome, PaymentAuthContinuation},
    crate::config::BridgeConfig,
    crate::domain::{
        activation::{ActivationEvent, ReturnUrls},
        vendor::VendorSdk,
    },
    std::sync::Arc,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationKind {
    PaymentReturn,
    Unrelated,
}

#[derive(Debug)]
pub enum RouteDecision {
    /// Not ours: hand the event to the host's own routing untouched.
    PassThrough(ActivationEvent),
    /// Swallowed and fed to the continuation.
    Consumed(PayPalOutcome),
}

/// Looks at every activation before the host router does.
pub struct DeepLinkRouter {
    continuation: Arc<PaymentAuthContinuation>,
    sdk: Arc<dyn VendorSdk>,
    return_urls: ReturnUrls,
    scheme_prefix: String,
    markers: Vec<String>,
}

impl DeepLinkRouter {
    pub fn new(
        continuation: Arc<PaymentAuthContinuation>,
        sdk: Arc<dyn VendorSdk>,
        config: &BridgeConfig,
    ) -> Self {
        let return_urls = config.return_urls();
        let scheme_prefix = format!("{}:", return_urls.deep_link_scheme);
        Self {
            continuation,
            sdk,
            return_urls,
            scheme_prefix,
            markers: config.return_markers.clone(),
        }
    }

    pub fn classify(&self, event: &ActivationEvent) -> ActivationKind {
        let Some(url) = event.url() else {
            return ActivationKind::Unrelated;
        };

        let is_return = url.starts_with(&self.scheme_prefix)
            || self
                .return_urls
                .app_link_return_url
                .as_deref()
                .is_some_and(|prefix| url.starts_with(prefix))
            || self.markers.iter().any(|m| url.contains(m.as_str()));

        if is_return {
            ActivationKind::PaymentReturn
        } else {
            ActivationKind::Unrelated
        }
    }

    /// A payment return is consumed once the vendor has looked at it, even
    /// when a concurrent activation claimed the flow first; that one
    /// resolves to `NoPendingRequest`. With nothing pending it passes
    /// through.
    pub async fn route(&self, event: ActivationEvent) -> RouteDecision {
        if self.classify(&event) == ActivationKind::Unrelated {
            tracing::debug!(url = ?event.url(), "activation passed through");
            return RouteDecision::PassThrough(event);
        }

        match self
            .continuation
            .try_resume(&*self.sdk, &self.return_urls, &event)
            .await
        {
            Some(outcome) => {
                tracing::info!(ok = outcome.is_ok(), "payment return consumed");
                RouteDecision::Consumed(outcome)
            }
            None => {
                tracing::debug!(url = ?event.url(), "payment return without pending request, passed through");
                RouteDecision::PassThrough(event)
            }
        }
    }
}
