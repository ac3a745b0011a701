pub mod adapters;
pub mod config;
pub mod domain;
pub mod services;

use {
    adapters::request_mapper,
    config::BridgeConfig,
    domain::{
        activation::ActivationEvent,
        error::BridgeError,
        options::OptionBag,
        outcome::{ApplePayResult, CardResult, GooglePayResult, PayPalAccountResult},
        request::PayPalRequest,
        vendor::VendorSdk,
    },
    services::{
        continuation::{
            LaunchedFlow, PayPalOutcome, PaymentAuthContinuation, PendingAuthorization,
        },
        deep_link::{DeepLinkRouter, RouteDecision},
        payments,
    },
    std::sync::Arc,
    tokio::sync::Mutex,
};

/// Owned by the host for the lifetime of the process. Both the call-in
/// entry points and the activation hook go through the same continuation
/// slot held here.
pub struct PaymentSession {
    sdk: Arc<dyn VendorSdk>,
    config: BridgeConfig,
    continuation: Arc<PaymentAuthContinuation>,
    router: DeepLinkRouter,
    current_activation: Mutex<Option<ActivationEvent>>,
}

impl PaymentSession {
    pub fn new(sdk: Arc<dyn VendorSdk>, config: BridgeConfig) -> Self {
        let continuation = Arc::new(PaymentAuthContinuation::new(config.pending_policy));
        let router = DeepLinkRouter::new(continuation.clone(), sdk.clone(), &config);
        Self {
            sdk,
            config,
            continuation,
            router,
            current_activation: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn router(&self) -> &DeepLinkRouter {
        &self.router
    }

    pub async fn pending(&self) -> Option<PendingAuthorization> {
        self.continuation.pending().await
    }

    // ── PayPal ─────────────────────────────────────────────────────────────

    pub async fn launch_billing_agreement(
        &self,
        options: &OptionBag,
    ) -> Result<LaunchedFlow, BridgeError> {
        let request = PayPalRequest::Vault(request_mapper::vault_request(options));
        self.launch(options, request).await
    }

    pub async fn launch_one_time_payment(
        &self,
        options: &OptionBag,
    ) -> Result<LaunchedFlow, BridgeError> {
        let request = PayPalRequest::Checkout(request_mapper::checkout_request(options));
        self.launch(options, request).await
    }

    /// Launch and wait for the return trip to finish.
    pub async fn start_billing_agreement(
        &self,
        options: &OptionBag,
    ) -> Result<PayPalAccountResult, BridgeError> {
        self.launch_billing_agreement(options).await?.outcome().await
    }

    pub async fn start_one_time_payment(
        &self,
        options: &OptionBag,
    ) -> Result<PayPalAccountResult, BridgeError> {
        self.launch_one_time_payment(options).await?.outcome().await
    }

    async fn launch(
        &self,
        options: &OptionBag,
        request: PayPalRequest,
    ) -> Result<LaunchedFlow, BridgeError> {
        let authorization = payments::client_token(options)?;
        self.continuation
            .start(&*self.sdk, &self.config.return_urls(), authorization, request)
            .await
    }

    /// Explicit poll for hosts without an activation hook. Uses the last
    /// recorded activation, or an empty one.
    pub async fn resume_from_activation(&self) -> PayPalOutcome {
        let activation = self
            .current_activation
            .lock()
            .await
            .clone()
            .unwrap_or_default();
        self.continuation
            .resume(&*self.sdk, &self.config.return_urls(), &activation)
            .await
    }

    /// Activation hook. Events the router passes through become the
    /// current activation; consumed ones clear it so the host never sees
    /// them.
    pub async fn handle_activation(&self, event: ActivationEvent) -> RouteDecision {
        let decision = self.router.route(event).await;
        let mut current = self.current_activation.lock().await;
        match &decision {
            RouteDecision::PassThrough(event) => *current = Some(event.clone()),
            RouteDecision::Consumed(_) => *current = None,
        }
        decision
    }

    pub async fn record_activation(&self, event: ActivationEvent) {
        *self.current_activation.lock().await = Some(event);
    }

    // ── Card / device data ─────────────────────────────────────────────────

    pub async fn tokenize_card(&self, options: &OptionBag) -> Result<CardResult, BridgeError> {
        payments::tokenize_card(&*self.sdk, options).await
    }

    pub async fn collect_device_data(&self, client_token: &str) -> Result<String, BridgeError> {
        payments::collect_device_data(&*self.sdk, client_token).await
    }

    // ── Wallets ────────────────────────────────────────────────────────────

    pub fn is_apple_pay_available(&self) -> bool {
        payments::is_apple_pay_available(&*self.sdk)
    }

    pub fn can_make_apple_pay_payments(&self, options: &OptionBag) -> bool {
        payments::can_make_apple_pay_payments(&*self.sdk, options)
    }

    pub async fn present_apple_pay_sheet(
        &self,
        options: &OptionBag,
    ) -> Result<ApplePayResult, BridgeError> {
        payments::present_apple_pay_sheet(&*self.sdk, options).await
    }

    pub async fn request_google_pay_payment(
        &self,
        options: &OptionBag,
    ) -> Result<GooglePayResult, BridgeError> {
        payments::request_google_pay_payment(&*self.sdk, options).await
    }
}
