#![allow(dead_code)]

use braintree_bridge::PaymentSession;
use braintree_bridge::config::BridgeConfig;
use braintree_bridge::domain::activation::{ActivationEvent, ReturnUrls};
use braintree_bridge::domain::id::{ClientToken, ContinuationToken};
use braintree_bridge::domain::nonce::{
    ApplePayCardNonce, AuthorizedPayment, CardNonce, GooglePayNonce, PayPalAccountNonce,
};
use braintree_bridge::domain::options::OptionBag;
use braintree_bridge::domain::request::{
    CardRequest, DeviceCollectorRequest, GooglePayRequest, PayPalRequest, PaymentNetwork,
    SheetRequest,
};
use braintree_bridge::domain::vendor::{
    ApplePayClient, ApplePaySheet, AuthPayload, AuthRequest, AuthResult, CardClient,
    DataCollector, GooglePayClient, LaunchRequest, PayPalClient, PendingRequest, SheetOutcome,
    TokenizeResult, VendorError, VendorFuture, VendorSdk,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::Notify;

pub const APP_ID: &str = "com.example.shop";
/// Authorization the fake SDK refuses to build clients for.
pub const INVALID_TOKEN: &str = "invalid-token";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

// ── Scripted vendor state ──────────────────────────────────────────────────

/// One scripted `create_auth_request` call. With a gate, the call stays
/// suspended until the gate is notified.
#[derive(Default)]
pub struct AuthStep {
    pub gate: Option<Arc<Notify>>,
    pub failure: Option<VendorError>,
}

#[derive(Default)]
pub struct FakeState {
    // scripts
    pub auth_request_failure: Option<VendorError>,
    pub auth_steps: VecDeque<AuthStep>,
    pub launches: VecDeque<PendingRequest>,
    pub auth_results: VecDeque<AuthResult>,
    pub paypal_tokenize: VecDeque<TokenizeResult<PayPalAccountNonce>>,
    pub card_result: Option<Result<CardNonce, VendorError>>,
    pub device_data: Option<Result<String, VendorError>>,
    pub google_pay_result: Option<TokenizeResult<GooglePayNonce>>,
    pub apple_pay_available: bool,
    pub supported_networks: Vec<PaymentNetwork>,
    pub sheet_outcome: Option<Result<SheetOutcome, VendorError>>,
    pub apple_pay_tokenize: Option<Result<ApplePayCardNonce, VendorError>>,

    // recordings
    pub calls: Vec<&'static str>,
    pub authorizations: Vec<String>,
    pub return_urls: Vec<ReturnUrls>,
    pub paypal_requests: Vec<PayPalRequest>,
    pub resumed_tokens: Vec<String>,
    pub resumed_urls: Vec<Option<String>>,
    pub tokenized_payloads: Vec<String>,
    pub card_requests: Vec<CardRequest>,
    pub device_requests: Vec<DeviceCollectorRequest>,
    pub google_pay_requests: Vec<GooglePayRequest>,
    pub sheet_requests: Vec<SheetRequest>,
    pub probed_networks: Vec<Vec<PaymentNetwork>>,
}

impl FakeState {
    pub fn count(&self, call: &str) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }
}

type Shared = Arc<Mutex<FakeState>>;

pub struct FakeSdk {
    state: Shared,
    sheet: Option<FakeSheet>,
}

impl FakeSdk {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Arc::new(Mutex::new(FakeState::default())),
            sheet: None,
        })
    }

    /// SDK on a platform that has the Apple Pay sheet.
    pub fn with_apple_pay() -> Arc<Self> {
        let state: Shared = Arc::new(Mutex::new(FakeState {
            apple_pay_available: true,
            supported_networks: PaymentNetwork::ALL.to_vec(),
            ..FakeState::default()
        }));
        Arc::new(Self {
            sheet: Some(FakeSheet {
                state: state.clone(),
            }),
            state,
        })
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub fn push_launch(&self, token: &str) {
        self.state()
            .launches
            .push_back(PendingRequest::Started(ContinuationToken::new(token).unwrap()));
    }

    pub fn push_launch_failure(&self, message: &str) {
        self.state()
            .launches
            .push_back(PendingRequest::Failure(VendorError::other(message)));
    }

    /// Next `create_auth_request` waits for the returned gate, then
    /// succeeds or fails with `failure`.
    pub fn push_gated_auth_request(&self, failure: Option<VendorError>) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.state().auth_steps.push_back(AuthStep {
            gate: Some(gate.clone()),
            failure,
        });
        gate
    }

    pub fn push_auth_result(&self, result: AuthResult) {
        self.state().auth_results.push_back(result);
    }

    pub fn push_tokenize(&self, result: TokenizeResult<PayPalAccountNonce>) {
        self.state().paypal_tokenize.push_back(result);
    }

    fn check(&self, authorization: &ClientToken, call: &'static str) -> Result<(), VendorError> {
        let mut state = self.state();
        state.calls.push(call);
        state.authorizations.push(authorization.as_str().to_string());
        if authorization.as_str() == INVALID_TOKEN {
            return Err(VendorError::other("authorization is invalid"));
        }
        Ok(())
    }
}

impl VendorSdk for FakeSdk {
    fn paypal(
        &self,
        authorization: &ClientToken,
        return_urls: &ReturnUrls,
    ) -> Result<Box<dyn PayPalClient>, VendorError> {
        self.check(authorization, "paypal_client")?;
        self.state().return_urls.push(return_urls.clone());
        Ok(Box::new(FakePayPal {
            state: self.state.clone(),
        }))
    }

    fn card(&self, authorization: &ClientToken) -> Result<Box<dyn CardClient>, VendorError> {
        self.check(authorization, "card_client")?;
        Ok(Box::new(FakeCard {
            state: self.state.clone(),
        }))
    }

    fn data_collector(
        &self,
        authorization: &ClientToken,
    ) -> Result<Box<dyn DataCollector>, VendorError> {
        self.check(authorization, "data_collector")?;
        Ok(Box::new(FakeCollector {
            state: self.state.clone(),
        }))
    }

    fn google_pay(
        &self,
        authorization: &ClientToken,
    ) -> Result<Box<dyn GooglePayClient>, VendorError> {
        self.check(authorization, "google_pay_client")?;
        Ok(Box::new(FakeGooglePay {
            state: self.state.clone(),
        }))
    }

    fn apple_pay(
        &self,
        authorization: &ClientToken,
    ) -> Result<Box<dyn ApplePayClient>, VendorError> {
        self.check(authorization, "apple_pay_client")?;
        Ok(Box::new(FakeApplePay {
            state: self.state.clone(),
        }))
    }

    fn apple_pay_sheet(&self) -> Option<&dyn ApplePaySheet> {
        self.sheet.as_ref().map(|s| s as &dyn ApplePaySheet)
    }
}

// ── Fake clients ───────────────────────────────────────────────────────────

struct FakePayPal {
    state: Shared,
}

impl PayPalClient for FakePayPal {
    fn create_auth_request(&self, request: PayPalRequest) -> VendorFuture<'_, AuthRequest> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("create_auth_request");
        state.paypal_requests.push(request);
        let step = state.auth_steps.pop_front().unwrap_or_else(|| AuthStep {
            gate: None,
            failure: state.auth_request_failure.clone(),
        });
        Box::pin(async move {
            if let Some(gate) = step.gate {
                gate.notified().await;
            }
            match step.failure {
                Some(e) => AuthRequest::Failure(e),
                None => AuthRequest::ReadyToLaunch(LaunchRequest("https://paypal.test/approve".into())),
            }
        })
    }

    fn launch(&self, _request: LaunchRequest) -> PendingRequest {
        let mut state = self.state.lock().unwrap();
        state.calls.push("launch");
        state
            .launches
            .pop_front()
            .unwrap_or_else(|| PendingRequest::Started(ContinuationToken::new("pend-default").unwrap()))
    }

    fn handle_return(&self, pending: &ContinuationToken, activation: &ActivationEvent) -> AuthResult {
        let mut state = self.state.lock().unwrap();
        state.calls.push("handle_return");
        state.resumed_tokens.push(pending.as_str().to_string());
        state.resumed_urls.push(activation.url.clone());
        state.auth_results.pop_front().unwrap_or(AuthResult::NoResult)
    }

    fn tokenize(&self, payload: AuthPayload) -> VendorFuture<'_, TokenizeResult<PayPalAccountNonce>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("paypal_tokenize");
        state.tokenized_payloads.push(payload.0);
        let result = state
            .paypal_tokenize
            .pop_front()
            .unwrap_or_else(|| TokenizeResult::Failure(VendorError::other("tokenize not scripted")));
        Box::pin(async move {
            // Completion lands on a later poll, off the caller's stack.
            tokio::task::yield_now().await;
            result
        })
    }
}

struct FakeCard {
    state: Shared,
}

impl CardClient for FakeCard {
    fn tokenize(&self, card: CardRequest) -> VendorFuture<'_, Result<CardNonce, VendorError>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("card_tokenize");
        state.card_requests.push(card);
        let result = state
            .card_result
            .clone()
            .unwrap_or_else(|| Err(VendorError::other("card not scripted")));
        Box::pin(async move { result })
    }
}

struct FakeCollector {
    state: Shared,
}

impl DataCollector for FakeCollector {
    fn collect_device_data(
        &self,
        request: DeviceCollectorRequest,
    ) -> VendorFuture<'_, Result<String, VendorError>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("collect_device_data");
        state.device_requests.push(request);
        let result = state
            .device_data
            .clone()
            .unwrap_or_else(|| Err(VendorError::other("device data not scripted")));
        Box::pin(async move { result })
    }
}

struct FakeGooglePay {
    state: Shared,
}

impl GooglePayClient for FakeGooglePay {
    fn tokenize(&self, request: GooglePayRequest) -> VendorFuture<'_, TokenizeResult<GooglePayNonce>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("google_pay_tokenize");
        state.google_pay_requests.push(request);
        let result = state
            .google_pay_result
            .clone()
            .unwrap_or(TokenizeResult::Cancel);
        Box::pin(async move { result })
    }
}

struct FakeApplePay {
    state: Shared,
}

impl ApplePayClient for FakeApplePay {
    fn tokenize(
        &self,
        _payment: AuthorizedPayment,
    ) -> VendorFuture<'_, Result<ApplePayCardNonce, VendorError>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("apple_pay_tokenize");
        let result = state
            .apple_pay_tokenize
            .clone()
            .unwrap_or_else(|| Err(VendorError::other("apple pay not scripted")));
        Box::pin(async move { result })
    }
}

struct FakeSheet {
    state: Shared,
}

impl ApplePaySheet for FakeSheet {
    fn is_available(&self) -> bool {
        self.state.lock().unwrap().apple_pay_available
    }

    fn can_make_payments(&self, networks: &[PaymentNetwork]) -> bool {
        let mut state = self.state.lock().unwrap();
        state.probed_networks.push(networks.to_vec());
        !networks.is_empty() && networks.iter().all(|n| state.supported_networks.contains(n))
    }

    fn present(&self, request: SheetRequest) -> VendorFuture<'_, Result<SheetOutcome, VendorError>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("present_sheet");
        state.sheet_requests.push(request);
        let result = state
            .sheet_outcome
            .clone()
            .unwrap_or(Ok(SheetOutcome::Dismissed));
        Box::pin(async move { result })
    }
}

// ── Builders ───────────────────────────────────────────────────────────────

pub fn config() -> BridgeConfig {
    BridgeConfig::for_application(APP_ID)
}

pub fn session(sdk: &Arc<FakeSdk>) -> PaymentSession {
    init_tracing();
    PaymentSession::new(sdk.clone(), config())
}

pub fn session_with(sdk: &Arc<FakeSdk>, config: BridgeConfig) -> PaymentSession {
    init_tracing();
    PaymentSession::new(sdk.clone(), config)
}

pub fn vault_options(client_token: &str) -> OptionBag {
    OptionBag::new()
        .with("clientToken", client_token)
        .with("billingAgreementDescription", "Monthly photo plan")
}

pub fn checkout_options(client_token: &str, amount: &str) -> OptionBag {
    OptionBag::new()
        .with("clientToken", client_token)
        .with("amount", amount)
}

/// URL the OS hands back after the PayPal browser switch.
pub fn paypal_return() -> ActivationEvent {
    ActivationEvent::from_url(format!("{APP_ID}.braintree://onetouch/v1/success?token=EC-1"))
}

pub fn account_nonce(nonce: &str) -> PayPalAccountNonce {
    PayPalAccountNonce {
        email: Some("payer@example.com".into()),
        payer_id: Some("PAYER-1".into()),
        ..PayPalAccountNonce::new(nonce)
    }
}

/// Polls until the fake has seen `n` calls named `call`.
pub async fn wait_for_calls(fake: &FakeSdk, call: &str, n: usize) {
    tokio::time::timeout(std::time::Duration::from_secs(5), async {
        while fake.state().count(call) < n {
            tokio::task::yield_now().await;
        }
    })
    .await
    .unwrap_or_else(|_| panic!("never saw {n} `{call}` calls"));
}

pub fn success() -> AuthResult {
    AuthResult::Success(AuthPayload("approval-1".into()))
}
