//! Seam to the native payment SDKs. The bridge never looks past the tag of
//! what these return.

use {
    super::activation::{ActivationEvent, ReturnUrls},
    super::id::{ClientToken, ContinuationToken},
    super::nonce::{
        ApplePayCardNonce, AuthorizedPayment, CardNonce, GooglePayNonce, PayPalAccountNonce,
    },
    super::request::{
        CardRequest, DeviceCollectorRequest, GooglePayRequest, PayPalRequest, PaymentNetwork,
        SheetRequest,
    },
    std::{future::Future, pin::Pin},
    thiserror::Error,
};

pub type VendorFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorErrorKind {
    /// The provider is switched off in the merchant's gateway configuration.
    Disabled,
    Canceled,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct VendorError {
    pub kind: VendorErrorKind,
    pub message: String,
}

impl VendorError {
    pub fn new(kind: VendorErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(VendorErrorKind::Other, message)
    }
}

/// Opaque handle the vendor needs to start the browser switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest(pub String);

/// Opaque approval data extracted from the return URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthPayload(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    ReadyToLaunch(LaunchRequest),
    Failure(VendorError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingRequest {
    Started(ContinuationToken),
    Failure(VendorError),
}

/// Vendor's classification of an activation against a pending request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResult {
    Success(AuthPayload),
    Cancel,
    Failure(VendorError),
    /// The user came back without finishing; the request is still live.
    NoResult,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizeResult<T> {
    Success(T),
    Failure(VendorError),
    Cancel,
}

pub trait PayPalClient: Send + Sync {
    fn create_auth_request(&self, request: PayPalRequest) -> VendorFuture<'_, AuthRequest>;

    fn launch(&self, request: LaunchRequest) -> PendingRequest;

    fn handle_return(
        &self,
        pending: &ContinuationToken,
        activation: &ActivationEvent,
    ) -> AuthResult;

    fn tokenize(&self, payload: AuthPayload)
    -> VendorFuture<'_, TokenizeResult<PayPalAccountNonce>>;
}

pub trait CardClient: Send + Sync {
    fn tokenize(&self, card: CardRequest) -> VendorFuture<'_, Result<CardNonce, VendorError>>;
}

pub trait DataCollector: Send + Sync {
    fn collect_device_data(
        &self,
        request: DeviceCollectorRequest,
    ) -> VendorFuture<'_, Result<String, VendorError>>;
}

pub trait GooglePayClient: Send + Sync {
    fn tokenize(
        &self,
        request: GooglePayRequest,
    ) -> VendorFuture<'_, TokenizeResult<GooglePayNonce>>;
}

pub trait ApplePayClient: Send + Sync {
    fn tokenize(
        &self,
        payment: AuthorizedPayment,
    ) -> VendorFuture<'_, Result<ApplePayCardNonce, VendorError>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetOutcome {
    Authorized(AuthorizedPayment),
    /// Sheet closed before the payer authorized anything.
    Dismissed,
}

/// Device wallet UI. Only present on platforms that have Apple Pay.
pub trait ApplePaySheet: Send + Sync {
    fn is_available(&self) -> bool;

    fn can_make_payments(&self, networks: &[PaymentNetwork]) -> bool;

    fn present(&self, request: SheetRequest) -> VendorFuture<'_, Result<SheetOutcome, VendorError>>;
}

/// Builds vendor clients from an authorization. A rejected authorization is
/// reported as `Err` and never reaches the payment flow.
pub trait VendorSdk: Send + Sync {
    fn paypal(
        &self,
        authorization: &ClientToken,
        return_urls: &ReturnUrls,
    ) -> Result<Box<dyn PayPalClient>, VendorError>;

    fn card(&self, authorization: &ClientToken) -> Result<Box<dyn CardClient>, VendorError>;

    fn data_collector(
        &self,
        authorization: &ClientToken,
    ) -> Result<Box<dyn DataCollector>, VendorError>;

    fn google_pay(
        &self,
        authorization: &ClientToken,
    ) -> Result<Box<dyn GooglePayClient>, VendorError>;

    fn apple_pay(&self, authorization: &ClientToken)
    -> Result<Box<dyn ApplePayClient>, VendorError>;

    fn apple_pay_sheet(&self) -> Option<&dyn ApplePaySheet> {
        None
    }
}
