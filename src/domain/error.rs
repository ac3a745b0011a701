use {
    super::vendor::{VendorError, VendorErrorKind},
    thiserror::Error,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    #[error("client initialization: {0}")]
    ClientInitialization(String),

    #[error("tokenize: {0}")]
    Tokenize(String),

    #[error("card tokenization: {0}")]
    CardTokenization(String),

    #[error("user cancelled: {0}")]
    UserCancelled(String),

    #[error("no pending request: {0}")]
    NoPendingRequest(String),

    #[error("no result yet: {0}")]
    NoResultYet(String),

    #[error("provider disabled: {0}")]
    ProviderDisabled(String),

    #[error("device collector: {0}")]
    DeviceCollector(String),

    #[error("apple pay not available: {0}")]
    ApplePayNotAvailable(String),

    #[error("apple pay tokenization: {0}")]
    ApplePayTokenization(String),

    #[error("google pay tokenization: {0}")]
    GooglePayTokenization(String),

    #[error("request in flight: {0}")]
    RequestInFlight(String),

    #[error("config: {0}")]
    Config(String),
}

impl BridgeError {
    /// Stable code the host application matches on.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ClientInitialization(_) => "API_CLIENT_INITIALIZATION_ERROR",
            Self::Tokenize(_) => "TOKENIZE_VAULT_PAYMENT_ERROR",
            Self::CardTokenization(_) => "CARD_TOKENIZATION_ERROR",
            Self::UserCancelled(_) => "USER_CANCEL_TRANSACTION_ERROR",
            Self::NoPendingRequest(_) => "NO_PENDING_REQUEST",
            Self::NoResultYet(_) => "NO_RESULT",
            Self::ProviderDisabled(_) => "PAYPAL_DISABLED_IN_CONFIGURATION_ERROR",
            Self::DeviceCollector(_) => "DATA_COLLECTOR_ERROR",
            Self::ApplePayNotAvailable(_) => "APPLE_PAY_NOT_AVAILABLE",
            Self::ApplePayTokenization(_) => "APPLE_PAY_TOKENIZATION_ERROR",
            Self::GooglePayTokenization(_) => "GOOGLE_PAY_TOKENIZATION_ERROR",
            Self::RequestInFlight(_) => "REQUEST_IN_FLIGHT",
            Self::Config(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Exception kind reported alongside the code.
    pub fn domain(&self) -> &'static str {
        match self {
            Self::UserCancelled(_) => "PaymentBridge:UserCancelException",
            Self::ProviderDisabled(_) => "PaymentBridge:ProviderDisabledException",
            Self::CardTokenization(_) | Self::GooglePayTokenization(_) => {
                "PaymentBridge:TokenizeException"
            }
            _ => "PaymentBridge:NativeException",
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            Self::ClientInitialization(d)
            | Self::Tokenize(d)
            | Self::CardTokenization(d)
            | Self::UserCancelled(d)
            | Self::NoPendingRequest(d)
            | Self::NoResultYet(d)
            | Self::ProviderDisabled(d)
            | Self::DeviceCollector(d)
            | Self::ApplePayNotAvailable(d)
            | Self::ApplePayTokenization(d)
            | Self::GooglePayTokenization(d)
            | Self::RequestInFlight(d)
            | Self::Config(d) => d,
        }
    }

    /// Failure while building the client, creating the auth request or
    /// launching the browser switch.
    pub fn from_setup(err: VendorError) -> Self {
        match err.kind {
            VendorErrorKind::Disabled => Self::ProviderDisabled(err.message),
            VendorErrorKind::Canceled => Self::UserCancelled(err.message),
            VendorErrorKind::Other => Self::ClientInitialization(err.message),
        }
    }

    /// Failure reported by PayPal after the user came back to the app.
    pub fn from_paypal(err: VendorError) -> Self {
        match err.kind {
            VendorErrorKind::Disabled => Self::ProviderDisabled(err.message),
            VendorErrorKind::Canceled => Self::UserCancelled(err.message),
            VendorErrorKind::Other => Self::Tokenize(err.message),
        }
    }
}
