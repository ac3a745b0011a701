use {
    serde::{Deserialize, Serialize},
    std::fmt,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutIntent {
    Authorize,
    Order,
    Sale,
}

impl CheckoutIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authorize => "authorize",
            Self::Order => "order",
            Self::Sale => "sale",
        }
    }
}

impl fmt::Display for CheckoutIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserAction {
    #[default]
    None,
    PayNow,
}

/// Billing agreement: vaults the PayPal account for later charges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VaultRequest {
    pub billing_agreement_description: Option<String>,
    pub display_name: Option<String>,
    pub locale_code: Option<String>,
    pub user_authentication_email: Option<String>,
    pub should_offer_credit: bool,
    pub is_shipping_address_required: bool,
    pub is_shipping_address_editable: bool,
    pub has_user_location_consent: bool,
}

/// One-time payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub amount: String,
    pub intent: CheckoutIntent,
    pub user_action: UserAction,
    pub currency_code: String,
    pub billing_agreement_description: Option<String>,
    pub display_name: Option<String>,
    pub locale_code: Option<String>,
    pub should_offer_pay_later: bool,
    pub should_request_billing_agreement: bool,
    pub is_shipping_address_required: bool,
    pub has_user_location_consent: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardRequest {
    pub number: Option<String>,
    pub expiration_month: Option<String>,
    pub expiration_year: Option<String>,
    pub cvv: Option<String>,
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceCollectorRequest {
    pub has_user_location_consent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentNetwork {
    Visa,
    MasterCard,
    Amex,
    Discover,
}

impl PaymentNetwork {
    pub const ALL: [PaymentNetwork; 4] = [Self::Visa, Self::MasterCard, Self::Amex, Self::Discover];

    /// Case-insensitive; `americanexpress` is accepted as an alias.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "visa" => Some(Self::Visa),
            "mastercard" => Some(Self::MasterCard),
            "amex" | "americanexpress" => Some(Self::Amex),
            "discover" => Some(Self::Discover),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    PostalAddress,
    PhoneNumber,
    EmailAddress,
    Name,
}

impl ContactField {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "postalAddress" => Some(Self::PostalAddress),
            "phone" => Some(Self::PhoneNumber),
            "email" => Some(Self::EmailAddress),
            "name" => Some(Self::Name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MerchantCapability {
    ThreeDSecure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryItem {
    pub label: String,
    pub amount: String,
}

/// Apple Pay payment sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRequest {
    pub merchant_identifier: Option<String>,
    pub supported_networks: Vec<PaymentNetwork>,
    pub merchant_capability: MerchantCapability,
    pub country_code: String,
    pub currency_code: String,
    pub summary_items: Vec<SummaryItem>,
    pub required_billing_contact_fields: Vec<ContactField>,
    pub required_shipping_contact_fields: Vec<ContactField>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalPriceStatus {
    Final,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GooglePayRequest {
    pub currency_code: String,
    pub total_price: String,
    pub total_price_status: TotalPriceStatus,
    pub merchant_name: Option<String>,
}

/// PayPal flows that leave the app through a browser switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayPalRequest {
    Vault(VaultRequest),
    Checkout(CheckoutRequest),
}

impl PayPalRequest {
    pub fn flow(&self) -> PayPalFlow {
        match self {
            Self::Vault(_) => PayPalFlow::BillingAgreement,
            Self::Checkout(_) => PayPalFlow::OneTimePayment,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayPalFlow {
    BillingAgreement,
    OneTimePayment,
}

impl PayPalFlow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BillingAgreement => "billing_agreement",
            Self::OneTimePayment => "one_time_payment",
        }
    }
}

impl fmt::Display for PayPalFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
