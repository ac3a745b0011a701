//! Objects the vendor SDK hands back after a successful tokenization.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostalAddress {
    pub recipient_name: Option<String>,
    pub street_address: Option<String>,
    pub extended_address: Option<String>,
    pub locality: Option<String>,
    pub country_code_alpha2: Option<String>,
    pub postal_code: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayPalAccountNonce {
    pub nonce: String,
    pub payer_id: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub billing_address: Option<PostalAddress>,
    pub shipping_address: Option<PostalAddress>,
}

impl PayPalAccountNonce {
    pub fn new(nonce: impl Into<String>) -> Self {
        Self {
            nonce: nonce.into(),
            payer_id: None,
            email: None,
            first_name: None,
            last_name: None,
            phone: None,
            billing_address: None,
            shipping_address: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardNonce {
    pub nonce: String,
    /// `"Unknown"` when the vendor could not detect the brand.
    pub card_type: String,
    pub last_two: Option<String>,
    pub last_four: Option<String>,
    pub expiration_month: Option<String>,
    pub expiration_year: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GooglePayNonce {
    pub nonce: String,
    pub payment_type: String,
    pub description: String,
    pub is_default: bool,
    pub card_network: Option<String>,
    pub email: Option<String>,
    pub billing_address: Option<PostalAddress>,
    pub shipping_address: Option<PostalAddress>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinData {
    pub prepaid: Option<String>,
    pub healthcare: Option<String>,
    pub debit: Option<String>,
    pub durbin_regulated: Option<String>,
    pub commercial: Option<String>,
    pub payroll: Option<String>,
    pub country_of_issuance: Option<String>,
    pub issuing_bank: Option<String>,
    pub product_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplePayCardNonce {
    pub nonce: String,
    pub payment_type: String,
    pub is_default: bool,
    pub bin_data: Option<BinData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonName {
    pub given_name: Option<String>,
    pub family_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub iso_country_code: String,
}

/// Contact the payer picked on the Apple Pay sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    pub name: Option<PersonName>,
    pub email_address: Option<String>,
    pub phone_number: Option<String>,
    pub postal_address: Option<ContactAddress>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentMethodInfo {
    pub display_name: Option<String>,
    pub network: Option<String>,
}

/// Payment authorized on the Apple Pay sheet, before Braintree tokenizes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizedPayment {
    pub payment_method: PaymentMethodInfo,
    pub transaction_identifier: String,
    pub billing_contact: Option<Contact>,
    pub shipping_contact: Option<Contact>,
}
