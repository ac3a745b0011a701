use crate::domain::{
    error::BridgeError,
    nonce::{
        ApplePayCardNonce, AuthorizedPayment, BinData, CardNonce, Contact, GooglePayNonce,
        PayPalAccountNonce, PostalAddress,
    },
    outcome::{
        AddressResult, ApplePayResult, BinDataResult, CardResult, ContactResult, ErrorPayload,
        GooglePayResult, PayPalAccountResult,
    },
};

const UNKNOWN: &str = "Unknown";

impl From<PostalAddress> for AddressResult {
    fn from(address: PostalAddress) -> Self {
        Self {
            recipient_name: address.recipient_name,
            street_address: address.street_address,
            extended_address: address.extended_address,
            locality: address.locality,
            country_code_alpha2: address.country_code_alpha2,
            postal_code: address.postal_code,
            region: address.region,
        }
    }
}

impl From<PayPalAccountNonce> for PayPalAccountResult {
    fn from(nonce: PayPalAccountNonce) -> Self {
        Self {
            nonce: nonce.nonce,
            payer_id: nonce.payer_id,
            email: nonce.email,
            first_name: nonce.first_name,
            last_name: nonce.last_name,
            phone: nonce.phone,
            billing_address: nonce.billing_address.map(AddressResult::from),
            shipping_address: nonce.shipping_address.map(AddressResult::from),
        }
    }
}

impl From<CardNonce> for CardResult {
    fn from(nonce: CardNonce) -> Self {
        let card_network = if nonce.card_type == UNKNOWN {
            String::new()
        } else {
            nonce.card_type
        };
        Self {
            nonce: nonce.nonce,
            card_network,
            last_two: nonce.last_two,
            last_four: nonce.last_four,
            expiration_month: nonce.expiration_month,
            expiration_year: nonce.expiration_year,
        }
    }
}

impl From<GooglePayNonce> for GooglePayResult {
    fn from(nonce: GooglePayNonce) -> Self {
        Self {
            nonce: nonce.nonce,
            payment_type: nonce.payment_type,
            description: nonce.description,
            is_default: nonce.is_default,
            card_network: nonce.card_network,
            email: nonce.email,
            billing_address: nonce.billing_address.map(AddressResult::from),
            shipping_address: nonce.shipping_address.map(AddressResult::from),
        }
    }
}

impl From<BinData> for BinDataResult {
    fn from(bin: BinData) -> Self {
        let or_unknown = |v: Option<String>| v.unwrap_or_else(|| UNKNOWN.to_string());
        Self {
            prepaid: or_unknown(bin.prepaid),
            healthcare: or_unknown(bin.healthcare),
            debit: or_unknown(bin.debit),
            durbin_regulated: or_unknown(bin.durbin_regulated),
            commercial: or_unknown(bin.commercial),
            payroll: or_unknown(bin.payroll),
            country_of_issuance: bin.country_of_issuance,
            issuing_bank: bin.issuing_bank,
            product_id: bin.product_id,
        }
    }
}

impl From<Contact> for ContactResult {
    fn from(contact: Contact) -> Self {
        let (given_name, family_name) = match contact.name {
            Some(name) => (
                Some(name.given_name.unwrap_or_default()),
                Some(name.family_name.unwrap_or_default()),
            ),
            None => (None, None),
        };
        let address = contact.postal_address;
        Self {
            given_name,
            family_name,
            email_address: contact.email_address,
            phone_number: contact.phone_number,
            street: address.as_ref().map(|a| a.street.clone()),
            city: address.as_ref().map(|a| a.city.clone()),
            state: address.as_ref().map(|a| a.state.clone()),
            postal_code: address.as_ref().map(|a| a.postal_code.clone()),
            country: address.as_ref().map(|a| a.country.clone()),
            iso_country_code: address.map(|a| a.iso_country_code),
        }
    }
}

/// Braintree's nonce plus what the sheet itself reported about the payment.
pub fn apple_pay_result(nonce: ApplePayCardNonce, payment: AuthorizedPayment) -> ApplePayResult {
    ApplePayResult {
        nonce: nonce.nonce,
        payment_type: nonce.payment_type,
        is_default: nonce.is_default,
        bin_data: nonce.bin_data.map(BinDataResult::from),
        payment_method_display_name: payment.payment_method.display_name.unwrap_or_default(),
        payment_method_network: payment.payment_method.network.unwrap_or_default(),
        transaction_identifier: payment.transaction_identifier,
        billing_contact: payment.billing_contact.map(ContactResult::from),
        shipping_contact: payment.shipping_contact.map(ContactResult::from),
    }
}

impl From<&BridgeError> for ErrorPayload {
    fn from(err: &BridgeError) -> Self {
        Self {
            code: err.domain().to_string(),
            message: err.code().to_string(),
            domain: err.code().to_string(),
            details: Some(err.detail().to_string()).filter(|d| !d.is_empty()),
        }
    }
}
