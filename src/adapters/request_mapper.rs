use crate::domain::{
    options::OptionBag,
    request::{
        CardRequest, CheckoutIntent, CheckoutRequest, ContactField, DeviceCollectorRequest,
        GooglePayRequest, MerchantCapability, PaymentNetwork, SheetRequest, SummaryItem,
        TotalPriceStatus, UserAction, VaultRequest,
    },
};

const DEFAULT_CURRENCY: &str = "USD";
const DEFAULT_COUNTRY: &str = "US";

pub fn vault_request(options: &OptionBag) -> VaultRequest {
    VaultRequest {
        billing_agreement_description: options.owned_string("billingAgreementDescription"),
        display_name: options.owned_string("displayName"),
        locale_code: options.owned_string("localeCode"),
        user_authentication_email: options.owned_string("userAuthenticationEmail"),
        should_offer_credit: options.literal_true("offerCredit"),
        is_shipping_address_required: options.literal_true("isShippingAddressRequired"),
        is_shipping_address_editable: options.literal_true("isShippingAddressEditable"),
        has_user_location_consent: false,
    }
}

pub fn checkout_request(options: &OptionBag) -> CheckoutRequest {
    CheckoutRequest {
        // The vendor rejects an empty amount at auth-request time.
        amount: options.owned_string("amount").unwrap_or_default(),
        intent: convert_intent(options.string("intent")),
        user_action: convert_user_action(options.string("userAction")),
        currency_code: options
            .owned_string("currencyCode")
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        billing_agreement_description: options.owned_string("billingAgreementDescription"),
        display_name: options.owned_string("displayName"),
        locale_code: options.owned_string("localeCode"),
        should_offer_pay_later: options.literal_true("offerPayLater"),
        should_request_billing_agreement: options.literal_true("requestBillingAgreement"),
        is_shipping_address_required: options.literal_true("isShippingAddressRequired"),
        has_user_location_consent: false,
    }
}

fn convert_intent(intent: Option<&str>) -> CheckoutIntent {
    match intent {
        Some("sale") => CheckoutIntent::Sale,
        Some("order") => CheckoutIntent::Order,
        _ => CheckoutIntent::Authorize,
    }
}

fn convert_user_action(action: Option<&str>) -> UserAction {
    match action {
        Some("payNow") => UserAction::PayNow,
        _ => UserAction::None,
    }
}

pub fn card_request(options: &OptionBag) -> CardRequest {
    CardRequest {
        number: options.owned_string("number"),
        expiration_month: options.owned_string("expirationMonth"),
        expiration_year: options.owned_string("expirationYear"),
        cvv: options.owned_string("cvv"),
        postal_code: options.owned_string("postalCode"),
    }
}

pub fn device_collector_request() -> DeviceCollectorRequest {
    DeviceCollectorRequest {
        has_user_location_consent: false,
    }
}

pub fn sheet_request(options: &OptionBag) -> SheetRequest {
    let mut summary_items: Vec<SummaryItem> = options
        .array("items")
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    let label = item.get("label")?.as_str()?;
                    let amount = item.get("amount")?.as_str()?;
                    Some(SummaryItem {
                        label: label.to_string(),
                        amount: amount.to_string(),
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    // The total line is always last on the sheet.
    if let (Some(company), Some(total)) =
        (options.string("companyName"), options.string("totalAmount"))
    {
        summary_items.push(SummaryItem {
            label: company.to_string(),
            amount: total.to_string(),
        });
    }

    SheetRequest {
        merchant_identifier: options.owned_string("merchantId"),
        supported_networks: PaymentNetwork::ALL.to_vec(),
        merchant_capability: MerchantCapability::ThreeDSecure,
        country_code: options
            .owned_string("countryCode")
            .unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
        currency_code: options
            .owned_string("currencyCode")
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        summary_items,
        required_billing_contact_fields: contact_fields(options, "requiredBillingContactFields"),
        required_shipping_contact_fields: contact_fields(options, "requiredShippingContactFields"),
    }
}

fn contact_fields(options: &OptionBag, key: &str) -> Vec<ContactField> {
    let mut fields: Vec<ContactField> = options
        .strings(key)
        .unwrap_or_default()
        .into_iter()
        .filter_map(ContactField::parse)
        .collect();
    // Set semantics on the sheet: order and repeats carry no meaning.
    fields.sort();
    fields.dedup();
    fields
}

/// Networks to probe for `canMakeApplePayPayments`. No list means all four;
/// an explicit list keeps only the names it recognizes.
pub fn apple_pay_networks(options: &OptionBag) -> Vec<PaymentNetwork> {
    match options.strings("networks") {
        Some(names) => names.into_iter().filter_map(PaymentNetwork::parse).collect(),
        None => PaymentNetwork::ALL.to_vec(),
    }
}

pub fn google_pay_request(options: &OptionBag) -> GooglePayRequest {
    GooglePayRequest {
        currency_code: options
            .owned_string("currencyCode")
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        total_price: options.owned_string("amount").unwrap_or_default(),
        total_price_status: TotalPriceStatus::Final,
        merchant_name: options.owned_string("merchantName"),
    }
}
