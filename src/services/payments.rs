use {
    crate::adapters::{request_mapper, result_mapper::apple_pay_result},
    crate::domain::{
        error::BridgeError,
        id::ClientToken,
        options::OptionBag,
        outcome::{ApplePayResult, CardResult, GooglePayResult},
        vendor::{SheetOutcome, TokenizeResult, VendorError, VendorSdk},
    },
};

/// `clientToken` from the option bag; missing or empty fails before any
/// vendor call.
pub fn client_token(options: &OptionBag) -> Result<ClientToken, BridgeError> {
    ClientToken::new(options.string("clientToken").unwrap_or_default())
}

fn init_error(err: VendorError) -> BridgeError {
    BridgeError::ClientInitialization(err.message)
}

pub async fn tokenize_card(
    sdk: &dyn VendorSdk,
    options: &OptionBag,
) -> Result<CardResult, BridgeError> {
    let authorization = client_token(options)?;
    let client = sdk.card(&authorization).map_err(init_error)?;

    match client.tokenize(request_mapper::card_request(options)).await {
        Ok(nonce) => Ok(CardResult::from(nonce)),
        Err(e) => {
            tracing::warn!(error = %e, "card tokenization failed");
            Err(BridgeError::CardTokenization(e.message))
        }
    }
}

/// Device fingerprint for fraud tooling; returns the correlation payload.
pub async fn collect_device_data(
    sdk: &dyn VendorSdk,
    client_token: &str,
) -> Result<String, BridgeError> {
    let authorization = ClientToken::new(client_token)?;
    let collector = sdk.data_collector(&authorization).map_err(init_error)?;

    collector
        .collect_device_data(request_mapper::device_collector_request())
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "device data collection failed");
            BridgeError::DeviceCollector(e.message)
        })
}

pub fn is_apple_pay_available(sdk: &dyn VendorSdk) -> bool {
    sdk.apple_pay_sheet().is_some_and(|sheet| sheet.is_available())
}

pub fn can_make_apple_pay_payments(sdk: &dyn VendorSdk, options: &OptionBag) -> bool {
    let networks = request_mapper::apple_pay_networks(options);
    sdk.apple_pay_sheet()
        .is_some_and(|sheet| sheet.can_make_payments(&networks))
}

/// Show the Apple Pay sheet and tokenize what the payer authorizes.
pub async fn present_apple_pay_sheet(
    sdk: &dyn VendorSdk,
    options: &OptionBag,
) -> Result<ApplePayResult, BridgeError> {
    let Some(sheet) = sdk.apple_pay_sheet().filter(|sheet| sheet.is_available()) else {
        return Err(BridgeError::ApplePayNotAvailable(
            "Apple Pay is not available on this device".into(),
        ));
    };
    let authorization = client_token(options)?;

    let payment = match sheet.present(request_mapper::sheet_request(options)).await {
        Ok(SheetOutcome::Authorized(payment)) => payment,
        Ok(SheetOutcome::Dismissed) => {
            return Err(BridgeError::UserCancelled(
                "Apple Pay sheet dismissed".into(),
            ));
        }
        Err(e) => {
            tracing::warn!(error = %e, "Apple Pay sheet could not be presented");
            return Err(BridgeError::ApplePayNotAvailable(e.message));
        }
    };

    let client = sdk.apple_pay(&authorization).map_err(init_error)?;
    match client.tokenize(payment.clone()).await {
        Ok(nonce) => Ok(apple_pay_result(nonce, payment)),
        Err(e) => {
            tracing::warn!(error = %e, "Apple Pay tokenization failed");
            Err(BridgeError::ApplePayTokenization(e.message))
        }
    }
}

pub async fn request_google_pay_payment(
    sdk: &dyn VendorSdk,
    options: &OptionBag,
) -> Result<GooglePayResult, BridgeError> {
    let authorization = client_token(options)?;
    let client = sdk.google_pay(&authorization).map_err(init_error)?;

    match client
        .tokenize(request_mapper::google_pay_request(options))
        .await
    {
        TokenizeResult::Success(nonce) => Ok(GooglePayResult::from(nonce)),
        TokenizeResult::Cancel => Err(BridgeError::UserCancelled("user cancelled".into())),
        TokenizeResult::Failure(e) => {
            tracing::warn!(error = %e, "Google Pay tokenization failed");
            Err(BridgeError::GooglePayTokenization(e.message))
        }
    }
}
