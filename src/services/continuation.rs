use {
    crate::config::PendingPolicy,
    crate::domain::{
        activation::{ActivationEvent, ReturnUrls},
        error::BridgeError,
        id::{ClientToken, ContinuationToken},
        outcome::PayPalAccountResult,
        request::{PayPalFlow, PayPalRequest},
        vendor::{AuthRequest, AuthResult, PendingRequest, TokenizeResult, VendorSdk},
    },
    chrono::{DateTime, Utc},
    tokio::sync::{Mutex, oneshot},
    uuid::Uuid,
};

pub type PayPalOutcome = Result<PayPalAccountResult, BridgeError>;

/// The one in-flight browser-switch flow. Lives only in memory: it survives
/// app suspension, not process death.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAuthorization {
    pub id: Uuid,
    pub token: ContinuationToken,
    pub flow: PayPalFlow,
    /// Kept so the vendor client can be rebuilt on resume; the call that
    /// launched the flow may be long gone by then.
    pub authorization: ClientToken,
    pub started_at: DateTime<Utc>,
}

struct Slot {
    pending: PendingAuthorization,
    generation: u64,
    waiter: Option<oneshot::Sender<PayPalOutcome>>,
}

#[derive(Default)]
struct Latch {
    slot: Option<Slot>,
    /// Bumped by every launch. A stored flow keeps the value its launch got,
    /// so a launch finishing late can tell a newer one overtook it.
    generation: u64,
    /// Launch holding the latch under `Reject` while the vendor runs.
    reserved: Option<u64>,
}

/// Handle returned by a successful launch.
#[derive(Debug)]
pub struct LaunchedFlow {
    pending: PendingAuthorization,
    receiver: oneshot::Receiver<PayPalOutcome>,
}

impl LaunchedFlow {
    pub fn pending(&self) -> &PendingAuthorization {
        &self.pending
    }

    /// Resolves once the flow is resumed to a terminal outcome. A flow that
    /// was replaced by a newer launch resolves to `NoPendingRequest`.
    pub async fn outcome(self) -> PayPalOutcome {
        self.receiver.await.unwrap_or_else(|_| {
            Err(BridgeError::NoPendingRequest(
                "pending PayPal request was replaced or cleared".into(),
            ))
        })
    }
}

/// Single-slot latch for the PayPal browser switch: `Idle` or
/// `Pending(token)`.
pub struct PaymentAuthContinuation {
    latch: Mutex<Latch>,
    policy: PendingPolicy,
}

impl PaymentAuthContinuation {
    pub fn new(policy: PendingPolicy) -> Self {
        Self {
            latch: Mutex::new(Latch::default()),
            policy,
        }
    }

    pub async fn pending(&self) -> Option<PendingAuthorization> {
        self.latch
            .lock()
            .await
            .slot
            .as_ref()
            .map(|s| s.pending.clone())
    }

    /// Create the auth request, launch the browser switch and store the
    /// continuation token. A failure leaves the latch `Idle` unless a newer
    /// launch stored its flow meanwhile.
    pub async fn start(
        &self,
        sdk: &dyn VendorSdk,
        return_urls: &ReturnUrls,
        authorization: ClientToken,
        request: PayPalRequest,
    ) -> Result<LaunchedFlow, BridgeError> {
        let generation = self.begin_launch().await?;

        let flow = request.flow();
        let token = match launch(sdk, return_urls, &authorization, request).await {
            Ok(token) => token,
            Err(e) => {
                self.abandon_launch(generation).await;
                tracing::warn!(%flow, error = %e, "PayPal launch failed");
                return Err(e);
            }
        };

        let pending = PendingAuthorization {
            id: Uuid::now_v7(),
            token,
            flow,
            authorization,
            started_at: Utc::now(),
        };
        let (sender, receiver) = oneshot::channel();

        let mut latch = self.latch.lock().await;
        if latch.reserved == Some(generation) {
            latch.reserved = None;
        }
        if let Some(current) = latch.slot.as_ref() {
            if current.generation > generation {
                tracing::warn!(
                    newer_flow_id = %current.pending.id,
                    %flow,
                    "PayPal launch overtaken by a newer request"
                );
                return Err(BridgeError::NoPendingRequest(
                    "PayPal request was superseded by a newer launch".into(),
                ));
            }
            // Dropping the old sender resolves its waiter.
            tracing::warn!(
                replaced_flow_id = %current.pending.id,
                flow_id = %pending.id,
                "replacing pending PayPal request"
            );
        }
        latch.slot = Some(Slot {
            pending: pending.clone(),
            generation,
            waiter: Some(sender),
        });
        drop(latch);

        tracing::info!(flow_id = %pending.id, %flow, "PayPal flow launched, awaiting return");
        Ok(LaunchedFlow { pending, receiver })
    }

    /// Under `Reject` the latch is reserved here, before any vendor call, so
    /// a concurrent launch fails without opening a second browser switch.
    async fn begin_launch(&self) -> Result<u64, BridgeError> {
        let mut latch = self.latch.lock().await;
        if self.policy == PendingPolicy::Reject {
            if let Some(slot) = latch.slot.as_ref() {
                return Err(in_flight(&slot.pending));
            }
            if latch.reserved.is_some() {
                return Err(BridgeError::RequestInFlight(
                    "another PayPal launch is in progress".into(),
                ));
            }
        }
        latch.generation += 1;
        let generation = latch.generation;
        if self.policy == PendingPolicy::Reject {
            latch.reserved = Some(generation);
        }
        Ok(generation)
    }

    /// Only flows older than the failed launch are dropped.
    async fn abandon_launch(&self, generation: u64) {
        let mut latch = self.latch.lock().await;
        if latch.reserved == Some(generation) {
            latch.reserved = None;
        }
        if latch.slot.as_ref().is_some_and(|s| s.generation < generation) {
            latch.slot = None;
        }
    }

    /// Feed an activation to the vendor's resume primitive. `NoResult`
    /// keeps the request pending; every other classification clears it.
    pub async fn resume(
        &self,
        sdk: &dyn VendorSdk,
        return_urls: &ReturnUrls,
        activation: &ActivationEvent,
    ) -> PayPalOutcome {
        self.try_resume(sdk, return_urls, activation)
            .await
            .unwrap_or_else(|| {
                Err(BridgeError::NoPendingRequest(
                    "no pending PayPal request found".into(),
                ))
            })
    }

    /// `None` when nothing is pending; the vendor never sees the activation.
    pub async fn try_resume(
        &self,
        sdk: &dyn VendorSdk,
        return_urls: &ReturnUrls,
        activation: &ActivationEvent,
    ) -> Option<PayPalOutcome> {
        let pending = self.pending().await?;
        Some(self.resume_pending(sdk, return_urls, activation, pending).await)
    }

    async fn resume_pending(
        &self,
        sdk: &dyn VendorSdk,
        return_urls: &ReturnUrls,
        activation: &ActivationEvent,
        pending: PendingAuthorization,
    ) -> PayPalOutcome {
        let client = sdk
            .paypal(&pending.authorization, return_urls)
            .map_err(BridgeError::from_setup)?;

        match client.handle_return(&pending.token, activation) {
            AuthResult::NoResult => {
                tracing::debug!(flow_id = %pending.id, "returned without completing PayPal flow");
                Err(BridgeError::NoResultYet(
                    "user returned without completing PayPal flow".into(),
                ))
            }
            AuthResult::Cancel => {
                let waiter = self.claim(&pending).await?;
                self.finish(
                    &pending,
                    waiter,
                    Err(BridgeError::UserCancelled("user cancelled".into())),
                )
            }
            AuthResult::Failure(e) => {
                let waiter = self.claim(&pending).await?;
                self.finish(&pending, waiter, Err(BridgeError::from_paypal(e)))
            }
            AuthResult::Success(payload) => {
                // Claimed before tokenizing so a second activation can't
                // tokenize the same approval again.
                let waiter = self.claim(&pending).await?;
                let outcome = match client.tokenize(payload).await {
                    TokenizeResult::Success(nonce) => Ok(PayPalAccountResult::from(nonce)),
                    TokenizeResult::Failure(e) => Err(BridgeError::from_paypal(e)),
                    TokenizeResult::Cancel => {
                        Err(BridgeError::UserCancelled("user cancelled".into()))
                    }
                };
                self.finish(&pending, waiter, outcome)
            }
        }
    }

    /// Remove the slot only if it still holds `pending`.
    async fn claim(
        &self,
        pending: &PendingAuthorization,
    ) -> Result<Option<oneshot::Sender<PayPalOutcome>>, BridgeError> {
        let mut latch = self.latch.lock().await;
        if !latch.slot.as_ref().is_some_and(|s| s.pending.id == pending.id) {
            return Err(BridgeError::NoPendingRequest(
                "PayPal request was already resumed or replaced".into(),
            ));
        }
        Ok(latch.slot.take().and_then(|s| s.waiter))
    }

    fn finish(
        &self,
        pending: &PendingAuthorization,
        waiter: Option<oneshot::Sender<PayPalOutcome>>,
        outcome: PayPalOutcome,
    ) -> PayPalOutcome {
        let elapsed_ms = (Utc::now() - pending.started_at).num_milliseconds();
        match &outcome {
            Ok(_) => tracing::info!(flow_id = %pending.id, elapsed_ms, "PayPal flow completed"),
            Err(e) => tracing::warn!(
                flow_id = %pending.id,
                elapsed_ms,
                code = e.code(),
                error = %e,
                "PayPal flow failed"
            ),
        }
        if let Some(waiter) = waiter {
            // The launching caller may have stopped listening.
            let _ = waiter.send(outcome.clone());
        }
        outcome
    }
}

async fn launch(
    sdk: &dyn VendorSdk,
    return_urls: &ReturnUrls,
    authorization: &ClientToken,
    request: PayPalRequest,
) -> Result<ContinuationToken, BridgeError> {
    let client = sdk
        .paypal(authorization, return_urls)
        .map_err(BridgeError::from_setup)?;

    let launch_request = match client.create_auth_request(request).await {
        AuthRequest::ReadyToLaunch(launch_request) => launch_request,
        AuthRequest::Failure(e) => return Err(BridgeError::from_setup(e)),
    };

    match client.launch(launch_request) {
        PendingRequest::Started(token) => Ok(token),
        PendingRequest::Failure(e) => Err(BridgeError::from_setup(e)),
    }
}

fn in_flight(pending: &PendingAuthorization) -> BridgeError {
    BridgeError::RequestInFlight(format!(
        "{} flow {} is still pending",
        pending.flow, pending.id
    ))
}
