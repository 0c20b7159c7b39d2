//! `CheckoutReturnHandler`: verify a returned checkout session and, on
//! success, store the issued token.

use tracing::{info, warn};

use crate::config::{CheckoutConfig, EntitlementConfig};
use crate::entitlement::EntitlementStore;
use crate::errors::CheckoutError;
use crate::traits::{Clock, IKeyValueStorage};

use super::redirect::CheckoutReturn;
use super::verifier::IPaymentVerifier;

/// Result of handling one checkout return.
#[derive(Debug)]
pub enum CheckoutOutcome {
    /// Token stored. The caller should replace the URL with `redirect_to`
    /// so the session id is not replayed on refresh.
    Unlocked { redirect_to: String },
    /// The backend answered but did not grant access.
    Rejected,
    /// Verification could not complete, or the token could not be stored.
    Failed(CheckoutError),
}

impl CheckoutOutcome {
    pub fn is_unlocked(&self) -> bool {
        matches!(self, Self::Unlocked { .. })
    }
}

/// Handles the "checkout-return event carrying a session id".
///
/// The store is passed per call rather than owned, so the same store can
/// back the page controller that decides what to render.
pub struct CheckoutReturnHandler<V> {
    verifier: V,
    validity_hours: f64,
    gate_path: String,
}

impl<V: IPaymentVerifier> CheckoutReturnHandler<V> {
    pub fn new(verifier: V, checkout: &CheckoutConfig, entitlement: &EntitlementConfig) -> Self {
        Self {
            verifier,
            validity_hours: entitlement.effective_validity_hours(),
            gate_path: checkout.effective_gate_path().to_string(),
        }
    }

    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    /// Verify `ret` and store the token on success. On rejection or failure
    /// the store is not touched.
    pub fn handle<S, C>(
        &self,
        store: &EntitlementStore<S, C>,
        ret: &CheckoutReturn,
    ) -> CheckoutOutcome
    where
        S: IKeyValueStorage,
        C: Clock,
    {
        let outcome = match self.verifier.verify_payment(&ret.session_id) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(verifier = self.verifier.name(), error = %e, "Payment verification failed");
                return CheckoutOutcome::Failed(e);
            }
        };

        let Some(token) = outcome.usable_token() else {
            info!(verifier = self.verifier.name(), "Payment not verified, access not granted");
            return CheckoutOutcome::Rejected;
        };

        if let Err(e) = store.set(token, self.validity_hours) {
            warn!(error = %e, "Verified payment but could not store access record");
            return CheckoutOutcome::Failed(e.into());
        }

        info!(verifier = self.verifier.name(), "Payment verified, access unlocked");
        CheckoutOutcome::Unlocked {
            redirect_to: self.gate_path.clone(),
        }
    }
}
