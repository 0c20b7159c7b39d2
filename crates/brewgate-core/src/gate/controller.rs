//! `GatedPageController`: one decision per page load between the paywall
//! and the unlocked view, plus explicit log-out.

use tracing::debug;

use crate::checkout::{CheckoutOutcome, CheckoutReturn, CheckoutReturnHandler, IPaymentVerifier};
use crate::config::BrewgateConfig;
use crate::entitlement::{EntitlementState, EntitlementStore};
use crate::traits::{Clock, IKeyValueStorage, SystemClock};

/// Which view the gated page renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatedView {
    Paywall,
    Unlocked { token: String, expires_at: i64 },
}

impl GatedView {
    pub fn is_unlocked(&self) -> bool {
        matches!(self, Self::Unlocked { .. })
    }

    fn from_state(state: EntitlementState) -> Self {
        match state {
            EntitlementState::Valid { token, expires_at } => Self::Unlocked { token, expires_at },
            EntitlementState::Unset | EntitlementState::Expired { .. } => Self::Paywall,
        }
    }
}

/// Everything a page load produced.
#[derive(Debug)]
pub struct PageLoad {
    pub view: GatedView,
    /// Present when the URL carried a checkout session id.
    pub checkout: Option<CheckoutOutcome>,
}

impl PageLoad {
    /// URL the page should replace itself with, once a session id was consumed.
    pub fn redirect_to(&self) -> Option<&str> {
        match &self.checkout {
            Some(CheckoutOutcome::Unlocked { redirect_to }) => Some(redirect_to),
            _ => None,
        }
    }
}

pub struct GatedPageController<V, S, C = SystemClock> {
    store: EntitlementStore<S, C>,
    checkout: CheckoutReturnHandler<V>,
    session_param: String,
}

impl<V, S, C> GatedPageController<V, S, C>
where
    V: IPaymentVerifier,
    S: IKeyValueStorage,
    C: Clock,
{
    pub fn new(store: EntitlementStore<S, C>, verifier: V, config: &BrewgateConfig) -> Self {
        Self {
            store,
            checkout: CheckoutReturnHandler::new(verifier, &config.checkout, &config.entitlement),
            session_param: config.checkout.effective_session_param().to_string(),
        }
    }

    pub fn store(&self) -> &EntitlementStore<S, C> {
        &self.store
    }

    /// Handle a page load at `url`.
    ///
    /// A session id in the URL is verified first. Whatever that outcome,
    /// the view is then read from the store, so a failed verification falls
    /// back to any access the browser already had.
    pub fn on_page_load(&self, url: &str) -> PageLoad {
        let checkout = CheckoutReturn::from_url(url, &self.session_param)
            .map(|ret| self.checkout.handle(&self.store, &ret));

        let view = self.current_view();
        debug!(unlocked = view.is_unlocked(), checkout = checkout.is_some(), "Gated page loaded");
        PageLoad { view, checkout }
    }

    /// Read the store once and pick the view.
    pub fn current_view(&self) -> GatedView {
        GatedView::from_state(self.store.state())
    }

    /// Explicit log-out from the exclusive area.
    pub fn log_out(&self) -> GatedView {
        self.store.clear();
        GatedView::Paywall
    }
}
