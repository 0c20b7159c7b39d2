//! Redirect URL parsing for the checkout return.

use reqwest::Url;

use crate::config::CheckoutConfig;

/// Base used to resolve path-only URLs such as `/exclusive?session_id=x`.
const RELATIVE_BASE: &str = "http://localhost/";

/// A return from the external checkout carrying a session identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutReturn {
    pub session_id: String,
}

impl CheckoutReturn {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
        }
    }

    /// Extract the session id from `url`'s `param` query parameter.
    ///
    /// Accepts absolute URLs, path-relative URLs and bare query strings.
    /// Returns `None` when the parameter is missing or blank.
    pub fn from_url(url: &str, param: &str) -> Option<Self> {
        let parsed = parse_lenient(url)?;
        let session_id = parsed
            .query_pairs()
            .find(|(key, _)| key == param)
            .map(|(_, value)| value.trim().to_string())?;
        if session_id.is_empty() {
            return None;
        }
        Some(Self { session_id })
    }
}

/// Where the payment-success page sends the browser next: the gated page,
/// carrying the session id along when the success URL had one.
///
/// A path-only `gate_path` yields a path; an absolute one keeps its scheme
/// and host.
pub fn success_redirect(success_url: &str, config: &CheckoutConfig) -> String {
    let param = config.effective_session_param();
    let gate_path = config.effective_gate_path();

    let Some(ret) = CheckoutReturn::from_url(success_url, param) else {
        return gate_path.to_string();
    };
    let absolute = Url::parse(gate_path).is_ok();
    let Some(mut target) = parse_lenient(gate_path) else {
        return gate_path.to_string();
    };
    target
        .query_pairs_mut()
        .clear()
        .append_pair(param, &ret.session_id);

    if absolute {
        return target.into();
    }
    match target.query() {
        Some(query) => format!("{}?{}", target.path(), query),
        None => target.path().to_string(),
    }
}

fn parse_lenient(url: &str) -> Option<Url> {
    if let Ok(parsed) = Url::parse(url) {
        return Some(parsed);
    }
    Url::parse(RELATIVE_BASE).ok()?.join(url).ok()
}
