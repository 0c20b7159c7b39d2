//! `AccessRecord`: persisted layout of the entitlement slot.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Token plus absolute expiry, serialized as
/// `{"token": "...", "expiration": <epoch ms>}`.
///
/// There is no version field. Any value that does not match this shape
/// exactly (missing field, wrong type, extra field) is corrupt.
///
/// `expiration` is written as whole milliseconds but read from any finite
/// JSON number. A fractional deadline is rounded up, which keeps
/// `now >= expiration` exact for integer `now`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccessRecord {
    pub token: String,
    #[serde(deserialize_with = "deserialize_epoch_millis")]
    pub expiration: i64,
}

impl AccessRecord {
    /// Build a record valid for `validity_hours` from `now_millis`.
    ///
    /// The window is rounded up to whole milliseconds and is never shorter
    /// than 1 ms, so `expiration` is always strictly after `now_millis`.
    pub fn issue(token: impl Into<String>, now_millis: i64, validity_hours: f64) -> Self {
        let window = (validity_hours * MILLIS_PER_HOUR).ceil().max(1.0) as i64;
        Self {
            token: token.into(),
            expiration: now_millis.saturating_add(window),
        }
    }

    /// Epoch-ms expiry.
    pub fn expires_at(&self) -> i64 {
        self.expiration
    }

    /// Expired once `now` reaches the deadline.
    pub fn is_expired_at(&self, now_millis: i64) -> bool {
        now_millis >= self.expiration
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a raw slot value. `None` for anything malformed, including an
    /// empty or whitespace-only token.
    pub fn decode(raw: &str) -> Option<Self> {
        let record: Self = serde_json::from_str(raw).ok()?;
        if record.token.trim().is_empty() {
            return None;
        }
        Some(record)
    }
}

fn deserialize_epoch_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct EpochMillisVisitor;

    impl Visitor<'_> for EpochMillisVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a finite number of epoch milliseconds")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            Ok(i64::try_from(v).unwrap_or(i64::MAX))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            if !v.is_finite() {
                return Err(E::invalid_value(de::Unexpected::Float(v), &self));
            }
            // Float-to-int `as` saturates at the i64 bounds.
            Ok(v.ceil() as i64)
        }
    }

    deserializer.deserialize_any(EpochMillisVisitor)
}
