use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Cookies the backend set for this client.
///
/// This is the only session material persisted on the client side; the
/// HttpOnly access cookie is replayed verbatim and never inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionCookies(BTreeMap<String, String>);

impl SessionCookies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Apply one `Set-Cookie` header value.
    ///
    /// An empty value, `Max-Age=0` or a past `Expires` from the backend's
    /// `unset_jwt_cookies` removes the cookie. Returns `true` when the jar
    /// changed.
    pub fn apply_set_cookie(&mut self, header: &str) -> bool {
        let mut parts = header.split(';');
        let Some((name, value)) = parts.next().and_then(|pair| pair.split_once('=')) else {
            return false;
        };
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let value = value.trim().trim_matches('"');

        let expired = parts.any(|attr| {
            let attr = attr.trim();
            match attr.split_once('=') {
                Some((key, val)) if key.trim().eq_ignore_ascii_case("max-age") => {
                    val.trim().parse::<i64>().map(|secs| secs <= 0).unwrap_or(false)
                }
                Some((key, val)) if key.trim().eq_ignore_ascii_case("expires") => {
                    val.contains("1970")
                }
                _ => false,
            }
        });

        if value.is_empty() || expired {
            self.0.remove(name).is_some()
        } else {
            self.0.insert(name.to_string(), value.to_string()).as_deref() != Some(value)
        }
    }

    /// Value for the `Cookie` request header, `None` when the jar is empty.
    pub fn header_value(&self) -> Option<String> {
        if self.0.is_empty() {
            return None;
        }
        Some(
            self.0
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}
