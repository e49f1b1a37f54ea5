//! Server-delivered listener configuration.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashSet;

/// Settings that decide whether and where the direct-link interstitial is shown.
///
/// Every field is decoded on its own: a wrong-typed field falls back to its
/// default instead of rejecting the whole object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListenerConfig {
    #[serde(deserialize_with = "lenient_bool")]
    pub enable_direct_link: bool,
    #[serde(deserialize_with = "lenient_string")]
    pub direct_link_url: String,
    #[serde(deserialize_with = "lenient_string_set")]
    pub allowed_pages: HashSet<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub contact_url: String,
    #[serde(deserialize_with = "lenient_string")]
    pub cric_live_url: String,
    #[serde(deserialize_with = "lenient_string")]
    pub foot_live_url: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email_us: String,
    #[serde(deserialize_with = "lenient_string")]
    pub web_url: String,
    #[serde(deserialize_with = "lenient_string")]
    pub message: String,
    #[serde(deserialize_with = "lenient_string")]
    pub message_url: String,
    #[serde(deserialize_with = "lenient_string")]
    pub app_version: String,
    #[serde(deserialize_with = "lenient_string")]
    pub download_url: String,
    /// Set once a `listener_config` object has been found in a payload.
    #[serde(skip)]
    pub initialized: bool,
}

impl ListenerConfig {
    /// Disabled, uninitialized configuration.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Decodes a `listener_config` object. Non-object values yield `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }

        let mut config: ListenerConfig = serde_json::from_value(value).ok()?;
        config.initialized = true;
        Some(config)
    }

    /// An enabled config is only usable with a link target and at least one page.
    pub fn is_valid(&self) -> bool {
        if !self.initialized {
            return false;
        }
        if self.enable_direct_link {
            return !self.direct_link_url.is_empty() && !self.allowed_pages.is_empty();
        }
        true
    }

    #[inline]
    pub fn is_page_allowed(&self, page_type: &str) -> bool {
        self.allowed_pages.contains(page_type)
    }
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_string_set<'de, D: Deserializer<'de>>(deserializer: D) -> Result<HashSet<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => HashSet::new(),
    })
}
