//! Extraction of content arrays and listener config from the data payload.
//!
//! Values are located with a real JSON parser; array values are returned as
//! the exact source text (whitespace preserved) via `RawValue`.

use super::listener_config::ListenerConfig;
use anyhow::{Result, anyhow};
use log::{debug, warn};
use serde::Deserialize;
use serde_json::value::RawValue;
use std::collections::HashMap;
use std::fmt;

pub const EMPTY_ARRAY: &str = "[]";

const LISTENER_CONFIG_KEY: &str = "listener_config";
const ENVELOPE_DATA_KEY: &str = "data";
const ENVELOPE_SUCCESS_KEY: &str = "success";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Categories,
    Channels,
    LiveEvents,
    EventCategories,
    Sports,
}

impl ContentKind {
    pub const ALL: [ContentKind; 5] = [
        ContentKind::Categories,
        ContentKind::Channels,
        ContentKind::LiveEvents,
        ContentKind::EventCategories,
        ContentKind::Sports,
    ];

    #[inline]
    pub fn key(&self) -> &'static str {
        match self {
            ContentKind::Categories => "categories",
            ContentKind::Channels => "channels",
            ContentKind::LiveEvents => "live_events",
            ContentKind::EventCategories => "event_categories",
            ContentKind::Sports => "sports_slug",
        }
    }

    /// Key tried when the primary one yields nothing.
    #[inline]
    pub fn fallback_key(&self) -> Option<&'static str> {
        match self {
            ContentKind::LiveEvents => Some("liveEvents"),
            ContentKind::EventCategories => Some("eventCategories"),
            ContentKind::Sports => Some("sports"),
            _ => None,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        match self {
            ContentKind::Categories => 0,
            ContentKind::Channels => 1,
            ContentKind::LiveEvents => 2,
            ContentKind::EventCategories => 3,
            ContentKind::Sports => 4,
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

type TopLevel<'a> = HashMap<String, &'a RawValue>;

/// Parses the leading JSON object, skipping a UTF-8 BOM and ignoring
/// anything after the closing brace.
fn parse_top_level(json: &str) -> Result<TopLevel<'_>> {
    let json = json.strip_prefix('\u{feff}').unwrap_or(json);
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let top = TopLevel::deserialize(&mut deserializer).map_err(|e| anyhow!("payload is not a JSON object: {}", e))?;
    if deserializer.end().is_err() {
        debug!("ignoring trailing bytes after the payload object");
    }
    Ok(top)
}

#[inline]
fn is_array(raw: &RawValue) -> bool {
    raw.get().starts_with('[')
}

#[inline]
fn is_empty_array(raw: &str) -> bool {
    raw.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .is_some_and(|inner| inner.trim().is_empty())
}

/// Returns the object under `data` when the payload is a `{success, data}`
/// envelope, otherwise the input unchanged.
pub fn unwrap(json: &str) -> &str {
    let top = match parse_top_level(json) {
        Ok(top) => top,
        Err(e) => {
            warn!("unwrap: {}", e);
            return json;
        },
    };

    if !top.contains_key(ENVELOPE_SUCCESS_KEY) {
        return json;
    }

    match top.get(ENVELOPE_DATA_KEY).copied() {
        Some(data) if data.get().starts_with('{') => data.get(),
        Some(_) => {
            debug!("envelope `data` is not an object, keeping payload as is");
            json
        },
        None => json,
    }
}

fn array_in<'a>(top: &TopLevel<'a>, key: &str) -> Option<&'a str> {
    top.get(key).copied().filter(|raw| is_array(raw)).map(RawValue::get)
}

fn content_in(top: &TopLevel<'_>, kind: ContentKind) -> String {
    let primary = array_in(top, kind.key());
    if primary.is_none_or(is_empty_array) {
        if let Some(alt) = kind.fallback_key().and_then(|key| array_in(top, key)) {
            if !is_empty_array(alt) {
                return alt.to_string();
            }
        }
    }

    match primary {
        Some(raw) => raw.to_string(),
        None => {
            debug!("no array found for `{}`", kind);
            EMPTY_ARRAY.to_string()
        },
    }
}

/// Exact text of the top-level array under `key`, or `"[]"`.
pub fn extract_array(json: &str, key: &str) -> String {
    match parse_top_level(json) {
        Ok(top) => array_in(&top, key).unwrap_or(EMPTY_ARRAY).to_string(),
        Err(e) => {
            debug!("extract_array({}): {}", key, e);
            EMPTY_ARRAY.to_string()
        },
    }
}

/// Like [`extract_array`], trying the kind's fallback key when the primary
/// key is absent or holds an empty array.
pub fn extract_content(json: &str, kind: ContentKind) -> String {
    match parse_top_level(json) {
        Ok(top) => content_in(&top, kind),
        Err(e) => {
            debug!("extract_content({}): {}", kind, e);
            EMPTY_ARRAY.to_string()
        },
    }
}

/// All content arrays, indexed by [`ContentKind::index`], from a single parse.
pub fn extract_all_content(json: &str) -> [String; 5] {
    match parse_top_level(json) {
        Ok(top) => ContentKind::ALL.map(|kind| content_in(&top, kind)),
        Err(e) => {
            warn!("content arrays unavailable: {}", e);
            ContentKind::ALL.map(|_| EMPTY_ARRAY.to_string())
        },
    }
}

fn try_extract_listener_config(json: &str) -> Result<Option<ListenerConfig>> {
    let top = parse_top_level(json)?;
    let Some(raw) = top.get(LISTENER_CONFIG_KEY).copied() else {
        return Ok(None);
    };

    let value = serde_json::from_str(raw.get())?;
    ListenerConfig::from_value(value)
        .map(Some)
        .ok_or_else(|| anyhow!("`{}` is not an object", LISTENER_CONFIG_KEY))
}

/// Listener config of the payload; disabled and uninitialized when missing or malformed.
pub fn extract_listener_config(json: &str) -> ListenerConfig {
    match try_extract_listener_config(json) {
        Ok(Some(config)) => config,
        Ok(None) => {
            debug!("payload has no `{}`", LISTENER_CONFIG_KEY);
            ListenerConfig::disabled()
        },
        Err(e) => {
            warn!("failed to read `{}`: {:#}", LISTENER_CONFIG_KEY, e);
            ListenerConfig::disabled()
        },
    }
}
