//! Holds the most recently stored data payload and its content arrays.

use super::extractor::{self, ContentKind, EMPTY_ARRAY};
use super::listener_config::ListenerConfig;
use log::debug;

pub struct AppDataStore {
    /// Unwrapped data object of the last payload.
    data: Option<String>,
    /// Content arrays derived from `data`, indexed by [`ContentKind::index`].
    content: [String; 5],
}

impl AppDataStore {
    pub fn new() -> Self {
        Self {
            data: None,
            content: ContentKind::ALL.map(|_| EMPTY_ARRAY.to_string()),
        }
    }

    /// Replaces the stored payload and returns the listener config found in it.
    ///
    /// The store counts as loaded afterwards even when nothing could be
    /// extracted, since the arrays stay independently queryable.
    pub fn store(&mut self, json: &str) -> ListenerConfig {
        let data = extractor::unwrap(json);
        self.content = extractor::extract_all_content(data);
        let config = extractor::extract_listener_config(data);

        debug!(
            "AppDataStore: stored {} bytes (unwrapped {}), listener config initialized = {}",
            json.len(),
            data.len(),
            config.initialized
        );

        self.data = Some(data.to_string());
        config
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }

    #[cfg(test)]
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    /// JSON array text for `kind`, `"[]"` until something is stored.
    pub fn content(&self, kind: ContentKind) -> &str {
        &self.content[kind.index()]
    }
}

impl Default for AppDataStore {
    fn default() -> Self {
        Self::new()
    }
}
