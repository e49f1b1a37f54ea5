use log::debug;
use obfstr::obfstring as ss;

/// Remote-config parameter that carries the data URL.
pub fn config_key() -> String {
    ss!("data_file_url")
}

/// Data-source URL delivered by remote config.
#[derive(Debug, Default)]
pub struct RemoteConfigHandle {
    url: String,
    fetched: bool,
}

impl RemoteConfigHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store_url(&mut self, url: &str) {
        self.url = url.to_string();
        self.fetched = !self.url.is_empty();
        debug!("RemoteConfigHandle: url stored, fetched = {}", self.fetched);
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_ready(&self) -> bool {
        self.fetched
    }
}
