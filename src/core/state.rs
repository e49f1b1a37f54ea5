//! Lock-guarded facade over the data store, session gate and remote config.

use super::app_data::AppDataStore;
use super::extractor::{ContentKind, EMPTY_ARRAY};
use super::listener_config::ListenerConfig;
use super::remote_config::RemoteConfigHandle;
use super::session_gate::SessionGate;
use anyhow::{Result, anyhow};
use log::{info, warn};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub struct NativeState {
    app_data: RwLock<AppDataStore>,
    session_gate: RwLock<SessionGate>,
    remote_config: RwLock<RemoteConfigHandle>,
}

macro_rules! read_lock {
    ($lock:expr, $name:literal) => {
        $lock
            .read()
            .map_err(|_| anyhow!(concat!("Failed to acquire ", $name, " read lock")))
    };
}

macro_rules! write_lock {
    ($lock:expr, $name:literal) => {
        $lock
            .write()
            .map_err(|_| anyhow!(concat!("Failed to acquire ", $name, " write lock")))
    };
}

impl NativeState {
    pub fn new() -> Self {
        Self {
            app_data: RwLock::new(AppDataStore::new()),
            session_gate: RwLock::new(SessionGate::new()),
            remote_config: RwLock::new(RemoteConfigHandle::new()),
        }
    }

    fn app_data(&self) -> Result<RwLockReadGuard<'_, AppDataStore>> {
        read_lock!(self.app_data, "AppDataStore")
    }

    fn session_gate(&self) -> Result<RwLockReadGuard<'_, SessionGate>> {
        read_lock!(self.session_gate, "SessionGate")
    }

    fn session_gate_mut(&self) -> Result<RwLockWriteGuard<'_, SessionGate>> {
        write_lock!(self.session_gate, "SessionGate")
    }

    /// Stores a payload and hands its listener config to the session gate.
    ///
    /// `None` is the only input that fails; prior state is left untouched.
    pub fn store_data(&self, json: Option<&str>) -> Result<bool> {
        let Some(json) = json else {
            warn!("NativeState: no payload to store");
            return Ok(false);
        };

        // Data first, then gate: readers never see content and config from different payloads.
        let mut app_data = write_lock!(self.app_data, "AppDataStore")?;
        let mut gate = self.session_gate_mut()?;

        let config = app_data.store(json);
        info!(
            "NativeState: payload stored, listener config valid = {}",
            config.is_valid()
        );
        gate.set_config(config);

        Ok(true)
    }

    pub fn content(&self, kind: ContentKind) -> Result<String> {
        let app_data = self.app_data()?;
        if !app_data.is_loaded() {
            return Ok(EMPTY_ARRAY.to_string());
        }
        Ok(app_data.content(kind).to_string())
    }

    pub fn is_data_loaded(&self) -> Result<bool> {
        Ok(self.app_data()?.is_loaded())
    }

    pub fn should_show_link(&self, page_type: &str, unique_id: Option<&str>) -> Result<bool> {
        Ok(self.session_gate()?.should_show_link(page_type, unique_id))
    }

    pub fn direct_link_url(&self) -> Result<String> {
        Ok(self.session_gate()?.direct_link_url().to_string())
    }

    /// Clears the triggered set with callers of `should_show_link` locked out.
    pub fn reset_sessions(&self) -> Result<()> {
        self.session_gate_mut()?.reset_sessions();
        Ok(())
    }

    pub fn is_config_valid(&self) -> Result<bool> {
        Ok(self.session_gate()?.is_config_valid())
    }

    /// Reads from the current listener config under the gate lock.
    pub fn with_listener_config<R>(&self, f: impl FnOnce(&ListenerConfig) -> R) -> Result<R> {
        Ok(f(self.session_gate()?.config()))
    }

    pub fn store_config_url(&self, url: &str) -> Result<()> {
        write_lock!(self.remote_config, "RemoteConfigHandle")?.store_url(url);
        Ok(())
    }

    pub fn config_url(&self) -> Result<String> {
        Ok(read_lock!(self.remote_config, "RemoteConfigHandle")?.url().to_string())
    }

    pub fn is_config_ready(&self) -> Result<bool> {
        Ok(read_lock!(self.remote_config, "RemoteConfigHandle")?.is_ready())
    }
}

impl Default for NativeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{"success":true,"data":{"categories":[{"id":1}],"listener_config":{"enable_direct_link":true,"direct_link_url":"https://x","allowed_pages":["home"]}}}"#;

    #[test]
    fn test_end_to_end() {
        let state = NativeState::new();
        assert!(state.store_data(Some(PAYLOAD)).unwrap());

        assert_eq!(state.content(ContentKind::Categories).unwrap(), r#"[{"id":1}]"#);
        assert!(state.is_data_loaded().unwrap());
        assert!(state.is_config_valid().unwrap());
        assert_eq!(state.direct_link_url().unwrap(), "https://x");
        assert!(state.should_show_link("home", None).unwrap());
        assert!(!state.should_show_link("home", None).unwrap());
    }

    #[test]
    fn test_before_any_store() {
        let state = NativeState::new();
        assert!(!state.is_data_loaded().unwrap());
        assert!(!state.is_config_valid().unwrap());
        assert_eq!(state.content(ContentKind::Channels).unwrap(), EMPTY_ARRAY);
        assert!(!state.should_show_link("home", None).unwrap());
        assert_eq!(state.direct_link_url().unwrap(), "");
    }

    #[test]
    fn test_absent_payload_keeps_state() {
        let state = NativeState::new();
        state.store_data(Some(PAYLOAD)).unwrap();

        assert!(!state.store_data(None).unwrap());
        assert!(state.is_data_loaded().unwrap());
        assert!(state.is_config_valid().unwrap());
        assert_eq!(state.content(ContentKind::Categories).unwrap(), r#"[{"id":1}]"#);
    }

    #[test]
    fn test_payload_without_listener_config_disables_gate() {
        let state = NativeState::new();
        state.store_data(Some(PAYLOAD)).unwrap();
        state.store_data(Some(r#"{"channels":[1]}"#)).unwrap();

        assert!(state.is_data_loaded().unwrap());
        assert!(!state.is_config_valid().unwrap());
        assert!(!state.should_show_link("home", Some("u1")).unwrap());
        assert_eq!(state.direct_link_url().unwrap(), "");
    }

    #[test]
    fn test_reset_sessions() {
        let state = NativeState::new();
        state.store_data(Some(PAYLOAD)).unwrap();

        assert!(state.should_show_link("home", Some("u1")).unwrap());
        state.reset_sessions().unwrap();
        assert!(state.should_show_link("home", Some("u1")).unwrap());
    }

    #[test]
    fn test_reset_is_atomic_for_concurrent_callers() {
        let keys: Vec<String> = (0..32).map(|i| format!("u{}", i)).collect();

        for _ in 0..50 {
            let state = NativeState::new();
            state.store_data(Some(PAYLOAD)).unwrap();
            for key in &keys {
                assert!(state.should_show_link("home", Some(key)).unwrap());
            }

            let results = std::thread::scope(|scope| {
                let caller = scope.spawn(|| {
                    keys.iter()
                        .map(|key| state.should_show_link("home", Some(key)).unwrap())
                        .collect::<Vec<bool>>()
                });
                scope.spawn(|| state.reset_sessions().unwrap());
                caller.join().unwrap()
            });

            // Every key seen before the reset is refused, every key after it is granted.
            let first_granted = results.iter().position(|granted| *granted).unwrap_or(results.len());
            assert!(results[first_granted..].iter().all(|granted| *granted), "{:?}", results);
        }
    }

    #[test]
    fn test_listener_fields() {
        let state = NativeState::new();
        state
            .store_data(Some(r#"{"listener_config":{"email_us":"help@example.com","download_url":"https://d"}}"#))
            .unwrap();

        assert_eq!(state.with_listener_config(|c| c.email_us.clone()).unwrap(), "help@example.com");
        assert_eq!(state.with_listener_config(|c| c.download_url.clone()).unwrap(), "https://d");
        assert_eq!(state.with_listener_config(|c| c.contact_url.clone()).unwrap(), "");
    }

    #[test]
    fn test_remote_config_url() {
        let state = NativeState::new();
        assert!(!state.is_config_ready().unwrap());

        state.store_config_url("https://cdn.example/data.json").unwrap();
        assert_eq!(state.config_url().unwrap(), "https://cdn.example/data.json");
        assert!(state.is_config_ready().unwrap());
    }
}
