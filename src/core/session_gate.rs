//! One-shot direct-link latch per session key.

use super::listener_config::ListenerConfig;
use dashmap::DashSet;
use log::debug;

pub const SESSION_KEY_SEPARATOR: char = ':';

/// `page_type:unique_id`, or `page_type` alone when there is no unique id.
/// An empty unique id counts as absent.
pub fn session_key(page_type: &str, unique_id: Option<&str>) -> String {
    match unique_id {
        Some(id) if !id.is_empty() => format!("{}{}{}", page_type, SESSION_KEY_SEPARATOR, id),
        _ => page_type.to_string(),
    }
}

pub struct SessionGate {
    config: ListenerConfig,
    /// Session keys that already got their link.
    triggered: DashSet<String>,
}

impl SessionGate {
    pub fn new() -> Self {
        Self {
            config: ListenerConfig::disabled(),
            triggered: DashSet::new(),
        }
    }

    /// Replaces the config. Already triggered keys stay triggered.
    pub fn set_config(&mut self, config: ListenerConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &ListenerConfig {
        &self.config
    }

    /// Grants the link at most once per session key.
    ///
    /// Returns `false` without touching the triggered set when the config is
    /// disabled, has no link, or does not allow `page_type`.
    pub fn should_show_link(&self, page_type: &str, unique_id: Option<&str>) -> bool {
        let config = &self.config;
        if !config.initialized || !config.enable_direct_link {
            return false;
        }
        if config.direct_link_url.is_empty() {
            return false;
        }
        if !config.is_page_allowed(page_type) {
            return false;
        }

        let key = session_key(page_type, unique_id);
        if self.triggered.insert(key) {
            debug!("SessionGate: link granted for {}:{:?}", page_type, unique_id);
            true
        } else {
            false
        }
    }

    pub fn direct_link_url(&self) -> &str {
        &self.config.direct_link_url
    }

    pub fn reset_sessions(&self) {
        debug!("SessionGate: clearing {} triggered sessions", self.triggered.len());
        self.triggered.clear();
    }

    pub fn is_config_valid(&self) -> bool {
        self.config.is_valid()
    }

    #[cfg(test)]
    pub fn is_triggered(&self, page_type: &str, unique_id: Option<&str>) -> bool {
        self.triggered.contains(&session_key(page_type, unique_id))
    }

    #[cfg(test)]
    pub fn triggered_count(&self) -> usize {
        self.triggered.len()
    }
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn home_config() -> ListenerConfig {
        ListenerConfig {
            enable_direct_link: true,
            direct_link_url: "https://x".to_string(),
            allowed_pages: HashSet::from(["home".to_string()]),
            initialized: true,
            ..Default::default()
        }
    }

    fn gate_with(config: ListenerConfig) -> SessionGate {
        let mut gate = SessionGate::new();
        gate.set_config(config);
        gate
    }

    #[test]
    fn test_session_key() {
        assert_eq!(session_key("home", Some("u1")), "home:u1");
        assert_eq!(session_key("home", None), "home");
        assert_eq!(session_key("home", Some("")), "home");
    }

    #[test]
    fn test_one_shot_latch() {
        let gate = gate_with(home_config());

        assert!(gate.should_show_link("home", Some("u1")));
        assert!(!gate.should_show_link("home", Some("u1")));
        assert!(gate.should_show_link("home", Some("u2")));
        assert!(!gate.should_show_link("home", Some("u2")));
        assert!(gate.should_show_link("home", None));
        assert!(!gate.should_show_link("home", None));
        assert_eq!(gate.triggered_count(), 3);
    }

    #[test]
    fn test_disabled_link_does_not_trigger() {
        let gate = gate_with(ListenerConfig {
            enable_direct_link: false,
            ..home_config()
        });
        assert!(!gate.should_show_link("home", Some("u1")));
        assert_eq!(gate.triggered_count(), 0);
    }

    #[test]
    fn test_empty_url_does_not_trigger() {
        let gate = gate_with(ListenerConfig {
            direct_link_url: String::new(),
            ..home_config()
        });
        assert!(!gate.should_show_link("home", Some("u1")));
        assert_eq!(gate.triggered_count(), 0);
    }

    #[test]
    fn test_page_not_allowed_does_not_trigger() {
        let gate = gate_with(home_config());
        assert!(!gate.should_show_link("sports", Some("u1")));
        assert_eq!(gate.triggered_count(), 0);
    }

    #[test]
    fn test_uninitialized_does_not_trigger() {
        let gate = gate_with(ListenerConfig {
            initialized: false,
            ..home_config()
        });
        assert!(!gate.should_show_link("home", None));

        let gate = SessionGate::new();
        assert!(!gate.should_show_link("home", None));
        assert!(!gate.is_config_valid());
        assert_eq!(gate.direct_link_url(), "");
    }

    #[test]
    fn test_reset_restores_latch() {
        let gate = gate_with(home_config());
        assert!(gate.should_show_link("home", Some("u1")));
        assert!(gate.is_triggered("home", Some("u1")));

        gate.reset_sessions();
        assert!(!gate.is_triggered("home", Some("u1")));
        assert!(gate.should_show_link("home", Some("u1")));
        assert!(!gate.should_show_link("home", Some("u1")));
    }

    #[test]
    fn test_config_swap_keeps_triggered_keys() {
        let mut gate = gate_with(home_config());
        assert!(gate.should_show_link("home", Some("u1")));

        gate.set_config(home_config());
        assert!(!gate.should_show_link("home", Some("u1")));
        assert_eq!(gate.direct_link_url(), "https://x");
    }

    #[test]
    fn test_concurrent_callers_get_one_grant() {
        let gate = gate_with(home_config());
        let granted = AtomicUsize::new(0);

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        if gate.should_show_link("home", Some("shared")) {
                            granted.fetch_add(1, Ordering::SeqCst);
                        }
                    }
                });
            }
        });

        assert_eq!(granted.load(Ordering::SeqCst), 1);
    }
}
