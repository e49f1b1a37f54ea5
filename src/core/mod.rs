//! Core business logic modules
//!
//! Payload extraction, content storage and the direct-link session gate. Nothing
//! here touches JNI.

pub mod app_data;
pub mod extractor;
pub mod globals;
pub mod listener_config;
pub mod remote_config;
pub mod session_gate;
pub mod state;

// Re-export commonly used items
pub use app_data::AppDataStore;
pub use extractor::ContentKind;
pub use globals::NATIVE_STATE;
pub use listener_config::ListenerConfig;
pub use remote_config::RemoteConfigHandle;
pub use session_gate::SessionGate;
pub use state::NativeState;
