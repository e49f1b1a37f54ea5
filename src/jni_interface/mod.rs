//! JNI interface implementations
//!
//! All JNI methods are centralized here, one module per host class.

pub mod data;
pub mod listener;
pub mod remote_config;

pub const DATA_REPOSITORY_CLASS: &str = "com/livetvpro/data/repository/NativeDataRepository";
pub const LISTENER_MANAGER_CLASS: &str = "com/livetvpro/utils/NativeListenerManager";
pub const REMOTE_CONFIG_MANAGER_CLASS: &str = "com/livetvpro/utils/NativeRemoteConfigManager";
