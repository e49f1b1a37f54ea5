pub mod jni;
pub mod registry;
