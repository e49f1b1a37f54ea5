//! Process-wide state reached from the JNI entry points

use crate::core::state::NativeState;
use lazy_static::lazy_static;

lazy_static! {
    /// Lives until process death; nothing is persisted.
    pub static ref NATIVE_STATE: NativeState = NativeState::new();
}
