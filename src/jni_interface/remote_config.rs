//! JNI methods for the remote-config URL.
//!
//! Both `NativeRemoteConfigManager` and `NativeDataRepository` declare the
//! key/URL methods, so they are bound to both classes.

use super::{DATA_REPOSITORY_CLASS, REMOTE_CONFIG_MANAGER_CLASS};
use crate::core::NATIVE_STATE;
use crate::core::remote_config::config_key;
use crate::ext::jni::{JNIEnvExt, JniResult, JniResultExt};
use crate::native_method;
use jni::JNIEnv;
use jni::objects::{JObject, JString};
use jni::sys::{JNI_FALSE, JNI_TRUE, jboolean};
use log::debug;

pub extern "system" fn jni_get_config_key<'l>(mut env: JNIEnv<'l>, _obj: JObject<'l>) -> JString<'l> {
    (|| -> JniResult<JString<'l>> { env.new_string_safe(&config_key()) })().or_throw(&mut env)
}

pub extern "system" fn jni_store_config_url<'l>(mut env: JNIEnv<'l>, _obj: JObject<'l>, config_url: JString<'l>) {
    (|| -> JniResult<()> {
        let url = env.get_string_opt(&config_url)?.unwrap_or_default();
        NATIVE_STATE.store_config_url(&url)?;
        debug!("Config URL stored, length = {}", url.len());
        Ok(())
    })()
    .or_throw(&mut env)
}

pub extern "system" fn jni_get_config_url<'l>(mut env: JNIEnv<'l>, _obj: JObject<'l>) -> JString<'l> {
    (|| -> JniResult<JString<'l>> {
        let url = NATIVE_STATE.config_url()?;
        env.new_string_safe(&url)
    })()
    .or_throw(&mut env)
}

pub extern "system" fn jni_is_config_ready<'l>(mut env: JNIEnv<'l>, _obj: JObject<'l>) -> jboolean {
    (|| -> JniResult<jboolean> {
        Ok(if NATIVE_STATE.is_config_ready()? { JNI_TRUE } else { JNI_FALSE })
    })()
    .or_throw(&mut env)
}

native_method!(REMOTE_CONFIG_MANAGER_CLASS, "nativeGetConfigKey", "()Ljava/lang/String;", jni_get_config_key);
native_method!(REMOTE_CONFIG_MANAGER_CLASS, "nativeStoreConfigUrl", "(Ljava/lang/String;)V", jni_store_config_url);
native_method!(REMOTE_CONFIG_MANAGER_CLASS, "nativeGetConfigUrl", "()Ljava/lang/String;", jni_get_config_url);
native_method!(REMOTE_CONFIG_MANAGER_CLASS, "nativeIsConfigReady", "()Z", jni_is_config_ready);

native_method!(DATA_REPOSITORY_CLASS, "nativeGetConfigKey", "()Ljava/lang/String;", jni_get_config_key);
native_method!(DATA_REPOSITORY_CLASS, "nativeStoreConfigUrl", "(Ljava/lang/String;)V", jni_store_config_url);
native_method!(DATA_REPOSITORY_CLASS, "nativeGetConfigUrl", "()Ljava/lang/String;", jni_get_config_url);
