//! JNI methods for NativeListenerManager

use super::LISTENER_MANAGER_CLASS;
use crate::core::NATIVE_STATE;
use crate::ext::jni::{JNIEnvExt, JniResult, JniResultExt};
use crate::native_method;
use jni::JNIEnv;
use jni::objects::{JObject, JString};
use jni::sys::{JNI_FALSE, JNI_TRUE, jboolean};
use log::error;

/// `uniqueId` may be null on the Java side.
pub extern "system" fn jni_should_show_link<'l>(
    mut env: JNIEnv<'l>,
    _obj: JObject<'l>,
    page_type: JString<'l>,
    unique_id: JString<'l>,
) -> jboolean {
    (|| -> JniResult<jboolean> {
        let Some(page_type) = env.get_string_opt(&page_type)? else {
            return Ok(JNI_FALSE);
        };
        let unique_id = env.get_string_opt(&unique_id)?;

        Ok(if NATIVE_STATE.should_show_link(&page_type, unique_id.as_deref())? {
            JNI_TRUE
        } else {
            JNI_FALSE
        })
    })()
    .or_throw(&mut env)
}

pub extern "system" fn jni_get_direct_link_url<'l>(mut env: JNIEnv<'l>, _obj: JObject<'l>) -> JString<'l> {
    (|| -> JniResult<JString<'l>> {
        let url = NATIVE_STATE.direct_link_url()?;
        env.new_string_safe(&url)
    })()
    .or_throw(&mut env)
}

pub extern "system" fn jni_reset_sessions<'l>(_env: JNIEnv<'l>, _obj: JObject<'l>) {
    if let Err(e) = NATIVE_STATE.reset_sessions() {
        error!("ListenerManager JNI: failed to reset sessions: {:#}", e);
    }
}

pub extern "system" fn jni_is_config_valid<'l>(_env: JNIEnv<'l>, _obj: JObject<'l>) -> jboolean {
    match NATIVE_STATE.is_config_valid() {
        Ok(true) => JNI_TRUE,
        Ok(false) => JNI_FALSE,
        Err(e) => {
            error!("ListenerManager JNI: {:#}", e);
            JNI_FALSE
        },
    }
}

native_method!(LISTENER_MANAGER_CLASS, "nativeShouldShowLink", "(Ljava/lang/String;Ljava/lang/String;)Z", jni_should_show_link);
native_method!(LISTENER_MANAGER_CLASS, "nativeGetDirectLinkUrl", "()Ljava/lang/String;", jni_get_direct_link_url);
native_method!(LISTENER_MANAGER_CLASS, "nativeResetSessions", "()V", jni_reset_sessions);
native_method!(LISTENER_MANAGER_CLASS, "nativeIsConfigValid", "()Z", jni_is_config_valid);

/// Passthrough string fields of the listener config.
macro_rules! listener_field_getter {
    ($func:ident, $method:literal, $field:ident) => {
        pub extern "system" fn $func<'l>(mut env: JNIEnv<'l>, _obj: JObject<'l>) -> JString<'l> {
            (|| -> JniResult<JString<'l>> {
                let value = NATIVE_STATE.with_listener_config(|config| config.$field.clone())?;
                env.new_string_safe(&value)
            })()
            .or_throw(&mut env)
        }

        native_method!(LISTENER_MANAGER_CLASS, $method, "()Ljava/lang/String;", $func);
    };
}

listener_field_getter!(jni_get_contact_url, "nativeGetContactUrl", contact_url);
listener_field_getter!(jni_get_cric_live_url, "nativeGetCricLiveUrl", cric_live_url);
listener_field_getter!(jni_get_foot_live_url, "nativeGetFootLiveUrl", foot_live_url);
listener_field_getter!(jni_get_email_us, "nativeGetEmailUs", email_us);
listener_field_getter!(jni_get_web_url, "nativeGetWebUrl", web_url);
listener_field_getter!(jni_get_message, "nativeGetMessage", message);
listener_field_getter!(jni_get_message_url, "nativeGetMessageUrl", message_url);
listener_field_getter!(jni_get_app_version, "nativeGetAppVersion", app_version);
listener_field_getter!(jni_get_download_url, "nativeGetDownloadUrl", download_url);
