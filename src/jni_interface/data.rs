//! JNI methods for NativeDataRepository

use super::DATA_REPOSITORY_CLASS;
use crate::core::{ContentKind, NATIVE_STATE};
use crate::ext::jni::{JNIEnvExt, JniResult, JniResultExt};
use crate::native_method;
use jni::JNIEnv;
use jni::objects::{JObject, JString};
use jni::sys::{JNI_FALSE, JNI_TRUE, jboolean};

fn content_string<'l>(env: &mut JNIEnv<'l>, kind: ContentKind) -> JString<'l> {
    NATIVE_STATE
        .content(kind)
        .and_then(|json| env.new_string_safe(&json))
        .or_throw(env)
}

/// 存储服务端下发的 JSON，`null` 返回 false
pub extern "system" fn jni_store_data<'l>(mut env: JNIEnv<'l>, _obj: JObject<'l>, json_data: JString<'l>) -> jboolean {
    (|| -> JniResult<jboolean> {
        let json = env.get_string_opt(&json_data)?;
        Ok(if NATIVE_STATE.store_data(json.as_deref())? { JNI_TRUE } else { JNI_FALSE })
    })()
    .or_throw(&mut env)
}

pub extern "system" fn jni_get_categories<'l>(mut env: JNIEnv<'l>, _obj: JObject<'l>) -> JString<'l> {
    content_string(&mut env, ContentKind::Categories)
}

pub extern "system" fn jni_get_channels<'l>(mut env: JNIEnv<'l>, _obj: JObject<'l>) -> JString<'l> {
    content_string(&mut env, ContentKind::Channels)
}

pub extern "system" fn jni_get_live_events<'l>(mut env: JNIEnv<'l>, _obj: JObject<'l>) -> JString<'l> {
    content_string(&mut env, ContentKind::LiveEvents)
}

pub extern "system" fn jni_get_event_categories<'l>(mut env: JNIEnv<'l>, _obj: JObject<'l>) -> JString<'l> {
    content_string(&mut env, ContentKind::EventCategories)
}

pub extern "system" fn jni_get_sports<'l>(mut env: JNIEnv<'l>, _obj: JObject<'l>) -> JString<'l> {
    content_string(&mut env, ContentKind::Sports)
}

pub extern "system" fn jni_is_data_loaded<'l>(mut env: JNIEnv<'l>, _obj: JObject<'l>) -> jboolean {
    (|| -> JniResult<jboolean> {
        Ok(if NATIVE_STATE.is_data_loaded()? { JNI_TRUE } else { JNI_FALSE })
    })()
    .or_throw(&mut env)
}

native_method!(DATA_REPOSITORY_CLASS, "nativeStoreData", "(Ljava/lang/String;)Z", jni_store_data);
native_method!(DATA_REPOSITORY_CLASS, "nativeGetCategories", "()Ljava/lang/String;", jni_get_categories);
native_method!(DATA_REPOSITORY_CLASS, "nativeGetChannels", "()Ljava/lang/String;", jni_get_channels);
native_method!(DATA_REPOSITORY_CLASS, "nativeGetLiveEvents", "()Ljava/lang/String;", jni_get_live_events);
native_method!(DATA_REPOSITORY_CLASS, "nativeGetEventCategories", "()Ljava/lang/String;", jni_get_event_categories);
native_method!(DATA_REPOSITORY_CLASS, "nativeGetSports", "()Ljava/lang/String;", jni_get_sports);
native_method!(DATA_REPOSITORY_CLASS, "nativeIsDataLoaded", "()Z", jni_is_data_loaded);
