#![allow(non_snake_case)]
pub mod core;
pub mod ext;
pub mod jni_interface;

use jni::sys::{JNI_ERR, JNI_VERSION_1_6, jint};
use jni::JavaVM;
use log::{error, info};
use obfstr::obfstr as s;
use std::ffi::c_void;

#[cfg(target_os = "android")]
fn init_logger() {
    use android_logger::Config;
    use log::LevelFilter;
    use std::path::Path;

    // 存在标记文件时启用 debug 日志
    let log_level = if Path::new(s!("/data/user/0/com.livetvpro/files/native_log_enable")).exists()
        || Path::new(s!("/sdcard/livetvpro_log_enable")).exists()
    {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    android_logger::init_once(
        Config::default()
            .with_max_level(log_level)
            .with_tag(s!("LiveTvNative")),
    );
}

#[cfg(not(target_os = "android"))]
fn init_logger() {}

#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub extern "system" fn JNI_OnLoad(vm: JavaVM, _: *mut c_void) -> jint {
    init_logger();

    let mut env = match vm.get_env() {
        Ok(env) => env,
        Err(e) => {
            error!("{}: {:?}", s!("Cannot get reference to the JNIEnv"), e);
            return JNI_ERR;
        },
    };

    let registered = ext::registry::register_native_methods(&mut env);
    info!("{}: {}", s!("Native core loaded, registered methods"), registered);

    JNI_VERSION_1_6
}
