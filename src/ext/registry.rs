//! Native method registration
//!
//! Entry points declare themselves with [`native_method!`](crate::native_method);
//! `JNI_OnLoad` binds every collected entry through `RegisterNatives`. Methods are
//! bound one at a time, so a method missing on the Java side only skips itself.

use jni::{JNIEnv, NativeMethod};
use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::ffi::c_void;

pub struct NativeMethodEntry {
    pub class_path: &'static str,
    pub method_name: &'static str,
    pub signature: &'static str,
    pub fn_ptr: *mut c_void,
}

// Safety: fn pointers are safe to send across threads
unsafe impl Send for NativeMethodEntry {}
unsafe impl Sync for NativeMethodEntry {}

inventory::collect!(NativeMethodEntry);

/// Registers an `extern "system"` function as a native method of a Java class.
///
/// ```ignore
/// native_method!(DATA_REPOSITORY_CLASS, "nativeIsDataLoaded", "()Z", jni_is_data_loaded);
/// ```
#[macro_export]
macro_rules! native_method {
    ($class:expr, $name:literal, $sig:literal, $func:ident) => {
        ::inventory::submit! {
            $crate::ext::registry::NativeMethodEntry {
                class_path: $class,
                method_name: $name,
                signature: $sig,
                fn_ptr: $func as *mut ::std::ffi::c_void,
            }
        }
    };
}

/// Groups collected entries by class, in a stable order.
fn collect_entries() -> BTreeMap<&'static str, Vec<&'static NativeMethodEntry>> {
    let mut classes: BTreeMap<&'static str, Vec<&'static NativeMethodEntry>> = BTreeMap::new();
    for entry in inventory::iter::<NativeMethodEntry>() {
        classes.entry(entry.class_path).or_default().push(entry);
    }
    for entries in classes.values_mut() {
        entries.sort_by_key(|e| e.method_name);
    }
    classes
}

/// Binds all collected native methods, returning how many were registered.
pub fn register_native_methods(env: &mut JNIEnv) -> usize {
    let mut registered = 0;

    for (class_path, entries) in collect_entries() {
        let class = match env.find_class(class_path) {
            Ok(c) => c,
            Err(e) => {
                let _ = env.exception_clear();
                warn!("Class {} not found, skipping {} methods: {:?}", class_path, entries.len(), e);
                continue;
            },
        };

        let mut bound = 0;
        for entry in entries.iter() {
            let method = NativeMethod {
                name: entry.method_name.into(),
                sig: entry.signature.into(),
                fn_ptr: entry.fn_ptr,
            };

            match env.register_native_methods(&class, &[method]) {
                Ok(_) => {
                    bound += 1;
                    debug!("Registered {}.{}{}", class_path, entry.method_name, entry.signature);
                },
                Err(e) => {
                    let _ = env.exception_clear();
                    warn!("Skipped {}.{}{}: {:?}", class_path, entry.method_name, entry.signature, e);
                },
            }
        }

        info!("Registered {}/{} methods for class {}", bound, entries.len(), class_path);
        registered += bound;
        let _ = env.delete_local_ref(class);
    }

    registered
}
