use anyhow::Context;
use jni::JNIEnv;
use jni::objects::JString;

pub type JniResult<T> = anyhow::Result<T>;

pub trait JniResultExt<T> {
    fn or_throw(self, env: &mut JNIEnv) -> T;
}

impl<T: Default> JniResultExt<T> for JniResult<T> {
    fn or_throw(self, env: &mut JNIEnv) -> T {
        self.unwrap_or_else(|e| {
            let _ = env.throw(format!("{:#}", e));
            T::default()
        })
    }
}

pub trait JNIEnvExt<'l> {
    /// Reads a Java string, mapping `null` to `None`.
    fn get_string_opt(&mut self, s: &JString) -> JniResult<Option<String>>;
    fn new_string_safe(&mut self, s: &str) -> JniResult<JString<'l>>;
}

impl<'l> JNIEnvExt<'l> for JNIEnv<'l> {
    fn get_string_opt(&mut self, s: &JString) -> JniResult<Option<String>> {
        if s.is_null() {
            return Ok(None);
        }
        let value: String = self.get_string(s).context("Failed to read JString")?.into();
        Ok(Some(value))
    }

    fn new_string_safe(&mut self, s: &str) -> JniResult<JString<'l>> {
        self.new_string(s).context("Failed to create JString")
    }
}
