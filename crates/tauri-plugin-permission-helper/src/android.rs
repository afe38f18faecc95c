//! Android launch facility: talks to `Activity` through JNI.
//!
//! The JavaVM and the activity come from `ndk_context`, which the Tauri runtime initializes
//! before the webview starts.

use jni::objects::{JObject, JString, JValue};
use jni::{JNIEnv, JavaVM};

use crate::error::LaunchError;
use crate::launcher::{LaunchFacility, NavigationRequest};

/// `android.content.Intent.FLAG_ACTIVITY_NEW_TASK`
const FLAG_ACTIVITY_NEW_TASK: i32 = 0x1000_0000;

pub struct JniFacility;

impl LaunchFacility for JniFacility {
    fn package_name(&self) -> Result<String, LaunchError> {
        with_activity(|env, activity| {
            let name = env
                .call_method(activity, "getPackageName", "()Ljava/lang/String;", &[])?
                .l()?;
            let name = JString::from(name);
            Ok(String::from(env.get_string(&name)?))
        })
    }

    fn start_activity(&self, request: &NavigationRequest) -> Result<(), LaunchError> {
        with_activity(|env, activity| {
            let action = env.new_string(request.action)?;
            let intent = env.new_object(
                "android/content/Intent",
                "(Ljava/lang/String;)V",
                &[JValue::Object(&action)],
            )?;

            let scheme = env.new_string(request.data.scheme)?;
            let identifier = env.new_string(&request.data.identifier)?;
            let no_fragment = JObject::null();
            let uri = env
                .call_static_method(
                    "android/net/Uri",
                    "fromParts",
                    "(Ljava/lang/String;Ljava/lang/String;Ljava/lang/String;)Landroid/net/Uri;",
                    &[
                        JValue::Object(&scheme),
                        JValue::Object(&identifier),
                        JValue::Object(&no_fragment),
                    ],
                )?
                .l()?;
            env.call_method(
                &intent,
                "setData",
                "(Landroid/net/Uri;)Landroid/content/Intent;",
                &[JValue::Object(&uri)],
            )?;

            if request.new_task {
                env.call_method(
                    &intent,
                    "addFlags",
                    "(I)Landroid/content/Intent;",
                    &[JValue::Int(FLAG_ACTIVITY_NEW_TASK)],
                )?;
            }

            env.call_method(
                activity,
                "startActivity",
                "(Landroid/content/Intent;)V",
                &[JValue::Object(&intent)],
            )?;
            Ok(())
        })
    }
}

/// Local refs a single call may create (intent, strings, uri, throwable, message).
const LOCAL_FRAME_CAPACITY: i32 = 16;

/// Attaches to the JVM and runs `f` against the registered activity inside its own local frame,
/// so the refs it creates are released even on permanently attached threads. Any JNI error,
/// including a thrown Java exception, comes back as a [`LaunchError`] with the exception cleared.
fn with_activity<T>(
    f: impl FnOnce(&mut JNIEnv<'_>, &JObject<'_>) -> jni::errors::Result<T>,
) -> Result<T, LaunchError> {
    // ndk_context panics rather than returning an error when nothing was registered.
    // Only unwind builds get `NoContext` here; with `panic = "abort"` the process aborts.
    let ctx = std::panic::catch_unwind(ndk_context::android_context)
        .map_err(|_| LaunchError::NoContext)?;
    if ctx.vm().is_null() || ctx.context().is_null() {
        return Err(LaunchError::NoContext);
    }

    let vm = unsafe { JavaVM::from_raw(ctx.vm().cast()) }?;
    let activity = unsafe { JObject::from_raw(ctx.context().cast()) };
    let mut env = vm.attach_current_thread()?;

    env.with_local_frame(LOCAL_FRAME_CAPACITY, |env| match f(env, &activity) {
        Ok(value) => Ok(value),
        Err(e) => Err(describe_failure(env, e)),
    })
}

impl From<jni::errors::Error> for LaunchError {
    fn from(error: jni::errors::Error) -> Self {
        LaunchError::Platform(error.to_string())
    }
}

fn describe_failure(env: &mut JNIEnv<'_>, error: jni::errors::Error) -> LaunchError {
    if !matches!(error, jni::errors::Error::JavaException) {
        return LaunchError::Platform(error.to_string());
    }
    match pending_exception_message(env) {
        Ok(message) => LaunchError::Platform(message),
        Err(e) => {
            // Never leave an exception pending on the IPC thread
            let _ = env.exception_clear();
            LaunchError::Platform(e.to_string())
        }
    }
}

/// Clears the pending Java exception and returns its message (its `toString()` if it has none).
fn pending_exception_message(env: &mut JNIEnv<'_>) -> jni::errors::Result<String> {
    let throwable = env.exception_occurred()?;
    env.exception_clear()?;

    let message = env
        .call_method(&throwable, "getMessage", "()Ljava/lang/String;", &[])?
        .l()?;
    let message = if message.is_null() {
        env.call_method(&throwable, "toString", "()Ljava/lang/String;", &[])?
            .l()?
    } else {
        message
    };

    let message = JString::from(message);
    Ok(String::from(env.get_string(&message)?))
}
