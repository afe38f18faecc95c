//! Tauri commands exposed to the webview.

use tauri::{AppHandle, Runtime};

use crate::PermissionHelperExt;

/// Opens this app's Application Details settings screen.
///
/// Takes no arguments; anything the webview sends along is ignored. Resolves once the OS
/// accepted the request, rejects with `"Failed to open app settings: <reason>"` otherwise.
#[tauri::command]
pub fn open_app_settings<R: Runtime>(app: AppHandle<R>) -> Result<(), String> {
    app.permission_helper().open_app_settings()
}
