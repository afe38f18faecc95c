// Deny unused code to catch dead code early, including cfg mismatches between Android and desktop
#![deny(unused)]
// Warn on unused dependencies to catch platform-specific cfg mismatches
#![warn(unused_crate_dependencies)]
// Warn on redundant path prefixes
#![warn(unused_qualifications)]
// Use log::* macros instead of println!/eprintln! for proper log level control
#![deny(clippy::print_stdout, clippy::print_stderr)]

//! Tauri plugin that opens the running app's own "Application Details" settings screen, so the
//! user can grant permissions by hand after denying a runtime prompt.
//!
//! Register it with `.plugin(tauri_plugin_permission_helper::init())` and call
//! `openAppSettings()` from the guest JS package.

#[cfg(target_os = "android")]
mod android;
mod commands;
pub mod config;
pub mod error;
pub mod launcher;
#[cfg(not(target_os = "android"))]
mod stubs;

#[cfg(test)]
mod launcher_test;

pub use config::PluginConfig;
pub use error::{FAILURE_PREFIX, LaunchError};
pub use launcher::{LaunchFacility, NavigationRequest, PackageUri, SettingsLauncher};

use tauri::plugin::{Builder, TauriPlugin};
use tauri::{Manager, Runtime};

#[cfg(target_os = "android")]
type PlatformFacility = android::JniFacility;
#[cfg(not(target_os = "android"))]
type PlatformFacility = stubs::StubFacility;

/// Launcher stored in app state by [`init`].
pub type PlatformLauncher = SettingsLauncher<PlatformFacility>;

/// Access to the plugin's launcher from any Tauri manager (app, handle, window).
pub trait PermissionHelperExt<R: Runtime> {
    fn permission_helper(&self) -> &PlatformLauncher;
}

impl<R: Runtime, T: Manager<R>> PermissionHelperExt<R> for T {
    fn permission_helper(&self) -> &PlatformLauncher {
        self.state::<PlatformLauncher>().inner()
    }
}

/// Builds the plugin. Config is optional, see [`PluginConfig`].
pub fn init<R: Runtime>() -> TauriPlugin<R, Option<PluginConfig>> {
    Builder::<R, Option<PluginConfig>>::new("permission-helper")
        .invoke_handler(tauri::generate_handler![commands::open_app_settings])
        .setup(|app, api| {
            let config = PluginConfig::from_plugin_config(api.config().clone());
            log::debug!("Permission helper config: {:?}", config);

            #[cfg(target_os = "android")]
            let facility = android::JniFacility;
            #[cfg(not(target_os = "android"))]
            let facility = stubs::StubFacility::new(app.config().identifier.clone());

            app.manage(SettingsLauncher::new(facility, &config));
            Ok(())
        })
        .build()
}
