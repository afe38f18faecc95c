//! Builds the "show this app's details" navigation request and hands it to the OS.
//!
//! The OS side sits behind [`LaunchFacility`] so the request shape and the failure contract
//! can be checked without a device.

use crate::config::PluginConfig;
use crate::error::{LaunchError, rejection_message};

/// `android.provider.Settings.ACTION_APPLICATION_DETAILS_SETTINGS`
pub const ACTION_APPLICATION_DETAILS_SETTINGS: &str =
    "android.settings.APPLICATION_DETAILS_SETTINGS";

/// URI scheme the details screen expects its target in.
pub const PACKAGE_SCHEME: &str = "package";

/// `package:<identifier>`, the equivalent of `Uri.fromParts("package", identifier, null)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageUri {
    pub scheme: &'static str,
    pub identifier: String,
}

impl PackageUri {
    fn for_package(identifier: String) -> Self {
        Self {
            scheme: PACKAGE_SCHEME,
            identifier,
        }
    }
}

impl std::fmt::Display for PackageUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.scheme, self.identifier)
    }
}

/// One navigation request, ready to be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub action: &'static str,
    pub data: PackageUri,
    pub new_task: bool,
}

/// The OS navigation facility.
pub trait LaunchFacility {
    /// The running app's own package/bundle identifier.
    fn package_name(&self) -> Result<String, LaunchError>;

    /// Submits the request. Returns once the OS accepted it; doesn't wait for the screen to close.
    fn start_activity(&self, request: &NavigationRequest) -> Result<(), LaunchError>;
}

/// Opens the app details settings screen.
/// Stateless apart from its config, so calls are independent.
pub struct SettingsLauncher<F> {
    facility: F,
    new_task: bool,
}

impl<F: LaunchFacility> SettingsLauncher<F> {
    pub fn new(facility: F, config: &PluginConfig) -> Self {
        Self {
            facility,
            new_task: config.new_task,
        }
    }

    /// Builds the request. The target is always the identifier the facility reports for the
    /// running app; there is no way to aim it anywhere else.
    pub fn build_request(&self) -> Result<NavigationRequest, LaunchError> {
        let identifier = self.facility.package_name()?;
        Ok(NavigationRequest {
            action: ACTION_APPLICATION_DETAILS_SETTINGS,
            data: PackageUri::for_package(identifier),
            new_task: self.new_task,
        })
    }

    /// Builds and submits the request in one attempt. Nothing is retried.
    pub fn launch(&self) -> Result<(), LaunchError> {
        let request = self.build_request()?;
        log::debug!("Opening app settings: action={}, data={}", request.action, request.data);
        self.facility.start_activity(&request)
    }

    /// [`Self::launch`] with the failure turned into the webview-facing rejection message.
    /// Failures are logged here, so callers only need to forward the result.
    pub fn open_app_settings(&self) -> Result<(), String> {
        self.launch().map_err(|e| {
            log::error!("Error opening app settings: {:?}", e);
            rejection_message(&e)
        })
    }
}
