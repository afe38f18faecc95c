//! Launch facility for platforms without an app details screen (desktop, iOS).
//!
//! The app identifier is still known (from `tauri.conf.json`), so requests are built the same
//! way as on Android. Submitting them always fails.

use crate::error::LaunchError;
use crate::launcher::{LaunchFacility, NavigationRequest};

pub struct StubFacility {
    identifier: String,
}

impl StubFacility {
    pub fn new(identifier: String) -> Self {
        Self { identifier }
    }
}

impl LaunchFacility for StubFacility {
    fn package_name(&self) -> Result<String, LaunchError> {
        Ok(self.identifier.clone())
    }

    fn start_activity(&self, request: &NavigationRequest) -> Result<(), LaunchError> {
        log::debug!("Can't open {} on this platform", request.data);
        Err(LaunchError::Unsupported)
    }
}
