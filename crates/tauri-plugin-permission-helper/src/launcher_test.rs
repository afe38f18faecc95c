//! Tests for SettingsLauncher against a recording fake of the OS facility.

use std::sync::Mutex;

use super::config::PluginConfig;
use super::error::LaunchError;
use super::launcher::{
    ACTION_APPLICATION_DETAILS_SETTINGS, LaunchFacility, NavigationRequest, SettingsLauncher,
};

const OWN_PACKAGE: &str = "com.example.rehab";

/// Records every submitted request. Optionally fails at either step.
struct RecordingFacility {
    package: Result<String, LaunchError>,
    launch_error: Option<LaunchError>,
    launched: Mutex<Vec<NavigationRequest>>,
}

impl RecordingFacility {
    fn new() -> Self {
        Self {
            package: Ok(OWN_PACKAGE.to_string()),
            launch_error: None,
            launched: Mutex::new(Vec::new()),
        }
    }

    fn failing_launch(message: &str) -> Self {
        Self {
            launch_error: Some(LaunchError::Platform(message.to_string())),
            ..Self::new()
        }
    }

    fn without_context() -> Self {
        Self {
            package: Err(LaunchError::NoContext),
            ..Self::new()
        }
    }

    fn launched(&self) -> Vec<NavigationRequest> {
        self.launched.lock().unwrap().clone()
    }
}

impl LaunchFacility for &RecordingFacility {
    fn package_name(&self) -> Result<String, LaunchError> {
        self.package.clone()
    }

    fn start_activity(&self, request: &NavigationRequest) -> Result<(), LaunchError> {
        if let Some(error) = &self.launch_error {
            return Err(error.clone());
        }
        self.launched.lock().unwrap().push(request.clone());
        Ok(())
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn success_launches_exactly_one_details_request_for_own_package() {
    init_logging();
    let facility = RecordingFacility::new();
    let launcher = SettingsLauncher::new(&facility, &PluginConfig::default());

    assert_eq!(launcher.open_app_settings(), Ok(()));

    let launched = facility.launched();
    assert_eq!(launched.len(), 1);
    assert_eq!(launched[0].action, ACTION_APPLICATION_DETAILS_SETTINGS);
    assert_eq!(launched[0].data.scheme, "package");
    assert_eq!(launched[0].data.identifier, OWN_PACKAGE);
    assert_eq!(launched[0].data.to_string(), "package:com.example.rehab");
    assert!(!launched[0].new_task);
}

#[test]
fn launch_failure_rejects_with_prefixed_message() {
    init_logging();
    let facility = RecordingFacility::failing_launch("boom");
    let launcher = SettingsLauncher::new(&facility, &PluginConfig::default());

    assert_eq!(
        launcher.open_app_settings(),
        Err("Failed to open app settings: boom".to_string())
    );
    assert!(facility.launched().is_empty());
}

#[test]
fn missing_context_submits_nothing() {
    init_logging();
    let facility = RecordingFacility::without_context();
    let launcher = SettingsLauncher::new(&facility, &PluginConfig::default());

    let result = launcher.launch();

    assert_eq!(result, Err(LaunchError::NoContext));
    assert!(facility.launched().is_empty());
}

#[test]
fn two_calls_make_two_independent_attempts() {
    let facility = RecordingFacility::new();
    let launcher = SettingsLauncher::new(&facility, &PluginConfig::default());

    assert!(launcher.open_app_settings().is_ok());
    assert!(launcher.open_app_settings().is_ok());

    let launched = facility.launched();
    assert_eq!(launched.len(), 2);
    assert_eq!(launched[0], launched[1]);
}

#[test]
fn earlier_failure_does_not_affect_later_call() {
    let failing = RecordingFacility::failing_launch("Activity not found");
    let working = RecordingFacility::new();

    let config = PluginConfig::default();

    assert!(SettingsLauncher::new(&failing, &config).open_app_settings().is_err());
    assert!(SettingsLauncher::new(&working, &config).open_app_settings().is_ok());
    assert_eq!(working.launched().len(), 1);
}

#[test]
fn target_is_always_the_facility_reported_package() {
    for package in ["com.deeprehab.video", "org.example.other", "a"] {
        let facility = RecordingFacility {
            package: Ok(package.to_string()),
            ..RecordingFacility::new()
        };
        let launcher = SettingsLauncher::new(&facility, &PluginConfig::default());

        let request = launcher.build_request().unwrap();
        assert_eq!(request.data.identifier, package);
        assert_eq!(request.action, ACTION_APPLICATION_DETAILS_SETTINGS);
    }
}

#[test]
fn new_task_config_is_carried_into_the_request() {
    let facility = RecordingFacility::new();
    let launcher = SettingsLauncher::new(&facility, &PluginConfig { new_task: true });

    launcher.open_app_settings().unwrap();

    assert!(facility.launched()[0].new_task);
}
