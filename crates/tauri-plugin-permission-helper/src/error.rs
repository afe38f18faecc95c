//! Launch failure type and the rejection message the webview receives.

/// Prefix of every rejection message sent back to the webview.
pub const FAILURE_PREFIX: &str = "Failed to open app settings: ";

/// Anything that went wrong while building or submitting the settings navigation request.
///
/// Every variant is terminal for the call that produced it and is surfaced the same way,
/// see [`rejection_message`]. The variants only exist so the log says what actually happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    /// No foreground activity/context is registered with the runtime.
    NoContext,
    /// The OS (or the bridge to it) raised while handling the request.
    Platform(String),
    /// This platform has no per-application details screen.
    Unsupported,
}

impl std::fmt::Display for LaunchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoContext => write!(f, "No foreground activity is available"),
            Self::Platform(message) => write!(f, "{}", message),
            Self::Unsupported => {
                write!(f, "App details settings aren't available on this platform")
            }
        }
    }
}

impl std::error::Error for LaunchError {}

/// Builds the string the command rejects with: the fixed prefix plus the cause's description.
pub fn rejection_message(error: &LaunchError) -> String {
    format!("{}{}", FAILURE_PREFIX, error)
}
