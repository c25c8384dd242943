//! Platform-specific locations and commands
//!
//! Where each browser keeps its profiles, and which program opens a url.

use std::path::PathBuf;

use crate::config::Browser;

/// Path segments of the profile root, relative to the platform base dir
fn profile_segments(browser: Browser) -> &'static [&'static str] {
    if cfg!(target_os = "windows") {
        match browser {
            Browser::Chrome => &["Google", "Chrome", "User Data"],
            Browser::Chromium => &["Chromium", "User Data"],
            Browser::Brave => &["BraveSoftware", "Brave-Browser", "User Data"],
            Browser::Edge => &["Microsoft", "Edge", "User Data"],
        }
    } else if cfg!(target_os = "macos") {
        match browser {
            Browser::Chrome => &["Google", "Chrome"],
            Browser::Chromium => &["Chromium"],
            Browser::Brave => &["BraveSoftware", "Brave-Browser"],
            Browser::Edge => &["Microsoft Edge"],
        }
    } else {
        match browser {
            Browser::Chrome => &["google-chrome"],
            Browser::Chromium => &["chromium"],
            Browser::Brave => &["BraveSoftware", "Brave-Browser"],
            Browser::Edge => &["microsoft-edge"],
        }
    }
}

/// Directory holding the browser's profile folders (`Default`, `Profile 1`, ...)
pub fn browser_profile_dir(browser: Browser) -> Option<PathBuf> {
    // Windows keeps profiles under LocalAppData, macOS and Linux under the config dir
    let base = if cfg!(target_os = "windows") {
        dirs::data_local_dir()?
    } else {
        dirs::config_dir()?
    };

    Some(
        profile_segments(browser)
            .iter()
            .fold(base, |path, segment| path.join(segment)),
    )
}

/// Command that opens a url in the default browser
pub fn default_open_command() -> &'static str {
    if cfg!(target_os = "windows") {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}
