pub mod dom;
pub mod storage;
pub mod style;

use gloo_console::error as console_error;
use ricenow_common::NavConfig;

const NAVBAR_TOML: &str = include_str!("../../navbar.toml");

// a broken embedded config should not take the whole page down,
// so fall back to the defaults and complain in the console
pub fn nav_config() -> NavConfig {
    NavConfig::from_toml(NAVBAR_TOML).unwrap_or_else(|err| {
        console_error!(format!("Failed to parse navbar config: {err}"));
        NavConfig::default()
    })
}
