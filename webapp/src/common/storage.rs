use anyhow::Result;

use gloo_console::error as console_error;
use ricenow_common::PreferenceStore;
use web_sys::Storage;

use crate::common::dom::js_error;

// window.localStorage as a preference store
//
// values are stored as raw strings rather than json, so the theme key holds
// exactly "light" or "dark".  localStorage can be missing entirely (privacy
// modes, sandboxed iframes) or reject writes when full; both surface as errors
// that the controller shrugs off
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

fn local_storage() -> Result<Storage> {
    web_sys::window()
        .ok_or_else(|| anyhow::Error::msg("no window available"))?
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| anyhow::Error::msg("local storage disabled"))
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        local_storage()
            .and_then(|storage| storage.get_item(key).map_err(js_error))
            .map_err(|err| {
                console_error!(format!("Failed to fetch local storage {key}: {err}"));
                anyhow::Error::msg("Local storage failure, see console log")
            })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        local_storage()
            .and_then(|storage| storage.set_item(key, value).map_err(js_error))
            .map_err(|err| {
                console_error!(format!("Failed to set local storage {key}: {err}"));
                anyhow::Error::msg("Local storage failure, see console log")
            })
    }
}
