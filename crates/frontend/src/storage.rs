//! Browser-backed theme persistence.

use challenge_core::{PreferenceStore, Theme};
use tracing::warn;

/// Preference store over `window.localStorage`.
///
/// Missing storage (private mode, sandboxed frames) reads as empty and
/// swallows writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPreferenceStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl PreferenceStore for LocalPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = local_storage() else {
            warn!(key, "localStorage unavailable, preference not saved");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            warn!(key, error = ?e, "failed to save preference");
        }
    }
}

/// Whether the OS reports a dark colour-scheme preference.
pub fn os_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Reflect `theme` on the document root as `data-theme`.
pub fn apply_document_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());

    match root {
        Some(root) => {
            if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
                warn!(error = ?e, "failed to set data-theme");
            }
        }
        None => warn!("no document element to theme"),
    }
}
