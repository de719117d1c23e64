//! Reads the [`ClientConfig`] embedded in the host page.
//!
//! The page may carry a `<script type="application/json" id="chargehub-config">`
//! block. Without one, defaults apply.

use chargehub_app::config::ClientConfig;

/// Id of the element holding the JSON configuration.
const CONFIG_ELEMENT_ID: &str = "chargehub-config";

/// Load the configuration, falling back to defaults when the block is
/// missing or invalid.
#[must_use]
pub fn load() -> ClientConfig {
    let Some(content) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
    else {
        return ClientConfig::default();
    };

    match ClientConfig::from_json(&content) {
        Ok(config) => config,
        Err(err) => {
            leptos::logging::warn!("ignoring invalid #{CONFIG_ELEMENT_ID}: {err}");
            ClientConfig::default()
        }
    }
}
