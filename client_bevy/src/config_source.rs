//! Resolve the minigame configuration from the environment.
//!
//! Native builds read a JSON file named by `MINIGAME_CONFIG`. Browser builds
//! read URL-encoded JSON from the `config` query parameter of the page.

use bevy::log::{info, warn};
use minigame_shared::config::MinigameConfig;

pub const CONFIG_ENV: &str = "MINIGAME_CONFIG";
pub const CONFIG_QUERY_PARAM: &str = "config";

/// Configured values, or defaults when nothing is configured or it is invalid.
pub fn config_from_env_or_location() -> MinigameConfig {
    match load() {
        Ok(Some(config)) => {
            info!("using configured minigame settings");
            config
        }
        Ok(None) => MinigameConfig::default(),
        Err(e) => {
            warn!("invalid minigame config, using defaults: {e}");
            MinigameConfig::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load() -> Result<Option<MinigameConfig>, String> {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return Ok(None);
    };
    let json =
        std::fs::read_to_string(&path).map_err(|e| format!("cannot read {path}: {e}"))?;
    MinigameConfig::from_json(&json).map(Some)
}

#[cfg(target_arch = "wasm32")]
fn load() -> Result<Option<MinigameConfig>, String> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let href = window
        .location()
        .href()
        .map_err(|_| "cannot read page location".to_string())?;
    config_from_page_url(&href)
}

/// Extract and parse the `config` query parameter of a page URL.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub fn config_from_page_url(href: &str) -> Result<Option<MinigameConfig>, String> {
    let url = url::Url::parse(href).map_err(|e| format!("bad page url: {e}"))?;
    let Some((_, json)) = url.query_pairs().find(|(k, _)| k == CONFIG_QUERY_PARAM) else {
        return Ok(None);
    };
    MinigameConfig::from_json(&json).map(Some)
}
