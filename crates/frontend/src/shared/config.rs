use contracts::shared::config::{load_config, AppConfig};

/// localStorage key holding an optional TOML override of the embedded config
pub const CONFIG_STORAGE_KEY: &str = "farm_safety_hub.config";

/// Read the override from localStorage, falling back to the embedded default.
pub fn load_app_config() -> AppConfig {
    let override_toml = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());

    if override_toml.is_some() {
        log::info!("Loading config override from localStorage['{}']", CONFIG_STORAGE_KEY);
    }

    match load_config(override_toml.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Invalid config override, using defaults: {}", e);
            AppConfig::default()
        }
    }
}
