use std::fs;
use std::path::Path;

use log::warn;

use crate::model::config::Config;

/// Read `config.toml` from the data directory. Missing file → defaults;
/// malformed file → defaults, with a logged warning so the user's
/// overrides don't vanish silently.
pub fn read_config(data_dir: &Path) -> Config {
    let path = data_dir.join("config.toml");
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(_) => return Config::default(),
    };
    match toml::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            warn!("ignoring malformed {}: {}", path.display(), e);
            Config::default()
        }
    }
}
