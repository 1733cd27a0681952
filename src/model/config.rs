use std::collections::HashMap;

use serde::Deserialize;

/// Optional `config.toml` in the data directory. Everything defaults;
/// a missing or partial file is fine.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[ui]` section: per-mode palette overrides.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UiConfig {
    #[serde(default)]
    pub colors: ColorOverrides,
}

/// `[ui.colors.light]` / `[ui.colors.dark]`: maps of palette slot name
/// to `"#RRGGBB"` value, e.g. `background = "#1A1B26"`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ColorOverrides {
    #[serde(default)]
    pub light: HashMap<String, String>,
    #[serde(default)]
    pub dark: HashMap<String, String>,
}
