use std::collections::HashMap;

use log::warn;
use ratatui::style::Color;

use crate::io::storage::{Storage, THEME_KEY};
use crate::model::config::ColorOverrides;

/// Which of the two palettes is active. Remembered in its own storage
/// slot, independent of task data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<ThemeMode> {
        match s.trim() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    /// Saved preference, or None when absent/unreadable/unrecognized.
    pub fn load(storage: &dyn Storage) -> Option<ThemeMode> {
        let raw = storage.read(THEME_KEY)?;
        let mode = ThemeMode::parse(&raw);
        if mode.is_none() {
            warn!("ignoring unrecognized theme preference {:?}", raw);
        }
        mode
    }

    /// Persist the preference. Best-effort, like all writes.
    pub fn save(self, storage: &dyn Storage) {
        if let Err(e) = storage.write(THEME_KEY, self.as_str()) {
            warn!("cannot save theme preference: {}", e);
        }
    }

    /// Ambient default when no preference is saved: the terminal's
    /// advertised background via COLORFGBG, dark when undecidable.
    pub fn ambient() -> ThemeMode {
        ambient_from(std::env::var("COLORFGBG").ok().as_deref())
    }
}

/// COLORFGBG looks like "15;0" or "0;default;15"; the last field is the
/// background color number. 0-6 and 8 are the dark half of the classic
/// 16-color palette.
fn ambient_from(colorfgbg: Option<&str>) -> ThemeMode {
    let Some(bg) = colorfgbg
        .and_then(|v| v.rsplit(';').next())
        .and_then(|s| s.trim().parse::<u8>().ok())
    else {
        return ThemeMode::Dark;
    };
    if bg <= 6 || bg == 8 {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}

/// Resolved color palette for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub green: Color,
    pub selection_bg: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x14, 0x1C),
            text: Color::Rgb(0xC8, 0xCC, 0xD4),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x6A, 0x70, 0x7E),
            highlight: Color::Rgb(0x5C, 0xB8, 0xFF),
            green: Color::Rgb(0x4E, 0xD1, 0x8A),
            selection_bg: Color::Rgb(0x24, 0x2C, 0x3C),
        }
    }

    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xFA, 0xFA, 0xF6),
            text: Color::Rgb(0x33, 0x36, 0x3B),
            text_bright: Color::Rgb(0x00, 0x00, 0x00),
            dim: Color::Rgb(0x9A, 0x9E, 0xA6),
            highlight: Color::Rgb(0x1A, 0x6F, 0xC4),
            green: Color::Rgb(0x1E, 0x8A, 0x4F),
            selection_bg: Color::Rgb(0xE4, 0xEA, 0xF2),
        }
    }

    /// Palette for `mode` with the matching `[ui.colors.*]` overrides
    /// from config.toml applied. Unknown slot names and bad hex values
    /// are skipped.
    pub fn for_mode(mode: ThemeMode, overrides: &ColorOverrides) -> Self {
        let (mut theme, map) = match mode {
            ThemeMode::Dark => (Theme::dark(), &overrides.dark),
            ThemeMode::Light => (Theme::light(), &overrides.light),
        };
        theme.apply_overrides(map);
        theme
    }

    fn apply_overrides(&mut self, map: &HashMap<String, String>) {
        for (key, value) in map {
            let Some(color) = parse_hex_color(value) else {
                warn!("ignoring bad color {:?} for {:?}", value, key);
                continue;
            };
            match key.as_str() {
                "background" => self.background = color,
                "text" => self.text = color,
                "text_bright" => self.text_bright = color,
                "dim" => self.dim = color,
                "highlight" => self.highlight = color,
                "green" => self.green = color,
                "selection_bg" => self.selection_bg = color,
                _ => warn!("ignoring unknown color slot {:?}", key),
            }
        }
    }
}

/// Parse "#RRGGBB" into an RGB color.
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
