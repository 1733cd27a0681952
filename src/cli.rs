use std::path::PathBuf;

use clap::Parser;

use crate::tui::theme::ThemeMode;

#[derive(Parser)]
#[command(name = "tick", about = concat!("[\u{2713}] tick v", env!("CARGO_PKG_VERSION"), " - your to-dos, in the terminal"), version)]
pub struct Cli {
    /// Keep data in a different directory (default: the platform data dir)
    #[arg(short = 'C', long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    /// Start with this theme instead of the saved/ambient one
    #[arg(long, value_parser = parse_theme)]
    pub theme: Option<ThemeMode>,

    /// Log level for the file log (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

fn parse_theme(s: &str) -> Result<ThemeMode, String> {
    ThemeMode::parse(s).ok_or_else(|| format!("expected \"light\" or \"dark\", got {:?}", s))
}

impl Cli {
    /// The directory holding todos, theme, config, and logs.
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        dirs::data_dir()
            .map(|d| d.join("tick"))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
