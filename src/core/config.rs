//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.parley/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use chrono::format::{Item, StrftimeItems};
use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Screen;
use crate::core::chat::ChatId;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ParleyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub reactions: ReactionsConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_screen: Option<Screen>,
    pub time_format: Option<String>,
    pub log_level: Option<String>,
    pub seed_file: Option<PathBuf>,
    pub open_chat: Option<ChatId>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ReactionsConfig {
    pub palette: Option<Vec<String>>,
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub screen: Option<Screen>,
    pub seed_file: Option<PathBuf>,
    pub open_chat: Option<ChatId>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";
pub const DEFAULT_LOG_LEVEL: &str = "debug";
pub const DEFAULT_REACTIONS: [&str; 7] = ["👍", "❤️", "😂", "😮", "😢", "🔥", "👏"];

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_screen: Screen,
    pub time_format: String,
    pub log_level: String,
    pub seed_file: Option<PathBuf>,
    pub open_chat: Option<ChatId>,
    pub reactions: Vec<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&ParleyConfig::default(), &CliOverrides::default())
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.parley/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".parley").join("config.toml"))
}

/// Load config from `~/.parley/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ParleyConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ParleyConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ParleyConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ParleyConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<ParleyConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ParleyConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Parley Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_screen = "messenger"         # "messenger" or "admin"
# time_format = "%H:%M"              # strftime format for sent message times
# log_level = "debug"                # "error", "warn", "info", "debug", "trace"
# seed_file = "/path/to/seed.toml"   # .toml or .json dataset replacing the mock data
# open_chat = 2                      # chat to open on start

# [reactions]
# palette = ["👍", "❤️", "😂", "😮", "😢", "🔥", "👏"]
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// True if chrono can render `fmt`. Unknown specifiers make formatting fail.
pub fn is_valid_time_format(fmt: &str) -> bool {
    StrftimeItems::new(fmt).all(|item| !matches!(item, Item::Error))
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ParleyConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Screen: CLI → env → config → default
    let start_screen = cli
        .screen
        .or_else(|| {
            std::env::var("PARLEY_SCREEN")
                .ok()
                .and_then(|s| Screen::from_str(&s, true).ok())
        })
        .or(config.general.start_screen)
        .unwrap_or_default();

    // Time format: env → config → default
    let time_format = std::env::var("PARLEY_TIME_FORMAT")
        .ok()
        .or_else(|| config.general.time_format.clone())
        .filter(|fmt| {
            let valid = is_valid_time_format(fmt);
            if !valid {
                warn!("Invalid time_format {:?}, using {:?}", fmt, DEFAULT_TIME_FORMAT);
            }
            valid
        })
        .unwrap_or_else(|| DEFAULT_TIME_FORMAT.to_string());

    // Log level: env → config → default
    let log_level = std::env::var("PARLEY_LOG")
        .ok()
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    // Seed file: CLI → env → config → built-in
    let seed_file = cli
        .seed_file
        .clone()
        .or_else(|| std::env::var("PARLEY_SEED_FILE").ok().map(PathBuf::from))
        .or_else(|| config.general.seed_file.clone());

    // An empty palette would leave the picker with nothing to choose
    let reactions = match &config.reactions.palette {
        Some(palette) if !palette.is_empty() => palette.clone(),
        _ => DEFAULT_REACTIONS.iter().map(|r| r.to_string()).collect(),
    };

    ResolvedConfig {
        start_screen,
        time_format,
        log_level,
        seed_file,
        open_chat: cli.open_chat.or(config.general.open_chat),
        reactions,
    }
}
