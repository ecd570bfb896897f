//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.campus/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::academics::ProgramLevel;
use crate::core::carousel::DEFAULT_SLIDE_INTERVAL;
use crate::core::route::HOME_ROUTE;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CampusConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub accessibility: AccessibilityConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_route: Option<String>,
    pub default_tab: Option<ProgramLevel>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CarouselConfig {
    pub interval_secs: Option<u64>,
    pub autoplay: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AccessibilityConfig {
    pub screen_reader: Option<bool>,
    pub speech_command: Option<String>,
    pub speech_args: Option<Vec<String>>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SPEECH_COMMAND: &str = "espeak-ng";

/// Voice, speed, pitch and volume come from each utterance unless set here.
fn default_speech_args() -> Vec<String> {
    Vec::new()
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_route: String,
    pub default_tab: ProgramLevel,
    pub slide_interval: Duration,
    pub autoplay: bool,
    pub screen_reader: bool,
    pub speech_command: String,
    pub speech_args: Vec<String>,
}

/// Values that can come from the command line.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides<'a> {
    pub start_route: Option<&'a str>,
    pub screen_reader: bool,
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

/// Returns the path to `~/.campus/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".campus").join("config.toml"))
}

/// Load config from `~/.campus/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CampusConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<CampusConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CampusConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<CampusConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(CampusConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CampusConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Campus Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_route = "/"                 # Or set CAMPUS_START_ROUTE
# default_tab = "ug"                # "ug", "pg", "phd", "diploma"

# [carousel]
# interval_secs = 7
# autoplay = true

# [accessibility]
# screen_reader = false
# speech_command = "espeak-ng"      # Or set CAMPUS_SPEECH_COMMAND; "" for silent
# speech_args = ["-s", "150"]         # Extra flags; espeak -v/-s/-p/-a default to the voice settings
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &CampusConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    // Start route: CLI → env → config → default
    let start_route = cli
        .start_route
        .map(|s| s.to_string())
        .or_else(|| std::env::var("CAMPUS_START_ROUTE").ok())
        .or_else(|| config.general.start_route.clone())
        .map(|route| normalize_route(&route))
        .unwrap_or_else(|| HOME_ROUTE.to_string());

    // Speech command: env → config → default
    let speech_command = std::env::var("CAMPUS_SPEECH_COMMAND")
        .ok()
        .or_else(|| config.accessibility.speech_command.clone())
        .unwrap_or_else(|| DEFAULT_SPEECH_COMMAND.to_string());

    let slide_interval = match config.carousel.interval_secs {
        Some(0) => {
            warn!("carousel.interval_secs = 0 is invalid, using default");
            DEFAULT_SLIDE_INTERVAL
        }
        Some(secs) => Duration::from_secs(secs),
        None => DEFAULT_SLIDE_INTERVAL,
    };

    ResolvedConfig {
        start_route,
        default_tab: config.general.default_tab.unwrap_or_default(),
        slide_interval,
        autoplay: config.carousel.autoplay.unwrap_or(true),
        screen_reader: cli.screen_reader || config.accessibility.screen_reader.unwrap_or(false),
        speech_command,
        speech_args: config
            .accessibility
            .speech_args
            .clone()
            .unwrap_or_else(default_speech_args),
    }
}

/// Routes are absolute paths; "library" and "/library" mean the same page.
pub fn normalize_route(route: &str) -> String {
    let trimmed = route.trim();
    if trimmed.is_empty() {
        HOME_ROUTE.to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
