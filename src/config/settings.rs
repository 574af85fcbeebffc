use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::player::PlaybackTiming;
use crate::stars::{RepoRef, DEFAULT_API_BASE};
use crate::util::paths::config_path;

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Script to play instead of the bundled one
    pub script_path: Option<PathBuf>,
    /// Playback pacing
    pub timing: PlaybackTiming,
    /// Star badge settings
    pub stars: StarsConfig,
}

#[derive(Debug, Clone)]
pub struct StarsConfig {
    pub enabled: bool,
    pub repo: RepoRef,
    pub api_base: String,
}

impl Default for StarsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            repo: RepoRef::new("ShellyDeng08", "youtube-connector-mcp"),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            script_path: None,
            timing: PlaybackTiming::default(),
            stars: StarsConfig::default(),
        }
    }
}

/// TOML representation of the `[playback]` section (all values in ms)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlPlaybackConfig {
    pub start_banner_ms: Option<u64>,
    pub user_typing_ms: Option<u64>,
    pub user_settle_ms: Option<u64>,
    pub assistant_thinking_ms: Option<u64>,
    pub char_delay_ms: Option<u64>,
    pub chars_per_batch: Option<usize>,
    pub pause_poll_ms: Option<u64>,
}

/// TOML representation of the `[stars]` section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlStarsConfig {
    pub enabled: Option<bool>,
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub api_base: Option<String>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub script_path: Option<PathBuf>,
    pub playback: Option<TomlPlaybackConfig>,
    pub stars: Option<TomlStarsConfig>,
}

impl TomlPlaybackConfig {
    fn apply(&self, timing: &mut PlaybackTiming) {
        let ms = Duration::from_millis;
        if let Some(v) = self.start_banner_ms {
            timing.start_banner = ms(v);
        }
        if let Some(v) = self.user_typing_ms {
            timing.user_typing = ms(v);
        }
        if let Some(v) = self.user_settle_ms {
            timing.user_settle = ms(v);
        }
        if let Some(v) = self.assistant_thinking_ms {
            timing.assistant_thinking = ms(v);
        }
        if let Some(v) = self.char_delay_ms {
            timing.char_delay = ms(v);
        }
        if let Some(v) = self.chars_per_batch {
            timing.chars_per_batch = v.max(1);
        }
        if let Some(v) = self.pause_poll_ms {
            timing.pause_poll = ms(v.max(1));
        }
    }
}

impl TomlStarsConfig {
    fn apply(self, stars: &mut StarsConfig) {
        if let Some(enabled) = self.enabled {
            stars.enabled = enabled;
        }
        if let Some(owner) = self.owner {
            stars.repo.owner = owner;
        }
        if let Some(repo) = self.repo {
            stars.repo.repo = repo;
        }
        if let Some(api_base) = self.api_base {
            stars.api_base = api_base;
        }
    }
}

impl Config {
    /// Load configuration from the data directory, merging with defaults
    pub fn load() -> Self {
        let config_file = config_path();

        // Create example config on first run
        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        Self::load_from(&config_file)
    }

    /// Load configuration from `path`; unreadable or invalid files yield defaults
    pub fn load_from(path: &Path) -> Self {
        let mut config = Config::default();

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!(
                    path = %path.display(),
                    error = %e,
                    "No config file, using defaults"
                );
                return config;
            }
        };

        match toml::from_str::<TomlConfig>(&contents) {
            Ok(toml_config) => config.merge(toml_config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid config file");
            }
        }

        config
    }

    fn merge(&mut self, toml_config: TomlConfig) {
        if let Some(script_path) = toml_config.script_path {
            self.script_path = Some(script_path);
        }
        if let Some(playback) = toml_config.playback {
            playback.apply(&mut self.timing);
        }
        if let Some(stars) = toml_config.stars {
            stars.apply(&mut self.stars);
        }
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!(error = %e, "Failed to create config directory");
                return;
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }

    pub fn with_script_path(mut self, path: PathBuf) -> Self {
        self.script_path = Some(path);
        self
    }

    pub fn without_stars(mut self) -> Self {
        self.stars.enabled = false;
        self
    }
}
