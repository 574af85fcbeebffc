//! Authored demo scripts.
//!
//! A script is a static JSON document of the form
//! `{ "version": "...", "scenarios": { "<key>": { "meta": {...}, "steps": [...] } } }`.
//! It is loaded once at startup and shared read-only with the player.

mod model;

use std::fs;
use std::path::{Path, PathBuf};

pub use model::{ResultItem, Scenario, ScenarioMeta, Script, Step, StepKind};

/// Script bundled with the binary, used when no `--script` is given
pub const BUNDLED_SCRIPT: &str = include_str!("demo_script.json");

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse script: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let contents = fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let script = Self::from_json(&contents)?;
        tracing::debug!(
            path = %path.display(),
            version = %script.version,
            scenarios = script.scenarios.len(),
            "Loaded demo script"
        );
        Ok(script)
    }

    pub fn bundled() -> Result<Self, ScriptError> {
        Self::from_json(BUNDLED_SCRIPT)
    }
}

/// Entry in the scenario selector bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioOption {
    pub key: &'static str,
    pub title: &'static str,
}

/// Selector order. Keys missing from the loaded script stay listed but do nothing.
pub const SCENARIO_OPTIONS: &[ScenarioOption] = &[
    ScenarioOption {
        key: "search_demo",
        title: "Search Videos",
    },
    ScenarioOption {
        key: "video_details_demo",
        title: "Video Details",
    },
    ScenarioOption {
        key: "transcript_demo",
        title: "Get Transcript",
    },
    ScenarioOption {
        key: "comments_demo",
        title: "Get Comments",
    },
    ScenarioOption {
        key: "channel_demo",
        title: "Channel Info",
    },
    ScenarioOption {
        key: "playlist_demo",
        title: "Playlist Details",
    },
    ScenarioOption {
        key: "quick_search_demo",
        title: "Quick Search",
    },
];
