//! Replay scenarios.
//!
//! A scenario is a starting world plus an ordered list of steps. Each step
//! may patch the world before its event is delivered, e.g. to start a
//! conversation or pause the game.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use stow_core::GameEvent;
use stow_core::world::UiState;
use stow_core::{ActorRef, WorldSnapshot};
use thiserror::Error;

#[derive(Debug, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub world: WorldSnapshot,

    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
pub struct Step {
    pub event: GameEvent,

    #[serde(default)]
    pub speaker: Option<ActorRef>,
    #[serde(default)]
    pub clear_speaker: bool,
    #[serde(default)]
    pub player_loaded: Option<bool>,
    #[serde(default)]
    pub ui: Option<UiState>,
}

impl Step {
    /// Apply this step's world changes before its event is delivered.
    pub fn patch(&self, world: &mut WorldSnapshot) {
        if self.clear_speaker {
            world.speaker = None;
        }
        if let Some(speaker) = self.speaker {
            world.speaker = Some(speaker);
        }
        if let Some(loaded) = self.player_loaded {
            world.player_loaded = loaded;
        }
        if let Some(ui) = self.ui {
            world.ui = Some(ui);
        }
    }
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

pub fn load_scenario(path: &Path) -> Result<Scenario, ScenarioError> {
    let contents = fs::read_to_string(path).map_err(|e| ScenarioError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ScenarioError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
