//! In-memory [`World`] built from plain data.
//!
//! Used to replay recorded or scripted event sequences without a running
//! game, and by the tests.

use serde::{Deserialize, Serialize};
use stow_types::ActorKind;

use crate::world::{ActorRef, CellId, CellInfo, UiState, World};

/// An actor known to the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorEntry {
    pub actor: ActorRef,
    pub kind: ActorKind,
    /// Currently in the player's party; only these receive follower broadcasts
    #[serde(default)]
    pub follower: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellEntry {
    pub id: CellId,
    #[serde(flatten)]
    pub info: CellInfo,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    #[serde(default)]
    pub player: Option<ActorRef>,

    #[serde(default = "default_true")]
    pub player_loaded: bool,

    /// Non-player actors; the player is implied by `player`
    #[serde(default)]
    pub actors: Vec<ActorEntry>,

    #[serde(default)]
    pub cells: Vec<CellEntry>,

    #[serde(default)]
    pub speaker: Option<ActorRef>,

    /// `None` models a missing UI service
    #[serde(default = "default_ui")]
    pub ui: Option<UiState>,
}

fn default_ui() -> Option<UiState> {
    Some(UiState::default())
}

impl Default for WorldSnapshot {
    fn default() -> Self {
        Self {
            player: None,
            player_loaded: true,
            actors: Vec::new(),
            cells: Vec::new(),
            speaker: None,
            ui: default_ui(),
        }
    }
}

impl WorldSnapshot {
    /// A loaded player and nothing else.
    pub fn with_player(player: ActorRef) -> Self {
        Self {
            player: Some(player),
            ..Self::default()
        }
    }

    /// Add an actor that is not part of the player's party.
    pub fn with_actor(mut self, actor: ActorRef, kind: ActorKind) -> Self {
        self.actors.push(ActorEntry {
            actor,
            kind,
            follower: false,
        });
        self
    }

    pub fn with_follower(mut self, actor: ActorRef) -> Self {
        self.actors.push(ActorEntry {
            actor,
            kind: ActorKind::Follower,
            follower: true,
        });
        self
    }

    pub fn with_cell(mut self, id: CellId, info: CellInfo) -> Self {
        self.cells.push(CellEntry { id, info });
        self
    }

    /// Every actor including the player, player first.
    pub fn all_actors(&self) -> Vec<ActorEntry> {
        let player = self.player.map(|actor| ActorEntry {
            actor,
            kind: ActorKind::Player,
            follower: false,
        });
        player.into_iter().chain(self.actors.iter().copied()).collect()
    }
}

impl World for WorldSnapshot {
    fn player(&self) -> Option<ActorRef> {
        self.player
    }

    fn is_player_loaded(&self) -> bool {
        self.player.is_some() && self.player_loaded
    }

    fn actor_kind(&self, actor: ActorRef) -> Option<ActorKind> {
        if self.player == Some(actor) {
            return Some(ActorKind::Player);
        }
        self.actors
            .iter()
            .find(|entry| entry.actor == actor)
            .map(|entry| entry.kind)
    }

    fn cell(&self, id: CellId) -> Option<CellInfo> {
        self.cells
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.info.clone())
    }

    fn dialogue_speaker(&self) -> Option<ActorRef> {
        self.speaker
    }

    fn ui(&self) -> Option<UiState> {
        self.ui
    }
}
