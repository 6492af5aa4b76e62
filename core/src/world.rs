//! Read-only view of the game world.
//!
//! Handlers never hold onto world data; they query it while handling a
//! single event. Every query may come back empty and the caller simply
//! ignores the event in that case.

use serde::{Deserialize, Serialize};
use stow_types::ActorKind;

/// Location keyword marking a player-owned house
pub const PLAYER_HOME_KEYWORD: &str = "LocTypePlayerHouse";
/// Location keyword marking an inn
pub const INN_KEYWORD: &str = "LocTypeInn";

/// Opaque handle to an actor (the form id in-game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorRef(pub u32);

impl std::fmt::Display for ActorRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

/// Opaque handle to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(pub u32);

/// What the handlers need to know about a resolved cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellInfo {
    #[serde(default)]
    pub interior: bool,
    /// Keywords of the cell's location, if the cell has one
    #[serde(default)]
    pub location_keywords: Option<Vec<String>>,
}

impl CellInfo {
    /// Interior cell whose location is tagged as a player home or an inn.
    pub fn is_home(&self) -> bool {
        if !self.interior {
            return false;
        }
        self.location_keywords.as_ref().is_some_and(|keywords| {
            keywords
                .iter()
                .any(|k| k == PLAYER_HOME_KEYWORD || k == INN_KEYWORD)
        })
    }
}

/// UI state that blocks hotkey handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiState {
    #[serde(default)]
    pub paused: bool,
    #[serde(default)]
    pub modal_menu_open: bool,
    #[serde(default)]
    pub application_menu_open: bool,
}

impl UiState {
    pub fn blocks_input(&self) -> bool {
        self.paused || self.modal_menu_open || self.application_menu_open
    }
}

/// Queries the trigger handlers make against the running game.
pub trait World {
    /// The player actor, if the player singleton exists
    fn player(&self) -> Option<ActorRef>;

    /// Whether the player's 3D is loaded into the world
    fn is_player_loaded(&self) -> bool;

    /// Resolve an actor handle; `None` if it does not refer to a live actor
    fn actor_kind(&self, actor: ActorRef) -> Option<ActorKind>;

    fn cell(&self, id: CellId) -> Option<CellInfo>;

    /// Current conversation partner, if any
    fn dialogue_speaker(&self) -> Option<ActorRef>;

    /// `None` if the UI singleton is unavailable
    fn ui(&self) -> Option<UiState>;

    /// The loaded player, or `None` when the player is missing or not in 3D.
    fn loaded_player(&self) -> Option<ActorRef> {
        self.player().filter(|_| self.is_player_loaded())
    }
}
