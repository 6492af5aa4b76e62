//! Home/inn trigger, edge-triggered on the `player_in_home` latch.

use stow_types::ActorKind;

use crate::action::{RuleFilter, TargetState, ToggleAction};
use crate::events::{CellDirection, EventKind, GameEvent, TriggerHandler};
use crate::latch::{Edge, Latch};
use crate::world::{CellId, World};

#[derive(Debug, Default)]
pub struct LocationHandler {
    player_in_home: Latch,
}

impl LocationHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_in_home(&self) -> bool {
        self.player_in_home.get()
    }

    fn handle_cell(&mut self, cell: CellId, world: &dyn World) -> Vec<ToggleAction> {
        let Some(info) = world.cell(cell) else {
            return Vec::new();
        };
        let Some(player) = world.loaded_player() else {
            tracing::trace!("[LOCATION] Player not loaded, ignoring cell change");
            return Vec::new();
        };

        let state = match self.player_in_home.observe(info.is_home()) {
            Some(Edge::Rising) => TargetState::Hide,
            Some(Edge::Falling) => TargetState::Unhide,
            None => return Vec::new(),
        };

        tracing::debug!("[LOCATION] Player home state changed, {} equipment", state);
        vec![
            ToggleAction::Actor {
                actor: player,
                filter: RuleFilter::Home(ActorKind::Player),
                state,
            },
            ToggleAction::Followers {
                filter: RuleFilter::Home(ActorKind::Follower),
                state,
            },
        ]
    }
}

impl TriggerHandler for LocationHandler {
    fn accepts(&self, kind: EventKind) -> bool {
        kind == EventKind::Cell
    }

    fn handle(&mut self, event: &GameEvent, world: &dyn World) -> Vec<ToggleAction> {
        match event {
            GameEvent::CellChanged {
                cell,
                direction: CellDirection::Enter,
            } => self.handle_cell(*cell, world),
            GameEvent::CellChanged { .. } => {
                tracing::trace!("[LOCATION] Ignoring cell leave notification");
                Vec::new()
            }
            _ => Vec::new(),
        }
    }
}
