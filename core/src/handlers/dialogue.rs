//! Dialogue menu trigger.
//!
//! Menu open/close is already a clean edge, so there is no latch here.

use stow_types::ActorKind;

use crate::action::{RuleFilter, TargetState, ToggleAction};
use crate::events::{DIALOGUE_MENU_NAME, EventKind, GameEvent, TriggerHandler};
use crate::world::World;

#[derive(Debug, Default)]
pub struct DialogueHandler;

impl DialogueHandler {
    pub fn new() -> Self {
        Self
    }
}

impl TriggerHandler for DialogueHandler {
    fn accepts(&self, kind: EventKind) -> bool {
        kind == EventKind::Menu
    }

    fn handle(&mut self, event: &GameEvent, world: &dyn World) -> Vec<ToggleAction> {
        let GameEvent::MenuOpenClose { menu_name, opening } = event else {
            return Vec::new();
        };
        if menu_name != DIALOGUE_MENU_NAME {
            return Vec::new();
        }
        let Some(player) = world.loaded_player() else {
            return Vec::new();
        };

        let state = TargetState::from_opening(*opening);
        let mut actions = vec![ToggleAction::Actor {
            actor: player,
            filter: RuleFilter::Dialogue(ActorKind::Player),
            state,
        }];

        let speaker = world
            .dialogue_speaker()
            .and_then(|actor| world.actor_kind(actor).map(|kind| (actor, kind)));
        if let Some((actor, kind)) = speaker {
            actions.push(ToggleAction::Actor {
                actor,
                filter: RuleFilter::Dialogue(kind),
                state,
            });
        }

        tracing::debug!(
            "[DIALOGUE] Dialogue {}, {} actions",
            if *opening { "opened" } else { "closed" },
            actions.len()
        );
        actions
    }
}
