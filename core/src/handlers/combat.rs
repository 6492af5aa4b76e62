//! Combat trigger.
//!
//! Two paths feed this handler:
//! - Non-player actors: discrete combat state events, already edge-triggered
//!   by the host, mapped straight to actions.
//! - Player: sampled once per update tick and edge-detected against the
//!   `player_in_combat` latch, since the host does not reliably report the
//!   player's own combat transitions as events.

use crate::action::{RuleFilter, TargetState, ToggleAction};
use crate::events::{CombatState, EventKind, GameEvent, TriggerHandler};
use crate::latch::{Edge, Latch};
use crate::world::{ActorRef, World};
use stow_types::ActorKind;

#[derive(Debug, Default)]
pub struct CombatHandler {
    player_path: bool,
    npc_path: bool,
    player_in_combat: Latch,
}

impl CombatHandler {
    pub fn new(player_path: bool, npc_path: bool) -> Self {
        Self {
            player_path,
            npc_path,
            player_in_combat: Latch::default(),
        }
    }

    pub fn player_in_combat(&self) -> bool {
        self.player_in_combat.get()
    }

    fn handle_actor_event(
        &self,
        actor: Option<ActorRef>,
        new_state: CombatState,
        world: &dyn World,
    ) -> Vec<ToggleAction> {
        let Some(actor) = actor else {
            return Vec::new();
        };
        let Some(kind) = world.actor_kind(actor) else {
            tracing::trace!("[COMBAT] Ignoring combat event for unresolved actor {}", actor);
            return Vec::new();
        };

        let state = match new_state {
            CombatState::InCombat => TargetState::Unhide,
            CombatState::NotInCombat => TargetState::Hide,
            CombatState::Searching => return Vec::new(),
        };

        tracing::debug!("[COMBAT] Actor {} {:?} -> {}", actor, new_state, state);
        vec![ToggleAction::Actor {
            actor,
            filter: RuleFilter::Combat(kind),
            state,
        }]
    }

    fn handle_player_sample(&mut self, in_combat: bool, world: &dyn World) -> Vec<ToggleAction> {
        let Some(player) = world.player() else {
            return Vec::new();
        };

        let state = match self.player_in_combat.observe(in_combat) {
            Some(Edge::Rising) => TargetState::Unhide,
            Some(Edge::Falling) => TargetState::Hide,
            None => return Vec::new(),
        };

        tracing::debug!(
            "[COMBAT] Player {} combat, {} equipment",
            if in_combat { "entered" } else { "left" },
            state
        );
        vec![ToggleAction::Actor {
            actor: player,
            filter: RuleFilter::Combat(ActorKind::Player),
            state,
        }]
    }
}

impl TriggerHandler for CombatHandler {
    fn accepts(&self, kind: EventKind) -> bool {
        match kind {
            EventKind::CombatState => self.npc_path,
            EventKind::PlayerUpdate => self.player_path,
            _ => false,
        }
    }

    fn handle(&mut self, event: &GameEvent, world: &dyn World) -> Vec<ToggleAction> {
        match event {
            GameEvent::CombatStateChanged { actor, new_state } if self.npc_path => {
                self.handle_actor_event(*actor, *new_state, world)
            }
            GameEvent::PlayerUpdate { in_combat } if self.player_path => {
                self.handle_player_sample(*in_combat, world)
            }
            _ => Vec::new(),
        }
    }
}
