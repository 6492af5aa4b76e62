//! Toggle execution.
//!
//! The engine only decides *what* should change. Performing the change is
//! the host's job through [`ToggleExecutor`]. [`plan`] expands an action into
//! concrete per-actor slot changes, which is what a host implementation
//! applies and what the replay tool prints.

use std::collections::BTreeMap;

use stow_types::EquipmentSlot;

use crate::action::{TargetState, ToggleAction};
use crate::rules::RuleSet;
use crate::snapshot::ActorEntry;
use crate::world::ActorRef;

/// Receives every action the manager emits, in order.
pub trait ToggleExecutor {
    fn apply(&mut self, action: &ToggleAction);
}

impl ToggleExecutor for Vec<ToggleAction> {
    fn apply(&mut self, action: &ToggleAction) {
        self.push(*action);
    }
}

/// Resulting visibility of one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Hide,
    Unhide,
    /// Flip whatever the slot currently is
    Toggle,
}

impl From<TargetState> for Visibility {
    fn from(state: TargetState) -> Self {
        match state {
            TargetState::Hide => Self::Hide,
            TargetState::Unhide => Self::Unhide,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotChange {
    pub actor: ActorRef,
    pub slot: EquipmentSlot,
    pub visibility: Visibility,
}

/// Expand an action into slot changes against the given actors.
///
/// When several selected rules govern the same slot of the same actor, the
/// later rule wins. Changes come back ordered by actor then slot.
pub fn plan(action: &ToggleAction, rules: &RuleSet, actors: &[ActorEntry]) -> Vec<SlotChange> {
    let targets: Vec<ActorEntry> = match *action {
        ToggleAction::Actor { actor, .. } => {
            actors.iter().filter(|e| e.actor == actor).copied().collect()
        }
        ToggleAction::Followers { .. } => actors
            .iter()
            .filter(|e| e.follower && !e.kind.is_player())
            .copied()
            .collect(),
        ToggleAction::AllActors { .. } => actors.to_vec(),
    };

    let filter = action.filter();
    let visibility = action.state().map_or(Visibility::Toggle, Visibility::from);

    let mut changes = BTreeMap::new();
    for target in targets {
        for rule in rules.iter().filter(|rule| filter.selects(rule, target.kind)) {
            for slot in &rule.slots {
                changes.insert((target.actor, *slot), visibility);
            }
        }
    }

    changes
        .into_iter()
        .map(|((actor, slot), visibility)| SlotChange {
            actor,
            slot,
            visibility,
        })
        .collect()
}
