//! Toggle actions produced by the trigger handlers.
//!
//! An action names who is affected, which rules apply and the desired end
//! state. Rule selection is plain data ([`RuleFilter`]) so actions can be
//! compared, logged and replayed.

use stow_types::{ActorKind, KeyCode, SlotRule};

use crate::world::ActorRef;

/// Desired visibility of the selected slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetState {
    Hide,
    Unhide,
}

impl TargetState {
    /// Dialogue menus hide on open and reveal on close.
    pub fn from_opening(opening: bool) -> Self {
        if opening { Self::Hide } else { Self::Unhide }
    }
}

impl std::fmt::Display for TargetState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hide => f.write_str("hide"),
            Self::Unhide => f.write_str("unhide"),
        }
    }
}

/// Which rules an action selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleFilter {
    /// `unhide_on_combat` allows toggling actors of this kind
    Combat(ActorKind),
    /// `hide_on_home` allows toggling actors of this kind
    Home(ActorKind),
    /// `hide_on_dialogue` allows toggling actors of this kind
    Dialogue(ActorKind),
    /// The rule's hotkey is this key and allows the evaluated actor's kind
    Hotkey(KeyCode),
}

impl RuleFilter {
    /// Whether `rule` is selected for an actor of kind `actor`.
    ///
    /// Only [`RuleFilter::Hotkey`] looks at `actor`; the other filters carry
    /// the kind they were issued for.
    pub fn selects(&self, rule: &SlotRule, actor: ActorKind) -> bool {
        match *self {
            Self::Combat(kind) => rule.unhide_on_combat.can_toggle_for(kind),
            Self::Home(kind) => rule.hide_on_home.can_toggle_for(kind),
            Self::Dialogue(kind) => rule.hide_on_dialogue.can_toggle_for(kind),
            Self::Hotkey(key) => rule.hotkey.matches(key, actor),
        }
    }
}

/// Request for the toggle executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleAction {
    /// Set the selected slots of one actor
    Actor {
        actor: ActorRef,
        filter: RuleFilter,
        state: TargetState,
    },
    /// Set the selected slots of every follower
    Followers {
        filter: RuleFilter,
        state: TargetState,
    },
    /// Flip the selected slots of every actor in the world
    AllActors { filter: RuleFilter },
}

impl ToggleAction {
    pub fn filter(&self) -> RuleFilter {
        match *self {
            Self::Actor { filter, .. } | Self::Followers { filter, .. } | Self::AllActors { filter } => {
                filter
            }
        }
    }

    /// `None` for broadcast toggles, which flip instead of setting.
    pub fn state(&self) -> Option<TargetState> {
        match *self {
            Self::Actor { state, .. } | Self::Followers { state, .. } => Some(state),
            Self::AllActors { .. } => None,
        }
    }
}

impl std::fmt::Display for ToggleAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Actor {
                actor,
                filter,
                state,
            } => write!(f, "{state} actor {actor} ({filter:?})"),
            Self::Followers { filter, state } => write!(f, "{state} followers ({filter:?})"),
            Self::AllActors { filter } => write!(f, "toggle all actors ({filter:?})"),
        }
    }
}
