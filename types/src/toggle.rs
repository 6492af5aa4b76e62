//! Toggle policies and the actor kinds they apply to.
//!
//! Every trigger on a slot rule carries a [`Toggle`] describing which actors
//! it may affect. The actor space is fixed (the player, everyone else), so
//! applicability is a plain match rather than anything pluggable.

use serde::{Deserialize, Serialize};

/// Which side of the player/follower split an actor falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    /// The player character
    Player,
    /// Any actor other than the player (followers and other NPCs)
    Follower,
}

impl ActorKind {
    pub fn is_player(self) -> bool {
        matches!(self, Self::Player)
    }
}

/// Applicability of a single trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Toggle {
    /// Trigger never fires
    #[default]
    Disabled,
    /// Only the player is affected
    PlayerOnly,
    /// Only non-player actors are affected
    FollowerOnly,
    /// Player and non-player actors are affected
    PlayerAndFollower,
}

impl Toggle {
    pub fn is_enabled(self) -> bool {
        self != Self::Disabled
    }

    pub fn can_toggle_for_player(self) -> bool {
        matches!(self, Self::PlayerOnly | Self::PlayerAndFollower)
    }

    pub fn can_toggle_for_follower(self) -> bool {
        matches!(self, Self::FollowerOnly | Self::PlayerAndFollower)
    }

    /// Whether this policy allows toggling an actor of the given kind.
    pub fn can_toggle_for(self, kind: ActorKind) -> bool {
        match kind {
            ActorKind::Player => self.can_toggle_for_player(),
            ActorKind::Follower => self.can_toggle_for_follower(),
        }
    }
}
