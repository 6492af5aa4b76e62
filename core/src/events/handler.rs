use super::{EventKind, GameEvent};
use crate::action::ToggleAction;
use crate::world::World;

/// A trigger handler turns raw events of the kinds it accepts into toggle
/// actions.
///
/// Handlers run synchronously on the delivering thread and never fail: an
/// event they cannot make sense of yields no actions.
pub trait TriggerHandler {
    fn accepts(&self, kind: EventKind) -> bool;

    fn handle(&mut self, event: &GameEvent, world: &dyn World) -> Vec<ToggleAction>;
}
