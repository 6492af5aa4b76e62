//! Hotkey trigger.
//!
//! Every matching key press is an independent request; what "toggle" means
//! for each actor is left to the executor.

use stow_types::KeyCode;

use crate::action::{RuleFilter, ToggleAction};
use crate::events::{EventKind, GameEvent, InputDevice, InputEvent, InputEventKind, TriggerHandler};
use crate::world::World;

#[derive(Debug, Default)]
pub struct HotkeyHandler;

impl HotkeyHandler {
    pub fn new() -> Self {
        Self
    }

    /// Scan code of a fresh keyboard press, if this input is one.
    fn pressed_key(input: &InputEvent) -> Option<KeyCode> {
        if input.kind != InputEventKind::Button {
            return None;
        }
        if !input.is_down || input.device != InputDevice::Keyboard {
            return None;
        }
        Some(KeyCode(input.id_code))
    }
}

impl TriggerHandler for HotkeyHandler {
    fn accepts(&self, kind: EventKind) -> bool {
        kind == EventKind::Input
    }

    fn handle(&mut self, event: &GameEvent, world: &dyn World) -> Vec<ToggleAction> {
        let GameEvent::Input { events } = event else {
            return Vec::new();
        };

        match world.ui() {
            Some(ui) if !ui.blocks_input() => {}
            _ => {
                tracing::trace!("[HOTKEY] UI blocks input, ignoring batch");
                return Vec::new();
            }
        }
        if world.loaded_player().is_none() {
            return Vec::new();
        }

        events
            .iter()
            .filter_map(Self::pressed_key)
            .inspect(|key| tracing::debug!("[HOTKEY] Key {} pressed", key))
            .map(|key| ToggleAction::AllActors {
                filter: RuleFilter::Hotkey(key),
            })
            .collect()
    }
}
