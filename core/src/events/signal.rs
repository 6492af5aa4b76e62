use serde::{Deserialize, Serialize};

use crate::world::{ActorRef, CellId};

/// Menu name reported by the dialogue menu's open/close events
pub const DIALOGUE_MENU_NAME: &str = "Dialogue Menu";

/// Raw inputs delivered by the host on the main thread.
///
/// These map one-to-one onto the event sources the manager can subscribe
/// to, plus the per-tick player update used for player combat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// An actor's combat state changed.
    CombatStateChanged {
        /// `None` when the event carried no (or a non-actor) reference
        actor: Option<ActorRef>,
        new_state: CombatState,
    },

    /// The player entered or left a cell.
    CellChanged {
        cell: CellId,
        direction: CellDirection,
    },

    /// A batch of input events, in delivery order.
    Input { events: Vec<InputEvent> },

    /// A menu opened or closed.
    MenuOpenClose { menu_name: String, opening: bool },

    /// Sampled after the player's per-frame update.
    PlayerUpdate { in_combat: bool },
}

impl GameEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::CombatStateChanged { .. } => EventKind::CombatState,
            Self::CellChanged { .. } => EventKind::Cell,
            Self::Input { .. } => EventKind::Input,
            Self::MenuOpenClose { .. } => EventKind::Menu,
            Self::PlayerUpdate { .. } => EventKind::PlayerUpdate,
        }
    }
}

/// Discriminant of [`GameEvent`], used for routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    CombatState,
    Cell,
    Input,
    Menu,
    PlayerUpdate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatState {
    NotInCombat,
    InCombat,
    /// Lost track of the target; neither entering nor leaving combat
    Searching,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellDirection {
    Enter,
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputEventKind {
    Button,
    MouseMove,
    Char,
    Thumbstick,
    DeviceConnect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputDevice {
    Keyboard,
    Mouse,
    Gamepad,
    VirtualKeyboard,
}

/// A single entry of an input batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEvent {
    pub kind: InputEventKind,
    pub device: InputDevice,
    /// Device-specific id; the scan code for keyboard buttons
    pub id_code: u32,
    /// True only on the initial press
    #[serde(default)]
    pub is_down: bool,
}

impl InputEvent {
    pub fn key_down(id_code: u32) -> Self {
        Self {
            kind: InputEventKind::Button,
            device: InputDevice::Keyboard,
            id_code,
            is_down: true,
        }
    }

    pub fn key_up(id_code: u32) -> Self {
        Self {
            is_down: false,
            ..Self::key_down(id_code)
        }
    }
}
