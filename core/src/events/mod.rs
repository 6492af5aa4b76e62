pub mod handler;
pub mod signal;

pub use handler::TriggerHandler;
pub use signal::{
    CellDirection, CombatState, EventKind, GameEvent, InputDevice, InputEvent, InputEventKind,
    DIALOGUE_MENU_NAME,
};
