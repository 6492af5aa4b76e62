//! One trigger handler per signal category.
//!
//! Combat covers both the player and npc combat categories; the others map
//! one-to-one.

pub mod combat;
pub mod dialogue;
pub mod hotkey;
pub mod location;

pub use combat::CombatHandler;
pub use dialogue::DialogueHandler;
pub use hotkey::HotkeyHandler;
pub use location::LocationHandler;
