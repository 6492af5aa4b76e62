//! Shared configuration types for stow.
//!
//! These types are serialised into rule files and consumed read-only by
//! `stow-core`.

pub mod rule;
pub mod toggle;

pub use rule::{EquipmentSlot, HotKey, KeyCode, SlotRule};
pub use toggle::{ActorKind, Toggle};
