//! Slot rule definitions
//!
//! A slot rule groups a set of equipment slots and says when they should be
//! hidden or revealed. Rules are authored in TOML and are immutable once loaded.

use serde::{Deserialize, Serialize};

use crate::toggle::{ActorKind, Toggle};

/// Keyboard scan code as reported by the input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(pub u32);

impl std::fmt::Display for KeyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

/// Hotkey binding for a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HotKey {
    /// Bound key; `None` means no hotkey is configured
    #[serde(default)]
    pub key: Option<KeyCode>,

    /// Who the hotkey toggles
    #[serde(default)]
    pub toggle: Toggle,
}

impl HotKey {
    /// A hotkey is active only when a key is bound and the policy is enabled.
    pub fn is_active(&self) -> bool {
        self.key.is_some() && self.toggle.is_enabled()
    }

    /// Whether pressing `pressed` should toggle an actor of the given kind.
    pub fn matches(&self, pressed: KeyCode, kind: ActorKind) -> bool {
        self.key == Some(pressed) && self.toggle.can_toggle_for(kind)
    }
}

/// Biped equipment slots a rule can govern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    Head,
    Hair,
    Body,
    Hands,
    Forearms,
    Amulet,
    Ring,
    Feet,
    Calves,
    Shield,
    Tail,
    LongHair,
    Circlet,
    Ears,
    Sword,
    Dagger,
    Axe,
    Mace,
    Greatsword,
    Battleaxe,
    Bow,
    Staff,
    Crossbow,
    Quiver,
    Back,
    /// Unnamed slot by index
    Other(u8),
}

/// One configurable unit of the equipment visibility feature.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlotRule {
    /// Hide when the player enters a home or inn
    #[serde(default)]
    pub hide_on_home: Toggle,

    /// Hide while the dialogue menu is open
    #[serde(default)]
    pub hide_on_dialogue: Toggle,

    /// Reveal on entering combat, hide again when it ends
    #[serde(default)]
    pub unhide_on_combat: Toggle,

    /// Slots governed by this rule
    #[serde(default)]
    pub slots: Vec<EquipmentSlot>,

    #[serde(default)]
    pub hotkey: HotKey,
}

impl SlotRule {
    /// A rule with nothing enabled can never fire.
    pub fn is_inert(&self) -> bool {
        !self.hotkey.is_active()
            && !self.hide_on_home.is_enabled()
            && !self.hide_on_dialogue.is_enabled()
            && !self.unhide_on_combat.is_enabled()
    }

    pub fn governs(&self, slot: EquipmentSlot) -> bool {
        self.slots.contains(&slot)
    }
}
