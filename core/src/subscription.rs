//! Subscription resolution.
//!
//! A single scan over the rule set decides which signal sources are worth
//! observing. Each category is described by one row of [`CATEGORY_TABLE`];
//! a category latches on the first rule that qualifies and is never
//! retracted.

use stow_types::SlotRule;

use crate::rules::RuleSet;

/// One of the five signal sources a rule can depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerCategory {
    /// Per-tick player combat sampling
    PlayerCombat,
    /// Discrete combat state events for non-player actors
    NpcCombat,
    /// Player cell changes
    Location,
    /// Dialogue menu open/close
    Dialogue,
    /// Keyboard input
    Hotkey,
}

impl TriggerCategory {
    pub const ALL: [TriggerCategory; 5] = [
        Self::PlayerCombat,
        Self::NpcCombat,
        Self::Location,
        Self::Dialogue,
        Self::Hotkey,
    ];

    fn index(self) -> usize {
        match self {
            Self::PlayerCombat => 0,
            Self::NpcCombat => 1,
            Self::Location => 2,
            Self::Dialogue => 3,
            Self::Hotkey => 4,
        }
    }

    /// Whether a single rule could ever fire for this category.
    pub fn wanted_by(self, rule: &SlotRule) -> bool {
        (CATEGORY_TABLE[self.index()].1)(rule)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::PlayerCombat => "player combat",
            Self::NpcCombat => "npc combat",
            Self::Location => "location",
            Self::Dialogue => "dialogue",
            Self::Hotkey => "hotkey",
        }
    }
}

impl std::fmt::Display for TriggerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

type RulePredicate = fn(&SlotRule) -> bool;

/// Category → "does this rule need it", in [`TriggerCategory::index`] order.
const CATEGORY_TABLE: [(TriggerCategory, RulePredicate); 5] = [
    (TriggerCategory::PlayerCombat, |rule| {
        rule.unhide_on_combat.can_toggle_for_player()
    }),
    (TriggerCategory::NpcCombat, |rule| {
        rule.unhide_on_combat.can_toggle_for_follower()
    }),
    (TriggerCategory::Location, |rule| rule.hide_on_home.is_enabled()),
    (TriggerCategory::Dialogue, |rule| {
        rule.hide_on_dialogue.is_enabled()
    }),
    (TriggerCategory::Hotkey, |rule| rule.hotkey.is_active()),
];

/// Which signal categories have at least one rule interested in them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubscriptionSet {
    active: [bool; 5],
}

impl SubscriptionSet {
    pub fn is_active(&self, category: TriggerCategory) -> bool {
        self.active[category.index()]
    }

    /// Mark a category active. Returns `true` only the first time.
    fn latch(&mut self, category: TriggerCategory) -> bool {
        let slot = &mut self.active[category.index()];
        let newly = !*slot;
        *slot = true;
        newly
    }

    pub fn all(&self) -> bool {
        self.active.iter().all(|a| *a)
    }

    pub fn is_empty(&self) -> bool {
        !self.active.iter().any(|a| *a)
    }

    pub fn active(&self) -> impl Iterator<Item = TriggerCategory> + '_ {
        TriggerCategory::ALL
            .into_iter()
            .filter(|category| self.is_active(*category))
    }
}

/// Scan the rule set once and compute the active categories.
pub fn resolve(rules: &RuleSet) -> SubscriptionSet {
    resolve_with(rules, |_| {})
}

/// Like [`resolve`], calling `on_activate` exactly once per newly latched
/// category, in scan order.
pub fn resolve_with(
    rules: &RuleSet,
    mut on_activate: impl FnMut(TriggerCategory),
) -> SubscriptionSet {
    let mut set = SubscriptionSet::default();

    rules.for_each_until(|rule| {
        if set.all() {
            return false;
        }

        for (category, wants) in CATEGORY_TABLE {
            if !set.is_active(category) && wants(rule) && set.latch(category) {
                on_activate(category);
            }
        }

        true
    });

    set
}
