//! Scenario tests for the event manager
//!
//! Drive a registered manager through whole event sequences and check the
//! actions and installations it produces.

use stow_types::{ActorKind, EquipmentSlot, HotKey, KeyCode, SlotRule, Toggle};

use crate::action::{RuleFilter, TargetState, ToggleAction};
use crate::events::{CellDirection, CombatState, DIALOGUE_MENU_NAME, GameEvent, InputEvent};
use crate::executor::{SlotChange, Visibility, plan};
use crate::manager::Manager;
use crate::rules::RuleSet;
use crate::snapshot::WorldSnapshot;
use crate::sources::{RegistrationError, SignalSources};
use crate::subscription::TriggerCategory;
use crate::world::{ActorRef, CellId, CellInfo, INN_KEYWORD};

const PLAYER: ActorRef = ActorRef(0x14);
const LYDIA: ActorRef = ActorRef(0xA2C94);
const FAENDAL: ActorRef = ActorRef(0x1348B);
const GUARD: ActorRef = ActorRef(0xBEEF);
const INN: CellId = CellId(0x1605E);
const STREET: CellId = CellId(0x3C);
const KEY_K: u32 = 0x25;

/// Records every install call; optionally refuses some categories.
#[derive(Default)]
struct RecordingSources {
    installed: Vec<TriggerCategory>,
    unavailable: Vec<TriggerCategory>,
    broken_hooks: Vec<TriggerCategory>,
}

impl SignalSources for RecordingSources {
    fn install(&mut self, category: TriggerCategory) -> Result<(), RegistrationError> {
        self.installed.push(category);
        if self.unavailable.contains(&category) {
            return Err(RegistrationError::Unavailable { category });
        }
        if self.broken_hooks.contains(&category) {
            return Err(RegistrationError::HookFailed {
                category,
                reason: "player update vtable not found".to_string(),
            });
        }
        Ok(())
    }
}

fn register(rules: &RuleSet) -> (Manager, RecordingSources) {
    let mut sources = RecordingSources::default();
    let manager = Manager::register(rules, &mut sources);
    (manager, sources)
}

fn world() -> WorldSnapshot {
    let inn = CellInfo {
        interior: true,
        location_keywords: Some(vec![INN_KEYWORD.to_string()]),
    };
    WorldSnapshot::with_player(PLAYER)
        .with_follower(LYDIA)
        .with_follower(FAENDAL)
        .with_actor(GUARD, ActorKind::Follower)
        .with_cell(INN, inn)
        .with_cell(STREET, CellInfo::default())
}

fn enter(cell: CellId) -> GameEvent {
    GameEvent::CellChanged {
        cell,
        direction: CellDirection::Enter,
    }
}

fn everything(toggle: Toggle) -> SlotRule {
    SlotRule {
        hotkey: HotKey {
            key: Some(KeyCode(KEY_K)),
            toggle,
        },
        hide_on_home: toggle,
        hide_on_dialogue: toggle,
        unhide_on_combat: toggle,
        slots: vec![EquipmentSlot::Body],
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Registration
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_rule_set_installs_nothing() {
    let (mut manager, sources) = register(&RuleSet::default());
    assert!(sources.installed.is_empty());
    assert!(manager.subscriptions().is_empty());

    let world = world();
    let events = [
        GameEvent::PlayerUpdate { in_combat: true },
        enter(INN),
        GameEvent::Input {
            events: vec![InputEvent::key_down(KEY_K)],
        },
    ];
    for event in &events {
        assert!(manager.process(event, &world).is_empty());
    }
}

#[test]
fn each_category_installed_exactly_once() {
    let rules = RuleSet::new(vec![
        everything(Toggle::PlayerAndFollower),
        everything(Toggle::PlayerOnly),
        everything(Toggle::FollowerOnly),
    ]);
    let (manager, sources) = register(&rules);

    assert_eq!(sources.installed, TriggerCategory::ALL.to_vec());
    assert!(manager.subscriptions().all());
}

#[test]
fn failed_install_is_not_retried() {
    let rules = RuleSet::new(vec![
        SlotRule {
            hide_on_dialogue: Toggle::PlayerOnly,
            ..Default::default()
        },
        SlotRule {
            hide_on_dialogue: Toggle::FollowerOnly,
            ..Default::default()
        },
    ]);
    let mut sources = RecordingSources {
        unavailable: vec![TriggerCategory::Dialogue],
        ..Default::default()
    };

    let manager = Manager::register(&rules, &mut sources);
    assert_eq!(sources.installed, vec![TriggerCategory::Dialogue]);
    assert!(manager.subscriptions().is_active(TriggerCategory::Dialogue));
}

#[test]
fn broken_player_hook_leaves_other_sources_installed() {
    let rules = RuleSet::new(vec![everything(Toggle::PlayerAndFollower)]);
    let mut sources = RecordingSources {
        broken_hooks: vec![TriggerCategory::PlayerCombat],
        ..Default::default()
    };

    let mut manager = Manager::register(&rules, &mut sources);
    assert_eq!(sources.installed, TriggerCategory::ALL.to_vec());
    assert!(manager.subscriptions().all());

    let world = world();
    assert_eq!(manager.process(&enter(INN), &world).len(), 2);
    assert!(manager.latches().player_in_home);
}

#[test]
fn unsubscribed_events_are_not_routed() {
    let rules = RuleSet::new(vec![SlotRule {
        unhide_on_combat: Toggle::PlayerOnly,
        ..Default::default()
    }]);
    let (mut manager, _) = register(&rules);
    let world = world();

    // Player combat only: npc combat events have no handler.
    let npc = GameEvent::CombatStateChanged {
        actor: Some(LYDIA),
        new_state: CombatState::InCombat,
    };
    assert!(manager.process(&npc, &world).is_empty());
    assert_eq!(
        manager
            .process(&GameEvent::PlayerUpdate { in_combat: true }, &world)
            .len(),
        1
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Latches
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn combat_and_home_latches_are_independent() {
    let (mut manager, _) = register(&RuleSet::new(vec![everything(Toggle::PlayerOnly)]));
    let world = world();

    manager.process(&GameEvent::PlayerUpdate { in_combat: true }, &world);
    let latches = manager.latches();
    assert!(latches.player_in_combat);
    assert!(!latches.player_in_home);

    manager.process(&enter(INN), &world);
    let latches = manager.latches();
    assert!(latches.player_in_combat);
    assert!(latches.player_in_home);

    manager.process(&GameEvent::PlayerUpdate { in_combat: false }, &world);
    let latches = manager.latches();
    assert!(!latches.player_in_combat);
    assert!(latches.player_in_home);
}

#[test]
fn combat_poll_sequence_fires_two_transitions() {
    let (mut manager, _) = register(&RuleSet::new(vec![everything(Toggle::PlayerOnly)]));
    let world = world();
    let mut executed: Vec<ToggleAction> = Vec::new();

    let fired: usize = [false, false, true, true, false]
        .into_iter()
        .map(|in_combat| {
            manager.dispatch(&GameEvent::PlayerUpdate { in_combat }, &world, &mut executed)
        })
        .sum();

    assert_eq!(fired, 2);
    assert_eq!(
        executed.iter().map(|a| a.state()).collect::<Vec<_>>(),
        vec![Some(TargetState::Unhide), Some(TargetState::Hide)]
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Dialogue and hotkeys
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn dialogue_action_count_depends_on_speaker() {
    let (mut manager, _) = register(&RuleSet::new(vec![everything(Toggle::PlayerAndFollower)]));
    let open = GameEvent::MenuOpenClose {
        menu_name: DIALOGUE_MENU_NAME.to_string(),
        opening: true,
    };

    let with_speaker = WorldSnapshot {
        speaker: Some(LYDIA),
        ..world()
    };
    assert_eq!(manager.process(&open, &with_speaker).len(), 2);
    assert_eq!(manager.process(&open, &world()).len(), 1);
}

#[test]
fn hotkey_press_toggles_matching_actor_only() {
    let rules = RuleSet::new(vec![SlotRule {
        hotkey: HotKey {
            key: Some(KeyCode(KEY_K)),
            toggle: Toggle::PlayerOnly,
        },
        slots: vec![EquipmentSlot::Circlet],
        ..Default::default()
    }]);
    let (mut manager, _) = register(&rules);
    let world = world();

    let down = GameEvent::Input {
        events: vec![InputEvent::key_down(KEY_K)],
    };
    let actions = manager.process(&down, &world);
    assert_eq!(
        actions,
        vec![ToggleAction::AllActors {
            filter: RuleFilter::Hotkey(KeyCode(KEY_K)),
        }]
    );
    assert_eq!(
        plan(&actions[0], &rules, &world.all_actors()),
        vec![SlotChange {
            actor: PLAYER,
            slot: EquipmentSlot::Circlet,
            visibility: Visibility::Toggle,
        }]
    );

    let up = GameEvent::Input {
        events: vec![InputEvent::key_up(KEY_K)],
    };
    assert!(manager.process(&up, &world).is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// End to end
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn home_only_rule_hides_and_reveals_sword() {
    let rules = RuleSet::new(vec![SlotRule {
        hotkey: HotKey::default(),
        hide_on_home: Toggle::PlayerOnly,
        hide_on_dialogue: Toggle::Disabled,
        unhide_on_combat: Toggle::Disabled,
        slots: vec![EquipmentSlot::Sword],
    }]);
    let (mut manager, sources) = register(&rules);
    assert_eq!(sources.installed, vec![TriggerCategory::Location]);

    let world = world();
    let actors = world.all_actors();
    let changes_for = |actions: &[ToggleAction]| -> Vec<SlotChange> {
        actions
            .iter()
            .flat_map(|action| plan(action, &rules, &actors))
            .collect()
    };

    let entered = manager.process(&enter(INN), &world);
    assert_eq!(
        changes_for(&entered),
        vec![SlotChange {
            actor: PLAYER,
            slot: EquipmentSlot::Sword,
            visibility: Visibility::Hide,
        }]
    );

    assert!(manager.process(&enter(INN), &world).is_empty());

    let left = manager.process(&enter(STREET), &world);
    assert_eq!(
        changes_for(&left),
        vec![SlotChange {
            actor: PLAYER,
            slot: EquipmentSlot::Sword,
            visibility: Visibility::Unhide,
        }]
    );
    assert!(!manager.latches().player_in_home);
}

#[test]
fn home_broadcast_skips_actors_outside_the_party() {
    let rules = RuleSet::new(vec![SlotRule {
        hide_on_home: Toggle::FollowerOnly,
        slots: vec![EquipmentSlot::Head],
        ..Default::default()
    }]);
    let (mut manager, _) = register(&rules);

    let world = world();
    let actors = world.all_actors();
    let changed: Vec<ActorRef> = manager
        .process(&enter(INN), &world)
        .iter()
        .flat_map(|action| plan(action, &rules, &actors))
        .map(|change| change.actor)
        .collect();

    assert_eq!(changed, vec![FAENDAL, LYDIA]);
    assert!(!changed.contains(&GUARD));
}

#[test]
fn follower_combat_events_reach_followers() {
    let rules = RuleSet::new(vec![SlotRule {
        unhide_on_combat: Toggle::FollowerOnly,
        slots: vec![EquipmentSlot::Greatsword],
        ..Default::default()
    }]);
    let (mut manager, sources) = register(&rules);
    assert_eq!(sources.installed, vec![TriggerCategory::NpcCombat]);

    let world = world();
    let actions = manager.process(
        &GameEvent::CombatStateChanged {
            actor: Some(FAENDAL),
            new_state: CombatState::InCombat,
        },
        &world,
    );
    let changes = plan(&actions[0], &rules, &world.all_actors());
    assert_eq!(
        changes,
        vec![SlotChange {
            actor: FAENDAL,
            slot: EquipmentSlot::Greatsword,
            visibility: Visibility::Unhide,
        }]
    );

    // The player's own tick sample has no handler without a player policy.
    assert!(manager
        .process(&GameEvent::PlayerUpdate { in_combat: true }, &world)
        .is_empty());
}
