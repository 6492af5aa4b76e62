//! Event manager.
//!
//! The manager scans the rule set once at registration, installs only the
//! signal sources some rule needs, and afterwards routes each delivered
//! event to the handlers accepting its kind.
//!
//! ```text
//! RuleSet ──resolve──▶ SubscriptionSet ──install──▶ SignalSources (host)
//!                              │
//!                       builds handlers
//!                              ▼
//! GameEvent ──route by kind──▶ TriggerHandler ──▶ Vec<ToggleAction> ──▶ ToggleExecutor
//! ```
//!
//! Everything runs on the host's main thread; nothing here blocks or
//! suspends.

use crate::action::ToggleAction;
use crate::events::{GameEvent, TriggerHandler};
use crate::executor::ToggleExecutor;
use crate::handlers::{CombatHandler, DialogueHandler, HotkeyHandler, LocationHandler};
use crate::latch::LatchState;
use crate::rules::RuleSet;
use crate::sources::SignalSources;
use crate::subscription::{self, SubscriptionSet, TriggerCategory};
use crate::world::World;

#[derive(Debug, Default)]
pub struct Manager {
    subscriptions: SubscriptionSet,
    combat: Option<CombatHandler>,
    location: Option<LocationHandler>,
    dialogue: Option<DialogueHandler>,
    hotkey: Option<HotkeyHandler>,
}

impl Manager {
    /// Resolve subscriptions and install each needed source exactly once.
    ///
    /// A source that fails to install stays latched; it is logged and not
    /// retried.
    pub fn register(rules: &RuleSet, sources: &mut dyn SignalSources) -> Self {
        tracing::info!("[EVENTS] Registering trigger sources for {} slot rules", rules.len());

        let subscriptions = subscription::resolve_with(rules, |category| {
            match sources.install(category) {
                Ok(()) => tracing::info!("[EVENTS] Registered for {} events", category),
                Err(e) => {
                    tracing::warn!(error = %e, "[EVENTS] Failed to register for {} events", category)
                }
            }
        });

        if subscriptions.is_empty() {
            tracing::info!("[EVENTS] No trigger enabled, nothing registered");
        }

        Self::from_subscriptions(subscriptions)
    }

    /// Build handlers for an already resolved set, without touching any source.
    pub fn from_subscriptions(subscriptions: SubscriptionSet) -> Self {
        let player_combat = subscriptions.is_active(TriggerCategory::PlayerCombat);
        let npc_combat = subscriptions.is_active(TriggerCategory::NpcCombat);

        Self {
            subscriptions,
            combat: (player_combat || npc_combat)
                .then(|| CombatHandler::new(player_combat, npc_combat)),
            location: subscriptions
                .is_active(TriggerCategory::Location)
                .then(LocationHandler::new),
            dialogue: subscriptions
                .is_active(TriggerCategory::Dialogue)
                .then(DialogueHandler::new),
            hotkey: subscriptions
                .is_active(TriggerCategory::Hotkey)
                .then(HotkeyHandler::new),
        }
    }

    pub fn subscriptions(&self) -> &SubscriptionSet {
        &self.subscriptions
    }

    /// Current latch values; `false` for handlers that were never registered.
    pub fn latches(&self) -> LatchState {
        LatchState {
            player_in_home: self
                .location
                .as_ref()
                .is_some_and(LocationHandler::player_in_home),
            player_in_combat: self
                .combat
                .as_ref()
                .is_some_and(CombatHandler::player_in_combat),
        }
    }

    fn handlers_mut(&mut self) -> impl Iterator<Item = &mut dyn TriggerHandler> + '_ {
        let combat = self.combat.as_mut().map(|h| h as &mut dyn TriggerHandler);
        let location = self.location.as_mut().map(|h| h as &mut dyn TriggerHandler);
        let dialogue = self.dialogue.as_mut().map(|h| h as &mut dyn TriggerHandler);
        let hotkey = self.hotkey.as_mut().map(|h| h as &mut dyn TriggerHandler);
        [combat, location, dialogue, hotkey].into_iter().flatten()
    }

    /// Route one event and collect the resulting actions.
    pub fn process(&mut self, event: &GameEvent, world: &dyn World) -> Vec<ToggleAction> {
        let kind = event.kind();
        let mut actions = Vec::new();

        for handler in self.handlers_mut() {
            if handler.accepts(kind) {
                actions.extend(handler.handle(event, world));
            }
        }

        actions
    }

    /// Route one event and hand every resulting action to `executor`.
    /// Returns the number of actions applied.
    pub fn dispatch(
        &mut self,
        event: &GameEvent,
        world: &dyn World,
        executor: &mut dyn ToggleExecutor,
    ) -> usize {
        let actions = self.process(event, world);
        for action in &actions {
            tracing::debug!("[EVENTS] {}", action);
            executor.apply(action);
        }
        actions.len()
    }
}
