pub mod action;
pub mod config;
pub mod events;
pub mod executor;
pub mod handlers;
pub mod latch;
pub mod manager;
pub mod rules;
pub mod snapshot;
pub mod sources;
pub mod subscription;
pub mod world;

#[cfg(test)]
mod manager_tests;

// Re-exports for convenience
pub use action::{RuleFilter, TargetState, ToggleAction};
pub use events::{GameEvent, TriggerHandler};
pub use executor::{ToggleExecutor, plan};
pub use manager::Manager;
pub use rules::RuleSet;
pub use snapshot::WorldSnapshot;
pub use sources::{RegistrationError, SignalSources};
pub use subscription::{SubscriptionSet, TriggerCategory};
pub use world::{ActorRef, CellId, World};
