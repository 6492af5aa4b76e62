//! External signal sources the manager subscribes to.

use thiserror::Error;

use crate::subscription::TriggerCategory;

/// Host-side installation of event sinks and hooks.
///
/// `install` is called at most once per category for the lifetime of a
/// [`Manager`](crate::Manager). For [`TriggerCategory::PlayerCombat`] the host
/// installs its per-tick player update hook; every other category maps to an
/// event sink registration.
pub trait SignalSources {
    fn install(&mut self, category: TriggerCategory) -> Result<(), RegistrationError>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// The event source backing this category does not exist (yet)
    #[error("event source for {category} is unavailable")]
    Unavailable { category: TriggerCategory },
    #[error("failed to install {category} hook: {reason}")]
    HookFailed {
        category: TriggerCategory,
        reason: String,
    },
}
