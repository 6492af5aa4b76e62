//! Ordered, read-only collection of slot rules.

use serde::{Deserialize, Serialize};
use stow_types::SlotRule;

/// All configured slot rules, in authoring order.
///
/// Serialises as a TOML array of `[[slot]]` tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default, rename = "slot")]
    rules: Vec<SlotRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<SlotRule>) -> Self {
        Self { rules }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlotRule> {
        self.rules.iter()
    }

    /// Visit rules in order until the visitor returns `false`.
    pub fn for_each_until(&self, mut visit: impl FnMut(&SlotRule) -> bool) {
        for rule in &self.rules {
            if !visit(rule) {
                break;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Indices of rules that can never fire.
    pub fn inert_indices(&self) -> Vec<usize> {
        self.rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.is_inert())
            .map(|(idx, _)| idx)
            .collect()
    }
}

impl From<Vec<SlotRule>> for RuleSet {
    fn from(rules: Vec<SlotRule>) -> Self {
        Self::new(rules)
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a SlotRule;
    type IntoIter = std::slice::Iter<'a, SlotRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
