use std::path::Path;

use stow_core::config::{load_rules, load_rules_or_default};
use stow_core::executor::{SlotChange, Visibility};
use stow_core::subscription::{self, TriggerCategory};
use stow_core::{
    Manager, RegistrationError, RuleSet, SignalSources, ToggleAction, ToggleExecutor,
    WorldSnapshot, plan,
};

use crate::scenario::load_scenario;

/// Accepts every installation and remembers the order.
#[derive(Debug, Default)]
struct ReplaySources {
    installed: Vec<TriggerCategory>,
}

impl SignalSources for ReplaySources {
    fn install(&mut self, category: TriggerCategory) -> Result<(), RegistrationError> {
        self.installed.push(category);
        Ok(())
    }
}

/// Prints each action and the slot changes it expands to.
struct PrintingExecutor<'a> {
    rules: &'a RuleSet,
    world: &'a WorldSnapshot,
}

impl ToggleExecutor for PrintingExecutor<'_> {
    fn apply(&mut self, action: &ToggleAction) {
        println!("  -> {action}");
        for change in plan(action, self.rules, &self.world.all_actors()) {
            println!("       {}", describe_change(&change));
        }
    }
}

fn describe_change(change: &SlotChange) -> String {
    let verb = match change.visibility {
        Visibility::Hide => "hide",
        Visibility::Unhide => "unhide",
        Visibility::Toggle => "toggle",
    };
    format!("{verb} {:?} on {}", change.slot, change.actor)
}

pub fn check(rules_path: &Path) -> Result<(), String> {
    let rules = load_rules(rules_path).map_err(|e| e.to_string())?;
    let subscriptions = subscription::resolve(&rules);

    println!("{} slot rules", rules.len());
    for category in TriggerCategory::ALL {
        let mark = if subscriptions.is_active(category) { "x" } else { " " };
        let wanting = rules.iter().filter(|rule| category.wanted_by(rule)).count();
        println!("  [{mark}] {category} ({wanting} rules)");
    }

    let inert = rules.inert_indices();
    if !inert.is_empty() {
        println!("inert rules (no trigger enabled): {inert:?}");
    }
    Ok(())
}

pub fn replay(rules_path: &Path, scenario_path: &Path) -> Result<(), String> {
    let rules = load_rules_or_default(rules_path).map_err(|e| e.to_string())?;
    let scenario = load_scenario(scenario_path).map_err(|e| e.to_string())?;

    let mut sources = ReplaySources::default();
    let mut manager = Manager::register(&rules, &mut sources);
    let installed: Vec<String> = sources.installed.iter().map(|c| c.to_string()).collect();
    println!("installed: [{}]", installed.join(", "));

    let mut world = scenario.world;
    let mut total = 0;
    for (idx, step) in scenario.steps.iter().enumerate() {
        step.patch(&mut world);
        println!("#{idx} {:?}", step.event);

        let mut executor = PrintingExecutor {
            rules: &rules,
            world: &world,
        };
        total += manager.dispatch(&step.event, &world, &mut executor);
    }

    let latches = manager.latches();
    println!(
        "{} actions over {} events (in home: {}, in combat: {})",
        total,
        scenario.steps.len(),
        latches.player_in_home,
        latches.player_in_combat
    );
    Ok(())
}
