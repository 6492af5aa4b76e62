//! Edge detection for sampled boolean state.

/// Direction of a confirmed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// false → true
    Rising,
    /// true → false
    Falling,
}

/// Remembers the last confirmed value so repeated samples stay silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Latch {
    value: bool,
}

impl Latch {
    pub fn get(&self) -> bool {
        self.value
    }

    /// Feed a new sample; returns the edge if the value changed.
    pub fn observe(&mut self, sample: bool) -> Option<Edge> {
        if sample == self.value {
            return None;
        }
        self.value = sample;
        Some(if sample { Edge::Rising } else { Edge::Falling })
    }
}

/// Snapshot of the process-wide latches.
///
/// Each flag has exactly one writer: `player_in_home` belongs to the location
/// handler and `player_in_combat` to the combat handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LatchState {
    pub player_in_home: bool,
    pub player_in_combat: bool,
}
