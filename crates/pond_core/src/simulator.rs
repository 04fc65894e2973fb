use rand::Rng;
use tracing::info;

use crate::pond::Pond;
use crate::variant::DuckVariant;

/// Button-driven duck behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuckAction {
    Quack,
    Swim,
    Display,
}

/// Owns the ordered duck roster, the current selection, and the pond.
///
/// The only state transition is a selection change; behavior actions are
/// pure reads of the selected variant's configuration. Before the first
/// selection every read returns `None` and timers stay silent.
#[derive(Debug)]
pub struct Simulator {
    roster: Vec<DuckVariant>,
    current: Option<DuckVariant>,
    pond: Pond,
}

impl Simulator {
    pub fn new(now: f64, rng: &mut impl Rng) -> Self {
        Self {
            roster: DuckVariant::ALL.to_vec(),
            current: None,
            pond: Pond::new(now, rng),
        }
    }

    pub fn roster(&self) -> &[DuckVariant] {
        &self.roster
    }

    pub fn current(&self) -> Option<DuckVariant> {
        self.current
    }

    /// Selection change: recenter the pond and reroll velocity and quack
    /// timer. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize, now: f64, rng: &mut impl Rng) {
        let Some(&duck) = self.roster.get(index) else {
            return;
        };
        info!(duck = duck.label(), "duck selected");
        self.current = Some(duck);
        self.pond.reset(now, rng);
    }

    /// Formatted output line for `action`, or `None` while no duck is
    /// selected.
    pub fn perform(&self, action: DuckAction) -> Option<String> {
        let duck = self.current?;
        let line = match action {
            DuckAction::Quack => format!("🔊 {}", duck.quack()),
            DuckAction::Swim => format!("🌊 {}", duck.swim()),
            DuckAction::Display => "👀 Displaying duck appearance".to_string(),
        };
        Some(line)
    }

    pub fn description(&self) -> Option<&'static str> {
        self.current.map(DuckVariant::display)
    }

    pub fn emoji(&self) -> Option<&'static str> {
        self.current.map(DuckVariant::emoji)
    }

    /// Advance the pond timers. No timer fires before the first selection.
    pub fn tick(&mut self, now: f64, rng: &mut impl Rng) {
        let Some(duck) = self.current else {
            return;
        };
        self.pond.advance(now, duck, rng);
    }

    pub fn pond(&self) -> &Pond {
        &self.pond
    }
}
