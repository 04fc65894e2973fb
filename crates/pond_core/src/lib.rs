//! Domain model for the duck pond simulator: the closed set of duck
//! variants, the selection state machine, and the animated pond.
//!
//! Nothing in this crate knows about windows or widgets; the GUI feeds it
//! events and a monotonic seconds clock and renders whatever it reads back.

mod pond;
mod simulator;
mod variant;

pub use pond::{Pond, QuackBubble, BUBBLE_VISIBLE_SECS, POND_HEIGHT, POND_WIDTH, SWIM_TICK_SECS};
pub use simulator::{DuckAction, Simulator};
pub use variant::{DuckVariant, DEFAULT_QUACK_SOUND, DEFAULT_SWIM_ACTION};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
