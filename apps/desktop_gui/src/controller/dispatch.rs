//! Event dispatch from the widget layer onto the control queue, and from
//! the drained queue into the simulator.

use crossbeam_channel::{Sender, TrySendError};
use rand::Rng;

use pond_core::Simulator;

use crate::controller::events::ControlEvent;

/// Enqueue a widget interaction. Queue pressure is never surfaced to the
/// user; a dropped event just means the click is ignored.
pub fn enqueue_control_event(event_tx: &Sender<ControlEvent>, event: ControlEvent) {
    let event_name = match &event {
        ControlEvent::DuckSelected(_) => "duck_selected",
        ControlEvent::ActionRequested(_) => "action_requested",
    };

    match event_tx.try_send(event) {
        Ok(()) => tracing::debug!(event = event_name, "queued ui event"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(event = event_name, "ui event queue full, dropping event");
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!(event = event_name, "ui event queue disconnected");
        }
    }
}

/// Apply one drained event to the simulator. Returns the output line the
/// event produced, if any.
pub fn apply_control_event(
    sim: &mut Simulator,
    event: ControlEvent,
    now: f64,
    rng: &mut impl Rng,
) -> Option<String> {
    match event {
        ControlEvent::DuckSelected(index) => {
            sim.select(index, now, rng);
            None
        }
        ControlEvent::ActionRequested(action) => sim.perform(action),
    }
}
