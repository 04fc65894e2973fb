//! Controller layer: UI event types and dispatch into the simulator.

pub mod dispatch;
pub mod events;
