//! UI events for the desktop GUI controller.

use pond_core::DuckAction;

/// Everything a widget interaction can ask of the simulator. Widget
/// handlers only enqueue these; the update loop drains the queue and
/// applies them in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// Dropdown selection changed to the given roster index.
    DuckSelected(usize),
    /// One of the behavior buttons was clicked.
    ActionRequested(DuckAction),
}
