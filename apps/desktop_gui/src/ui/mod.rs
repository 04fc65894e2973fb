//! UI layer for the desktop GUI: app shell, control row, and pond painting.

pub mod app;

pub use app::{DuckPondApp, PersistedPondSettings, SETTINGS_STORAGE_KEY};
