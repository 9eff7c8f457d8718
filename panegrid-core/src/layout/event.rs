//! Iconify notifications emitted when an area is excluded

use super::types::{GridPos, WindowId};

/// Data carried by an iconify notification.
///
/// Produced by the leaf that was excluded and returned up through every
/// ancestor to the [`DisplayLayout`](super::DisplayLayout), which hands it
/// to the registered listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconifyEvent {
    /// Grid position of the excluded leaf.
    pub location: GridPos,
    /// Effective window id of the leaf, if it shows one.
    pub window_id: Option<WindowId>,
    /// Plugin shown by the leaf's window, if any.
    pub plugin_id: Option<String>,
}

/// Receives iconify notifications.
///
/// The layout does not wait for or inspect the listener's reaction.
pub trait IconifyListener {
    /// Called once per excluded area.
    fn window_iconified(&mut self, event: &IconifyEvent);
}

impl<F> IconifyListener for F
where
    F: FnMut(&IconifyEvent),
{
    fn window_iconified(&mut self, event: &IconifyEvent) {
        self(event);
    }
}
