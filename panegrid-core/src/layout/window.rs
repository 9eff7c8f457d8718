//! Window content held by a leaf area
//!
//! The layout does not render anything. A [`Window`] records the state
//! the layout relays to the surrounding application: which plugin view it
//! shows, which other windows it links to, what data it has loaded and
//! whether it is selected.

use std::collections::BTreeSet;

use super::types::{GridPos, WindowId};

/// View index used by the blank placeholder view.
pub const BLANK_VIEW_INDEX: i32 = -1;

/// Draw mode change relayed to windows of a plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawInfo {
    /// Plugin the mode applies to; empty targets every plugin.
    pub plugin_id: String,
    /// Name of the draw mode (e.g. `"region"`, `"zoom"`).
    pub mode: String,
}

impl DrawInfo {
    /// Creates draw info for the given plugin and mode.
    #[must_use]
    pub fn new(plugin_id: impl Into<String>, mode: impl Into<String>) -> Self {
        Self {
            plugin_id: plugin_id.into(),
            mode: mode.into(),
        }
    }

    /// Returns true if this draw info targets windows of `plugin_id`.
    #[must_use]
    pub fn applies_to(&self, plugin_id: &str) -> bool {
        self.plugin_id.is_empty() || self.plugin_id == plugin_id
    }
}

/// Link state of one window as seen from a link source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkInfo {
    /// The candidate window.
    pub win_id: WindowId,
    /// Plugin shown by the candidate window.
    pub plugin_id: String,
    /// Grid position of the leaf holding the candidate.
    pub location: GridPos,
    /// Whether the source currently links to the candidate.
    pub linked: bool,
}

/// A window displayed inside a leaf area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    id: WindowId,
    plugin_id: String,
    index: i32,
    links: BTreeSet<WindowId>,
    loaded: Vec<String>,
    selected: bool,
    draw_mode: Option<String>,
}

impl Window {
    /// Creates a window showing view `index` of `plugin_id`.
    #[must_use]
    pub fn new(plugin_id: impl Into<String>, index: i32) -> Self {
        Self::with_id(WindowId::new(), plugin_id, index)
    }

    /// Creates a window with a caller supplied id.
    #[must_use]
    pub fn with_id(id: WindowId, plugin_id: impl Into<String>, index: i32) -> Self {
        Self {
            id,
            plugin_id: plugin_id.into(),
            index,
            links: BTreeSet::new(),
            loaded: Vec::new(),
            selected: false,
            draw_mode: None,
        }
    }

    /// Creates the blank placeholder view.
    #[must_use]
    pub fn blank() -> Self {
        Self::new(String::new(), BLANK_VIEW_INDEX)
    }

    /// Returns the window id.
    #[must_use]
    pub const fn id(&self) -> &WindowId {
        &self.id
    }

    /// Returns the plugin this window shows.
    #[must_use]
    pub fn plugin_id(&self) -> &str {
        &self.plugin_id
    }

    /// Returns the view index within the plugin.
    #[must_use]
    pub const fn index(&self) -> i32 {
        self.index
    }

    /// Returns true if this is the blank placeholder view.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.plugin_id.is_empty()
    }

    /// Returns true if this window links to `dest`.
    #[must_use]
    pub fn links_to(&self, dest: &WindowId) -> bool {
        self.links.contains(dest)
    }

    /// Returns the windows this window links to, in id order.
    pub fn links(&self) -> impl Iterator<Item = &WindowId> {
        self.links.iter()
    }

    /// Adds or removes the link `source -> dest` if this window is the source.
    pub fn change_link(&mut self, source: &WindowId, dest: &WindowId, add: bool) {
        if &self.id != source {
            return;
        }
        if add {
            self.links.insert(dest.clone());
        } else {
            self.links.remove(dest);
        }
    }

    /// Records that the data set at `path` was loaded.
    pub fn data_loaded(&mut self, path: &str) {
        if !self.loaded.iter().any(|p| p == path) {
            self.loaded.push(path.to_owned());
        }
    }

    /// Records that the data set at `path` was unloaded.
    pub fn data_unloaded(&mut self, path: &str) {
        self.loaded.retain(|p| p != path);
    }

    /// Returns the loaded data paths in load order.
    #[must_use]
    pub fn loaded_data(&self) -> &[String] {
        &self.loaded
    }

    /// Returns true if the window is selected.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Sets the selection flag.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Returns the current draw mode, if one was set.
    #[must_use]
    pub fn draw_mode(&self) -> Option<&str> {
        self.draw_mode.as_deref()
    }

    /// Applies `info` if it targets this window's plugin.
    pub fn set_draw_mode(&mut self, info: &DrawInfo) {
        if info.applies_to(&self.plugin_id) {
            self.draw_mode = Some(info.mode.clone());
        }
    }
}
