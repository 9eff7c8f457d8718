//! Leaf areas: the terminal nodes of the split tree
//!
//! A leaf is one on-screen region addressed by its grid position. It
//! holds at most one [`Window`] and can be excluded (iconified) without
//! leaving the tree. Every coordinate-addressed operation on a leaf
//! succeeds only when the requested position is the leaf's own.

use super::event::IconifyEvent;
use super::types::{Axis, GridPos, Size, WindowId};
use super::window::{DrawInfo, LinkInfo, Window};

/// A single grid cell of the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafArea {
    pos: GridPos,
    size: Size,
    window: Option<Window>,
    link_id: Option<WindowId>,
    excluded: bool,
}

impl LeafArea {
    /// Creates an empty leaf at `pos` with fixed `size`.
    #[must_use]
    pub const fn new(pos: GridPos, size: Size) -> Self {
        Self {
            pos,
            size,
            window: None,
            link_id: None,
            excluded: false,
        }
    }

    /// Creates a leaf showing the blank placeholder view.
    #[must_use]
    pub fn with_blank_view(pos: GridPos, size: Size) -> Self {
        let mut leaf = Self::new(pos, size);
        leaf.set_view("", super::window::BLANK_VIEW_INDEX, pos);
        leaf
    }

    /// Returns the grid position.
    #[must_use]
    pub const fn pos(&self) -> GridPos {
        self.pos
    }

    /// Moves the leaf to a new grid position.
    pub fn set_pos(&mut self, pos: GridPos) {
        self.pos = pos;
    }

    /// Returns the stored pixel size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Sets the stored pixel size.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Returns the window shown by this leaf.
    #[must_use]
    pub const fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    /// Returns true if the leaf is excluded (iconified).
    #[must_use]
    pub const fn is_excluded(&self) -> bool {
        self.excluded
    }

    /// Returns true if `pos` addresses this leaf.
    #[must_use]
    pub fn matches(&self, pos: GridPos) -> bool {
        self.pos == pos
    }

    /// Relays a link change to the window.
    pub fn change_link(&mut self, source: &WindowId, dest: &WindowId, add: bool) {
        if let Some(window) = self.window.as_mut() {
            window.change_link(source, dest, add);
        }
    }

    /// Excludes the leaf if `pos` addresses it.
    ///
    /// Returns the iconify notification describing the leaf.
    pub fn exclude_area(&mut self, pos: GridPos) -> Option<IconifyEvent> {
        if !self.matches(pos) {
            return None;
        }
        self.excluded = true;
        Some(IconifyEvent {
            location: self.pos,
            window_id: self.win_id(),
            plugin_id: self.window.as_ref().map(|w| w.plugin_id().to_owned()),
        })
    }

    /// Brings an excluded leaf back.
    ///
    /// Returns true only if `pos` addresses this leaf and it was excluded.
    pub fn restore_window(&mut self, pos: GridPos) -> bool {
        if self.matches(pos) && self.excluded {
            self.excluded = false;
            true
        } else {
            false
        }
    }

    /// Effective window id: the assigned link id, else the window's own id.
    #[must_use]
    pub fn win_id(&self) -> Option<WindowId> {
        self.link_id
            .clone()
            .or_else(|| self.window.as_ref().map(|w| w.id().clone()))
    }

    /// Returns the effective window id if `pos` addresses this leaf.
    #[must_use]
    pub fn get_win_id(&self, pos: GridPos) -> Option<WindowId> {
        if self.matches(pos) {
            self.win_id()
        } else {
            None
        }
    }

    /// Assigns `id` as this leaf's link id if `pos` addresses it.
    pub fn set_link_id(&mut self, pos: GridPos, id: &WindowId) -> bool {
        if self.matches(pos) {
            self.link_id = Some(id.clone());
            true
        } else {
            false
        }
    }

    /// Shows view `index` of `plugin_id` if `pos` addresses this leaf.
    ///
    /// An empty plugin id installs the blank view. Any previous link id
    /// is dropped together with the old content.
    pub fn set_view(&mut self, plugin_id: &str, index: i32, pos: GridPos) -> bool {
        if !self.matches(pos) {
            return false;
        }
        self.window = Some(if plugin_id.is_empty() {
            Window::blank()
        } else {
            Window::new(plugin_id, index)
        });
        self.link_id = None;
        true
    }

    /// Places `window` in this leaf if `pos` addresses it.
    ///
    /// # Errors
    ///
    /// Hands the window back unchanged when `pos` does not match.
    pub fn set_window(&mut self, window: Window, pos: GridPos) -> Result<(), Window> {
        if !self.matches(pos) {
            return Err(window);
        }
        self.window = Some(window);
        self.link_id = None;
        Ok(())
    }

    /// Sets one extent if `pos` addresses this leaf.
    pub fn set_extent(&mut self, axis: Axis, value: u32, pos: GridPos) -> bool {
        if !self.matches(pos) {
            return false;
        }
        match axis {
            Axis::Width => self.size.width = value,
            Axis::Height => self.size.height = value,
        }
        true
    }

    /// Sets the height if `pos` addresses this leaf.
    pub fn set_area_height(&mut self, height: u32, pos: GridPos) -> bool {
        self.set_extent(Axis::Height, height, pos)
    }

    /// Sets the width if `pos` addresses this leaf.
    pub fn set_area_width(&mut self, width: u32, pos: GridPos) -> bool {
        self.set_extent(Axis::Width, width, pos)
    }

    /// Returns the leaf's window as a zero- or one-element list.
    #[must_use]
    pub fn get_windows(&self) -> Vec<&Window> {
        self.window.iter().collect()
    }

    /// Detaches the window and any link id.
    pub fn remove_windows(&mut self) {
        self.window = None;
        self.link_id = None;
    }

    /// Relays a data-loaded notification to the window.
    pub fn data_loaded(&mut self, path: &str) {
        if let Some(window) = self.window.as_mut() {
            window.data_loaded(path);
        }
    }

    /// Relays a data-unloaded notification to the window.
    pub fn data_unloaded(&mut self, path: &str) {
        if let Some(window) = self.window.as_mut() {
            window.data_unloaded(path);
        }
    }

    /// Selects the window if it is `selected`, deselects it otherwise.
    pub fn window_selected(&mut self, selected: &WindowId) {
        if let Some(window) = self.window.as_mut() {
            let is_selected = window.id() == selected;
            window.set_selected(is_selected);
        }
    }

    /// Relays a draw mode change to the window.
    pub fn set_draw_mode(&mut self, info: &DrawInfo) {
        if let Some(window) = self.window.as_mut() {
            window.set_draw_mode(info);
        }
    }

    /// Link state of this leaf's window relative to `source`.
    ///
    /// The source window itself, blank views and windows of the source's
    /// own plugin are not link candidates.
    #[must_use]
    pub fn link_info(&self, plugin_id: &str, source: &Window) -> Option<LinkInfo> {
        let window = self.window.as_ref()?;
        if window.id() == source.id() || window.is_blank() || window.plugin_id() == plugin_id {
            return None;
        }
        Some(LinkInfo {
            win_id: window.id().clone(),
            plugin_id: window.plugin_id().to_owned(),
            location: self.pos,
            linked: source.links_to(window.id()),
        })
    }

    /// Returns the leaf's own size.
    #[must_use]
    pub const fn dimensions(&self) -> Size {
        self.size
    }

    /// Returns the leaf's own position.
    #[must_use]
    pub const fn last_indices(&self) -> GridPos {
        self.pos
    }

    /// Halves the flagged extents.
    pub fn set_dimensions(&mut self, halve_width: bool, halve_height: bool) {
        if halve_width {
            self.size.width /= 2;
        }
        if halve_height {
            self.size.height /= 2;
        }
    }
}
