//! Display layout model owning the root of the split tree
//!
//! [`DisplayLayout`] is the entry point the application talks to. It
//! builds the tree from a row/column grid, forwards every operation to
//! the root node, logs mutations, and hands iconify notifications to the
//! registered [`IconifyListener`].
//!
//! # Example
//!
//! ```
//! use panegrid_core::layout::{DisplayLayout, GridPos, Size};
//!
//! let mut layout = DisplayLayout::new(2, 2, Size::new(400, 300)).unwrap();
//! assert_eq!(layout.area_count(), 4);
//!
//! // Show a plugin in the top-left area and link it to the bottom-right one
//! assert!(layout.set_view("ImageViewer", 0, GridPos::new(0, 0)));
//! assert!(layout.link(GridPos::new(0, 0), GridPos::new(1, 1)));
//! assert_eq!(
//!     layout.get_win_id(GridPos::new(1, 1)),
//!     layout.get_win_id(GridPos::new(0, 0))
//! );
//!
//! // Splitting the root inserts a fifth area
//! let new_area = layout.split_area(GridPos::new(0, 0)).unwrap();
//! assert_eq!(layout.area_count(), 5);
//! assert!(layout.contains(new_area));
//! ```

use std::fmt;

use super::error::LayoutError;
use super::event::{IconifyEvent, IconifyListener};
use super::geometry::{Edges, Point};
use super::leaf::LeafArea;
use super::node::AreaNode;
use super::split::SplitNode;
use super::types::{GridPos, Size, WindowId};
use super::window::{DrawInfo, LinkInfo, Window};
use crate::config::LayoutSettings;
use crate::trace_operation;
use crate::tracing::span_names;

/// Default divider thickness in pixels.
pub const DEFAULT_SPLITTER_SIZE: u32 = 4;

/// The complete screen layout.
pub struct DisplayLayout {
    /// Root of the tree.
    root: AreaNode,
    /// Top-left corner of the layout on screen.
    origin: Point,
    /// Divider thickness used by geometry queries.
    splitter_size: u32,
    /// Receiver of iconify notifications.
    listener: Option<Box<dyn IconifyListener>>,
}

impl fmt::Debug for DisplayLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayLayout")
            .field("root", &self.root)
            .field("origin", &self.origin)
            .field("splitter_size", &self.splitter_size)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl DisplayLayout {
    /// Builds a layout of `rows` x `cols` areas filling `size`.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidGrid` if `rows` or `cols` is zero.
    pub fn new(rows: u32, cols: u32, size: Size) -> Result<Self, LayoutError> {
        let _span = trace_operation!(
            span_names::LAYOUT_BUILD,
            rows,
            cols,
            width = size.width,
            height = size.height
        )
        .entered();

        if rows == 0 || cols == 0 {
            tracing::warn!(rows, cols, "rejected empty layout grid");
            return Err(LayoutError::InvalidGrid { rows, cols });
        }
        let root = AreaNode::build(
            rows,
            cols,
            size.height,
            size.width,
            GridPos::new(0, 0),
            cols - 1,
        )?;
        tracing::info!(areas = root.leaf_count(), "layout built");

        Ok(Self {
            root,
            origin: Point::default(),
            splitter_size: DEFAULT_SPLITTER_SIZE,
            listener: None,
        })
    }

    /// Builds a layout from persisted settings.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidGrid` if the settings name an empty grid.
    pub fn from_settings(settings: &LayoutSettings) -> Result<Self, LayoutError> {
        let mut layout = Self::new(
            settings.rows,
            settings.cols,
            Size::new(settings.width, settings.height),
        )?;
        layout.splitter_size = settings.splitter_size;
        Ok(layout)
    }

    /// Registers the receiver of iconify notifications, replacing any
    /// previous one.
    pub fn set_iconify_listener(&mut self, listener: impl IconifyListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Returns the root node.
    #[must_use]
    pub const fn root(&self) -> &AreaNode {
        &self.root
    }

    /// Returns the top-left corner used by geometry queries.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Moves the layout on screen.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Returns the divider thickness.
    #[must_use]
    pub const fn splitter_size(&self) -> u32 {
        self.splitter_size
    }

    /// Returns the number of areas.
    #[must_use]
    pub fn area_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Returns every area position in traversal order.
    #[must_use]
    pub fn positions(&self) -> Vec<GridPos> {
        self.root.positions()
    }

    /// Returns true if an area exists at `pos`.
    #[must_use]
    pub fn contains(&self, pos: GridPos) -> bool {
        self.root.contains(pos)
    }

    // ========================================================================
    // Content and links
    // ========================================================================

    /// Adds or removes the link `source -> dest` on every window.
    pub fn change_link(&mut self, source: &WindowId, dest: &WindowId, add: bool) {
        tracing::debug!(source = %source, dest = %dest, add, "changing link");
        self.root.change_link(source, dest, add);
    }

    /// Returns the effective window id at `pos`.
    #[must_use]
    pub fn get_win_id(&self, pos: GridPos) -> Option<WindowId> {
        self.root.get_win_id(pos)
    }

    /// Links the window at `source` into the area at `dest`.
    ///
    /// Returns false without changing anything when `source` shows no
    /// window or `dest` does not exist.
    pub fn link(&mut self, source: GridPos, dest: GridPos) -> bool {
        let linked = self.root.link(source, dest);
        if linked {
            tracing::debug!(
                source_row = source.row,
                source_col = source.col,
                dest_row = dest.row,
                dest_col = dest.col,
                "linked areas"
            );
        } else {
            tracing::debug!(
                source_row = source.row,
                source_col = source.col,
                "link source has no window"
            );
        }
        linked
    }

    /// Link candidates for the window `source`.
    ///
    /// Returns an empty list when `source` is not shown anywhere.
    #[must_use]
    pub fn link_info(&self, plugin_id: &str, source: &WindowId) -> Vec<LinkInfo> {
        self.root
            .find_window(source)
            .map(|window| self.root.link_info(plugin_id, window))
            .unwrap_or_default()
    }

    /// Shows view `index` of `plugin_id` in the area at `pos`.
    pub fn set_view(&mut self, plugin_id: &str, index: i32, pos: GridPos) -> bool {
        let assigned = self.root.set_view(plugin_id, index, pos);
        if assigned {
            tracing::debug!(plugin_id, index, row = pos.row, col = pos.col, "view assigned");
        } else {
            tracing::warn!(plugin_id, row = pos.row, col = pos.col, "no area for view");
        }
        assigned
    }

    /// Moves `window` into the area at `pos`.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::AreaNotFound` if no area exists at `pos`;
    /// the window is dropped in that case.
    pub fn set_window(&mut self, window: Window, pos: GridPos) -> Result<(), LayoutError> {
        self.root.set_window(window, pos).map_err(|window| {
            tracing::warn!(window = %window.id(), row = pos.row, col = pos.col, "no area for window");
            LayoutError::AreaNotFound(pos)
        })
    }

    /// Returns every window in traversal order.
    #[must_use]
    pub fn get_windows(&self) -> Vec<&Window> {
        self.root.get_windows()
    }

    /// Detaches every window.
    pub fn remove_windows(&mut self) {
        tracing::debug!("removing all windows");
        self.root.remove_windows();
    }

    /// Relays a data-loaded notification to every window.
    pub fn data_loaded(&mut self, path: &str) {
        tracing::debug!(path, "data loaded");
        self.root.data_loaded(path);
    }

    /// Relays a data-unloaded notification to every window.
    pub fn data_unloaded(&mut self, path: &str) {
        tracing::debug!(path, "data unloaded");
        self.root.data_unloaded(path);
    }

    /// Marks `selected` as the selected window.
    pub fn window_selected(&mut self, selected: &WindowId) {
        self.root.window_selected(selected);
    }

    /// Relays a draw mode change to every window.
    pub fn set_draw_mode(&mut self, info: &DrawInfo) {
        tracing::debug!(plugin_id = %info.plugin_id, mode = %info.mode, "draw mode changed");
        self.root.set_draw_mode(info);
    }

    // ========================================================================
    // Exclusion
    // ========================================================================

    /// Excludes (iconifies) the area at `pos`.
    ///
    /// The listener, if any, is notified before this returns. Returns
    /// false when no area exists at `pos`.
    pub fn exclude_area(&mut self, pos: GridPos) -> bool {
        let Some(event) = self.root.exclude_area(pos) else {
            tracing::debug!(row = pos.row, col = pos.col, "no area to exclude");
            return false;
        };
        tracing::debug!(row = pos.row, col = pos.col, "area excluded");
        self.notify(&event);
        true
    }

    /// Restores the excluded area at `pos`.
    pub fn restore_window(&mut self, pos: GridPos) -> bool {
        let restored = self.root.restore_window(pos);
        tracing::debug!(row = pos.row, col = pos.col, restored, "restore requested");
        restored
    }

    fn notify(&mut self, event: &IconifyEvent) {
        if let Some(listener) = self.listener.as_mut() {
            listener.window_iconified(event);
        }
    }

    // ========================================================================
    // Sizing
    // ========================================================================

    /// Sets the height of the area at `pos`.
    pub fn set_area_height(&mut self, height: u32, pos: GridPos) -> bool {
        let set = self.root.set_area_height(height, pos);
        tracing::debug!(height, row = pos.row, col = pos.col, set, "area height requested");
        set
    }

    /// Sets the width of the area at `pos`.
    pub fn set_area_width(&mut self, width: u32, pos: GridPos) -> bool {
        let set = self.root.set_area_width(width, pos);
        tracing::debug!(width, row = pos.row, col = pos.col, set, "area width requested");
        set
    }

    /// Resizes the whole layout, e.g. after the hosting window changed.
    pub fn resize(&mut self, size: Size) {
        let _span = trace_operation!(
            span_names::LAYOUT_RESIZE,
            width = size.width,
            height = size.height
        )
        .entered();
        self.root.resize(size);
    }

    /// Combined dimensions of the layout.
    #[must_use]
    pub fn dimensions(&self) -> Size {
        self.root.dimensions()
    }

    /// Position of the last area.
    #[must_use]
    pub fn last_indices(&self) -> GridPos {
        self.root.last_indices()
    }

    // ========================================================================
    // Growth
    // ========================================================================

    /// Splits the area at `pos`.
    ///
    /// The innermost split holding the area as a direct child inserts a
    /// new blank area after its first child. A layout made of a single
    /// area becomes a horizontal split of that area and a new one to its
    /// right.
    ///
    /// Returns the position of the new area.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::AreaNotFound` if no area exists at `pos`.
    pub fn split_area(&mut self, pos: GridPos) -> Result<GridPos, LayoutError> {
        let _span =
            trace_operation!(span_names::LAYOUT_SPLIT, row = pos.row, col = pos.col).entered();

        if self.root.is_leaf() {
            let placeholder = AreaNode::Leaf(LeafArea::new(pos, Size::default()));
            return match std::mem::replace(&mut self.root, placeholder) {
                AreaNode::Leaf(leaf) if leaf.matches(pos) => {
                    let split = SplitNode::wrap_leaf(leaf);
                    let new_pos = split.last_indices();
                    self.root = AreaNode::Split(split);
                    tracing::info!(row = new_pos.row, col = new_pos.col, "root area split");
                    Ok(new_pos)
                }
                other => {
                    self.root = other;
                    Err(LayoutError::AreaNotFound(pos))
                }
            };
        }

        let parent = self
            .root
            .split_parent_mut(pos)
            .ok_or(LayoutError::AreaNotFound(pos))?;
        let new_pos = parent.split();
        tracing::info!(
            row = new_pos.row,
            col = new_pos.col,
            areas = self.root.leaf_count(),
            "area split"
        );
        Ok(new_pos)
    }

    /// Moves the divider of the innermost split holding the area at
    /// `pos` by `offset` pixels.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::AreaNotFound` if no split holds an area at `pos`.
    pub fn move_splitter(&mut self, pos: GridPos, offset: i32) -> Result<u32, LayoutError> {
        let parent = self
            .root
            .split_parent_mut(pos)
            .ok_or(LayoutError::AreaNotFound(pos))?;
        let extent = parent.move_splitter(offset);
        tracing::debug!(row = pos.row, col = pos.col, offset, extent, "splitter moved");
        Ok(extent)
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    /// Absolute edges of every area.
    #[must_use]
    pub fn area_bounds(&self) -> Vec<(GridPos, Edges)> {
        self.root.area_bounds(self.origin)
    }

    /// Pixel midpoints of every laid-out divider, in pre-order.
    ///
    /// Dividers without positive area are left out.
    #[must_use]
    pub fn splitter_locations(&self) -> Vec<Point> {
        self.root
            .splitter_edges(self.origin, self.splitter_size)
            .iter()
            .filter_map(Edges::midpoint)
            .collect()
    }

    /// Checks the extent invariant over the whole tree.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InconsistentExtents` naming the first
    /// offending node.
    pub fn verify(&self) -> Result<(), LayoutError> {
        self.root.verify_extents()
    }
}
