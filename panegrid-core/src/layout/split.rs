//! Split nodes: the internal nodes of the layout tree
//!
//! A split node divides its region between exactly two children along
//! one axis. The tree is built top-down from a row/column grid by
//! [`SplitNode::build`] and grows at runtime through [`SplitNode::split`],
//! which grafts the existing second child one level deeper behind a new
//! blank leaf.
//!
//! # Tree Structure
//!
//! A 2x3 grid is built as:
//!
//! ```text
//! Split(Horizontal)
//! ├── Split(Vertical)
//! │   ├── Leaf(0, 0)
//! │   └── Leaf(1, 0)
//! └── Split(Horizontal)
//!     ├── Split(Vertical)
//!     │   ├── Leaf(0, 1)
//!     │   └── Leaf(1, 1)
//!     └── Split(Vertical)
//!         ├── Leaf(0, 2)
//!         └── Leaf(1, 2)
//! ```
//!
//! Every traversal visits the first child before the second. Operations
//! addressed to a single grid position stop at the first child that
//! accepts them.

use super::error::LayoutError;
use super::event::IconifyEvent;
use super::geometry::{Edges, Point, divider_edges};
use super::leaf::LeafArea;
use super::node::AreaNode;
use super::types::{Axis, GridPos, Orientation, Size, WindowId};
use super::window::{DrawInfo, Window};

/// Flex weight given to leaf children.
pub const LEAF_FLEX: u32 = 1;

/// An internal node owning two children and the divider between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitNode {
    orientation: Orientation,
    first: Box<AreaNode>,
    second: Box<AreaNode>,
    first_flex: u32,
    second_flex: u32,
    size: Size,
}

/// Which child of a split node an operation landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    First,
    Second,
}

impl SplitNode {
    /// Builds the subtree for a `rows` x `cols` block of the grid.
    ///
    /// `pos` is the grid position of the block's top-left cell and
    /// `last_col` the index of the layout's last column, which decides
    /// the flex weight of recursively built children.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidGrid` for zero rows or columns and
    /// `LayoutError::SingleCell` for a 1x1 block.
    pub fn build(
        rows: u32,
        cols: u32,
        height: u32,
        width: u32,
        pos: GridPos,
        last_col: u32,
    ) -> Result<Self, LayoutError> {
        if rows == 0 || cols == 0 {
            return Err(LayoutError::InvalidGrid { rows, cols });
        }
        if rows == 1 && cols == 1 {
            return Err(LayoutError::SingleCell);
        }

        let row_height = height / rows;
        let col_width = width / cols;
        let cell = Size::new(col_width, row_height);
        let leaf = |pos| (AreaNode::Leaf(LeafArea::new(pos, cell)), LEAF_FLEX);

        let split = if cols == 1 {
            // Single column left: stack the rows.
            let second = if rows <= 2 {
                leaf(pos.below())
            } else {
                Self::child(rows - 1, cols, cell, pos.below(), last_col)?
            };
            Self::from_children(Orientation::Vertical, leaf(pos), second)
        } else if rows == 1 && cols == 2 {
            Self::from_children(Orientation::Horizontal, leaf(pos), leaf(pos.right()))
        } else if rows == 1 && cols == 3 {
            let second = Self::child(rows, cols - 1, cell, pos.right(), last_col)?;
            Self::from_children(Orientation::Horizontal, leaf(pos), second)
        } else {
            let first = Self::child(rows, 1, cell, pos, last_col)?;
            let second = Self::child(rows, cols - 1, cell, pos.right(), last_col)?;
            Self::from_children(Orientation::Horizontal, first, second)
        };

        tracing::trace!(
            rows,
            cols,
            row = pos.row,
            col = pos.col,
            orientation = %split.orientation,
            "built split node"
        );
        Ok(split)
    }

    /// Builds a node whose second child is an existing, already
    /// positioned subtree.
    ///
    /// The first child is a fresh leaf at `pos` of `size` holding the
    /// blank view.
    #[must_use]
    pub fn build_from_existing(
        size: Size,
        pos: GridPos,
        existing: AreaNode,
        orientation: Orientation,
    ) -> Self {
        let first = AreaNode::Leaf(LeafArea::with_blank_view(pos, size));
        Self::from_children(orientation, (first, LEAF_FLEX), (existing, LEAF_FLEX))
    }

    /// Wraps a lone leaf into a horizontal split with a new blank leaf
    /// to its right. The leaf keeps the wider half.
    #[must_use]
    pub fn wrap_leaf(leaf: LeafArea) -> Self {
        let size = leaf.size();
        let new_pos = leaf.pos().right();
        let new_size = Size::new(size.width / 2, size.height);
        let mut leaf = leaf;
        leaf.set_size(Size::new(size.width - new_size.width, size.height));
        Self::from_children(
            Orientation::Horizontal,
            (AreaNode::Leaf(leaf), LEAF_FLEX),
            (
                AreaNode::Leaf(LeafArea::with_blank_view(new_pos, new_size)),
                LEAF_FLEX,
            ),
        )
    }

    /// Builds one recursively constructed child and its flex weight.
    fn child(
        rows: u32,
        cols: u32,
        cell: Size,
        pos: GridPos,
        last_col: u32,
    ) -> Result<(AreaNode, u32), LayoutError> {
        if rows == 1 && cols == 1 {
            return Ok((AreaNode::Leaf(LeafArea::new(pos, cell)), LEAF_FLEX));
        }
        let node = Self::build(
            rows,
            cols,
            rows * cell.height,
            cols * cell.width,
            pos,
            last_col,
        )?;
        let flex = if pos.col == last_col { rows } else { 0 };
        Ok((AreaNode::Split(node), flex))
    }

    fn from_children(
        orientation: Orientation,
        (first, first_flex): (AreaNode, u32),
        (second, second_flex): (AreaNode, u32),
    ) -> Self {
        let size = Size::combine(orientation, first.size(), second.size());
        Self {
            orientation,
            first: Box::new(first),
            second: Box::new(second),
            first_flex,
            second_flex,
            size,
        }
    }

    /// Returns the divider orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the first child (left or top).
    #[must_use]
    pub fn first(&self) -> &AreaNode {
        &self.first
    }

    /// Returns the second child (right or bottom).
    #[must_use]
    pub fn second(&self) -> &AreaNode {
        &self.second
    }

    pub(crate) fn first_mut(&mut self) -> &mut AreaNode {
        &mut self.first
    }

    pub(crate) fn second_mut(&mut self) -> &mut AreaNode {
        &mut self.second
    }

    /// Returns the flex weights of the first and second child.
    #[must_use]
    pub const fn flex(&self) -> (u32, u32) {
        (self.first_flex, self.second_flex)
    }

    /// Returns the stored size of the combined region.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Returns true if one of the two children is the leaf at `pos`.
    #[must_use]
    pub fn has_direct_leaf(&self, pos: GridPos) -> bool {
        [&self.first, &self.second]
            .into_iter()
            .any(|child| child.as_leaf().is_some_and(|leaf| leaf.matches(pos)))
    }

    // ========================================================================
    // Broadcast operations
    // ========================================================================

    /// Relays a link change to both children.
    pub fn change_link(&mut self, source: &WindowId, dest: &WindowId, add: bool) {
        self.first.change_link(source, dest, add);
        self.second.change_link(source, dest, add);
    }

    /// Detaches every window in the subtree.
    pub fn remove_windows(&mut self) {
        self.first.remove_windows();
        self.second.remove_windows();
    }

    /// Relays a data-loaded notification to both children.
    pub fn data_loaded(&mut self, path: &str) {
        self.first.data_loaded(path);
        self.second.data_loaded(path);
    }

    /// Relays a data-unloaded notification to both children.
    pub fn data_unloaded(&mut self, path: &str) {
        self.first.data_unloaded(path);
        self.second.data_unloaded(path);
    }

    /// Relays a window selection to both children.
    pub fn window_selected(&mut self, selected: &WindowId) {
        self.first.window_selected(selected);
        self.second.window_selected(selected);
    }

    /// Relays a draw mode change to both children.
    pub fn set_draw_mode(&mut self, info: &DrawInfo) {
        self.first.set_draw_mode(info);
        self.second.set_draw_mode(info);
    }

    // ========================================================================
    // Addressed operations (first match wins)
    // ========================================================================

    /// Excludes the leaf at `pos`, returning its iconify notification.
    pub fn exclude_area(&mut self, pos: GridPos) -> Option<IconifyEvent> {
        self.first
            .exclude_area(pos)
            .or_else(|| self.second.exclude_area(pos))
    }

    /// Returns the effective window id at `pos`.
    #[must_use]
    pub fn get_win_id(&self, pos: GridPos) -> Option<WindowId> {
        self.first
            .get_win_id(pos)
            .or_else(|| self.second.get_win_id(pos))
    }

    /// Assigns `id` as the link id of the leaf at `pos`.
    pub fn set_link_id(&mut self, pos: GridPos, id: &WindowId) -> bool {
        self.first.set_link_id(pos, id) || self.second.set_link_id(pos, id)
    }

    /// Links the window shown at `source` into the leaf at `dest`.
    ///
    /// Does nothing and returns false when `source` shows no window.
    pub fn link(&mut self, source: GridPos, dest: GridPos) -> bool {
        match self.get_win_id(source) {
            Some(id) => self.set_link_id(dest, &id),
            None => false,
        }
    }

    /// Shows view `index` of `plugin_id` in the leaf at `pos`.
    pub fn set_view(&mut self, plugin_id: &str, index: i32, pos: GridPos) -> bool {
        self.first.set_view(plugin_id, index, pos) || self.second.set_view(plugin_id, index, pos)
    }

    /// Moves `window` into the leaf at `pos`.
    ///
    /// # Errors
    ///
    /// Hands the window back when no leaf in the subtree is at `pos`.
    pub fn set_window(&mut self, window: Window, pos: GridPos) -> Result<(), Window> {
        self.first
            .set_window(window, pos)
            .or_else(|window| self.second.set_window(window, pos))
    }

    /// Restores the excluded leaf at `pos`.
    pub fn restore_window(&mut self, pos: GridPos) -> bool {
        self.first.restore_window(pos) || self.second.restore_window(pos)
    }

    /// Sets one extent of the leaf at `pos` and rebalances this node.
    ///
    /// Along the split axis the sibling absorbs the change; a request
    /// larger than this node is clamped. Along the cross axis the
    /// sibling follows and so does this node's own extent.
    pub fn set_extent(&mut self, axis: Axis, value: u32, pos: GridPos) -> bool {
        let side = if self.first.set_extent(axis, value, pos) {
            Side::First
        } else if self.second.set_extent(axis, value, pos) {
            Side::Second
        } else {
            return false;
        };
        self.reconcile(side, axis);
        true
    }

    /// Sets the height of the leaf at `pos`.
    pub fn set_area_height(&mut self, height: u32, pos: GridPos) -> bool {
        self.set_extent(Axis::Height, height, pos)
    }

    /// Sets the width of the leaf at `pos`.
    pub fn set_area_width(&mut self, width: u32, pos: GridPos) -> bool {
        self.set_extent(Axis::Width, width, pos)
    }

    fn reconcile(&mut self, side: Side, axis: Axis) {
        let orientation = self.orientation;
        let total = self.size.along(orientation);
        let (changed, other) = match side {
            Side::First => (&mut *self.first, &mut *self.second),
            Side::Second => (&mut *self.second, &mut *self.first),
        };
        let changed_size = changed.size();
        let other_size = other.size();

        if axis.is_split_axis_of(orientation) {
            let extent = changed_size.along(orientation).min(total);
            if extent != changed_size.along(orientation) {
                changed.resize(Size::oriented(
                    orientation,
                    extent,
                    changed_size.across(orientation),
                ));
            }
            other.resize(Size::oriented(
                orientation,
                total - extent,
                other_size.across(orientation),
            ));
        } else {
            other.resize(Size::oriented(
                orientation,
                other_size.along(orientation),
                changed_size.across(orientation),
            ));
        }
        self.size = Size::combine(orientation, self.first.size(), self.second.size());
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns every window in the subtree, first child's windows first.
    #[must_use]
    pub fn get_windows(&self) -> Vec<&Window> {
        let mut windows = self.first.get_windows();
        windows.extend(self.second.get_windows());
        windows
    }

    /// Combines the children's dimensions: the split axis sums, the
    /// cross axis takes the first child's extent.
    #[must_use]
    pub fn dimensions(&self) -> Size {
        Size::combine(
            self.orientation,
            self.first.dimensions(),
            self.second.dimensions(),
        )
    }

    /// Grid position of the last leaf, found along the second-child chain.
    #[must_use]
    pub fn last_indices(&self) -> GridPos {
        self.second.last_indices()
    }

    // ========================================================================
    // Growth and resizing
    // ========================================================================

    /// Inserts a new blank leaf right after the first child.
    ///
    /// The new leaf is placed just past the first child's last position
    /// along this node's split axis. The old second child is halved along
    /// that axis and grafted one level deeper, behind the new leaf, in a
    /// split of the same orientation. Leaves of the old second child at or
    /// beyond the new position move one step further along the axis.
    ///
    /// Returns the position of the new leaf.
    pub fn split(&mut self) -> GridPos {
        let orientation = self.orientation;
        let new_pos = self.first.last_indices().next_along(orientation);
        let second_size = self.second.size();
        let (halve_width, halve_height) = match orientation {
            Orientation::Horizontal => (true, false),
            Orientation::Vertical => (false, true),
        };

        let mut old_second = std::mem::replace(
            self.second.as_mut(),
            AreaNode::Leaf(LeafArea::new(new_pos, Size::default())),
        );
        old_second.set_dimensions(halve_width, halve_height);
        old_second.shift_positions(orientation, new_pos.along(orientation));

        let remainder = second_size.along(orientation) - old_second.size().along(orientation);
        let leaf_size = Size::oriented(orientation, remainder, second_size.across(orientation));
        let graft = Self::build_from_existing(leaf_size, new_pos, old_second, orientation);

        *self.second = AreaNode::Split(graft);
        self.second_flex = 0;
        tracing::debug!(
            row = new_pos.row,
            col = new_pos.col,
            orientation = %orientation,
            "inserted area"
        );
        new_pos
    }

    /// Halves the flagged extents across the whole subtree.
    pub fn set_dimensions(&mut self, halve_width: bool, halve_height: bool) {
        self.first.set_dimensions(halve_width, halve_height);
        self.second.set_dimensions(halve_width, halve_height);
        self.size = Size::combine(self.orientation, self.first.size(), self.second.size());
    }

    /// Resizes the region to `size`.
    ///
    /// The change along the split axis is shared between the children in
    /// proportion to their flex weights; when both weights are zero the
    /// second child takes all of it. The cross axis is applied to both.
    pub fn resize(&mut self, size: Size) {
        let orientation = self.orientation;
        let total = size.along(orientation);
        let across = size.across(orientation);
        let first_old = self.first.size().along(orientation);
        let old_total = first_old + self.second.size().along(orientation);

        let first_new = if total >= old_total {
            first_old + self.first_share(total - old_total)
        } else {
            first_old.saturating_sub(self.first_share(old_total - total))
        }
        .min(total);

        self.first
            .resize(Size::oriented(orientation, first_new, across));
        self.second
            .resize(Size::oriented(orientation, total - first_new, across));
        self.size = size;
    }

    /// Part of `delta` that goes to the first child.
    fn first_share(&self, delta: u32) -> u32 {
        let weights = u64::from(self.first_flex) + u64::from(self.second_flex);
        if weights == 0 {
            return 0;
        }
        let share = u64::from(delta) * u64::from(self.first_flex) / weights;
        u32::try_from(share).unwrap_or(delta)
    }

    /// Moves the divider by `offset` pixels along the split axis.
    ///
    /// The divider stays inside the node; returns the first child's new
    /// extent along the split axis.
    pub fn move_splitter(&mut self, offset: i32) -> u32 {
        let orientation = self.orientation;
        let total = self.size.along(orientation);
        let across = self.size.across(orientation);
        let first = i64::from(self.first.size().along(orientation));
        let moved = (first + i64::from(offset)).clamp(0, i64::from(total));
        let moved = u32::try_from(moved).unwrap_or(total);

        self.first
            .resize(Size::oriented(orientation, moved, across));
        self.second
            .resize(Size::oriented(orientation, total - moved, across));
        moved
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    /// Top-left corner of the second child when this node sits at `origin`.
    #[must_use]
    pub fn second_origin(&self, origin: Point) -> Point {
        origin.offset_along(self.orientation, self.first.size().along(self.orientation))
    }

    /// Absolute edges of the divider when this node sits at `origin`.
    #[must_use]
    pub fn splitter_edges(&self, origin: Point, thickness: u32) -> Edges {
        divider_edges(
            self.orientation,
            origin,
            self.size,
            self.first.size().along(self.orientation),
            thickness,
        )
    }

    /// Pixel midpoint of the divider, or `None` while it has no area.
    #[must_use]
    pub fn splitter_location(&self, origin: Point, thickness: u32) -> Option<Point> {
        self.splitter_edges(origin, thickness).midpoint()
    }
}
