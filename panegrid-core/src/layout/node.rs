//! The closed node type of the layout tree
//!
//! Every position in the tree is either a [`LeafArea`] or a
//! [`SplitNode`]. Operations on [`AreaNode`] dispatch to whichever case
//! they hold, so no node ever needs to check for a missing child.

use super::error::LayoutError;
use super::event::IconifyEvent;
use super::geometry::{Edges, Point};
use super::leaf::LeafArea;
use super::split::SplitNode;
use super::types::{Axis, GridPos, Orientation, Size, WindowId};
use super::window::{DrawInfo, LinkInfo, Window};

/// A node in the layout tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AreaNode {
    /// A single grid cell.
    Leaf(LeafArea),
    /// A region divided between two children.
    Split(SplitNode),
}

impl AreaNode {
    /// Builds the tree for a `rows` x `cols` block.
    ///
    /// Unlike [`SplitNode::build`] this accepts a single cell and returns
    /// a leaf for it.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidGrid` for zero rows or columns.
    pub fn build(
        rows: u32,
        cols: u32,
        height: u32,
        width: u32,
        pos: GridPos,
        last_col: u32,
    ) -> Result<Self, LayoutError> {
        if rows == 1 && cols == 1 {
            return Ok(Self::Leaf(LeafArea::new(pos, Size::new(width, height))));
        }
        SplitNode::build(rows, cols, height, width, pos, last_col).map(Self::Split)
    }

    /// Returns true if this is a leaf node.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns true if this is a split node.
    #[must_use]
    pub const fn is_split(&self) -> bool {
        matches!(self, Self::Split(_))
    }

    /// Returns the leaf if this is a leaf node.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&LeafArea> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Split(_) => None,
        }
    }

    /// Returns the split node if this is a split node.
    #[must_use]
    pub const fn as_split(&self) -> Option<&SplitNode> {
        match self {
            Self::Leaf(_) => None,
            Self::Split(split) => Some(split),
        }
    }

    /// Returns the stored size of the node.
    #[must_use]
    pub const fn size(&self) -> Size {
        match self {
            Self::Leaf(leaf) => leaf.size(),
            Self::Split(split) => split.size(),
        }
    }

    // ========================================================================
    // Tree Traversal Methods
    // ========================================================================

    /// Returns the number of leaf areas.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Split(split) => split.first().leaf_count() + split.second().leaf_count(),
        }
    }

    /// Returns the depth of the tree; a single leaf has depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Split(split) => 1 + split.first().depth().max(split.second().depth()),
        }
    }

    /// Returns every leaf position in traversal order.
    #[must_use]
    pub fn positions(&self) -> Vec<GridPos> {
        let mut positions = Vec::new();
        self.for_each_leaf(&mut |leaf| positions.push(leaf.pos()));
        positions
    }

    fn for_each_leaf<'a>(&'a self, visit: &mut impl FnMut(&'a LeafArea)) {
        match self {
            Self::Leaf(leaf) => visit(leaf),
            Self::Split(split) => {
                split.first().for_each_leaf(visit);
                split.second().for_each_leaf(visit);
            }
        }
    }

    fn for_each_leaf_mut(&mut self, visit: &mut impl FnMut(&mut LeafArea)) {
        match self {
            Self::Leaf(leaf) => visit(leaf),
            Self::Split(split) => {
                split.first_mut().for_each_leaf_mut(visit);
                split.second_mut().for_each_leaf_mut(visit);
            }
        }
    }

    /// Finds the leaf at `pos`.
    #[must_use]
    pub fn find_leaf(&self, pos: GridPos) -> Option<&LeafArea> {
        match self {
            Self::Leaf(leaf) => leaf.matches(pos).then_some(leaf),
            Self::Split(split) => split
                .first()
                .find_leaf(pos)
                .or_else(|| split.second().find_leaf(pos)),
        }
    }

    /// Returns true if the tree has a leaf at `pos`.
    #[must_use]
    pub fn contains(&self, pos: GridPos) -> bool {
        self.find_leaf(pos).is_some()
    }

    /// Finds a window by its own id.
    #[must_use]
    pub fn find_window(&self, id: &WindowId) -> Option<&Window> {
        match self {
            Self::Leaf(leaf) => leaf.window().filter(|window| window.id() == id),
            Self::Split(split) => split
                .first()
                .find_window(id)
                .or_else(|| split.second().find_window(id)),
        }
    }

    /// Returns the innermost split that has the leaf at `pos` as a
    /// direct child.
    pub fn split_parent_mut(&mut self, pos: GridPos) -> Option<&mut SplitNode> {
        match self {
            Self::Leaf(_) => None,
            Self::Split(split) => {
                if split.has_direct_leaf(pos) {
                    return Some(split);
                }
                if split.first().contains(pos) {
                    split.first_mut().split_parent_mut(pos)
                } else {
                    split.second_mut().split_parent_mut(pos)
                }
            }
        }
    }

    /// Moves every leaf whose coordinate along the split axis of
    /// `orientation` is at least `from` one step further along that axis.
    pub fn shift_positions(&mut self, orientation: Orientation, from: u32) {
        self.for_each_leaf_mut(&mut |leaf| {
            let pos = leaf.pos();
            if pos.along(orientation) >= from {
                leaf.set_pos(pos.next_along(orientation));
            }
        });
    }

    /// Checks the extent invariant on every split node.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InconsistentExtents` for the first node whose
    /// stored size does not match its children, or whose children differ
    /// along the cross axis.
    pub fn verify_extents(&self) -> Result<(), LayoutError> {
        let Self::Split(split) = self else {
            return Ok(());
        };
        split.first().verify_extents()?;
        split.second().verify_extents()?;

        let orientation = split.orientation();
        let first = split.first().size();
        let second = split.second().size();
        let combined = Size::combine(orientation, first, second);
        if combined != split.size() || first.across(orientation) != second.across(orientation) {
            return Err(LayoutError::InconsistentExtents {
                first: self.first_pos(),
                stored: split.size(),
                combined,
            });
        }
        Ok(())
    }

    fn first_pos(&self) -> GridPos {
        match self {
            Self::Leaf(leaf) => leaf.pos(),
            Self::Split(split) => split.first().first_pos(),
        }
    }

    // ========================================================================
    // Dispatch to leaf and split operations
    // ========================================================================

    /// Relays a link change.
    pub fn change_link(&mut self, source: &WindowId, dest: &WindowId, add: bool) {
        match self {
            Self::Leaf(leaf) => leaf.change_link(source, dest, add),
            Self::Split(split) => split.change_link(source, dest, add),
        }
    }

    /// Excludes the leaf at `pos`.
    pub fn exclude_area(&mut self, pos: GridPos) -> Option<IconifyEvent> {
        match self {
            Self::Leaf(leaf) => leaf.exclude_area(pos),
            Self::Split(split) => split.exclude_area(pos),
        }
    }

    /// Returns the effective window id at `pos`.
    #[must_use]
    pub fn get_win_id(&self, pos: GridPos) -> Option<WindowId> {
        match self {
            Self::Leaf(leaf) => leaf.get_win_id(pos),
            Self::Split(split) => split.get_win_id(pos),
        }
    }

    /// Assigns a link id to the leaf at `pos`.
    pub fn set_link_id(&mut self, pos: GridPos, id: &WindowId) -> bool {
        match self {
            Self::Leaf(leaf) => leaf.set_link_id(pos, id),
            Self::Split(split) => split.set_link_id(pos, id),
        }
    }

    /// Links the window at `source` into the leaf at `dest`.
    pub fn link(&mut self, source: GridPos, dest: GridPos) -> bool {
        match self.get_win_id(source) {
            Some(id) => self.set_link_id(dest, &id),
            None => false,
        }
    }

    /// Shows a plugin view in the leaf at `pos`.
    pub fn set_view(&mut self, plugin_id: &str, index: i32, pos: GridPos) -> bool {
        match self {
            Self::Leaf(leaf) => leaf.set_view(plugin_id, index, pos),
            Self::Split(split) => split.set_view(plugin_id, index, pos),
        }
    }

    /// Moves a window into the leaf at `pos`.
    ///
    /// # Errors
    ///
    /// Hands the window back when no leaf is at `pos`.
    pub fn set_window(&mut self, window: Window, pos: GridPos) -> Result<(), Window> {
        match self {
            Self::Leaf(leaf) => leaf.set_window(window, pos),
            Self::Split(split) => split.set_window(window, pos),
        }
    }

    /// Sets one extent of the leaf at `pos`.
    pub fn set_extent(&mut self, axis: Axis, value: u32, pos: GridPos) -> bool {
        match self {
            Self::Leaf(leaf) => leaf.set_extent(axis, value, pos),
            Self::Split(split) => split.set_extent(axis, value, pos),
        }
    }

    /// Sets the height of the leaf at `pos`.
    pub fn set_area_height(&mut self, height: u32, pos: GridPos) -> bool {
        self.set_extent(Axis::Height, height, pos)
    }

    /// Sets the width of the leaf at `pos`.
    pub fn set_area_width(&mut self, width: u32, pos: GridPos) -> bool {
        self.set_extent(Axis::Width, width, pos)
    }

    /// Returns every window in traversal order.
    #[must_use]
    pub fn get_windows(&self) -> Vec<&Window> {
        match self {
            Self::Leaf(leaf) => leaf.get_windows(),
            Self::Split(split) => split.get_windows(),
        }
    }

    /// Restores the excluded leaf at `pos`.
    pub fn restore_window(&mut self, pos: GridPos) -> bool {
        match self {
            Self::Leaf(leaf) => leaf.restore_window(pos),
            Self::Split(split) => split.restore_window(pos),
        }
    }

    /// Detaches every window.
    pub fn remove_windows(&mut self) {
        match self {
            Self::Leaf(leaf) => leaf.remove_windows(),
            Self::Split(split) => split.remove_windows(),
        }
    }

    /// Relays a data-loaded notification.
    pub fn data_loaded(&mut self, path: &str) {
        match self {
            Self::Leaf(leaf) => leaf.data_loaded(path),
            Self::Split(split) => split.data_loaded(path),
        }
    }

    /// Relays a data-unloaded notification.
    pub fn data_unloaded(&mut self, path: &str) {
        match self {
            Self::Leaf(leaf) => leaf.data_unloaded(path),
            Self::Split(split) => split.data_unloaded(path),
        }
    }

    /// Relays a window selection.
    pub fn window_selected(&mut self, selected: &WindowId) {
        match self {
            Self::Leaf(leaf) => leaf.window_selected(selected),
            Self::Split(split) => split.window_selected(selected),
        }
    }

    /// Relays a draw mode change.
    pub fn set_draw_mode(&mut self, info: &DrawInfo) {
        match self {
            Self::Leaf(leaf) => leaf.set_draw_mode(info),
            Self::Split(split) => split.set_draw_mode(info),
        }
    }

    /// Link candidates for `source`, in traversal order.
    #[must_use]
    pub fn link_info(&self, plugin_id: &str, source: &Window) -> Vec<LinkInfo> {
        let mut infos = Vec::new();
        self.for_each_leaf(&mut |leaf| infos.extend(leaf.link_info(plugin_id, source)));
        infos
    }

    /// Dimensions combined from the leaves upward.
    #[must_use]
    pub fn dimensions(&self) -> Size {
        match self {
            Self::Leaf(leaf) => leaf.dimensions(),
            Self::Split(split) => split.dimensions(),
        }
    }

    /// Position of the last leaf.
    #[must_use]
    pub fn last_indices(&self) -> GridPos {
        match self {
            Self::Leaf(leaf) => leaf.last_indices(),
            Self::Split(split) => split.last_indices(),
        }
    }

    /// Halves the flagged extents across the subtree.
    pub fn set_dimensions(&mut self, halve_width: bool, halve_height: bool) {
        match self {
            Self::Leaf(leaf) => leaf.set_dimensions(halve_width, halve_height),
            Self::Split(split) => split.set_dimensions(halve_width, halve_height),
        }
    }

    /// Resizes the node to `size`.
    pub fn resize(&mut self, size: Size) {
        match self {
            Self::Leaf(leaf) => leaf.set_size(size),
            Self::Split(split) => split.resize(size),
        }
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    /// Absolute edges of every leaf when the tree sits at `origin`.
    #[must_use]
    pub fn area_bounds(&self, origin: Point) -> Vec<(GridPos, Edges)> {
        let mut bounds = Vec::new();
        self.collect_bounds(origin, &mut bounds);
        bounds
    }

    fn collect_bounds(&self, origin: Point, out: &mut Vec<(GridPos, Edges)>) {
        match self {
            Self::Leaf(leaf) => out.push((leaf.pos(), Edges::from_origin(origin, leaf.size()))),
            Self::Split(split) => {
                split.first().collect_bounds(origin, out);
                split.second().collect_bounds(split.second_origin(origin), out);
            }
        }
    }

    /// Absolute edges of every divider in pre-order.
    #[must_use]
    pub fn splitter_edges(&self, origin: Point, thickness: u32) -> Vec<Edges> {
        let mut edges = Vec::new();
        self.collect_splitters(origin, thickness, &mut edges);
        edges
    }

    fn collect_splitters(&self, origin: Point, thickness: u32, out: &mut Vec<Edges>) {
        if let Self::Split(split) = self {
            out.push(split.splitter_edges(origin, thickness));
            split.first().collect_splitters(origin, thickness, out);
            split
                .second()
                .collect_splitters(split.second_origin(origin), thickness, out);
        }
    }
}
