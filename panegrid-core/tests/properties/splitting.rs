//! Property-based tests for growing a layout by splitting areas

use std::collections::BTreeSet;

use panegrid_core::layout::{DisplayLayout, GridPos, LayoutError, Size};
use proptest::prelude::*;

use super::{extent_strategy, grid_strategy, leaves, split_count};

/// Strategy for a sequence of split targets, as indices into the current
/// area positions
fn split_targets_strategy(max_ops: usize) -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0usize..64, 1..=max_ops)
}

/// Observable shape of a layout
#[derive(Debug, Clone, PartialEq, Eq)]
struct LayoutSnapshot {
    area_count: usize,
    dimensions: Size,
    positions: Vec<GridPos>,
}

impl LayoutSnapshot {
    fn capture(layout: &DisplayLayout) -> Self {
        Self {
            area_count: layout.area_count(),
            dimensions: layout.dimensions(),
            positions: layout.positions(),
        }
    }
}

// ============================================================================
// Split Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Each split adds exactly one area and keeps the tree consistent
    #[test]
    fn prop_split_adds_one_area(
        (rows, cols) in grid_strategy(),
        width in extent_strategy(),
        height in extent_strategy(),
        targets in split_targets_strategy(8),
    ) {
        let mut layout = DisplayLayout::new(rows, cols, Size::new(width, height)).unwrap();

        for target in targets {
            let before = LayoutSnapshot::capture(&layout);
            let pos = before.positions[target % before.positions.len()];

            let new_pos = layout.split_area(pos).unwrap();
            let after = LayoutSnapshot::capture(&layout);

            prop_assert_eq!(after.area_count, before.area_count + 1);
            prop_assert!(after.positions.contains(&new_pos));
            prop_assert_eq!(after.dimensions, before.dimensions);
            prop_assert_eq!(split_count(layout.root()), after.area_count - 1);
            prop_assert!(layout.verify().is_ok(), "{:?}", layout.verify());
        }
    }

    /// Area positions stay unique through any sequence of splits
    #[test]
    fn prop_split_keeps_positions_unique(
        (rows, cols) in grid_strategy(),
        targets in split_targets_strategy(10),
    ) {
        let mut layout = DisplayLayout::new(rows, cols, Size::new(1200, 900)).unwrap();

        for target in targets {
            let positions = layout.positions();
            let pos = positions[target % positions.len()];
            layout.split_area(pos).unwrap();

            let positions = layout.positions();
            let unique: BTreeSet<GridPos> = positions.iter().copied().collect();
            prop_assert_eq!(unique.len(), positions.len());
        }
    }

    /// The new area shows the blank view and every other area keeps its content
    #[test]
    fn prop_split_preserves_content(
        (rows, cols) in grid_strategy(),
        target in 0usize..64,
    ) {
        let mut layout = DisplayLayout::new(rows, cols, Size::new(1200, 900)).unwrap();
        for pos in layout.positions() {
            layout.set_view("ImageViewer", 0, pos);
        }
        let windows_before = layout.get_windows().len();

        let positions = layout.positions();
        let new_pos = layout.split_area(positions[target % positions.len()]).unwrap();

        let new_leaf = leaves(layout.root())
            .into_iter()
            .find(|leaf| leaf.pos() == new_pos)
            .unwrap();
        prop_assert!(new_leaf.window().is_some_and(|window| window.is_blank()));

        let plugin_windows = layout
            .get_windows()
            .iter()
            .filter(|window| window.plugin_id() == "ImageViewer")
            .count();
        prop_assert_eq!(plugin_windows, windows_before);
    }

    /// Splitting an unknown position fails and leaves the layout untouched
    #[test]
    fn prop_split_unknown_area_fails((rows, cols) in grid_strategy()) {
        let mut layout = DisplayLayout::new(rows, cols, Size::new(600, 600)).unwrap();
        let before = LayoutSnapshot::capture(&layout);
        let missing = GridPos::new(rows, cols);

        prop_assert_eq!(layout.split_area(missing), Err(LayoutError::AreaNotFound(missing)));
        prop_assert_eq!(LayoutSnapshot::capture(&layout), before);
    }
}
