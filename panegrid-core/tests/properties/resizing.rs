//! Property-based tests for resizing layouts and individual areas

use panegrid_core::layout::{DisplayLayout, GridPos, Size};
use proptest::prelude::*;

use super::{extent_strategy, grid_strategy, leaves};

/// Strategy for a grid together with one cell inside it
fn grid_with_cell() -> impl Strategy<Value = ((u32, u32), GridPos)> {
    grid_strategy().prop_flat_map(|(rows, cols)| {
        (Just((rows, cols)), (0..rows, 0..cols)).prop_map(|(grid, (row, col))| {
            (grid, GridPos::new(row, col))
        })
    })
}

// ============================================================================
// Whole-Layout Resize Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Resizing the layout makes it exactly the requested size
    #[test]
    fn prop_resize_reaches_requested_size(
        (rows, cols) in grid_strategy(),
        width in extent_strategy(),
        height in extent_strategy(),
        new_width in extent_strategy(),
        new_height in extent_strategy(),
    ) {
        let mut layout = DisplayLayout::new(rows, cols, Size::new(width, height)).unwrap();
        layout.resize(Size::new(new_width, new_height));

        prop_assert_eq!(layout.dimensions(), Size::new(new_width, new_height));
        prop_assert!(layout.verify().is_ok(), "{:?}", layout.verify());
    }

    /// Resizing back and forth keeps the tree consistent after splits
    #[test]
    fn prop_resize_after_splits(
        (rows, cols) in grid_strategy(),
        targets in proptest::collection::vec(0usize..64, 0..6),
        sizes in proptest::collection::vec((extent_strategy(), extent_strategy()), 1..4),
    ) {
        let mut layout = DisplayLayout::new(rows, cols, Size::new(1200, 900)).unwrap();
        for target in targets {
            let positions = layout.positions();
            layout.split_area(positions[target % positions.len()]).unwrap();
        }
        for (width, height) in sizes {
            layout.resize(Size::new(width, height));
            prop_assert_eq!(layout.dimensions(), Size::new(width, height));
            prop_assert!(layout.verify().is_ok(), "{:?}", layout.verify());
        }
    }

    /// The areas always tile the layout's bounds
    #[test]
    fn prop_area_bounds_tile_layout(
        (rows, cols) in grid_strategy(),
        new_width in extent_strategy(),
        new_height in extent_strategy(),
    ) {
        let mut layout = DisplayLayout::new(rows, cols, Size::new(600, 600)).unwrap();
        layout.resize(Size::new(new_width, new_height));

        let covered: i64 = layout
            .area_bounds()
            .iter()
            .map(|(_, edges)| i64::from(edges.width()) * i64::from(edges.height()))
            .sum();
        prop_assert_eq!(covered, i64::from(new_width) * i64::from(new_height));
    }
}

// ============================================================================
// Single-Area Resize Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Setting one area's extents never breaks the extent invariant
    #[test]
    fn prop_area_extent_keeps_invariant(
        ((rows, cols), pos) in grid_with_cell(),
        width in extent_strategy(),
        height in extent_strategy(),
    ) {
        let mut layout = DisplayLayout::new(rows, cols, Size::new(1200, 900)).unwrap();

        prop_assert!(layout.set_area_width(width, pos));
        prop_assert!(layout.verify().is_ok(), "{:?}", layout.verify());
        prop_assert!(layout.set_area_height(height, pos));
        prop_assert!(layout.verify().is_ok(), "{:?}", layout.verify());
    }

    /// Changing a width inside a multi-column layout keeps the total width
    #[test]
    fn prop_area_width_keeps_total_width(
        ((rows, cols), pos) in grid_with_cell(),
        width in extent_strategy(),
    ) {
        prop_assume!(cols > 1);
        let mut layout = DisplayLayout::new(rows, cols, Size::new(1200, 900)).unwrap();
        let before = layout.dimensions();

        layout.set_area_width(width, pos);
        prop_assert_eq!(layout.dimensions().width, before.width);
    }

    /// Unknown positions are rejected without touching any area
    #[test]
    fn prop_area_extent_unknown_position((rows, cols) in grid_strategy(), value in extent_strategy()) {
        let mut layout = DisplayLayout::new(rows, cols, Size::new(600, 600)).unwrap();
        let sizes: Vec<Size> = leaves(layout.root()).iter().map(|leaf| leaf.size()).collect();

        prop_assert!(!layout.set_area_width(value, GridPos::new(rows, 0)));
        prop_assert!(!layout.set_area_height(value, GridPos::new(0, cols)));

        let after: Vec<Size> = leaves(layout.root()).iter().map(|leaf| leaf.size()).collect();
        prop_assert_eq!(after, sizes);
    }
}
