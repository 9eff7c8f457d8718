//! Property-based tests for building layouts from a grid

use std::collections::BTreeSet;

use panegrid_core::layout::{DisplayLayout, GridPos, Orientation, Size};
use proptest::prelude::*;

use super::{extent_strategy, grid_strategy, leaves, split_count};

// ============================================================================
// Construction Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A rows x cols grid has exactly one area per cell
    #[test]
    fn prop_build_covers_grid_exactly(
        (rows, cols) in grid_strategy(),
        width in extent_strategy(),
        height in extent_strategy(),
    ) {
        let layout = DisplayLayout::new(rows, cols, Size::new(width, height)).unwrap();

        let expected: BTreeSet<GridPos> = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| GridPos::new(row, col)))
            .collect();
        let positions = layout.positions();
        let unique: BTreeSet<GridPos> = positions.iter().copied().collect();

        prop_assert_eq!(positions.len(), (rows * cols) as usize);
        prop_assert_eq!(unique, expected);
    }

    /// The tree is full: n leaves need n - 1 splits
    #[test]
    fn prop_build_is_full_binary_tree((rows, cols) in grid_strategy()) {
        let layout = DisplayLayout::new(rows, cols, Size::new(600, 600)).unwrap();
        let leaf_count = leaves(layout.root()).len();
        prop_assert_eq!(split_count(layout.root()), leaf_count - 1);
    }

    /// Combined dimensions lose less than one pixel per row or column
    #[test]
    fn prop_build_dimensions_within_flooring(
        (rows, cols) in grid_strategy(),
        width in extent_strategy(),
        height in extent_strategy(),
    ) {
        let layout = DisplayLayout::new(rows, cols, Size::new(width, height)).unwrap();
        let dims = layout.dimensions();

        prop_assert!(dims.width <= width);
        prop_assert!(dims.height <= height);
        prop_assert!(width - dims.width < cols);
        prop_assert!(height - dims.height < rows);
        prop_assert!(layout.verify().is_ok());
    }

    /// Every constructed area has the same cell size
    #[test]
    fn prop_build_cells_are_uniform(
        (rows, cols) in grid_strategy(),
        width in extent_strategy(),
        height in extent_strategy(),
    ) {
        let layout = DisplayLayout::new(rows, cols, Size::new(width, height)).unwrap();
        let cell = Size::new(width / cols, height / rows);
        for leaf in leaves(layout.root()) {
            prop_assert_eq!(leaf.size(), cell);
        }
    }

    /// Multi-column grids divide side by side at the root
    #[test]
    fn prop_root_orientation_follows_columns((rows, cols) in grid_strategy()) {
        prop_assume!(rows * cols > 1);
        let layout = DisplayLayout::new(rows, cols, Size::new(600, 600)).unwrap();
        let root = layout.root().as_split().unwrap();
        let expected = if cols == 1 { Orientation::Vertical } else { Orientation::Horizontal };
        prop_assert_eq!(root.orientation(), expected);
    }

    /// The last area is the bottom-right cell
    #[test]
    fn prop_last_indices_is_bottom_right((rows, cols) in grid_strategy()) {
        let layout = DisplayLayout::new(rows, cols, Size::new(600, 600)).unwrap();
        prop_assert_eq!(layout.last_indices(), GridPos::new(rows - 1, cols - 1));
    }
}

// ============================================================================
// Fixed Layouts
// ============================================================================

#[test]
fn two_by_two_layout_shape() {
    let layout = DisplayLayout::new(2, 2, Size::new(200, 200)).unwrap();
    let root = layout.root().as_split().unwrap();
    assert_eq!(root.orientation(), Orientation::Horizontal);

    for (child, col) in [(root.first(), 0), (root.second(), 1)] {
        let column = child.as_split().unwrap();
        assert_eq!(column.orientation(), Orientation::Vertical);
        let top = column.first().as_leaf().unwrap();
        let bottom = column.second().as_leaf().unwrap();
        assert_eq!(top.pos(), GridPos::new(0, col));
        assert_eq!(bottom.pos(), GridPos::new(1, col));
        assert_eq!(top.size(), Size::new(100, 100));
        assert_eq!(bottom.size(), Size::new(100, 100));
    }
}

#[test]
fn one_by_three_layout_shape() {
    let layout = DisplayLayout::new(1, 3, Size::new(300, 100)).unwrap();
    let root = layout.root().as_split().unwrap();
    let first = root.first().as_leaf().unwrap();
    assert_eq!(first.pos(), GridPos::new(0, 0));
    assert_eq!(first.size(), Size::new(100, 100));

    let rest = root.second().as_split().unwrap();
    assert_eq!(rest.orientation(), Orientation::Horizontal);
    assert_eq!(rest.first().as_leaf().unwrap().pos(), GridPos::new(0, 1));
    assert_eq!(rest.second().as_leaf().unwrap().pos(), GridPos::new(0, 2));
}
