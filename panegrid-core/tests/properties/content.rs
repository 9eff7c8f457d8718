//! Property-based tests for addressing areas and their content

use panegrid_core::layout::{DisplayLayout, GridPos, IconifyEvent, Size};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use super::{grid_strategy, leaves};

/// Strategy for plugin names shown in areas
fn plugin_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("ImageViewer"),
        Just("Colormap"),
        Just("Histogram"),
        Just("Statistics"),
    ]
}

/// Strategy for a grid together with one cell inside it
fn grid_with_cell() -> impl Strategy<Value = ((u32, u32), GridPos)> {
    grid_strategy().prop_flat_map(|(rows, cols)| {
        (Just((rows, cols)), (0..rows, 0..cols)).prop_map(|(grid, (row, col))| {
            (grid, GridPos::new(row, col))
        })
    })
}

/// Strategy for a grid together with two cells inside it
fn grid_with_two_cells() -> impl Strategy<Value = ((u32, u32), GridPos, GridPos)> {
    grid_strategy().prop_flat_map(|(rows, cols)| {
        (Just((rows, cols)), (0..rows, 0..cols), (0..rows, 0..cols)).prop_map(
            |(grid, (r1, c1), (r2, c2))| (grid, GridPos::new(r1, c1), GridPos::new(r2, c2)),
        )
    })
}

// ============================================================================
// Exclusion Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Excluding a valid cell marks exactly that area and notifies once
    #[test]
    fn prop_exclude_marks_single_area(((rows, cols), pos) in grid_with_cell()) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let mut layout = DisplayLayout::new(rows, cols, Size::new(600, 600)).unwrap();
        layout.set_iconify_listener(move |event: &IconifyEvent| {
            sink.borrow_mut().push(event.location);
        });

        prop_assert!(layout.exclude_area(pos));

        let excluded: Vec<GridPos> = leaves(layout.root())
            .into_iter()
            .filter(|leaf| leaf.is_excluded())
            .map(|leaf| leaf.pos())
            .collect();
        prop_assert_eq!(excluded, vec![pos]);
        prop_assert_eq!(events.borrow().clone(), vec![pos]);
    }

    /// Cells outside the grid are never excluded
    #[test]
    fn prop_exclude_outside_grid_fails(
        (rows, cols) in grid_strategy(),
        extra_row in 0u32..4,
        extra_col in 0u32..4,
    ) {
        let mut layout = DisplayLayout::new(rows, cols, Size::new(600, 600)).unwrap();
        prop_assert!(!layout.exclude_area(GridPos::new(rows + extra_row, extra_col)));
        prop_assert!(!layout.exclude_area(GridPos::new(extra_row, cols + extra_col)));
        prop_assert!(leaves(layout.root()).iter().all(|leaf| !leaf.is_excluded()));
    }

    /// Restoring succeeds once after an exclusion and never otherwise
    #[test]
    fn prop_restore_after_exclude(((rows, cols), pos) in grid_with_cell()) {
        let mut layout = DisplayLayout::new(rows, cols, Size::new(600, 600)).unwrap();
        prop_assert!(!layout.restore_window(pos));
        layout.exclude_area(pos);
        prop_assert!(layout.restore_window(pos));
        prop_assert!(!layout.restore_window(pos));
    }
}

// ============================================================================
// View and Link Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Linking copies the source's effective window id to the destination
    #[test]
    fn prop_link_copies_window_id(
        ((rows, cols), source, dest) in grid_with_two_cells(),
        plugin in plugin_strategy(),
    ) {
        let mut layout = DisplayLayout::new(rows, cols, Size::new(600, 600)).unwrap();
        prop_assert!(layout.set_view(plugin, 0, source));
        let source_id = layout.get_win_id(source);
        prop_assert!(source_id.is_some());

        prop_assert!(layout.link(source, dest));
        prop_assert_eq!(layout.get_win_id(dest), source_id);
    }

    /// Linking from an area without a window changes nothing
    #[test]
    fn prop_link_from_empty_area_is_noop(((rows, cols), source, dest) in grid_with_two_cells()) {
        let mut layout = DisplayLayout::new(rows, cols, Size::new(600, 600)).unwrap();
        let before = layout.get_win_id(dest);
        prop_assert!(!layout.link(source, dest));
        prop_assert_eq!(layout.get_win_id(dest), before);
    }

    /// Windows are reported once per area that shows one, in traversal order
    #[test]
    fn prop_get_windows_follows_traversal(
        (rows, cols) in grid_strategy(),
        plugin in plugin_strategy(),
    ) {
        let mut layout = DisplayLayout::new(rows, cols, Size::new(600, 600)).unwrap();
        let positions = layout.positions();
        for (index, pos) in positions.iter().enumerate() {
            if index % 2 == 0 {
                layout.set_view(plugin, i32::try_from(index).unwrap(), *pos);
            }
        }

        let indices: Vec<i32> = layout.get_windows().iter().map(|w| w.index()).collect();
        let expected: Vec<i32> = (0..positions.len())
            .filter(|index| index % 2 == 0)
            .map(|index| i32::try_from(index).unwrap())
            .collect();
        prop_assert_eq!(indices, expected);

        layout.remove_windows();
        prop_assert!(layout.get_windows().is_empty());
    }
}
