//! Core type definitions for the display layout
//!
//! This module contains the identifier and extent types shared by every
//! node of the split tree.

use std::fmt;
use uuid::Uuid;

/// Divider direction of a split node.
///
/// `Horizontal` places the two children side by side, so the divider
/// is a vertical bar and space divides along the width axis.
/// `Vertical` stacks the children one above the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Children side by side (split along the width axis).
    Horizontal,
    /// Children stacked (split along the height axis).
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Grid coordinate of a leaf area.
///
/// Positions are unique within a layout and are the only way callers
/// address an individual area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPos {
    /// Row index, counted from the top.
    pub row: u32,
    /// Column index, counted from the left.
    pub col: u32,
}

impl GridPos {
    /// Creates a grid position.
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// The position one row further down.
    #[must_use]
    pub const fn below(self) -> Self {
        Self::new(self.row + 1, self.col)
    }

    /// The position one column further right.
    #[must_use]
    pub const fn right(self) -> Self {
        Self::new(self.row, self.col + 1)
    }

    /// Returns the coordinate that runs along the split axis of `orientation`.
    #[must_use]
    pub const fn along(self, orientation: Orientation) -> u32 {
        match orientation {
            Orientation::Horizontal => self.col,
            Orientation::Vertical => self.row,
        }
    }

    /// Advances the coordinate along the split axis of `orientation` by one.
    #[must_use]
    pub const fn next_along(self, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => self.right(),
            Orientation::Vertical => self.below(),
        }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Pixel extents of an area or of a combined region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Creates a size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Extent along the split axis of `orientation`.
    #[must_use]
    pub const fn along(self, orientation: Orientation) -> u32 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// Extent along the cross axis of `orientation`.
    #[must_use]
    pub const fn across(self, orientation: Orientation) -> u32 {
        match orientation {
            Orientation::Horizontal => self.height,
            Orientation::Vertical => self.width,
        }
    }

    /// Builds a size from extents expressed relative to `orientation`.
    #[must_use]
    pub const fn oriented(orientation: Orientation, along: u32, across: u32) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(along, across),
            Orientation::Vertical => Self::new(across, along),
        }
    }

    /// Combines two child extents the way a split node of `orientation` does:
    /// the split axis sums, the cross axis takes the first child's value.
    #[must_use]
    pub const fn combine(orientation: Orientation, first: Self, second: Self) -> Self {
        Self::oriented(
            orientation,
            first.along(orientation) + second.along(orientation),
            first.across(orientation),
        )
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Axis of a single-dimension resize request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The width axis.
    Width,
    /// The height axis.
    Height,
}

impl Axis {
    /// Returns true if this axis is the one `orientation` divides.
    #[must_use]
    pub const fn is_split_axis_of(self, orientation: Orientation) -> bool {
        matches!(
            (self, orientation),
            (Self::Width, Orientation::Horizontal) | (Self::Height, Orientation::Vertical)
        )
    }
}

/// Identity of a window shown in a leaf area.
///
/// Window ids are opaque strings; windows created by the layout itself
/// receive a random UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub String);

impl WindowId {
    /// Creates a new random window ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for WindowId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Window({})", self.0)
    }
}
