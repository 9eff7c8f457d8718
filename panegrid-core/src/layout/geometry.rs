//! Absolute screen geometry of areas and dividers

use super::types::{Orientation, Size};

/// An absolute pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offsets the point along the split axis of `orientation`.
    #[must_use]
    pub fn offset_along(self, orientation: Orientation, distance: u32) -> Self {
        let distance = to_coord(distance);
        match orientation {
            Orientation::Horizontal => Self::new(self.x.saturating_add(distance), self.y),
            Orientation::Vertical => Self::new(self.x, self.y.saturating_add(distance)),
        }
    }
}

/// Absolute edges of a rectangle on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Edges {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Right edge (exclusive).
    pub right: i32,
    /// Bottom edge (exclusive).
    pub bottom: i32,
}

impl Edges {
    /// Edges of a rectangle of `size` whose top-left corner is `origin`.
    #[must_use]
    pub fn from_origin(origin: Point, size: Size) -> Self {
        Self {
            left: origin.x,
            top: origin.y,
            right: origin.x.saturating_add(to_coord(size.width)),
            bottom: origin.y.saturating_add(to_coord(size.height)),
        }
    }

    /// Width of the rectangle; negative if the edges are inverted.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    /// Height of the rectangle; negative if the edges are inverted.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Floored midpoint of the rectangle.
    ///
    /// Returns `None` while the rectangle has no positive area, i.e. it
    /// has not been laid out yet.
    #[must_use]
    pub const fn midpoint(&self) -> Option<Point> {
        let width = self.width();
        let height = self.height();
        if width > 0 && height > 0 {
            Some(Point::new(
                self.left.saturating_add(width / 2),
                self.top.saturating_add(height / 2),
            ))
        } else {
            None
        }
    }
}

/// Edges of the divider between two children.
///
/// `origin` is the top-left corner of the split region, `size` its extent
/// and `first_extent` the first child's extent along the split axis. The
/// divider is `thickness` pixels wide and centered on the boundary.
/// Coordinates past the `i32` range are clamped to it.
#[must_use]
pub fn divider_edges(
    orientation: Orientation,
    origin: Point,
    size: Size,
    first_extent: u32,
    thickness: u32,
) -> Edges {
    let half = to_coord(thickness / 2);
    let thickness = to_coord(thickness);
    let boundary = origin.offset_along(orientation, first_extent);
    match orientation {
        Orientation::Horizontal => {
            let left = boundary.x.saturating_sub(half);
            Edges {
                left,
                top: origin.y,
                right: left.saturating_add(thickness),
                bottom: origin.y.saturating_add(to_coord(size.height)),
            }
        }
        Orientation::Vertical => {
            let top = boundary.y.saturating_sub(half);
            Edges {
                left: origin.x,
                top,
                right: origin.x.saturating_add(to_coord(size.width)),
                bottom: top.saturating_add(thickness),
            }
        }
    }
}

fn to_coord(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
