//! Error types for layout operations

use super::types::{GridPos, Size};

/// Errors that can occur while building or reshaping a layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The grid has zero rows or zero columns.
    #[error("invalid grid: {rows} rows x {cols} columns (both must be at least 1)")]
    InvalidGrid {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
    },

    /// A split node was requested for a single cell.
    #[error("a 1x1 grid is a single area, not a split")]
    SingleCell,

    /// No leaf area exists at the given position.
    #[error("no area at {0}")]
    AreaNotFound(GridPos),

    /// The extent invariant does not hold at the given node.
    #[error("inconsistent extents below {first}: stored {stored}, children combine to {combined}")]
    InconsistentExtents {
        /// First leaf position of the offending node.
        first: GridPos,
        /// Size stored on the node.
        stored: Size,
        /// Size obtained by combining the children.
        combined: Size,
    },
}
