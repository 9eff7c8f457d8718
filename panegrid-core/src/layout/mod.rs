//! Grid display layout
//!
//! A display is divided into rectangular areas addressed by `(row, col)`.
//! The areas form a full binary tree: every [`SplitNode`] divides its
//! region between two children along one axis, and every [`LeafArea`]
//! holds at most one plugin [`Window`].
//!
//! # Architecture
//!
//! - **Owned tree**: parents own their children; [`AreaNode`] is the closed
//!   union of leaves and splits
//! - **Coordinate addressing**: operations search first child then second
//!   and stop at the first match
//! - **Extent invariant**: split nodes keep their stored size equal to the
//!   combination of their children through resize and split
//! - **Iconify events**: excluding an area yields an [`IconifyEvent`] that
//!   [`DisplayLayout`] hands to its [`IconifyListener`]
//!
//! # Module Structure
//!
//! - `types` - Coordinates and extents (`GridPos`, `Size`, `Orientation`, `WindowId`)
//! - `window` - Plugin window content (`Window`, `DrawInfo`, `LinkInfo`)
//! - `leaf` / `split` / `node` - The tree (`LeafArea`, `SplitNode`, `AreaNode`)
//! - `model` - The root owner (`DisplayLayout`)
//! - `geometry` - Screen edges of areas and dividers
//! - `error` - Error types (`LayoutError`)

mod error;
mod event;
mod geometry;
mod leaf;
mod model;
mod node;
mod split;
mod types;
mod window;

pub use error::LayoutError;
pub use event::{IconifyEvent, IconifyListener};
pub use geometry::{Edges, Point, divider_edges};
pub use leaf::LeafArea;
pub use model::{DEFAULT_SPLITTER_SIZE, DisplayLayout};
pub use node::AreaNode;
pub use split::{LEAF_FLEX, SplitNode};
pub use types::{Axis, GridPos, Orientation, Size, WindowId};
pub use window::{BLANK_VIEW_INDEX, DrawInfo, LinkInfo, Window};
