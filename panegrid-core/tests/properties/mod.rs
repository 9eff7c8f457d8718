//! Property test modules

mod construction;
mod content;
mod resizing;
mod splitting;

use panegrid_core::layout::{AreaNode, LeafArea};
use proptest::prelude::*;

/// Strategy for grid shapes up to 6x6
pub fn grid_strategy() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=6, 1u32..=6)
}

/// Strategy for pixel extents
pub fn extent_strategy() -> impl Strategy<Value = u32> {
    0u32..=2400
}

/// Collects every leaf in traversal order
pub fn leaves(node: &AreaNode) -> Vec<&LeafArea> {
    let mut out = Vec::new();
    collect_leaves(node, &mut out);
    out
}

fn collect_leaves<'a>(node: &'a AreaNode, out: &mut Vec<&'a LeafArea>) {
    match node {
        AreaNode::Leaf(leaf) => out.push(leaf),
        AreaNode::Split(split) => {
            collect_leaves(split.first(), out);
            collect_leaves(split.second(), out);
        }
    }
}

/// Counts split nodes
pub fn split_count(node: &AreaNode) -> usize {
    match node {
        AreaNode::Leaf(_) => 0,
        AreaNode::Split(split) => 1 + split_count(split.first()) + split_count(split.second()),
    }
}
