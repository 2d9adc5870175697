//! Layout sizing of views
//!
//! - `component` - Size keys, size values and the per-view size index
//! - `parse` - Post-order resolution and merging of sizes across the tree
//! - `assemble` - Size signal declarations from resolved sizes

mod assemble;
mod component;
mod parse;

pub use assemble::{assemble_layout_signals, assemble_tree_layout_signals, SignalDecl};
pub use component::{LayoutSize, LayoutSizeIndex, LayoutSizeType, SizeType};
pub use parse::{
    parse_children_layout_size, parse_concat_layout_size, parse_layer_layout_size,
    parse_layout_size, parse_tree_layout_size, parse_unit_layout_size,
};
