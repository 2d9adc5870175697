//! Layout size resolution
//!
//! Sizes are resolved in post-order: every child has a complete
//! [`LayoutSizeIndex`](super::LayoutSizeIndex) before its parent merges them.
//!
//! - Unit views take the authored width/height, or a default derived from
//!   the x/y scale and the view configuration.
//! - Layer views merge their children's width/height into their own.
//! - Concat, repeat and facet views merge their children's width/height into
//!   `childWidth`/`childHeight`: the size of one cell, not of the container.
//!
//! A successful merge aliases every child's size signal to the parent's and
//! marks the child entries as merged. Independent x/y scales only merge when
//! all children agree on a concrete size, since step-sized children with
//! independent scales can grow differently at render time.

use crate::plot::{Config, SizeSpec};
use crate::split::{merge, Explicit};
use crate::view::{ResolveMode, ViewId, ViewKind, ViewNode, ViewTree};
use crate::{message, Result, VlError};

use super::{LayoutSize, LayoutSizeType, SizeType};

/// Resolve layout sizes for the whole tree
pub fn parse_tree_layout_size(tree: &mut ViewTree, config: &Config) -> Result<()> {
    let root = tree
        .root()
        .ok_or_else(|| VlError::TreeError("View tree has no root".to_string()))?;
    parse_layout_size(tree, root, config);
    Ok(())
}

/// Resolve layout sizes for the subtree rooted at `id`
pub fn parse_layout_size(tree: &mut ViewTree, id: ViewId, config: &Config) {
    match tree[id].kind {
        ViewKind::Unit(_) => parse_unit_layout_size(tree, id, config),
        ViewKind::Layer => parse_layer_layout_size(tree, id, config),
        ViewKind::Concat | ViewKind::Repeat | ViewKind::Facet => {
            parse_concat_layout_size(tree, id, config)
        }
    }
}

pub fn parse_layer_layout_size(tree: &mut ViewTree, id: ViewId, config: &Config) {
    parse_children_layout_size(tree, id, config);

    parse_non_unit_layout_size_for_channel(tree, id, LayoutSizeType::Width);
    parse_non_unit_layout_size_for_channel(tree, id, LayoutSizeType::Height);
}

pub fn parse_concat_layout_size(tree: &mut ViewTree, id: ViewId, config: &Config) {
    parse_children_layout_size(tree, id, config);

    parse_non_unit_layout_size_for_channel(tree, id, LayoutSizeType::ChildWidth);
    parse_non_unit_layout_size_for_channel(tree, id, LayoutSizeType::ChildHeight);
}

pub fn parse_children_layout_size(tree: &mut ViewTree, id: ViewId, config: &Config) {
    let children = tree[id].children().to_vec();
    for child in children {
        parse_layout_size(tree, child, config);
    }
}

/// Merge the children's width or height into the parent's `layout_size_type`
fn parse_non_unit_layout_size_for_channel(
    tree: &mut ViewTree,
    id: ViewId,
    layout_size_type: LayoutSizeType,
) {
    let size_type = layout_size_type.size_type();
    let child_key = LayoutSizeType::from(size_type);
    let channel = size_type.position_channel();
    let independent = tree[id].scale_resolve(channel) == ResolveMode::Independent;
    let children = tree[id].children().to_vec();

    let mut merged_size: Option<Explicit<Option<LayoutSize>>> = None;
    let mut aborted = false;
    for &child in &children {
        let child_size = tree[child].component.layout_size.get_with_explicit(child_key);

        if independent && child_size.value == Some(LayoutSize::Step) {
            aborted = true;
            break;
        }

        merged_size = Some(match merged_size {
            Some(current) => {
                if independent && current.value != child_size.value {
                    aborted = true;
                    break;
                }
                merge(current, child_size, &child_key.to_string(), "")
            }
            None => child_size,
        });
    }

    match merged_size {
        Some(merged) if !aborted => {
            let shared_name = tree[id].get_name(layout_size_type.signal_suffix());
            for &child in &children {
                let child_name = tree[child].get_name(child_key.signal_suffix());
                tree.rename_signal(&child_name, &shared_name);
                tree[child]
                    .component
                    .layout_size
                    .set(child_key, LayoutSize::Merged, false);
            }
            tree[id]
                .component
                .layout_size
                .set_with_explicit(layout_size_type, merged);
        }
        _ => {
            if aborted {
                tracing::debug!(
                    "{}",
                    message::independent_size_not_merged(
                        &layout_size_type.to_string(),
                        &tree[id].name
                    )
                );
            }
            tree[id]
                .component
                .layout_size
                .set_with_explicit(layout_size_type, Explicit::implicit(None));
        }
    }
}

pub fn parse_unit_layout_size(tree: &mut ViewTree, id: ViewId, config: &Config) {
    let node = &tree[id];
    let Some(unit) = node.unit_view() else {
        return;
    };

    let entries: Vec<(SizeType, Explicit<LayoutSize>)> = SizeType::ALL
        .iter()
        .map(|&size_type| {
            let authored = match size_type {
                SizeType::Width => unit.width,
                SizeType::Height => unit.height,
            };
            let entry = match authored {
                Some(SizeSpec::Step(_)) => Explicit::explicit(LayoutSize::Step),
                Some(SizeSpec::Pixels(px)) => Explicit::explicit(LayoutSize::Pixels(px)),
                None => Explicit::implicit(default_unit_size(
                    node,
                    unit.has_projection,
                    size_type,
                    config,
                )),
            };
            (size_type, entry)
        })
        .collect();

    let layout_size = &mut tree[id].component.layout_size;
    for (size_type, entry) in entries {
        layout_size.set(size_type.into(), entry.value, entry.explicit);
    }
}

fn default_unit_size(
    node: &ViewNode,
    has_projection: bool,
    size_type: SizeType,
    config: &Config,
) -> LayoutSize {
    let view = &config.view;
    match node.scale_component(size_type.position_channel()) {
        Some(scale) if scale.scale_type.has_discrete_domain() => {
            let discrete = view.discrete_size(size_type);
            if scale.range.as_ref().is_some_and(|r| r.is_step()) || discrete.is_step() {
                LayoutSize::Step
            } else {
                LayoutSize::Pixels(discrete.unwrap_step())
            }
        }
        Some(_) => LayoutSize::Pixels(view.continuous_size(size_type)),
        None if has_projection => LayoutSize::Pixels(view.continuous_size(size_type)),
        None => LayoutSize::Pixels(view.discrete_size(size_type).unwrap_step()),
    }
}
