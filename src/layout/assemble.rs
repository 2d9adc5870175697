//! Layout size signal assembly
//!
//! Turns resolved layout sizes into signal declarations. Names are looked up
//! through the tree's rename table, so merged children never emit signals of
//! their own and every reference lands on the shared parent signal.

use serde::Serialize;

use crate::naming::var_name;
use crate::plot::{Channel, Config, ScaleComponent, SizeSpec};
use crate::view::{ViewId, ViewTree};

use super::{LayoutSize, LayoutSizeType};

/// A signal declaration: a constant `value` or an `update` expression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalDecl {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update: Option<String>,
}

impl SignalDecl {
    pub fn value(name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            update: None,
        }
    }

    pub fn update(name: impl Into<String>, update: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            update: Some(update.into()),
        }
    }
}

/// Size signals of every view, parents before children
pub fn assemble_tree_layout_signals(tree: &ViewTree, config: &Config) -> Vec<SignalDecl> {
    let mut signals = Vec::new();
    let mut stack: Vec<ViewId> = tree.root().into_iter().collect();
    while let Some(id) = stack.pop() {
        signals.extend(assemble_layout_signals(tree, id, config));
        stack.extend(tree[id].children().iter().rev());
    }
    signals
}

/// Size signals of one view
pub fn assemble_layout_signals(tree: &ViewTree, id: ViewId, config: &Config) -> Vec<SignalDecl> {
    tree[id]
        .component
        .layout_size
        .iter()
        .flat_map(|(layout_size_type, entry)| {
            size_signals(tree, id, layout_size_type, entry.value, config)
        })
        .collect()
}

fn size_signals(
    tree: &ViewTree,
    id: ViewId,
    layout_size_type: LayoutSizeType,
    size: Option<LayoutSize>,
    config: &Config,
) -> Vec<SignalDecl> {
    let name = tree.size_signal_name(id, layout_size_type);
    match size {
        None | Some(LayoutSize::Merged) => Vec::new(),
        Some(LayoutSize::Pixels(px)) => vec![SignalDecl::value(name, px)],
        Some(LayoutSize::Step) => {
            let channel = layout_size_type.size_type().position_channel();
            let Some(scale) = find_scale(tree, id, channel) else {
                tracing::debug!(
                    "No {} scale for step-sized {} of view '{}'",
                    channel,
                    layout_size_type,
                    tree[id].name
                );
                return Vec::new();
            };
            let step = scale
                .range_step()
                .or_else(|| authored_step(tree, id, layout_size_type))
                .unwrap_or(config.view.step);
            let step_name = var_name(&format!("{}_step", scale.name));
            let update = format!(
                "bandspace(domain('{}').length, {}, {}) * {}",
                scale.name,
                scale.bandspace_padding_inner(),
                scale.bandspace_padding_outer(),
                step_name
            );
            vec![
                SignalDecl::value(step_name, step),
                SignalDecl::update(name, update),
            ]
        }
    }
}

/// The view's own scale, else the first one found among its descendants
fn find_scale(tree: &ViewTree, id: ViewId, channel: Channel) -> Option<&ScaleComponent> {
    let node = &tree[id];
    node.scale_component(channel).or_else(|| {
        node.children()
            .iter()
            .find_map(|&child| find_scale(tree, child, channel))
    })
}

fn authored_step(tree: &ViewTree, id: ViewId, layout_size_type: LayoutSizeType) -> Option<f64> {
    let unit = tree[id].unit_view()?;
    let authored = match layout_size_type {
        LayoutSizeType::Width => unit.width,
        LayoutSizeType::Height => unit.height,
        _ => None,
    };
    match authored {
        Some(SizeSpec::Step(step)) => Some(step.step),
        _ => None,
    }
}
