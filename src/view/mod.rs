//! View composition tree
//!
//! Views form a tree: unit views are leaves, and layer, concat, facet and
//! repeat views compose their children. The tree is an arena of nodes
//! addressed by [`ViewId`]; each node owns the ids of its children, the id of
//! its parent, and a mutable component table that compile passes fill in.
//!
//! The tree also owns the signal rename table shared by all views, so a
//! child's size signal can be aliased to its parent's without touching the
//! child.
//!
//! # Example
//!
//! ```
//! use vlcore::view::{UnitView, ViewKind, ViewNode, ViewTree};
//!
//! # fn main() -> vlcore::Result<()> {
//! let mut tree = ViewTree::new();
//! let root = tree.add_root(ViewNode::new("concat_0", ViewKind::Concat))?;
//! let a = tree.add_child(root, ViewNode::unit("concat_0_child_0", UnitView::default()))?;
//! assert_eq!(tree.parent(a), Some(root));
//! # Ok(())
//! # }
//! ```

mod resolve;

pub use resolve::{default_scale_resolve, ResolveComponent, ResolveMode};

use std::collections::BTreeMap;

use crate::layout::{LayoutSizeIndex, LayoutSizeType};
use crate::naming::{var_name, NameMap};
use crate::plot::{Channel, ScaleComponent, SizeSpec};
use crate::{Result, VlError};

/// Index of a node in a [`ViewTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(usize);

impl ViewId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Authored properties of a leaf view
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnitView {
    pub width: Option<SizeSpec>,
    pub height: Option<SizeSpec>,
    /// Whether the view draws through a geographic projection
    pub has_projection: bool,
}

impl UnitView {
    pub fn with_width(mut self, width: SizeSpec) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: SizeSpec) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_projection(mut self) -> Self {
        self.has_projection = true;
        self
    }
}

/// Kind of view
#[derive(Debug, Clone, PartialEq)]
pub enum ViewKind {
    Unit(UnitView),
    Layer,
    Concat,
    Facet,
    Repeat,
}

impl ViewKind {
    pub fn is_unit(&self) -> bool {
        matches!(self, ViewKind::Unit(_))
    }
}

/// Per-view tables filled in by compile passes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewComponent {
    pub layout_size: LayoutSizeIndex,
    pub resolve: ResolveComponent,
}

/// A view in the composition tree
#[derive(Debug, Clone, PartialEq)]
pub struct ViewNode {
    pub name: String,
    pub kind: ViewKind,
    pub component: ViewComponent,
    /// Scales owned by this view, keyed by channel
    pub scales: BTreeMap<Channel, ScaleComponent>,
    parent: Option<ViewId>,
    children: Vec<ViewId>,
}

impl ViewNode {
    pub fn new(name: impl Into<String>, kind: ViewKind) -> Self {
        Self {
            name: name.into(),
            kind,
            component: ViewComponent::default(),
            scales: BTreeMap::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn unit(name: impl Into<String>, unit: UnitView) -> Self {
        Self::new(name, ViewKind::Unit(unit))
    }

    pub fn with_scale(mut self, channel: Channel, scale: ScaleComponent) -> Self {
        self.scales.insert(channel, scale);
        self
    }

    pub fn with_scale_resolve(mut self, channel: Channel, mode: ResolveMode) -> Self {
        self.component.resolve.set_scale(channel, mode);
        self
    }

    /// Prefix `text` with this view's name, e.g. `concat_0_child_width`.
    /// The root view commonly has an empty name, giving plain `width`.
    pub fn get_name(&self, text: &str) -> String {
        if self.name.is_empty() {
            var_name(text)
        } else {
            var_name(&format!("{}_{}", self.name, text))
        }
    }

    pub fn scale_component(&self, channel: Channel) -> Option<&ScaleComponent> {
        self.scales.get(&channel)
    }

    pub fn scale_resolve(&self, channel: Channel) -> ResolveMode {
        self.component.resolve.scale_mode(&self.kind, channel)
    }

    pub fn unit_view(&self) -> Option<&UnitView> {
        match &self.kind {
            ViewKind::Unit(unit) => Some(unit),
            _ => None,
        }
    }

    pub fn parent(&self) -> Option<ViewId> {
        self.parent
    }

    pub fn children(&self) -> &[ViewId] {
        &self.children
    }
}

/// Arena of views plus the shared signal rename table
#[derive(Debug, Clone, Default)]
pub struct ViewTree {
    nodes: Vec<ViewNode>,
    root: Option<ViewId>,
    signal_names: NameMap,
}

impl ViewTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_root(&mut self, node: ViewNode) -> Result<ViewId> {
        if let Some(root) = self.root {
            return Err(VlError::TreeError(format!(
                "View tree already has a root ({} '{}')",
                root, self.nodes[root.0].name
            )));
        }
        let id = self.push(node, None);
        self.root = Some(id);
        Ok(id)
    }

    /// Append `node` as the last child of `parent`
    pub fn add_child(&mut self, parent: ViewId, node: ViewNode) -> Result<ViewId> {
        let parent_node = self.get(parent).ok_or_else(|| {
            VlError::TreeError(format!("Unknown parent view {}", parent))
        })?;
        if parent_node.kind.is_unit() {
            return Err(VlError::TreeError(format!(
                "Unit view '{}' cannot have children",
                parent_node.name
            )));
        }
        let id = self.push(node, Some(parent));
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    fn push(&mut self, mut node: ViewNode, parent: Option<ViewId>) -> ViewId {
        let id = ViewId(self.nodes.len());
        node.parent = parent;
        node.children.clear();
        self.nodes.push(node);
        id
    }

    pub fn root(&self) -> Option<ViewId> {
        self.root
    }

    pub fn get(&self, id: ViewId) -> Option<&ViewNode> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut ViewNode> {
        self.nodes.get_mut(id.0)
    }

    pub fn parent(&self, id: ViewId) -> Option<ViewId> {
        self.get(id).and_then(ViewNode::parent)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Alias signal `old_name` to `new_name`
    pub fn rename_signal(&mut self, old_name: &str, new_name: &str) {
        self.signal_names.rename(old_name, new_name);
    }

    /// Resolve a signal name through all renames
    pub fn signal_name(&self, name: &str) -> String {
        self.signal_names.get(name)
    }

    pub fn signal_names(&self) -> &NameMap {
        &self.signal_names
    }

    /// Resolved name of a view's layout size signal
    pub fn size_signal_name(&self, id: ViewId, size_type: LayoutSizeType) -> String {
        self.signal_name(&self[id].get_name(size_type.signal_suffix()))
    }
}

impl std::ops::Index<ViewId> for ViewTree {
    type Output = ViewNode;

    fn index(&self, id: ViewId) -> &ViewNode {
        &self.nodes[id.0]
    }
}

impl std::ops::IndexMut<ViewId> for ViewTree {
    fn index_mut(&mut self, id: ViewId) -> &mut ViewNode {
        &mut self.nodes[id.0]
    }
}
