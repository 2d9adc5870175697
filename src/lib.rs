/*!
# vlcore - layout sizing and mark value references

Compile-time core of a declarative chart compiler. It resolves two concerns:

- **Layout sizes**: every view in a composition tree gets a width/height (or
  child width/height inside concatenation containers), merged bottom-up with
  explicit-over-implicit precedence and scale-resolution aware policies.
- **Value references**: every positional channel of a mark is turned into a
  reference a Vega renderer can evaluate: a scale-qualified field, a literal,
  a signal expression, or a guarded conditional list.

## Example

```
use vlcore::layout::{assemble_tree_layout_signals, parse_tree_layout_size};
use vlcore::view::{UnitView, ViewKind, ViewNode, ViewTree};
use vlcore::Config;

# fn main() -> vlcore::Result<()> {
let config = Config::default();
let mut tree = ViewTree::new();
let root = tree.add_root(ViewNode::new("concat_0", ViewKind::Concat))?;
tree.add_child(root, ViewNode::unit("child_a", UnitView::default()))?;
parse_tree_layout_size(&mut tree, &config)?;

// The child's size is merged into the container's cell size.
let signals = assemble_tree_layout_signals(&tree, &config);
assert_eq!(signals.len(), 2);
assert_eq!(signals[0].name, "concat_0_child_width");
# Ok(())
# }
```
*/

pub mod encode;
pub mod layout;
pub mod message;
pub mod naming;
pub mod plot;
pub mod split;
pub mod view;

pub use encode::{ChannelValueRef, VgValueRef};
pub use layout::{LayoutSize, LayoutSizeIndex, LayoutSizeType};
pub use plot::{ChannelDef, Config};
pub use split::{Explicit, Split};
pub use view::{ViewId, ViewKind, ViewNode, ViewTree};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main library error type
#[derive(thiserror::Error, Debug)]
pub enum VlError {
    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("View tree error: {0}")]
    TreeError(String),
}

pub type Result<T> = std::result::Result<T, VlError>;
