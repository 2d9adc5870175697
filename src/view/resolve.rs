//! Scale resolution between sibling views
//!
//! A composite view either shares one scale per channel across its children
//! or lets every child keep an independent scale. Sharing decides whether
//! children can share one size signal.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ViewKind;
use crate::plot::Channel;

/// Resolution mode of a channel's scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolveMode {
    Shared,
    Independent,
}

/// Authored scale resolution of one view
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResolveComponent {
    #[serde(default)]
    pub scale: BTreeMap<Channel, ResolveMode>,
}

impl ResolveComponent {
    pub fn set_scale(&mut self, channel: Channel, mode: ResolveMode) {
        self.scale.insert(channel, mode);
    }

    /// Authored mode, else the default for the view kind
    pub fn scale_mode(&self, kind: &ViewKind, channel: Channel) -> ResolveMode {
        self.scale
            .get(&channel)
            .copied()
            .unwrap_or_else(|| default_scale_resolve(kind, channel))
    }
}

/// Layered and faceted views share scales. Concatenated (and repeated)
/// views keep independent x/y scales since each child has its own extent.
pub fn default_scale_resolve(kind: &ViewKind, channel: Channel) -> ResolveMode {
    match kind {
        ViewKind::Concat | ViewKind::Repeat if channel.is_xy() => ResolveMode::Independent,
        _ => ResolveMode::Shared,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale_resolve() {
        assert_eq!(
            default_scale_resolve(&ViewKind::Concat, Channel::X),
            ResolveMode::Independent
        );
        assert_eq!(
            default_scale_resolve(&ViewKind::Repeat, Channel::Y),
            ResolveMode::Independent
        );
        assert_eq!(
            default_scale_resolve(&ViewKind::Concat, Channel::Color),
            ResolveMode::Shared
        );
        assert_eq!(
            default_scale_resolve(&ViewKind::Layer, Channel::X),
            ResolveMode::Shared
        );
        assert_eq!(
            default_scale_resolve(&ViewKind::Facet, Channel::Y),
            ResolveMode::Shared
        );
    }

    #[test]
    fn test_authored_mode_wins() {
        let mut resolve = ResolveComponent::default();
        resolve.set_scale(Channel::X, ResolveMode::Shared);
        assert_eq!(
            resolve.scale_mode(&ViewKind::Concat, Channel::X),
            ResolveMode::Shared
        );
        assert_eq!(
            resolve.scale_mode(&ViewKind::Concat, Channel::Y),
            ResolveMode::Independent
        );
    }
}
