//! Layout size component types

use crate::plot::Channel;
use crate::split::Split;

/// Width or height of a single view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SizeType {
    Width,
    Height,
}

impl SizeType {
    pub const ALL: [SizeType; 2] = [SizeType::Width, SizeType::Height];

    /// The positional channel whose scale determines this size
    pub fn position_channel(self) -> Channel {
        match self {
            SizeType::Width => Channel::X,
            SizeType::Height => Channel::Y,
        }
    }

    pub fn from_position_channel(channel: Channel) -> Option<SizeType> {
        match channel.main_range_channel() {
            Channel::X => Some(SizeType::Width),
            Channel::Y => Some(SizeType::Height),
            _ => None,
        }
    }
}

impl From<SizeType> for LayoutSizeType {
    fn from(size_type: SizeType) -> Self {
        match size_type {
            SizeType::Width => LayoutSizeType::Width,
            SizeType::Height => LayoutSizeType::Height,
        }
    }
}

/// Key of a [`LayoutSizeIndex`] entry.
///
/// Concatenation containers size their cells (`ChildWidth`/`ChildHeight`),
/// which is not the size of the container itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayoutSizeType {
    Width,
    Height,
    ChildWidth,
    ChildHeight,
}

impl LayoutSizeType {
    /// The per-child size this entry is merged from
    pub fn size_type(self) -> SizeType {
        match self {
            LayoutSizeType::Width | LayoutSizeType::ChildWidth => SizeType::Width,
            LayoutSizeType::Height | LayoutSizeType::ChildHeight => SizeType::Height,
        }
    }

    /// Name fragment of the size signal
    pub fn signal_suffix(self) -> &'static str {
        match self {
            LayoutSizeType::Width => "width",
            LayoutSizeType::Height => "height",
            LayoutSizeType::ChildWidth => "child_width",
            LayoutSizeType::ChildHeight => "child_height",
        }
    }
}

impl std::fmt::Display for LayoutSizeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LayoutSizeType::Width => "width",
            LayoutSizeType::Height => "height",
            LayoutSizeType::ChildWidth => "childWidth",
            LayoutSizeType::ChildHeight => "childHeight",
        };
        write!(f, "{}", s)
    }
}

/// Resolved size of a view along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutSize {
    /// Fixed size in pixels
    Pixels(f64),
    /// Determined at render time from the category count and step
    Step,
    /// Superseded by the parent's shared size signal
    Merged,
}

/// Layout sizes of one view. An unresolved size is a `None` value.
pub type LayoutSizeIndex = Split<LayoutSizeType, LayoutSize>;
