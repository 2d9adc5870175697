//! Warning message text
//!
//! Compile decisions in this crate never fail; recoverable problems are
//! reported through `tracing` with the messages built here.

use std::fmt::Debug;

use crate::plot::Channel;

/// Two authored values disagree during a merge.
pub fn merge_conflicting_property<T: Debug + ?Sized>(
    property: &str,
    property_of: &str,
    v1: &T,
    v2: &T,
) -> String {
    let owner = if property_of.is_empty() {
        String::new()
    } else {
        format!(" of {}", property_of)
    };
    format!(
        "Conflicting {}{} ({:?} and {:?}). Using the first value ({:?}).",
        property, owner, v1, v2, v1
    )
}

/// A pre-binned field needs its companion end channel.
pub fn channel_required_for_binned(channel: Channel) -> String {
    format!("Channel {} is required for \"binned\" bin.", channel)
}

/// An independent-scale merge was abandoned.
pub fn independent_size_not_merged(layout_size_type: &str, view: &str) -> String {
    format!(
        "Cannot merge {} of '{}' across children with independent scales; leaving it unresolved.",
        layout_size_type, view
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_conflict_message() {
        assert_eq!(
            merge_conflicting_property("width", "", &100, &200),
            "Conflicting width (100 and 200). Using the first value (100)."
        );
        assert_eq!(
            merge_conflicting_property("title", "axis", "a", "b"),
            "Conflicting title of axis (\"a\" and \"b\"). Using the first value (\"a\")."
        );
    }

    #[test]
    fn test_binned_message_names_channel() {
        assert_eq!(
            channel_required_for_binned(Channel::X2),
            "Channel x2 is required for \"binned\" bin."
        );
    }
}
