//! Encoding channels

use serde::{Deserialize, Serialize};

/// Encoding channel of a mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    X,
    Y,
    X2,
    Y2,
    Theta,
    Theta2,
    Radius,
    Radius2,
    Color,
    Fill,
    Stroke,
    Opacity,
    Size,
    Shape,
    Text,
    Tooltip,
    Detail,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Channel::X => "x",
            Channel::Y => "y",
            Channel::X2 => "x2",
            Channel::Y2 => "y2",
            Channel::Theta => "theta",
            Channel::Theta2 => "theta2",
            Channel::Radius => "radius",
            Channel::Radius2 => "radius2",
            Channel::Color => "color",
            Channel::Fill => "fill",
            Channel::Stroke => "stroke",
            Channel::Opacity => "opacity",
            Channel::Size => "size",
            Channel::Shape => "shape",
            Channel::Text => "text",
            Channel::Tooltip => "tooltip",
            Channel::Detail => "detail",
        };
        write!(f, "{}", s)
    }
}

impl Channel {
    /// Positional channels that own a scale
    pub const POSITION_SCALE_CHANNELS: [Channel; 2] = [Channel::X, Channel::Y];

    /// The primary channel for a secondary range channel (x2 -> x)
    pub fn main_range_channel(self) -> Channel {
        match self {
            Channel::X2 => Channel::X,
            Channel::Y2 => Channel::Y,
            Channel::Theta2 => Channel::Theta,
            Channel::Radius2 => Channel::Radius,
            other => other,
        }
    }

    /// The secondary range channel for a primary positional channel (x -> x2)
    pub fn secondary_range_channel(self) -> Option<Channel> {
        match self {
            Channel::X => Some(Channel::X2),
            Channel::Y => Some(Channel::Y2),
            Channel::Theta => Some(Channel::Theta2),
            Channel::Radius => Some(Channel::Radius2),
            _ => None,
        }
    }

    /// x, y, x2 or y2
    pub fn is_position(self) -> bool {
        matches!(self, Channel::X | Channel::Y | Channel::X2 | Channel::Y2)
    }

    /// x or y
    pub fn is_xy(self) -> bool {
        matches!(self, Channel::X | Channel::Y)
    }

    /// Whether the channel maps data through its own scale
    pub fn is_scale_channel(self) -> bool {
        matches!(
            self,
            Channel::X
                | Channel::Y
                | Channel::Theta
                | Channel::Radius
                | Channel::Color
                | Channel::Fill
                | Channel::Stroke
                | Channel::Opacity
                | Channel::Size
                | Channel::Shape
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_channels() {
        assert_eq!(Channel::X2.main_range_channel(), Channel::X);
        assert_eq!(Channel::Y2.main_range_channel(), Channel::Y);
        assert_eq!(Channel::Color.main_range_channel(), Channel::Color);
        assert_eq!(Channel::X.secondary_range_channel(), Some(Channel::X2));
        assert_eq!(Channel::Size.secondary_range_channel(), None);
    }

    #[test]
    fn test_scale_channels() {
        assert!(Channel::X.is_scale_channel());
        assert!(Channel::Color.is_scale_channel());
        assert!(!Channel::X2.is_scale_channel());
        assert!(!Channel::Tooltip.is_scale_channel());
    }

    #[test]
    fn test_channel_serialization() {
        assert_eq!(serde_json::to_string(&Channel::X2).unwrap(), "\"x2\"");
        let c: Channel = serde_json::from_str("\"radius2\"").unwrap();
        assert_eq!(c, Channel::Radius2);
        assert_eq!(Channel::Theta2.to_string(), "theta2");
    }
}
