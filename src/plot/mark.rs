//! Mark types and mark definitions

use serde::{Deserialize, Deserializer, Serialize};

/// Mark type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Arc,
    Area,
    Bar,
    Circle,
    Geoshape,
    Image,
    Line,
    Point,
    Rect,
    Rule,
    Square,
    Text,
    Tick,
    Trail,
}

impl Mark {
    /// Marks drawn as connected paths. They skip invalid points through the
    /// `defined` channel rather than relocating them.
    pub fn is_path_mark(self) -> bool {
        matches!(self, Mark::Line | Mark::Area | Mark::Trail)
    }

    /// Marks that span an x/x2 or y/y2 interval
    pub fn is_rect_based_mark(self) -> bool {
        matches!(self, Mark::Rect | Mark::Bar | Mark::Image | Mark::Arc)
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Mark::Arc => "arc",
            Mark::Area => "area",
            Mark::Bar => "bar",
            Mark::Circle => "circle",
            Mark::Geoshape => "geoshape",
            Mark::Image => "image",
            Mark::Line => "line",
            Mark::Point => "point",
            Mark::Rect => "rect",
            Mark::Rule => "rule",
            Mark::Square => "square",
            Mark::Text => "text",
            Mark::Tick => "tick",
            Mark::Trail => "trail",
        };
        write!(f, "{}", s)
    }
}

/// Handling of invalid (null/NaN) values for positional channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidMode {
    /// Invalid values are filtered, and guarded positions fall back to the baseline
    Filter,
    /// No invalid handling at all
    Disabled,
}

/// Decode an authored `invalid` property. An explicit `null` turns invalid
/// handling off; an absent property stays unset so configuration applies.
pub fn deserialize_invalid_mode<'de, D>(deserializer: D) -> Result<Option<InvalidMode>, D::Error>
where
    D: Deserializer<'de>,
{
    let mode = Option::<InvalidMode>::deserialize(deserializer)?;
    Ok(Some(mode.unwrap_or(InvalidMode::Disabled)))
}

/// Mark definition with the properties the encoders read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkDef {
    #[serde(rename = "type")]
    pub mark_type: Mark,
    #[serde(
        default,
        deserialize_with = "deserialize_invalid_mode",
        skip_serializing_if = "Option::is_none"
    )]
    pub invalid: Option<InvalidMode>,
    #[serde(
        default,
        rename = "timeUnitBand",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_unit_band: Option<f64>,
    #[serde(
        default,
        rename = "timeUnitBandPosition",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_unit_band_position: Option<f64>,
}

impl MarkDef {
    pub fn new(mark_type: Mark) -> Self {
        Self {
            mark_type,
            invalid: None,
            time_unit_band: None,
            time_unit_band_position: None,
        }
    }

    pub fn with_invalid(mut self, invalid: InvalidMode) -> Self {
        self.invalid = Some(invalid);
        self
    }
}

impl From<Mark> for MarkDef {
    fn from(mark_type: Mark) -> Self {
        Self::new(mark_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_marks() {
        assert!(Mark::Line.is_path_mark());
        assert!(Mark::Area.is_path_mark());
        assert!(Mark::Trail.is_path_mark());
        assert!(!Mark::Point.is_path_mark());
        assert!(!Mark::Bar.is_path_mark());
    }

    #[test]
    fn test_rect_based_marks() {
        assert!(Mark::Bar.is_rect_based_mark());
        assert!(Mark::Rect.is_rect_based_mark());
        assert!(!Mark::Tick.is_rect_based_mark());
    }

    #[test]
    fn test_mark_def_from_json() {
        let def: MarkDef =
            serde_json::from_value(serde_json::json!({"type": "bar", "invalid": "disabled"}))
                .unwrap();
        assert_eq!(def.mark_type, Mark::Bar);
        assert_eq!(def.invalid, Some(InvalidMode::Disabled));
        assert_eq!(def.time_unit_band, None);
    }

    #[test]
    fn test_null_invalid_disables_handling() {
        let def: MarkDef =
            serde_json::from_value(serde_json::json!({"type": "point", "invalid": null}))
                .unwrap();
        assert_eq!(def.invalid, Some(InvalidMode::Disabled));

        let unset: MarkDef =
            serde_json::from_value(serde_json::json!({"type": "point"})).unwrap();
        assert_eq!(unset.invalid, None);
    }
}
