//! Resolved scale components
//!
//! Domains and ranges are computed elsewhere. The compiler core only needs a
//! scale's name, type, configured range, zero-baseline flag and padding.

use serde::{Deserialize, Serialize};

use super::ScaleType;

/// Configured scale range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScaleRange {
    /// `{"step": n}`: the scale's extent is the category count times the step
    Step { step: f64 },
    /// A named range such as `"width"` or `"category"`
    Named(String),
    /// Explicit range values
    Values(Vec<serde_json::Value>),
}

impl ScaleRange {
    pub fn is_step(&self) -> bool {
        matches!(self, ScaleRange::Step { .. })
    }
}

/// A scale as seen by layout and encoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleComponent {
    pub name: String,
    #[serde(rename = "type")]
    pub scale_type: ScaleType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<ScaleRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zero: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_inner: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_outer: Option<f64>,
}

impl ScaleComponent {
    pub fn new(name: impl Into<String>, scale_type: ScaleType) -> Self {
        Self {
            name: name.into(),
            scale_type,
            range: None,
            zero: None,
            padding: None,
            padding_inner: None,
            padding_outer: None,
        }
    }

    pub fn with_range(mut self, range: ScaleRange) -> Self {
        self.range = Some(range);
        self
    }

    pub fn with_step(self, step: f64) -> Self {
        self.with_range(ScaleRange::Step { step })
    }

    pub fn with_zero(mut self, zero: bool) -> Self {
        self.zero = Some(zero);
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Step of a step-based range
    pub fn range_step(&self) -> Option<f64> {
        match self.range {
            Some(ScaleRange::Step { step }) => Some(step),
            _ => None,
        }
    }

    /// Inner padding as used by `bandspace`: band padding for band scales,
    /// always 1 for point scales.
    pub fn bandspace_padding_inner(&self) -> f64 {
        match self.scale_type {
            ScaleType::Band => self.padding_inner.or(self.padding).unwrap_or(0.0),
            _ => 1.0,
        }
    }

    pub fn bandspace_padding_outer(&self) -> f64 {
        self.padding_outer.or(self.padding).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_step() {
        let scale = ScaleComponent::new("x", ScaleType::Band).with_step(20.0);
        assert_eq!(scale.range_step(), Some(20.0));
        assert!(scale.range.as_ref().unwrap().is_step());

        let named = ScaleComponent::new("x", ScaleType::Band)
            .with_range(ScaleRange::Named("width".to_string()));
        assert_eq!(named.range_step(), None);
    }

    #[test]
    fn test_bandspace_padding() {
        let band = ScaleComponent::new("x", ScaleType::Band).with_padding(0.1);
        assert_eq!(band.bandspace_padding_inner(), 0.1);
        assert_eq!(band.bandspace_padding_outer(), 0.1);

        let point = ScaleComponent::new("x", ScaleType::Point).with_padding(0.5);
        assert_eq!(point.bandspace_padding_inner(), 1.0);
        assert_eq!(point.bandspace_padding_outer(), 0.5);
    }

    #[test]
    fn test_scale_component_from_json() {
        let scale: ScaleComponent = serde_json::from_value(serde_json::json!({
            "name": "y",
            "type": "linear",
            "zero": false,
            "range": [0, 200]
        }))
        .unwrap();
        assert_eq!(scale.scale_type, ScaleType::Linear);
        assert_eq!(scale.zero, Some(false));
        assert!(matches!(scale.range, Some(ScaleRange::Values(_))));
    }
}
