//! View and mark configuration
//!
//! Configuration supplies the defaults used when a view or mark leaves a
//! property unset. Loading configuration files is the caller's business;
//! this module only defines the shape, the defaults and JSON decoding.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::mark::{deserialize_invalid_mode, InvalidMode, Mark, MarkDef};
use crate::layout::SizeType;
use crate::{Result, VlError};

/// Default continuous view width and height in pixels
pub const DEFAULT_CONTINUOUS_SIZE: f64 = 200.0;

/// Default per-category step in pixels
pub const DEFAULT_STEP: f64 = 20.0;

/// A `{"step": n}` size object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub step: f64,
}

/// Authored view size: pixels or a per-category step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeSpec {
    Pixels(f64),
    Step(Step),
}

impl SizeSpec {
    pub fn is_step(&self) -> bool {
        matches!(self, SizeSpec::Step(_))
    }

    /// Pixel value, with a step object unwrapped to its step
    pub fn unwrap_step(&self) -> f64 {
        match self {
            SizeSpec::Pixels(px) => *px,
            SizeSpec::Step(Step { step }) => *step,
        }
    }
}

/// View configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewConfig {
    pub continuous_width: f64,
    pub continuous_height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discrete_width: Option<SizeSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discrete_height: Option<SizeSpec>,
    /// Step used when no discrete size is configured
    pub step: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            continuous_width: DEFAULT_CONTINUOUS_SIZE,
            continuous_height: DEFAULT_CONTINUOUS_SIZE,
            discrete_width: None,
            discrete_height: None,
            step: DEFAULT_STEP,
        }
    }
}

impl ViewConfig {
    pub fn continuous_size(&self, size_type: SizeType) -> f64 {
        match size_type {
            SizeType::Width => self.continuous_width,
            SizeType::Height => self.continuous_height,
        }
    }

    pub fn discrete_size(&self, size_type: SizeType) -> SizeSpec {
        let configured = match size_type {
            SizeType::Width => self.discrete_width,
            SizeType::Height => self.discrete_height,
        };
        configured.unwrap_or(SizeSpec::Step(Step { step: self.step }))
    }
}

/// Mark configuration, shared by all marks or specific to one mark type
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarkConfig {
    #[serde(
        deserialize_with = "deserialize_invalid_mode",
        skip_serializing_if = "Option::is_none"
    )]
    pub invalid: Option<InvalidMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_unit_band: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_unit_band_position: Option<f64>,
}

/// Compiler configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub view: ViewConfig,
    /// Defaults for every mark type
    pub mark: MarkConfig,
    /// Per-mark-type overrides, keyed by mark type
    pub marks: BTreeMap<Mark, MarkConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            view: ViewConfig::default(),
            mark: MarkConfig {
                invalid: Some(InvalidMode::Filter),
                time_unit_band: Some(1.0),
                time_unit_band_position: None,
            },
            marks: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Decode a configuration from JSON, filling unset properties with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| VlError::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Resolve a mark property: mark definition, then mark-type config, then
    /// the shared mark config.
    pub fn mark_property<T>(
        &self,
        mark_def: &MarkDef,
        from_def: impl Fn(&MarkDef) -> Option<T>,
        from_config: impl Fn(&MarkConfig) -> Option<T>,
    ) -> Option<T> {
        from_def(mark_def)
            .or_else(|| self.marks.get(&mark_def.mark_type).and_then(&from_config))
            .or_else(|| from_config(&self.mark))
    }
}
