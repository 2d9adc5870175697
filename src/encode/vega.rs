//! Vega value references
//!
//! The output side of encoding: what a Vega renderer evaluates for one
//! visual property of a mark.

use serde::Serialize;

use crate::plot::SignalRef;

/// A `field` entry: a data field name or a property of the enclosing group
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldRef {
    Name(String),
    Group { group: String },
}

/// Pixel offset added after scaling
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Offset {
    Value(f64),
    Signal(SignalRef),
}

impl Offset {
    /// Zero offsets are omitted from references
    pub fn is_set(&self) -> bool {
        match self {
            Offset::Value(v) => *v != 0.0,
            Offset::Signal(_) => true,
        }
    }
}

impl From<f64> for Offset {
    fn from(value: f64) -> Self {
        Offset::Value(value)
    }
}

impl From<SignalRef> for Offset {
    fn from(signal: SignalRef) -> Self {
        Offset::Signal(signal)
    }
}

/// Vega value reference
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct VgValueRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<FieldRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<Offset>,
}

impl VgValueRef {
    pub fn value(value: impl Into<serde_json::Value>) -> Self {
        Self {
            value: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn field(name: impl Into<String>) -> Self {
        Self {
            field: Some(FieldRef::Name(name.into())),
            ..Default::default()
        }
    }

    /// Reference to a property of the enclosing group, e.g. its `width`
    pub fn group_field(property: impl Into<String>) -> Self {
        Self {
            field: Some(FieldRef::Group {
                group: property.into(),
            }),
            ..Default::default()
        }
    }

    pub fn signal(expr: impl Into<String>) -> Self {
        Self {
            signal: Some(expr.into()),
            ..Default::default()
        }
    }

    pub fn with_scale(mut self, scale: Option<&str>) -> Self {
        self.scale = scale.map(str::to_string);
        self
    }

    pub fn with_test(mut self, test: impl Into<String>) -> Self {
        self.test = Some(test.into());
        self
    }

    /// Attach an offset unless it is absent or zero
    pub fn with_offset(mut self, offset: Option<&Offset>) -> Self {
        if let Some(offset) = offset.filter(|o| o.is_set()) {
            self.offset = Some(offset.clone());
        }
        self
    }

    /// Attach a band position unless it is absent or zero
    pub fn with_band(mut self, band: Option<f64>) -> Self {
        if let Some(band) = band.filter(|b| *b != 0.0) {
            self.band = Some(band);
        }
        self
    }
}

/// Reference for one channel: a single reference, or test-bearing
/// references followed by an unconditioned fallback. Renderers take the
/// first entry whose test passes, else the last entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChannelValueRef {
    Single(VgValueRef),
    Conditional(Vec<VgValueRef>),
}

impl ChannelValueRef {
    /// The unconditioned reference
    pub fn fallback(&self) -> Option<&VgValueRef> {
        match self {
            ChannelValueRef::Single(r) => Some(r),
            ChannelValueRef::Conditional(refs) => refs.last(),
        }
    }

    pub fn is_conditional(&self) -> bool {
        matches!(self, ChannelValueRef::Conditional(_))
    }
}

impl From<VgValueRef> for ChannelValueRef {
    fn from(r: VgValueRef) -> Self {
        ChannelValueRef::Single(r)
    }
}
