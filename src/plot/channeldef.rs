//! Channel definitions
//!
//! A channel is encoded by exactly one of four definitions:
//!
//! - `Field` - bound to a data field, optionally binned, aggregated or time-unit converted
//! - `Datum` - a literal data value routed through the channel's scale
//! - `Value` - a literal visual value (pixels, colors, or the `"width"`/`"height"` keywords)
//! - `Signal` - a dynamic expression evaluated by the renderer
//!
//! This module also builds the field names that downstream data flow
//! produces for a field definition (`bin_maxbins_10_a_end`, `mean_b`,
//! `month_date`, `__count`, ...).

use serde::{Deserialize, Serialize};

use super::{deserialize_bin, is_binning, AggregateOp, BinSpec, Channel, Config, MarkDef};
use crate::naming::{flat_access_with_datum, replace_path_in_field};

/// Measurement type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    Quantitative,
    Temporal,
    Ordinal,
    Nominal,
    Geojson,
}

impl Type {
    pub fn is_continuous(self) -> bool {
        matches!(self, Type::Quantitative | Type::Temporal)
    }

    pub fn is_discrete(self) -> bool {
        matches!(self, Type::Ordinal | Type::Nominal)
    }
}

/// Field-bound channel definition
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<Type>,
    #[serde(
        default,
        deserialize_with = "deserialize_bin",
        skip_serializing_if = "Option::is_none"
    )]
    pub bin: Option<BinSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<AggregateOp>,
    /// Position of the mark within a band, 0 (start) to 1 (end)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub band: Option<f64>,
}

impl FieldDef {
    pub fn new(field: impl Into<String>, field_type: Type) -> Self {
        Self {
            field: Some(field.into()),
            field_type: Some(field_type),
            ..Default::default()
        }
    }

    /// An untyped field, as used by secondary channels (x2, y2)
    pub fn secondary(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            ..Default::default()
        }
    }

    pub fn with_bin(mut self, bin: BinSpec) -> Self {
        self.bin = Some(bin);
        self
    }

    pub fn with_time_unit(mut self, time_unit: impl Into<String>) -> Self {
        self.time_unit = Some(time_unit.into());
        self
    }

    pub fn with_aggregate(mut self, aggregate: AggregateOp) -> Self {
        self.aggregate = Some(aggregate);
        self
    }

    pub fn with_band(mut self, band: f64) -> Self {
        self.band = Some(band);
        self
    }

    /// Whether the definition carries a measurement type
    pub fn is_typed(&self) -> bool {
        self.field_type.is_some()
    }

    pub fn is_counting_aggregate(&self) -> bool {
        self.aggregate.is_some_and(AggregateOp::is_counting)
    }
}

/// Literal datum routed through the channel's scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatumDef {
    pub datum: serde_json::Value,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub datum_type: Option<Type>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub band: Option<f64>,
}

impl DatumDef {
    pub fn new(datum: impl Into<serde_json::Value>) -> Self {
        Self {
            datum: datum.into(),
            datum_type: None,
            band: None,
        }
    }
}

/// Dynamic expression reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalRef {
    pub signal: String,
}

impl SignalRef {
    pub fn new(signal: impl Into<String>) -> Self {
        Self {
            signal: signal.into(),
        }
    }
}

/// A literal value, possibly given as a signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValueOrSignal {
    Signal(SignalRef),
    Value(serde_json::Value),
}

/// Literal visual value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueDef {
    pub value: ValueOrSignal,
}

impl ValueDef {
    pub fn new(value: impl Into<serde_json::Value>) -> Self {
        Self {
            value: ValueOrSignal::Value(value.into()),
        }
    }

    pub fn signal(expr: impl Into<String>) -> Self {
        Self {
            value: ValueOrSignal::Signal(SignalRef::new(expr)),
        }
    }
}

/// Channel definition
///
/// Decoding tries datum, value and signal shapes before falling back to a
/// field definition, whose properties are all optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChannelDef {
    Datum(DatumDef),
    Value(ValueDef),
    Signal(SignalRef),
    Field(FieldDef),
}

impl ChannelDef {
    pub fn as_field_def(&self) -> Option<&FieldDef> {
        match self {
            ChannelDef::Field(def) => Some(def),
            _ => None,
        }
    }
}

impl From<FieldDef> for ChannelDef {
    fn from(def: FieldDef) -> Self {
        ChannelDef::Field(def)
    }
}

impl From<DatumDef> for ChannelDef {
    fn from(def: DatumDef) -> Self {
        ChannelDef::Datum(def)
    }
}

impl From<ValueDef> for ChannelDef {
    fn from(def: ValueDef) -> Self {
        ChannelDef::Value(def)
    }
}

impl From<SignalRef> for ChannelDef {
    fn from(def: SignalRef) -> Self {
        ChannelDef::Signal(def)
    }
}

/// Field or datum definition, the inputs of scale-qualified references
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldOrDatumDef<'a> {
    Field(&'a FieldDef),
    Datum(&'a DatumDef),
}

impl<'a> FieldOrDatumDef<'a> {
    pub fn band(&self) -> Option<f64> {
        match self {
            FieldOrDatumDef::Field(def) => def.band,
            FieldOrDatumDef::Datum(def) => def.band,
        }
    }
}

/// Options for [`vg_field`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FieldRefOption<'a> {
    /// Wrap the name in an expression accessor, e.g. `datum`
    pub expr: Option<&'a str>,
    /// Suffix appended to every field name
    pub suffix: Option<&'a str>,
    /// Suffix appended only to binned fields (`end`, `range`, `mid`)
    pub bin_suffix: Option<&'a str>,
}

impl<'a> FieldRefOption<'a> {
    pub fn bin_suffix(suffix: &'a str) -> Self {
        Self {
            bin_suffix: Some(suffix),
            ..Default::default()
        }
    }
}

/// Name of the field a definition produces after data flow, as a Vega field
/// string or, with `opt.expr`, as an expression accessor.
pub fn vg_field(def: &FieldDef, opt: FieldRefOption<'_>) -> String {
    let mut field = def.field.clone().unwrap_or_default();
    let mut suffix = opt.suffix.unwrap_or_default().to_string();

    if def.aggregate == Some(AggregateOp::Count) {
        field = "__count".to_string();
    } else {
        let func = match &def.bin {
            Some(BinSpec::Binning(params)) => {
                suffix = format!("{}{}", opt.bin_suffix.unwrap_or_default(), suffix);
                Some(params.to_name())
            }
            _ => match (def.aggregate, &def.time_unit) {
                (Some(op), _) => Some(op.to_string()),
                (None, Some(unit)) => Some(unit.clone()),
                (None, None) => None,
            },
        };
        if let Some(func) = func {
            field = if field.is_empty() {
                func
            } else {
                format!("{}_{}", func, field)
            };
        }
    }

    if !suffix.is_empty() {
        field = format!("{}_{}", field, suffix);
    }

    match opt.expr {
        Some(expr) => flat_access_with_datum(&field, expr),
        None => replace_path_in_field(&field),
    }
}

/// Whether a binned field must be referenced through its `range` field.
///
/// Only needed when a binned field is forced onto a discrete scale, where the
/// range string labels axes and legends.
pub fn bin_requires_range(def: &FieldDef, channel: Channel) -> bool {
    if !is_binning(def.bin.as_ref()) {
        return false;
    }
    channel.is_scale_channel() && def.field_type.is_some_and(Type::is_discrete)
}

/// Position within the band for x/y.
///
/// An authored band wins. Time units without an end channel take the mark's
/// time-unit band settings; binned fields sit in the middle of the bin (or
/// span the full bin for rect-based marks when not placing a mid point).
pub fn get_band(
    channel: Channel,
    def: &FieldDef,
    def2: Option<&ChannelDef>,
    mark_def: &MarkDef,
    config: &Config,
    is_mid_point: bool,
) -> Option<f64> {
    if !channel.is_xy() {
        return None;
    }
    if def.band.is_some() {
        return def.band;
    }
    if def.time_unit.is_some() && def2.is_none() {
        if is_mid_point {
            return config.mark_property(
                mark_def,
                |d| d.time_unit_band_position,
                |c| c.time_unit_band_position,
            );
        }
        return if mark_def.mark_type.is_rect_based_mark() {
            config.mark_property(mark_def, |d| d.time_unit_band, |c| c.time_unit_band)
        } else {
            Some(0.0)
        };
    }
    if is_binning(def.bin.as_ref()) {
        return if mark_def.mark_type.is_rect_based_mark() && !is_mid_point {
            Some(1.0)
        } else {
            Some(0.5)
        };
    }
    None
}
