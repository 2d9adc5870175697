//! Value references for mark positions
//!
//! [`mid_point`] decides, for one channel of a mark, what a Vega renderer
//! should evaluate:
//!
//! - no definition: the mark's default reference
//! - a literal value: the value itself, with `"width"`/`"height"` mapped to
//!   the enclosing group's size on matching position channels
//! - a signal: passed through
//! - a field or datum: a scale-qualified reference, placed at the middle of
//!   a bin or time unit, or centered within a band
//!
//! [`mid_point_ref_with_position_invalid_test`] additionally guards x/y
//! against null and NaN data on zero-less continuous scales, since such
//! values would otherwise land outside the plot.

use crate::message;
use crate::plot::{
    bin_requires_range, get_band, is_binned, is_binning, vg_field, Channel, ChannelDef, Config,
    FieldDef, FieldOrDatumDef, FieldRefOption, InvalidMode, MarkDef, ScaleComponent, ScaleType,
    StackProperties, ValueOrSignal,
};

use super::predicate::field_invalid_predicate;
use super::vega::{ChannelValueRef, Offset, VgValueRef};

/// Band position used when neither the field nor the mark configures one
pub const DEFAULT_BAND_POSITION: f64 = 0.5;

/// Reference used when a channel has no definition
pub enum DefaultRef<'a> {
    None,
    Value(VgValueRef),
    Lazy(Box<dyn Fn() -> VgValueRef + 'a>),
}

impl<'a> DefaultRef<'a> {
    pub fn lazy(f: impl Fn() -> VgValueRef + 'a) -> Self {
        DefaultRef::Lazy(Box::new(f))
    }

    fn resolve(&self) -> Option<VgValueRef> {
        match self {
            DefaultRef::None => None,
            DefaultRef::Value(r) => Some(r.clone()),
            DefaultRef::Lazy(f) => Some(f()),
        }
    }
}

impl std::fmt::Debug for DefaultRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefaultRef::None => write!(f, "DefaultRef::None"),
            DefaultRef::Value(r) => write!(f, "DefaultRef::Value({:?})", r),
            DefaultRef::Lazy(_) => write!(f, "DefaultRef::Lazy(..)"),
        }
    }
}

/// Inputs of [`mid_point`]
#[derive(Debug)]
pub struct MidPointParams<'a> {
    pub channel: Channel,
    pub channel_def: Option<&'a ChannelDef>,
    /// Definition of the matching secondary channel (x2 for x)
    pub channel2_def: Option<&'a ChannelDef>,
    pub mark_def: &'a MarkDef,
    pub config: &'a Config,
    pub scale_name: Option<&'a str>,
    pub scale: Option<&'a ScaleComponent>,
    pub stack: Option<&'a StackProperties>,
    pub offset: Option<Offset>,
    pub default_ref: DefaultRef<'a>,
}

impl<'a> MidPointParams<'a> {
    pub fn new(channel: Channel, mark_def: &'a MarkDef, config: &'a Config) -> Self {
        Self {
            channel,
            channel_def: None,
            channel2_def: None,
            mark_def,
            config,
            scale_name: None,
            scale: None,
            stack: None,
            offset: None,
            default_ref: DefaultRef::None,
        }
    }

    pub fn with_def(mut self, def: &'a ChannelDef) -> Self {
        self.channel_def = Some(def);
        self
    }

    pub fn with_def2(mut self, def: &'a ChannelDef) -> Self {
        self.channel2_def = Some(def);
        self
    }

    /// Bind the channel's scale; the reference uses the scale's name
    pub fn with_scale(mut self, scale: &'a ScaleComponent) -> Self {
        self.scale_name = Some(scale.name.as_str());
        self.scale = Some(scale);
        self
    }

    pub fn with_stack(mut self, stack: &'a StackProperties) -> Self {
        self.stack = Some(stack);
        self
    }

    pub fn with_offset(mut self, offset: impl Into<Offset>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    pub fn with_default(mut self, default_ref: DefaultRef<'a>) -> Self {
        self.default_ref = default_ref;
        self
    }
}

/// Reference to a field or datum through `scale_name`
pub fn value_ref_for_field_or_datum_def(
    def: FieldOrDatumDef<'_>,
    scale_name: Option<&str>,
    opt: FieldRefOption<'_>,
    offset: Option<&Offset>,
    band: Option<f64>,
) -> VgValueRef {
    let reference = match def {
        FieldOrDatumDef::Datum(datum) => VgValueRef::value(datum.datum.clone()),
        FieldOrDatumDef::Field(field) => VgValueRef::field(vg_field(field, opt)),
    };
    reference
        .with_scale(scale_name)
        .with_offset(offset)
        .with_band(band)
}

/// One end of an interpolated position
enum Endpoint {
    Field(String),
    Datum(serde_json::Value),
}

impl Endpoint {
    fn of(def: FieldOrDatumDef<'_>, opt: FieldRefOption<'_>) -> Self {
        match def {
            FieldOrDatumDef::Field(field) => Endpoint::Field(vg_field(field, opt)),
            FieldOrDatumDef::Datum(datum) => Endpoint::Datum(datum.datum.clone()),
        }
    }

    fn into_ref(self) -> VgValueRef {
        match self {
            Endpoint::Field(field) => VgValueRef::field(field),
            Endpoint::Datum(datum) => VgValueRef::value(datum),
        }
    }

    fn expr(&self) -> String {
        match self {
            Endpoint::Field(field) => field.clone(),
            Endpoint::Datum(datum) => datum.to_string(),
        }
    }
}

/// Position `band` of the way from start to end.
///
/// `def2` supplies the end field; without it the end is `def`'s `end`
/// field. A band of 0 or 1 reads one end directly, anything else becomes
/// `scale("<scale>", band * start + (1 - band) * end)`.
pub fn interpolated_signal_ref(
    scale_name: Option<&str>,
    def: FieldOrDatumDef<'_>,
    def2: Option<FieldOrDatumDef<'_>>,
    start_suffix: Option<&str>,
    offset: Option<&Offset>,
    band: Option<f64>,
) -> VgValueRef {
    let band = band.unwrap_or(DEFAULT_BAND_POSITION);
    let expr = if band == 0.0 || band == 1.0 {
        None
    } else {
        Some("datum")
    };

    let start = Endpoint::of(
        def,
        FieldRefOption {
            expr,
            suffix: start_suffix,
            ..Default::default()
        },
    );
    let end = match def2 {
        Some(def2) => Endpoint::of(
            def2,
            FieldRefOption {
                expr,
                ..Default::default()
            },
        ),
        None => Endpoint::of(
            def,
            FieldRefOption {
                expr,
                suffix: Some("end"),
                ..Default::default()
            },
        ),
    };

    let reference = if band == 0.0 || band == 1.0 {
        let endpoint = if band == 0.0 { start } else { end };
        endpoint.into_ref().with_scale(scale_name)
    } else {
        let datum = format!("{} * {} + {} * {}", band, start.expr(), 1.0 - band, end.expr());
        match scale_name {
            Some(scale) => VgValueRef::signal(format!("scale(\"{}\", {})", scale, datum)),
            None => VgValueRef::signal(datum),
        }
    };
    reference.with_offset(offset)
}

/// Literal value for a channel, mapping `"width"` on x/x2 and `"height"` on
/// y/y2 to the enclosing group's size
pub fn width_height_value_ref(channel: Channel, value: &ValueOrSignal) -> VgValueRef {
    match value {
        ValueOrSignal::Value(serde_json::Value::String(s))
            if s == "width" && matches!(channel, Channel::X | Channel::X2) =>
        {
            VgValueRef::group_field("width")
        }
        ValueOrSignal::Value(serde_json::Value::String(s))
            if s == "height" && matches!(channel, Channel::Y | Channel::Y2) =>
        {
            VgValueRef::group_field("height")
        }
        other => signal_or_value_ref(other),
    }
}

pub fn signal_or_value_ref(value: &ValueOrSignal) -> VgValueRef {
    match value {
        ValueOrSignal::Signal(signal) => VgValueRef::signal(signal.signal.clone()),
        ValueOrSignal::Value(v) => VgValueRef::value(v.clone()),
    }
}

/// Reference for the middle of a channel's extent: bin and time-unit
/// centers for x/y, band centers on band scales, or the plain field.
pub fn mid_point(params: &MidPointParams<'_>) -> Option<VgValueRef> {
    let offset = params.offset.as_ref();
    match params.channel_def {
        Some(ChannelDef::Field(def)) => Some(field_or_datum_mid_point(
            params,
            FieldOrDatumDef::Field(def),
        )),
        Some(ChannelDef::Datum(def)) => Some(field_or_datum_mid_point(
            params,
            FieldOrDatumDef::Datum(def),
        )),
        Some(ChannelDef::Value(def)) => {
            Some(width_height_value_ref(params.channel, &def.value).with_offset(offset))
        }
        Some(ChannelDef::Signal(signal)) => Some(VgValueRef::signal(signal.signal.clone())),
        None => params
            .default_ref
            .resolve()
            .map(|reference| reference.with_offset(offset)),
    }
}

fn field_or_datum_mid_point(params: &MidPointParams<'_>, def: FieldOrDatumDef<'_>) -> VgValueRef {
    let offset = params.offset.as_ref();

    if let FieldOrDatumDef::Field(field) = def {
        if let Some(reference) = binned_mid_point(params, field) {
            return reference;
        }
    }

    if let Some(scale) = params.scale.filter(|s| s.scale_type.has_discrete_domain()) {
        let range = FieldRefOption::bin_suffix("range");
        let band = if scale.scale_type == ScaleType::Band {
            // Center within the band unless the definition places it.
            let authored = if params.channel.is_position() {
                def.band()
            } else {
                None
            };
            Some(authored.unwrap_or(DEFAULT_BAND_POSITION))
        } else {
            None
        };
        return value_ref_for_field_or_datum_def(def, params.scale_name, range, offset, band);
    }

    value_ref_for_field_or_datum_def(def, params.scale_name, FieldRefOption::default(), offset, None)
}

/// Bin and time-unit placement. `None` falls through to scale-based rules.
fn binned_mid_point(params: &MidPointParams<'_>, def: &FieldDef) -> Option<VgValueRef> {
    if !def.is_typed() {
        return None;
    }
    let channel = params.channel;
    let offset = params.offset.as_ref();
    let band = get_band(
        channel,
        def,
        params.channel2_def,
        params.mark_def,
        params.config,
        true,
    );
    let has_band = band.is_some_and(|b| b != 0.0);

    if is_binning(def.bin.as_ref()) || (has_band && def.time_unit.is_some()) {
        // Only x and y sit in the middle of the bin; other channels keep the
        // bin start so marks and legends agree.
        if channel.is_xy() && def.field_type.is_some_and(|t| t.is_continuous()) {
            if params.stack.is_some_and(|s| s.impute) {
                // Imputed rows only carry the precomputed mid point.
                return Some(value_ref_for_field_or_datum_def(
                    FieldOrDatumDef::Field(def),
                    params.scale_name,
                    FieldRefOption::bin_suffix("mid"),
                    offset,
                    None,
                ));
            }
            return Some(interpolated_signal_ref(
                params.scale_name,
                FieldOrDatumDef::Field(def),
                None,
                None,
                offset,
                band,
            ));
        }
        let opt = if bin_requires_range(def, channel) {
            FieldRefOption::bin_suffix("range")
        } else {
            FieldRefOption::default()
        };
        return Some(value_ref_for_field_or_datum_def(
            FieldOrDatumDef::Field(def),
            params.scale_name,
            opt,
            offset,
            None,
        ));
    }

    if is_binned(def.bin.as_ref()) {
        match params.channel2_def {
            Some(ChannelDef::Field(def2)) => {
                return Some(interpolated_signal_ref(
                    params.scale_name,
                    FieldOrDatumDef::Field(def),
                    Some(FieldOrDatumDef::Field(def2)),
                    None,
                    offset,
                    band,
                ));
            }
            _ => {
                let channel2 = if channel == Channel::X {
                    Channel::X2
                } else {
                    Channel::Y2
                };
                tracing::warn!("{}", message::channel_required_for_binned(channel2));
            }
        }
    }
    None
}

/// [`mid_point`] for x/y/x2/y2, guarded against invalid data where needed.
///
/// The guard applies to x/y/x2/y2 non-counting field definitions on
/// continuous-to-continuous scales with `zero: false`.
pub fn mid_point_ref_with_position_invalid_test(
    params: &MidPointParams<'_>,
) -> Option<ChannelValueRef> {
    let reference = mid_point(params)?;

    if let (Some(ChannelDef::Field(def)), Some(scale)) = (params.channel_def, params.scale) {
        if params.channel.is_position()
            && !def.is_counting_aggregate()
            && scale.scale_type.is_continuous_to_continuous()
            && scale.zero == Some(false)
        {
            return Some(wrap_position_invalid_test(
                def,
                params.channel,
                params.mark_def,
                reference,
                params.config,
            ));
        }
    }
    Some(ChannelValueRef::Single(reference))
}

/// Prepend an invalid-data test to `reference`, unless the mark is a path
/// mark (paths skip invalid points on their own) or invalid handling is
/// disabled.
pub fn wrap_position_invalid_test(
    def: &FieldDef,
    channel: Channel,
    mark_def: &MarkDef,
    reference: VgValueRef,
    config: &Config,
) -> ChannelValueRef {
    if mark_def.mark_type.is_path_mark() {
        return ChannelValueRef::Single(reference);
    }

    let invalid = config.mark_property(mark_def, |d| d.invalid, |c| c.invalid);
    if invalid == Some(InvalidMode::Disabled) {
        return ChannelValueRef::Single(reference);
    }

    ChannelValueRef::Conditional(vec![field_invalid_test_value_ref(def, channel), reference])
}

/// Baseline for invalid data: the left edge for x, the bottom for y
pub fn field_invalid_test_value_ref(def: &FieldDef, channel: Channel) -> VgValueRef {
    let test = field_invalid_predicate(def, true);
    let baseline = if channel.main_range_channel() == Channel::X {
        VgValueRef::value(0)
    } else {
        VgValueRef::group_field("height")
    };
    baseline.with_test(test)
}
