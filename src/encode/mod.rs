//! Mark encoding
//!
//! Synthesizes the Vega value references marks use for their visual
//! properties.
//!
//! # Architecture
//!
//! - `vega` - Output types: value references and conditional lists
//! - `predicate` - Validity test expressions over data fields
//! - `valueref` - Mid points, interpolation and the invalid-position guard
//!
//! # Example
//!
//! ```
//! use vlcore::encode::{mid_point, MidPointParams, VgValueRef};
//! use vlcore::plot::{
//!     Channel, ChannelDef, Config, FieldDef, Mark, MarkDef, ScaleComponent, ScaleType, Type,
//! };
//!
//! let config = Config::default();
//! let mark = MarkDef::new(Mark::Point);
//! let def: ChannelDef = FieldDef::new("price", Type::Quantitative).into();
//! let scale = ScaleComponent::new("x", ScaleType::Linear);
//!
//! let params = MidPointParams::new(Channel::X, &mark, &config)
//!     .with_def(&def)
//!     .with_scale(&scale);
//! assert_eq!(
//!     mid_point(&params),
//!     Some(VgValueRef::field("price").with_scale(Some("x")))
//! );
//! ```

mod predicate;
mod valueref;
mod vega;

pub use predicate::{field_invalid_predicate, field_valid_predicate};
pub use valueref::{
    field_invalid_test_value_ref, interpolated_signal_ref, mid_point,
    mid_point_ref_with_position_invalid_test, signal_or_value_ref,
    value_ref_for_field_or_datum_def, width_height_value_ref, wrap_position_invalid_test,
    DefaultRef, MidPointParams, DEFAULT_BAND_POSITION,
};
pub use vega::{ChannelValueRef, FieldRef, Offset, VgValueRef};
