//! Scale types for the compiler core
//!
//! This module defines scale types and the resolved scale components that
//! layout sizing and value-reference synthesis look up per channel.

mod component;
mod scale_type;

pub use component::{ScaleComponent, ScaleRange};
pub use scale_type::ScaleType;
