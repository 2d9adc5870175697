//! Stack descriptors
//!
//! Stacking itself happens in the data flow; encoders only need to know
//! which channel carries the stacked field and whether missing domain values
//! are imputed. Imputation requires precomputed bin mid points, since the
//! imputed rows have no start/end pair to interpolate.

use serde::{Deserialize, Serialize};

use super::Channel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackOffset {
    Zero,
    Center,
    Normalize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackProperties {
    /// Channel whose field is stacked (x or y)
    #[serde(rename = "fieldChannel")]
    pub field_channel: Channel,
    /// Channel the stack groups by (the other positional channel)
    #[serde(rename = "groupbyChannel", skip_serializing_if = "Option::is_none")]
    pub groupby_channel: Option<Channel>,
    pub offset: StackOffset,
    /// Whether gaps in the stack domain are filled
    pub impute: bool,
}

impl StackProperties {
    pub fn new(field_channel: Channel) -> Self {
        Self {
            field_channel,
            groupby_channel: None,
            offset: StackOffset::Zero,
            impute: false,
        }
    }

    pub fn with_impute(mut self, impute: bool) -> Self {
        self.impute = impute;
        self
    }
}
