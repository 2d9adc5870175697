//! Scale types
//!
//! Scale types fall into two families that drive most compile decisions:
//!
//! - discrete domain: `ordinal`, `bin-ordinal`, `point`, `band`
//! - continuous domain: everything else, of which the
//!   continuous-to-continuous subset (`linear`, `log`, `pow`, `sqrt`,
//!   `symlog`, `time`, `utc`) maps numbers to pixel positions
//!
//! # Example
//!
//! ```
//! use vlcore::plot::scale::ScaleType;
//!
//! assert!(ScaleType::Band.has_discrete_domain());
//! assert!(ScaleType::Linear.is_continuous_to_continuous());
//! assert_eq!(ScaleType::BinOrdinal.name(), "bin-ordinal");
//! ```

use serde::{Deserialize, Serialize};

/// Enum of all scale types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScaleType {
    Linear,
    Log,
    Pow,
    Sqrt,
    Symlog,
    Identity,
    Sequential,
    Time,
    Utc,
    Quantile,
    Quantize,
    Threshold,
    BinOrdinal,
    Ordinal,
    Point,
    Band,
}

impl ScaleType {
    /// Canonical name
    pub fn name(&self) -> &'static str {
        match self {
            ScaleType::Linear => "linear",
            ScaleType::Log => "log",
            ScaleType::Pow => "pow",
            ScaleType::Sqrt => "sqrt",
            ScaleType::Symlog => "symlog",
            ScaleType::Identity => "identity",
            ScaleType::Sequential => "sequential",
            ScaleType::Time => "time",
            ScaleType::Utc => "utc",
            ScaleType::Quantile => "quantile",
            ScaleType::Quantize => "quantize",
            ScaleType::Threshold => "threshold",
            ScaleType::BinOrdinal => "bin-ordinal",
            ScaleType::Ordinal => "ordinal",
            ScaleType::Point => "point",
            ScaleType::Band => "band",
        }
    }

    /// Whether the scale's domain is a set of categories
    pub fn has_discrete_domain(&self) -> bool {
        matches!(
            self,
            ScaleType::Ordinal | ScaleType::BinOrdinal | ScaleType::Point | ScaleType::Band
        )
    }

    /// Whether both domain and range are continuous
    pub fn is_continuous_to_continuous(&self) -> bool {
        matches!(
            self,
            ScaleType::Linear
                | ScaleType::Log
                | ScaleType::Pow
                | ScaleType::Sqrt
                | ScaleType::Symlog
                | ScaleType::Time
                | ScaleType::Utc
        )
    }
}

impl std::fmt::Display for ScaleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
