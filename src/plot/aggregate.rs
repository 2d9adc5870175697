//! Aggregate operations

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateOp {
    Argmax,
    Argmin,
    Average,
    Count,
    Distinct,
    Max,
    Mean,
    Median,
    Min,
    Missing,
    Product,
    Q1,
    Q3,
    Stderr,
    Stdev,
    Stdevp,
    Sum,
    Valid,
    Values,
    Variance,
    Variancep,
}

impl AggregateOp {
    /// Aggregates whose result is a count and therefore never null
    pub fn is_counting(self) -> bool {
        matches!(
            self,
            AggregateOp::Count | AggregateOp::Valid | AggregateOp::Missing | AggregateOp::Distinct
        )
    }
}

impl std::fmt::Display for AggregateOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The serde name is the canonical spelling.
        match serde_json::to_value(self) {
            Ok(serde_json::Value::String(s)) => write!(f, "{}", s),
            _ => write!(f, "{:?}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_ops() {
        assert!(AggregateOp::Count.is_counting());
        assert!(AggregateOp::Distinct.is_counting());
        assert!(!AggregateOp::Mean.is_counting());
        assert!(!AggregateOp::Sum.is_counting());
    }

    #[test]
    fn test_display_matches_serde_name() {
        assert_eq!(AggregateOp::Mean.to_string(), "mean");
        assert_eq!(AggregateOp::Q1.to_string(), "q1");
    }
}
